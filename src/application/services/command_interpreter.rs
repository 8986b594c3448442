use crate::domain::TransferIntent;

use super::{CommandParser, TextNormalizer};

#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation {
    pub normalized: String,
    pub intent: Option<TransferIntent>,
}

/// Normalizer and parser in sequence, shared by the voice and text paths.
#[derive(Debug, Clone, Default)]
pub struct CommandInterpreter {
    normalizer: TextNormalizer,
    parser: CommandParser,
}

impl CommandInterpreter {
    pub fn new(normalizer: TextNormalizer, parser: CommandParser) -> Self {
        Self { normalizer, parser }
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn parser(&self) -> &CommandParser {
        &self.parser
    }

    pub fn interpret(&self, raw: &str) -> Interpretation {
        let normalized = self.normalizer.normalize(raw);
        let intent = self.parser.parse(&normalized);
        Interpretation { normalized, intent }
    }
}
