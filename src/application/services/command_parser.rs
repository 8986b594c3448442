use std::sync::LazyLock;

use regex::Regex;

use super::PatternError;
use crate::domain::{DEFAULT_NAME_SUFFIX, EthAmount, Recipient, TransferIntent};

const AMOUNT_GROUP: &str = "amount";
const RECIPIENT_GROUP: &str = "recipient";

/// Tried in order; the first pattern that matches decides the result.
pub const DEFAULT_COMMAND_PATTERNS: &[&str] = &[
    r"send\s+(?P<amount>[\d.]+)\s+eth\s+to\s+(?P<recipient>[\w.-]+)",
    r"send\s+(?P<amount>[\d.]+)\s+to\s+(?P<recipient>[\w.-]+)",
    r"send\s+(?P<amount>[\d.]+)(?:\s+\w+)?\s+(?:eth\s+)?to\s+(?P<recipient>[\w.-]+)",
];

static DEFAULT_PATTERNS: LazyLock<Vec<CommandPattern>> = LazyLock::new(|| {
    DEFAULT_COMMAND_PATTERNS
        .iter()
        .map(|p| CommandPattern::new(p).expect("default command pattern must compile"))
        .collect()
});

#[derive(Debug, Clone)]
pub struct CommandPattern {
    regex: Regex,
}

impl CommandPattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern).map_err(|source| PatternError::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        })?;

        let names: Vec<&str> = regex.capture_names().flatten().collect();
        if !names.contains(&AMOUNT_GROUP) || !names.contains(&RECIPIENT_GROUP) {
            return Err(PatternError::MissingGroups(pattern.to_string()));
        }

        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    fn extract<'t>(&self, text: &'t str) -> Option<(&'t str, &'t str)> {
        let caps = self.regex.captures(text)?;
        let amount = caps.name(AMOUNT_GROUP)?.as_str();
        let recipient = caps.name(RECIPIENT_GROUP)?.as_str();
        Some((amount, recipient))
    }
}

/// Extracts a [`TransferIntent`] from normalized text.
#[derive(Debug, Clone)]
pub struct CommandParser {
    patterns: Vec<CommandPattern>,
    default_suffix: String,
}

impl CommandParser {
    pub fn new(patterns: Vec<CommandPattern>, default_suffix: impl Into<String>) -> Self {
        Self {
            patterns,
            default_suffix: default_suffix.into(),
        }
    }

    /// Compiles `patterns`; an empty list falls back to the defaults.
    pub fn from_patterns<S: AsRef<str>>(
        patterns: &[S],
        default_suffix: impl Into<String>,
    ) -> Result<Self, PatternError> {
        let compiled = if patterns.is_empty() {
            DEFAULT_PATTERNS.clone()
        } else {
            patterns
                .iter()
                .map(|p| CommandPattern::new(p.as_ref()))
                .collect::<Result<Vec<_>, _>>()?
        };
        Ok(Self::new(compiled, default_suffix))
    }

    pub fn patterns(&self) -> &[CommandPattern] {
        &self.patterns
    }

    pub fn default_suffix(&self) -> &str {
        &self.default_suffix
    }

    /// `None` means the text is not a transfer command, which is a normal
    /// conversational outcome.
    pub fn parse(&self, normalized: &str) -> Option<TransferIntent> {
        let (index, (amount, recipient)) = self
            .patterns
            .iter()
            .enumerate()
            .find_map(|(i, p)| p.extract(normalized).map(|m| (i, m)))?;

        tracing::debug!(pattern = index, amount, recipient, "Command pattern matched");

        let amount = match EthAmount::parse(amount) {
            Ok(a) => a,
            Err(e) => {
                tracing::debug!(error = %e, "Matched command carries no usable amount");
                return None;
            }
        };
        let recipient = Recipient::from_token(recipient, &self.default_suffix)?;

        Some(TransferIntent::new(amount, recipient))
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERNS.clone(), DEFAULT_NAME_SUFFIX)
    }
}
