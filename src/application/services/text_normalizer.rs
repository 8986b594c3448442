use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use unicode_normalization::UnicodeNormalization;

use super::PatternError;

/// Known speech-to-text slips, applied top to bottom.
pub const DEFAULT_CORRECTIONS: &[(&str, &str)] = &[
    (r"\s+dot\s+", "."),
    (r"\b(\d+(?:\.\d+)?)\s*\.\s*e?th\b", "$1 eth"),
    (r"\bmth\b", "eth"),
    (r"\binto h\b", "eth"),
    (r"\b(?:earth|ethereum|ether|eath)\b", "eth"),
    (r"([a-z])\.88\b", "$1.eth"),
    (r"\.(?:biz|bez|es|bass|bays)\.eth\b", ".base.eth"),
    (r"\.base\.th\b", ".base.eth"),
    (r"\.base\s+eth\b", ".base.eth"),
];

static DEFAULT_TABLE: LazyLock<Vec<Correction>> = LazyLock::new(|| {
    DEFAULT_CORRECTIONS
        .iter()
        .map(|(pattern, replacement)| {
            Correction::compile(&CorrectionRule::new(*pattern, *replacement))
                .expect("default correction table must compile")
        })
        .collect()
});

/// Every match of `pattern` is rewritten to `replacement` (`$1` style
/// group references allowed).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CorrectionRule {
    pub pattern: String,
    pub replacement: String,
}

impl CorrectionRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

pub fn default_correction_rules() -> Vec<CorrectionRule> {
    DEFAULT_CORRECTIONS
        .iter()
        .map(|(pattern, replacement)| CorrectionRule::new(*pattern, *replacement))
        .collect()
}

#[derive(Debug, Clone)]
struct Correction {
    pattern: Regex,
    replacement: String,
}

impl Correction {
    fn compile(rule: &CorrectionRule) -> Result<Self, PatternError> {
        let pattern = Regex::new(&rule.pattern).map_err(|source| PatternError::InvalidRegex {
            pattern: rule.pattern.clone(),
            source,
        })?;
        Ok(Self {
            pattern,
            replacement: rule.replacement.clone(),
        })
    }
}

/// Turns a raw transcript into the lowercase, punctuation-free form the
/// command parser matches against.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    corrections: Vec<Correction>,
}

impl TextNormalizer {
    pub fn new(rules: &[CorrectionRule]) -> Result<Self, PatternError> {
        let corrections = rules
            .iter()
            .map(Correction::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { corrections })
    }

    pub fn rule_count(&self) -> usize {
        self.corrections.len()
    }

    pub fn normalize(&self, raw: &str) -> String {
        let folded: String = raw.nfkc().collect();
        let lowered = folded.trim().to_lowercase();
        let stripped = strip_punctuation(&lowered);

        let corrected = self
            .corrections
            .iter()
            .fold(stripped, |text, correction| {
                correction
                    .pattern
                    .replace_all(&text, correction.replacement.as_str())
                    .into_owned()
            });

        collapse_whitespace(&corrected)
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self {
            corrections: DEFAULT_TABLE.clone(),
        }
    }
}

/// Drops sentence punctuation. A `.` survives between two alphanumerics
/// or in front of a digit that starts a word, which keeps decimals and
/// dotted names intact.
fn strip_punctuation(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &ch) in chars.iter().enumerate() {
        match ch {
            ',' | '\'' => {}
            '!' | '?' | ';' | ':' | '"' => out.push(' '),
            '.' => {
                let before = i > 0 && chars[i - 1].is_alphanumeric();
                let after = chars.get(i + 1).is_some_and(|c| c.is_alphanumeric());
                // Leading-dot decimals like ".5" keep their point.
                let opens_fraction = (i == 0 || chars[i - 1].is_whitespace())
                    && chars.get(i + 1).is_some_and(|c| c.is_ascii_digit());
                if (before && after) || opens_fraction {
                    out.push('.');
                } else {
                    out.push(' ');
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
