use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Wei has 18 decimal places; anything finer cannot be sent.
const MAX_FRACTION_DIGITS: usize = 18;

/// A strictly positive ETH amount, kept as canonical decimal text so the
/// conversion to wei is exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EthAmount(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("invalid ETH amount: {0}")]
    Malformed(String),
    #[error("amount has more than 18 decimal places: {0}")]
    TooPrecise(String),
    #[error("amount must be a positive number: {0}")]
    NotPositive(String),
}

impl EthAmount {
    pub fn parse(input: &str) -> Result<Self, AmountError> {
        // Speech transcripts often end a number with a sentence period.
        let trimmed = input.trim().trim_end_matches('.');
        if trimmed.is_empty() {
            return Err(AmountError::Empty);
        }

        let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(AmountError::Malformed(input.to_string()));
        }

        let whole = whole.trim_start_matches('0');
        let fraction = fraction.trim_end_matches('0');

        if whole.is_empty() && fraction.is_empty() {
            return Err(AmountError::NotPositive(input.to_string()));
        }
        if fraction.len() > MAX_FRACTION_DIGITS {
            return Err(AmountError::TooPrecise(input.to_string()));
        }

        let whole = if whole.is_empty() { "0" } else { whole };
        let canonical = if fraction.is_empty() {
            whole.to_string()
        } else {
            format!("{}.{}", whole, fraction)
        };

        Ok(Self(canonical))
    }

    pub fn from_f64(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::Malformed(value.to_string()));
        }
        if value <= 0.0 {
            return Err(AmountError::NotPositive(value.to_string()));
        }
        Self::parse(&value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0.parse().unwrap_or(0.0)
    }
}

impl FromStr for EthAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EthAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for EthAmount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.as_f64())
    }
}
