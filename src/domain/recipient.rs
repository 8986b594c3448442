use std::fmt;

use serde::{Serialize, Serializer};

pub const DEFAULT_NAME_SUFFIX: &str = ".base.eth";

const ENS_SUFFIX: &str = ".eth";
const ADDRESS_HEX_LEN: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingSystem {
    Basename,
    Ens,
}

impl NamingSystem {
    pub fn suffix(&self) -> &'static str {
        match self {
            NamingSystem::Basename => DEFAULT_NAME_SUFFIX,
            NamingSystem::Ens => ENS_SUFFIX,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NamingSystem::Basename => "basename",
            NamingSystem::Ens => "ens",
        }
    }

    /// Picks the most specific naming system for `name`.
    pub fn for_name(name: &str) -> Option<Self> {
        if name.ends_with(DEFAULT_NAME_SUFFIX) {
            Some(NamingSystem::Basename)
        } else if name.ends_with(ENS_SUFFIX) {
            Some(NamingSystem::Ens)
        } else {
            None
        }
    }
}

impl fmt::Display for NamingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who a transfer goes to: a raw address or a name still to be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Recipient {
    Address(String),
    Name(String),
}

impl Recipient {
    /// Builds a recipient from a spoken or typed token.
    ///
    /// Addresses pass through untouched. Names already carrying `.eth` or
    /// `default_suffix` are kept; anything else gets `default_suffix`
    /// appended, so applying this twice yields the same recipient.
    /// Returns `None` for a token that is empty after trimming.
    pub fn from_token(token: &str, default_suffix: &str) -> Option<Self> {
        let token = token
            .trim()
            .trim_end_matches(|c: char| c == '.' || c == '-')
            .trim_start_matches('.');
        if token.is_empty() {
            return None;
        }

        if is_address(token) {
            return Some(Recipient::Address(token.to_string()));
        }

        let name = token.to_lowercase();
        if name.ends_with(ENS_SUFFIX) || name.ends_with(default_suffix) {
            Some(Recipient::Name(name))
        } else {
            Some(Recipient::Name(format!("{}{}", name, default_suffix)))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Recipient::Address(a) => a,
            Recipient::Name(n) => n,
        }
    }

    pub fn naming_system(&self) -> Option<NamingSystem> {
        match self {
            Recipient::Address(_) => None,
            Recipient::Name(n) => NamingSystem::for_name(n),
        }
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Recipient {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Syntactic address check: `0x` followed by 40 hex digits.
pub fn is_address(candidate: &str) -> bool {
    candidate
        .strip_prefix("0x")
        .or_else(|| candidate.strip_prefix("0X"))
        .is_some_and(|hex| {
            hex.len() == ADDRESS_HEX_LEN && hex.chars().all(|c| c.is_ascii_hexdigit())
        })
}
