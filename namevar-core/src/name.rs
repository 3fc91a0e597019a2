//! Canonical name parsing (made by FontLab https://www.fontlab.com/)

use std::fmt;
use std::str::FromStr;

use crate::error::NameError;

/// A reference name split into whitespace-delimited, lower-cased tokens.
///
/// The last token is the family token; everything before it are the given
/// tokens, kept in the order they were supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalName {
    full: String,
    tokens: Vec<String>,
}

impl CanonicalName {
    /// Lower-case and tokenize `raw`, rejecting names with no tokens.
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        let full = raw.to_lowercase();
        let tokens: Vec<String> = full.split_whitespace().map(str::to_string).collect();

        if tokens.is_empty() {
            return Err(NameError::invalid_input(
                "canonical name is empty or whitespace-only",
            ));
        }

        Ok(Self { full, tokens })
    }

    /// The whole lower-cased name, exactly as supplied apart from case.
    pub fn as_str(&self) -> &str {
        &self.full
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The surname: always the last token.
    pub fn family(&self) -> &str {
        // parse() guarantees at least one token
        &self.tokens[self.tokens.len() - 1]
    }

    pub fn given(&self) -> &[String] {
        &self.tokens[..self.tokens.len() - 1]
    }
}

impl FromStr for CanonicalName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}
