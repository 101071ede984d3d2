//! Repository identifier and API credential

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when an `owner/repo` string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid repository '{input}': expected 'owner/repo'")]
pub struct RepositoryParseError {
    pub input: String,
}

/// A repository on the hosting service, addressed as `owner/repo`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl FromStr for Repository {
    type Err = RepositoryParseError;

    /// Parses `owner/repo`. Both halves must be non-empty and no further
    /// `/` is allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || RepositoryParseError {
            input: s.to_string(),
        };

        let (owner, name) = s.trim().split_once('/').ok_or_else(err)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(err());
        }

        Ok(Self::new(owner, name))
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Bearer credential for API calls
///
/// `Debug` and `Display` never print the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw secret, for building request headers only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}
