// src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("invalid MAGMOM token '{token}': {reason}")]
    InvalidToken { token: String, reason: String },

    #[error(
        "invalid number of moments: expected {natoms} (collinear) or {noncollinear} (non-collinear), but got {found}"
    )]
    MomentCount {
        natoms: usize,
        noncollinear: usize,
        found: usize,
    },

    #[error("number of atoms must be positive")]
    NoAtoms,

    #[error("malformed vector file: {details} (at line {line})")]
    VectorFile { line: usize, details: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn invalid_token(token: &str, reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            token: token.to_string(),
            reason: reason.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for errors caused by malformed moment data rather than I/O or setup.
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            Error::InvalidToken { .. }
                | Error::MomentCount { .. }
                | Error::NoAtoms
                | Error::VectorFile { .. }
        )
    }
}
