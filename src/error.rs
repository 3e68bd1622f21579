//! Error types for the translator library.

use thiserror::Error;

/// Errors that can occur while loading or translating sequences.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Input text could not be decoded.
    #[error("{0}")]
    Parse(String),

    /// The input file has an unsupported format or extension.
    #[error("{0}")]
    Format(String),

    /// Bytes that do not form a codon over A, C, G and T.
    #[error("invalid codon: '{0}'")]
    InvalidCodon(String),
}
