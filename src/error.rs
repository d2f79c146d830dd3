use thiserror::Error;

/// Reasons a base32 secret is rejected.
///
/// Every variant is a permanent rejection of the secret; no code is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("secret is empty")]
    EmptySecret,

    #[error("invalid padding char count: {0}")]
    InvalidPaddingCount(usize),

    #[error("invalid padding char at position {0}")]
    InvalidPaddingPlacement(usize),

    #[error("invalid char {character:?} in secret at position {position}")]
    InvalidCharacter { character: char, position: usize },
}
