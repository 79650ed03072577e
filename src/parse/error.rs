//! Validation error type.

use thiserror::Error;

/// Errors produced while reconstructing a [`crate::GameState`] from
/// untrusted input.
///
/// Parsing never panics; every malformed input maps to exactly one of these
/// variants, and validation stops at the first failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Input was absent, null, or not a JSON object.
    #[error("not a game object: {0}")]
    NotAGame(String),

    /// `id` was missing, not a string, or empty.
    #[error("not a valid game id: {0}")]
    InvalidId(String),

    /// `created` was missing or not an RFC 3339 timestamp.
    #[error("not a valid creation timestamp: {0}")]
    InvalidCreated(String),

    /// `cards` was not an array of exactly four card arrays.
    #[error("expected four card decks: {0}")]
    MalformedDecks(String),

    /// A deck element failed card validation.
    #[error("not a valid card object: {0}")]
    InvalidCard(String),

    /// A card carried an unknown content tag.
    #[error("not a valid content tag: {0}")]
    InvalidContentTag(String),

    /// A numeric field was missing, negative, fractional, or non-numeric.
    #[error("field {field} is not a whole number: {value}")]
    NotAWholeNumber {
        field: &'static str,
        value: String,
    },

    /// `currentLevel` was not one of 1 through 4.
    #[error("not a level number: {0}")]
    InvalidLevel(String),

    /// `options` failed validation.
    #[error("not a valid options object: {0}")]
    InvalidOptions(String),

    /// A roster element failed user validation.
    #[error("not a valid user object: {0}")]
    InvalidUser(String),

    /// Two roster entries shared an id.
    #[error("duplicate player id: {0}")]
    DuplicatePlayerId(String),

    /// A structurally valid field violated a cross-field invariant.
    #[error("field {field} out of range: {detail}")]
    OutOfRange {
        field: &'static str,
        detail: String,
    },
}
