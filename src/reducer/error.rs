//! Reducer error type.

use thiserror::Error;

/// Errors for events that are structurally valid but cannot legally apply to
/// the current state.
///
/// Most redundant events deliberately no-op instead of erroring (removing an
/// absent player, skipping past the end of a deck, drawing after the game has
/// ended), so this enum stays small.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UpdateError {
    /// An `AddPlayer` event named an id already present in the roster.
    #[error("user is already playing the game: {id}")]
    AlreadyPlaying { id: String },

    /// A `DrawCard` event arrived with fewer than two players; there is no
    /// one to answer, so the turn cannot be dealt.
    #[error("cannot draw a card with fewer than two players (have {count})")]
    NotEnoughPlayers { count: usize },
}
