//! The closed set of game events.

use serde::{Deserialize, Serialize};

use crate::model::{Options, User, UserId};
use crate::state::Level;

/// A discrete event applied to a [`crate::GameState`] by the reducer.
///
/// The event set is closed: dispatch is an exhaustive `match`, so adding a
/// variant is a compile error everywhere a handler is missing.
///
/// Events are adjacently tagged on the wire: the discriminator lives under
/// `eventType` and the payload, when present, under `event`.
///
/// # Example
///
/// ```rust
/// use icebreaker::{Event, Level};
///
/// let json = r#"{"eventType": "JumpToLevel", "event": {"level": 3}}"#;
/// let event: Event = serde_json::from_str(json).unwrap();
/// assert_eq!(event, Event::JumpToLevel { level: Level::Three });
///
/// let draw: Event = serde_json::from_str(r#"{"eventType": "DrawCard"}"#).unwrap();
/// assert_eq!(draw, Event::DrawCard);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "eventType", content = "event")]
pub enum Event {
    /// Add a player to the roster. Fails if the id is already playing.
    AddPlayer { player: User },
    /// Advance the turn: next asker, a fresh random answerer, and the next
    /// card, rolling over rounds and levels as needed.
    DrawCard,
    /// Jump straight to a level, restarting its cards and rounds.
    JumpToLevel { level: Level },
    /// Remove a player by id. Unknown ids are a no-op.
    RemovePlayer {
        #[serde(rename = "playerID")]
        player_id: UserId,
    },
    /// Pass over the current card without changing whose turn it is.
    SkipCard,
    /// Replace the game options wholesale.
    UpdateOptions { options: Options },
}
