//! Icebreaker: a pure functional state engine for level-based party card games.
//!
//! The engine tracks one game session at a time: four shuffled decks of
//! prompt cards (one per difficulty level), a roster of players, and whose
//! turn it is to ask and answer. All game logic lives in pure functions
//! (state in, event in, new state or error out), so persistence, transport,
//! and UI stay thin external collaborators.
//!
//! # Core Concepts
//!
//! - **Factory**: [`GameState::create`] builds a fresh session from an id and
//!   four source decks, shuffling each deck once.
//! - **Validator**: [`parse_game`] reconstructs a trusted [`GameState`] from
//!   untrusted JSON (stored or received), rejecting anything malformed with a
//!   [`ParseError`] value.
//! - **Reducer**: [`reducer::apply`] advances the state one [`Event`] at a
//!   time, owning all turn, round, and level progression.
//!
//! # Example
//!
//! ```rust
//! use icebreaker::{parse_game, Card, Event, GameState, User};
//!
//! let decks = [
//!     vec![Card::new("What's your go-to karaoke song?")],
//!     vec![Card::new("What's a belief you've changed your mind about?")],
//!     vec![Card::new("What do you value most in a friendship?")],
//!     vec![Card::new("What would you tell your younger self?")],
//! ];
//!
//! let game = GameState::create("game-1", &decks);
//! let game = game
//!     .apply(&Event::AddPlayer { player: User::new("u1", "Ana") })
//!     .unwrap();
//! let game = game
//!     .apply(&Event::AddPlayer { player: User::new("u2", "Ben") })
//!     .unwrap();
//!
//! let game = game.apply(&Event::DrawCard).unwrap();
//! assert_eq!(game.current_asker(), Some(0));
//! assert_ne!(game.current_answerer(), game.current_asker());
//!
//! // Persisted states round-trip through the validator.
//! let stored = serde_json::to_value(&game).unwrap();
//! assert_eq!(parse_game(&stored).unwrap(), game);
//! ```
//!
//! # Concurrency
//!
//! Every function here is synchronous, side-effect-free on its inputs, and
//! holds no shared state. Applying events for a given game id one at a time,
//! in a single total order, is the caller's responsibility.

pub mod model;
pub mod parse;
pub mod reducer;
pub mod state;

// Re-export the public surface at the crate root.
pub use model::{Card, ContentTag, Options, User, UserId};
pub use parse::{parse_game, ParseError};
pub use reducer::{Event, UpdateError};
pub use state::{GameId, GameState, Level};
