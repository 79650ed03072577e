//! The event reducer: the state transition core of the engine.
//!
//! [`apply`] is a pure function from `(GameState, Event)` to either a new
//! `GameState` or an [`UpdateError`]. The input state is never mutated; an
//! accepted event yields a fresh value that shares the card decks with its
//! predecessor. Randomness (answerer selection) comes from a caller-supplied
//! RNG so sequences are reproducible under test.
//!
//! Serialization of events for a live game is an external concern: callers
//! must feed events for one game id through the reducer one at a time, in a
//! single total order. The reducer itself holds no locks and no versioning.

pub mod error;
pub mod event;

pub use error::UpdateError;
pub use event::Event;

use rand::Rng;
use tracing::debug;

use crate::model::{Options, User};
use crate::state::{GameState, Level};

/// Apply one event to a state, producing the successor state.
///
/// Dispatches exhaustively over the closed [`Event`] set. Redundant events
/// (removing an absent player, skipping an exhausted deck, drawing after the
/// game has ended) return an unchanged copy of the state rather than an
/// error; see [`UpdateError`] for the two cases that do fail.
///
/// # Example
///
/// ```rust
/// use icebreaker::{reducer, Card, Event, GameState, User};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let decks = [
///     vec![Card::new("one")],
///     vec![Card::new("two")],
///     vec![Card::new("three")],
///     vec![Card::new("four")],
/// ];
/// let mut rng = StdRng::seed_from_u64(42);
/// let game = GameState::create_with_rng("game-1", &decks, &mut rng);
///
/// let game = reducer::apply(
///     &game,
///     &Event::AddPlayer { player: User::new("u1", "Ana") },
///     &mut rng,
/// )
/// .unwrap();
/// let game = reducer::apply(
///     &game,
///     &Event::AddPlayer { player: User::new("u2", "Ben") },
///     &mut rng,
/// )
/// .unwrap();
///
/// let game = reducer::apply(&game, &Event::DrawCard, &mut rng).unwrap();
/// assert_eq!(game.current_asker(), Some(0));
/// assert_eq!(game.current_card(), 1);
/// ```
pub fn apply<R: Rng + ?Sized>(
    state: &GameState,
    event: &Event,
    rng: &mut R,
) -> Result<GameState, UpdateError> {
    match event {
        Event::AddPlayer { player } => add_player(state, player),
        Event::DrawCard => draw_card(state, rng),
        Event::JumpToLevel { level } => Ok(jump_to_level(state, *level)),
        Event::RemovePlayer { player_id } => Ok(remove_player(state, player_id)),
        Event::SkipCard => Ok(skip_card(state)),
        Event::UpdateOptions { options } => Ok(update_options(state, *options)),
    }
}

impl GameState {
    /// Apply one event using the thread-local RNG.
    ///
    /// Convenience wrapper over [`apply`] for callers that do not need a
    /// seeded RNG.
    pub fn apply(&self, event: &Event) -> Result<GameState, UpdateError> {
        apply(self, event, &mut rand::rng())
    }
}

fn add_player(state: &GameState, player: &User) -> Result<GameState, UpdateError> {
    if state.players.iter().any(|p| p.id == player.id) {
        return Err(UpdateError::AlreadyPlaying {
            id: player.id.clone(),
        });
    }

    let mut next = state.clone();
    next.players.push(player.clone());
    Ok(next)
}

fn remove_player(state: &GameState, player_id: &str) -> GameState {
    let Some(removed) = state.players.iter().position(|p| p.id == player_id) else {
        return state.clone();
    };

    let mut next = state.clone();
    next.players.remove(removed);
    next.current_asker = shift_past(state.current_asker, removed);
    next.current_answerer = shift_past(state.current_answerer, removed);
    next
}

/// Shift a roster pointer down by one if it pointed strictly past the removed
/// index. Pointers at or before the removed index are left alone.
fn shift_past(pointer: Option<usize>, removed: usize) -> Option<usize> {
    match pointer {
        Some(i) if i > removed => Some(i - 1),
        other => other,
    }
}

/// The turn progression algorithm.
///
/// The four branches are tried in order: advance the asker within the round,
/// wrap into a new round at the same level, advance to the next level, and
/// finally terminate the game. `current_card == deck length` is the
/// "exhausted" sentinel that forces a level change regardless of how many
/// askers or rounds remain.
fn draw_card<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Result<GameState, UpdateError> {
    let roster = state.players.len();
    if roster < 2 {
        // With fewer than two players there is no valid answerer to sample.
        return Err(UpdateError::NotEnoughPlayers { count: roster });
    }

    let deck_len = state.cards[state.current_level.index()].len();
    let out_of_cards = state.current_card == deck_len;
    let next_asker = state.current_asker.map_or(0, |a| a + 1);

    let mut next = state.clone();
    if next_asker < roster && !out_of_cards {
        next.current_asker = Some(next_asker);
        next.current_answerer = Some(random_index_except(rng, roster, next_asker));
        next.current_card += 1;
    } else if state.current_round + 1 < state.options.rounds && !out_of_cards {
        next.current_asker = Some(0);
        next.current_answerer = Some(random_index_except(rng, roster, 0));
        next.current_card += 1;
        next.current_round += 1;
    } else if let Some(level) = state.current_level.next() {
        debug!(game = %state.id, level = u8::from(level), "advancing to next level");
        next.current_asker = Some(0);
        next.current_answerer = Some(random_index_except(rng, roster, 0));
        next.current_card = 0;
        next.current_level = level;
        next.current_round = 0;
    } else {
        debug!(game = %state.id, "final level exhausted, ending game");
        next.current_asker = None;
        next.current_answerer = None;
        next.current_card = state.cards[Level::Four.index()].len();
        next.current_level = Level::Four;
        next.current_round = state.options.rounds;
    }
    Ok(next)
}

fn skip_card(state: &GameState) -> GameState {
    let deck_len = state.cards[state.current_level.index()].len();
    if state.current_card >= deck_len {
        return state.clone();
    }

    let mut next = state.clone();
    next.current_card += 1;
    next
}

fn jump_to_level(state: &GameState, level: Level) -> GameState {
    // Turn pointers are left as-is: a jump mid-round keeps the current asker
    // and answerer on stage for the new level's first card.
    let mut next = state.clone();
    next.current_level = level;
    next.current_card = 0;
    next.current_round = 0;
    next
}

fn update_options(state: &GameState, options: Options) -> GameState {
    let mut next = state.clone();
    next.options = options;
    next
}

/// Uniform random index in `0..len`, excluding `except`, by rejection
/// sampling. Callers must guarantee `len >= 2` or the loop cannot terminate.
fn random_index_except<R: Rng + ?Sized>(rng: &mut R, len: usize, except: usize) -> usize {
    debug_assert!(len >= 2, "need at least two candidates");
    loop {
        let candidate = rng.random_range(0..len);
        if candidate != except {
            return candidate;
        }
    }
}
