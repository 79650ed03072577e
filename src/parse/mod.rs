//! Reconstruction of a trusted [`GameState`] from untrusted input.
//!
//! External collaborators (storage, transport) hand back game state as an
//! untyped JSON value. Nothing downstream may touch that data until it has
//! passed through [`parse_game`], which validates every field against the
//! state's structural invariants and returns a [`ParseError`] value instead
//! of panicking on anything malformed.
//!
//! Validation short-circuits on the first failure, in a fixed order: id and
//! creation timestamp, the four card decks, `currentAsker`,
//! `currentAnswerer`, `currentCard`, `currentLevel`, `currentRound`,
//! `options`, `players`, and finally the cross-field range checks.

pub mod error;

pub use error::ParseError;

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::model::{Card, ContentTag, Options, User};
use crate::state::{GameState, Level};

/// Reconstruct a [`GameState`] from an untrusted JSON value.
///
/// Accepts exactly the shape that [`GameState`]'s `Serialize` implementation
/// produces, so any state this crate emits round-trips. Anything else,
/// whether missing fields, wrong types, or out-of-range indices, is rejected
/// with a [`ParseError`] describing the first offending field.
///
/// # Example
///
/// ```rust
/// use icebreaker::{parse_game, Card, GameState};
///
/// let decks = [
///     vec![Card::new("one")],
///     vec![Card::new("two")],
///     vec![Card::new("three")],
///     vec![Card::new("four")],
/// ];
/// let game = GameState::create("game-1", &decks);
///
/// let stored = serde_json::to_value(&game).unwrap();
/// let restored = parse_game(&stored).unwrap();
/// assert_eq!(restored, game);
///
/// assert!(parse_game(&serde_json::Value::Null).is_err());
/// ```
pub fn parse_game(raw: &Value) -> Result<GameState, ParseError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| ParseError::NotAGame(raw.to_string()))?;

    let id = obj
        .get("id")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ParseError::InvalidId(render(obj.get("id"))))?
        .to_string();
    let created = parse_created(obj.get("created"))?;

    let decks = parse_decks(obj.get("cards"))?;

    let current_asker = whole_or_null(obj.get("currentAsker"), "currentAsker")?;
    let current_answerer = whole_or_null(obj.get("currentAnswerer"), "currentAnswerer")?;
    let current_card = whole_number(obj.get("currentCard"), "currentCard")?;
    let current_level = parse_level(obj.get("currentLevel"))?;
    let current_round = whole_number(obj.get("currentRound"), "currentRound")?;

    let options = parse_options(obj.get("options"))?;
    let players = parse_players(obj.get("players"))?;

    // Field-level validation passed; the cross-field invariants remain.
    let deck_len = decks[current_level.index()].len() as u64;
    if current_card > deck_len {
        return Err(ParseError::OutOfRange {
            field: "currentCard",
            detail: format!("{current_card} exceeds deck length {deck_len}"),
        });
    }
    if current_round > u64::from(options.rounds) {
        return Err(ParseError::OutOfRange {
            field: "currentRound",
            detail: format!("{current_round} exceeds rounds {}", options.rounds),
        });
    }
    let roster_len = players.len() as u64;
    for (field, index) in [
        ("currentAsker", current_asker),
        ("currentAnswerer", current_answerer),
    ] {
        if let Some(i) = index {
            if i >= roster_len {
                return Err(ParseError::OutOfRange {
                    field,
                    detail: format!("{i} exceeds roster length {roster_len}"),
                });
            }
        }
    }
    if let (Some(asker), Some(answerer)) = (current_asker, current_answerer) {
        if asker == answerer && players.len() > 1 {
            return Err(ParseError::OutOfRange {
                field: "currentAnswerer",
                detail: format!("answerer {answerer} coincides with asker"),
            });
        }
    }

    Ok(GameState {
        id,
        created,
        cards: Arc::new(decks),
        current_asker: current_asker.map(|i| i as usize),
        current_answerer: current_answerer.map(|i| i as usize),
        current_card: current_card as usize,
        current_level,
        current_round: current_round as u32,
        players,
        options,
    })
}

/// Validate a single card value: a non-empty `text` string plus an optional
/// `contentTag`.
pub fn parse_card(raw: &Value) -> Result<Card, ParseError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| ParseError::InvalidCard(raw.to_string()))?;

    let text = obj
        .get("text")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ParseError::InvalidCard(raw.to_string()))?
        .to_string();

    let content_tag = match obj.get("contentTag") {
        None => None,
        Some(tag) => Some(parse_content_tag(tag)?),
    };

    Ok(Card { text, content_tag })
}

/// Validate an options value: `rounds` a whole number of at least 1 and
/// `contentTagsOn` a boolean.
pub fn parse_options(raw: Option<&Value>) -> Result<Options, ParseError> {
    let invalid = || ParseError::InvalidOptions(render(raw));
    let obj = raw.and_then(Value::as_object).ok_or_else(invalid)?;

    let rounds = obj
        .get("rounds")
        .and_then(Value::as_u64)
        .filter(|&r| r >= 1)
        .and_then(|r| u32::try_from(r).ok())
        .ok_or_else(invalid)?;
    let content_tags_on = obj
        .get("contentTagsOn")
        .and_then(Value::as_bool)
        .ok_or_else(invalid)?;

    Ok(Options {
        rounds,
        content_tags_on,
    })
}

/// Validate a user value: a non-empty `id` plus a `name` string.
pub fn parse_user(raw: &Value) -> Result<User, ParseError> {
    let invalid = || ParseError::InvalidUser(raw.to_string());
    let obj = raw.as_object().ok_or_else(invalid)?;

    let id = obj
        .get("id")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(invalid)?
        .to_string();
    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(invalid)?
        .to_string();

    Ok(User { id, name })
}

fn parse_content_tag(raw: &Value) -> Result<ContentTag, ParseError> {
    match raw.as_str() {
        Some("red") => Ok(ContentTag::Red),
        Some("orange") => Ok(ContentTag::Orange),
        Some("yellow") => Ok(ContentTag::Yellow),
        Some("green") => Ok(ContentTag::Green),
        _ => Err(ParseError::InvalidContentTag(raw.to_string())),
    }
}

fn parse_created(raw: Option<&Value>) -> Result<DateTime<Utc>, ParseError> {
    // Strict variant: only an already-valid RFC 3339 timestamp is accepted;
    // arbitrary values are never coerced into one.
    raw.and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|t| t.with_timezone(&Utc))
        .ok_or_else(|| ParseError::InvalidCreated(render(raw)))
}

fn parse_decks(raw: Option<&Value>) -> Result<[Vec<Card>; 4], ParseError> {
    let malformed = || ParseError::MalformedDecks(render(raw));
    let outer = raw.and_then(Value::as_array).ok_or_else(malformed)?;
    if outer.len() != 4 {
        return Err(malformed());
    }

    let mut decks: [Vec<Card>; 4] = Default::default();
    for (slot, deck) in decks.iter_mut().zip(outer) {
        let cards = deck.as_array().ok_or_else(malformed)?;
        *slot = cards.iter().map(parse_card).collect::<Result<_, _>>()?;
    }
    Ok(decks)
}

fn parse_level(raw: Option<&Value>) -> Result<Level, ParseError> {
    raw.and_then(Value::as_u64)
        .and_then(|n| u8::try_from(n).ok())
        .and_then(|n| Level::try_from(n).ok())
        .ok_or_else(|| ParseError::InvalidLevel(render(raw)))
}

fn parse_players(raw: Option<&Value>) -> Result<Vec<User>, ParseError> {
    let roster = raw
        .and_then(Value::as_array)
        .ok_or_else(|| ParseError::InvalidUser(render(raw)))?;

    let players = roster
        .iter()
        .map(parse_user)
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = HashSet::new();
    for player in &players {
        if !seen.insert(player.id.as_str()) {
            return Err(ParseError::DuplicatePlayerId(player.id.clone()));
        }
    }
    Ok(players)
}

/// Whole number = non-negative integer. Rejects floats, negatives, strings,
/// and missing fields.
fn whole_number(raw: Option<&Value>, field: &'static str) -> Result<u64, ParseError> {
    raw.and_then(Value::as_u64)
        .ok_or_else(|| ParseError::NotAWholeNumber {
            field,
            value: render(raw),
        })
}

fn whole_or_null(raw: Option<&Value>, field: &'static str) -> Result<Option<u64>, ParseError> {
    match raw {
        Some(Value::Null) => Ok(None),
        other => whole_number(other, field).map(Some),
    }
}

fn render(raw: Option<&Value>) -> String {
    raw.map_or_else(|| "missing".to_string(), Value::to_string)
}
