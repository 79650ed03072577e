//! The central game state and its factory.
//!
//! A [`GameState`] is created once (via [`GameState::create`]) or
//! reconstructed once from untrusted data (via [`crate::parse::parse_game`]),
//! then evolves exclusively through the reducer, one event at a time. It is
//! never mutated in place: every accepted event produces a new value, and the
//! four card decks are kept behind an `Arc` so successor states share them
//! instead of copying.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::{Card, Options, User};

/// Opaque stable identifier for a game. Assigned externally at creation and
/// never changed afterwards.
pub type GameId = String;

/// One of the four fixed difficulty tiers, each with its own deck.
///
/// Serialized as the integers 1 through 4.
///
/// # Example
///
/// ```rust
/// use icebreaker::Level;
///
/// assert_eq!(Level::One.index(), 0);
/// assert_eq!(Level::Three.next(), Some(Level::Four));
/// assert_eq!(Level::Four.next(), None);
/// assert_eq!(Level::try_from(2).unwrap(), Level::Two);
/// assert!(Level::try_from(5).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Level {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Level; 4] = [Level::One, Level::Two, Level::Three, Level::Four];

    /// Zero-based index into the deck array.
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// The following level, or `None` from [`Level::Four`].
    pub fn next(self) -> Option<Level> {
        match self {
            Level::One => Some(Level::Two),
            Level::Two => Some(Level::Three),
            Level::Three => Some(Level::Four),
            Level::Four => None,
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level as u8
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Level::One),
            2 => Ok(Level::Two),
            3 => Ok(Level::Three),
            4 => Ok(Level::Four),
            other => Err(format!("not a level number: {other}")),
        }
    }
}

/// Complete state of one game session.
///
/// The combination of `current_level`, `current_card`, `current_round`, and
/// `current_asker` encodes where the session is: not yet started
/// (`current_asker` is `None` and nothing has been drawn), in progress, or
/// ended (see [`GameState::has_ended`]). There is no separate phase enum.
///
/// `GameState` serializes to the persisted wire shape but deliberately does
/// not implement `Deserialize`; reconstruction from untrusted data must go
/// through [`crate::parse::parse_game`] so that every stored state an
/// external collaborator hands back is re-validated first.
///
/// # Example
///
/// ```rust
/// use icebreaker::{Card, GameState};
///
/// let decks = [
///     vec![Card::new("Level one question")],
///     vec![Card::new("Level two question")],
///     vec![Card::new("Level three question")],
///     vec![Card::new("Level four question")],
/// ];
///
/// let game = GameState::create("game-1", &decks);
/// assert_eq!(game.id(), "game-1");
/// assert_eq!(game.current_card(), 0);
/// assert!(game.current_asker().is_none());
/// assert!(game.players().is_empty());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub(crate) id: GameId,
    pub(crate) created: DateTime<Utc>,
    pub(crate) cards: Arc<[Vec<Card>; 4]>,
    pub(crate) current_asker: Option<usize>,
    pub(crate) current_answerer: Option<usize>,
    pub(crate) current_card: usize,
    pub(crate) current_level: Level,
    pub(crate) current_round: u32,
    pub(crate) players: Vec<User>,
    pub(crate) options: Options,
}

impl GameState {
    /// Create a fresh game for `id`, shuffling each source deck with the
    /// thread-local RNG.
    ///
    /// Turn counters are zero-initialized, the roster starts empty, and
    /// options take their defaults (one round, content tags on). The input
    /// decks are copied; callers keep ownership of the source material.
    pub fn create(id: impl Into<GameId>, source_decks: &[Vec<Card>; 4]) -> Self {
        Self::create_with_rng(id, source_decks, &mut rand::rng())
    }

    /// Create a fresh game using a caller-supplied RNG.
    ///
    /// Identical to [`GameState::create`] except the shuffle is driven by
    /// `rng`, which makes deck order reproducible from a seed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use icebreaker::{Card, GameState};
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let decks = [
    ///     vec![Card::new("a"), Card::new("b"), Card::new("c")],
    ///     vec![Card::new("d")],
    ///     vec![Card::new("e")],
    ///     vec![Card::new("f")],
    /// ];
    ///
    /// let one = GameState::create_with_rng("g", &decks, &mut StdRng::seed_from_u64(7));
    /// let two = GameState::create_with_rng("g", &decks, &mut StdRng::seed_from_u64(7));
    /// assert_eq!(one.deck(icebreaker::Level::One), two.deck(icebreaker::Level::One));
    /// ```
    pub fn create_with_rng<R: Rng + ?Sized>(
        id: impl Into<GameId>,
        source_decks: &[Vec<Card>; 4],
        rng: &mut R,
    ) -> Self {
        let mut decks = source_decks.clone();
        for deck in decks.iter_mut() {
            deck.shuffle(rng);
        }

        Self {
            id: id.into(),
            created: Utc::now(),
            cards: Arc::new(decks),
            current_asker: None,
            current_answerer: None,
            current_card: 0,
            current_level: Level::One,
            current_round: 0,
            players: Vec::new(),
            options: Options::default(),
        }
    }

    /// The game's stable identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// When the game was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// The shuffled deck for a level. Fixed at creation time.
    pub fn deck(&self, level: Level) -> &[Card] {
        &self.cards[level.index()]
    }

    /// Index of the player currently asking, if a turn is active.
    pub fn current_asker(&self) -> Option<usize> {
        self.current_asker
    }

    /// Index of the player currently answering, if a turn is active.
    pub fn current_answerer(&self) -> Option<usize> {
        self.current_answerer
    }

    /// Position within the current level's deck. Equal to the deck length
    /// when the level is exhausted.
    pub fn current_card(&self) -> usize {
        self.current_card
    }

    /// The level the group is currently on.
    pub fn current_level(&self) -> Level {
        self.current_level
    }

    /// The round within the current level, counted from zero.
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    /// The roster, in join order.
    pub fn players(&self) -> &[User] {
        &self.players
    }

    /// Current options.
    pub fn options(&self) -> Options {
        self.options
    }

    /// Whether the session has reached its terminal state: level four
    /// exhausted with all rounds completed and no active turn.
    ///
    /// The terminal state is sticky with respect to play: further `DrawCard`
    /// events leave it unchanged, but roster and options events still apply
    /// to it.
    pub fn has_ended(&self) -> bool {
        self.current_level == Level::Four
            && self.current_round == self.options.rounds
            && self.current_asker.is_none()
            && self.current_card == self.cards[Level::Four.index()].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn source_decks() -> [Vec<Card>; 4] {
        [
            vec![Card::new("1a"), Card::new("1b"), Card::new("1c")],
            vec![Card::new("2a"), Card::new("2b")],
            vec![Card::new("3a"), Card::new("3b")],
            vec![Card::new("4a")],
        ]
    }

    #[test]
    fn create_zero_initializes_counters() {
        let game = GameState::create("game-1", &source_decks());

        assert_eq!(game.id(), "game-1");
        assert_eq!(game.current_asker(), None);
        assert_eq!(game.current_answerer(), None);
        assert_eq!(game.current_card(), 0);
        assert_eq!(game.current_level(), Level::One);
        assert_eq!(game.current_round(), 0);
        assert!(game.players().is_empty());
        assert_eq!(game.options(), Options::default());
    }

    #[test]
    fn create_shuffles_a_permutation_of_each_source_deck() {
        let source = source_decks();
        let game = GameState::create_with_rng("game-1", &source, &mut StdRng::seed_from_u64(3));

        for level in Level::ALL {
            let mut shuffled: Vec<&str> =
                game.deck(level).iter().map(|c| c.text.as_str()).collect();
            let mut expected: Vec<&str> = source[level.index()]
                .iter()
                .map(|c| c.text.as_str())
                .collect();
            shuffled.sort_unstable();
            expected.sort_unstable();
            assert_eq!(shuffled, expected);
        }
    }

    #[test]
    fn create_does_not_mutate_source_decks() {
        let source = source_decks();
        let before = source.clone();
        let _game = GameState::create("game-1", &source);

        assert_eq!(source, before);
    }

    #[test]
    fn seeded_creation_is_reproducible() {
        let source = source_decks();
        let one = GameState::create_with_rng("g", &source, &mut StdRng::seed_from_u64(11));
        let two = GameState::create_with_rng("g", &source, &mut StdRng::seed_from_u64(11));

        for level in Level::ALL {
            assert_eq!(one.deck(level), two.deck(level));
        }
    }

    #[test]
    fn fresh_game_has_not_ended() {
        let game = GameState::create("game-1", &source_decks());
        assert!(!game.has_ended());
    }

    #[test]
    fn level_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Level::Three).unwrap(), "3");
        let level: Level = serde_json::from_str("4").unwrap();
        assert_eq!(level, Level::Four);
    }

    #[test]
    fn level_rejects_out_of_range_numbers() {
        assert!(serde_json::from_str::<Level>("0").is_err());
        assert!(serde_json::from_str::<Level>("5").is_err());
    }

    #[test]
    fn state_serializes_with_camel_case_fields() {
        let game = GameState::create("game-1", &source_decks());
        let json = serde_json::to_value(&game).unwrap();

        assert_eq!(json["id"], "game-1");
        assert!(json["created"].is_string());
        assert_eq!(json["cards"].as_array().unwrap().len(), 4);
        assert!(json["currentAsker"].is_null());
        assert!(json["currentAnswerer"].is_null());
        assert_eq!(json["currentCard"], 0);
        assert_eq!(json["currentLevel"], 1);
        assert_eq!(json["currentRound"], 0);
        assert_eq!(json["players"].as_array().unwrap().len(), 0);
        assert_eq!(json["options"]["rounds"], 1);
    }

    #[test]
    fn clones_share_the_deck_storage() {
        let game = GameState::create("game-1", &source_decks());
        let copy = game.clone();

        assert!(Arc::ptr_eq(&game.cards, &copy.cards));
    }
}
