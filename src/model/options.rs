//! Per-game options.

use serde::{Deserialize, Serialize};

/// Options governing a single game.
///
/// Options are an immutable value type, replaced wholesale by an
/// `UpdateOptions` event rather than edited field by field.
///
/// # Example
///
/// ```rust
/// use icebreaker::Options;
///
/// let options = Options::default();
/// assert_eq!(options.rounds, 1);
/// assert!(options.content_tags_on);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// How many full passes through the roster each level lasts.
    /// Always at least 1.
    pub rounds: u32,
    /// Whether content tags should be surfaced to players.
    pub content_tags_on: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            rounds: 1,
            content_tags_on: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_one_round_with_tags() {
        let options = Options::default();
        assert_eq!(options.rounds, 1);
        assert!(options.content_tags_on);
    }

    #[test]
    fn options_serialize_with_camel_case_fields() {
        let options = Options {
            rounds: 3,
            content_tags_on: false,
        };
        let json = serde_json::to_value(&options).unwrap();

        assert_eq!(json["rounds"], 3);
        assert_eq!(json["contentTagsOn"], false);
    }

    #[test]
    fn options_round_trip_through_json() {
        let options = Options {
            rounds: 5,
            content_tags_on: true,
        };
        let json = serde_json::to_string(&options).unwrap();
        let back: Options = serde_json::from_str(&json).unwrap();

        assert_eq!(options, back);
    }
}
