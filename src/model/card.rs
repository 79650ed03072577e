//! Prompt cards and their content classification.
//!
//! Cards are authored externally and only ever read by the engine. Each card
//! carries a prompt text and an optional content tag describing how heavy the
//! prompt is, from `Green` (light) to `Red` (heaviest).

use serde::{Deserialize, Serialize};

/// Content classification for a card, lightest to heaviest.
///
/// Serialized as the lowercase tag name, matching the stored wire shape.
///
/// # Example
///
/// ```rust
/// use icebreaker::ContentTag;
///
/// let tag: ContentTag = serde_json::from_str("\"orange\"").unwrap();
/// assert_eq!(tag, ContentTag::Orange);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentTag {
    Red,
    Orange,
    Yellow,
    Green,
}

/// A single prompt card.
///
/// Cards are immutable values. The engine never edits, reorders, or appends
/// cards after a game is created; decks are fixed at creation time.
///
/// # Example
///
/// ```rust
/// use icebreaker::{Card, ContentTag};
///
/// let light = Card::new("What made you smile today?");
/// assert!(light.content_tag.is_none());
///
/// let heavy = Card::tagged("What do you regret most?", ContentTag::Red);
/// assert_eq!(heavy.content_tag, Some(ContentTag::Red));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// The prompt text. Non-empty by contract; the validator enforces this
    /// for untrusted input.
    pub text: String,
    /// Optional content classification. Omitted from JSON when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_tag: Option<ContentTag>,
}

impl Card {
    /// Create an untagged card.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            content_tag: None,
        }
    }

    /// Create a card with a content tag.
    pub fn tagged(text: impl Into<String>, tag: ContentTag) -> Self {
        Self {
            text: text.into(),
            content_tag: Some(tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_card_omits_tag_field() {
        let card = Card::new("First question");
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["text"], "First question");
        assert!(json.get("contentTag").is_none());
    }

    #[test]
    fn tagged_card_serializes_lowercase_tag() {
        let card = Card::tagged("Hard question", ContentTag::Red);
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["contentTag"], "red");
    }

    #[test]
    fn card_round_trips_through_json() {
        let card = Card::tagged("A question", ContentTag::Yellow);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, back);
    }

    #[test]
    fn all_tags_serialize_to_lowercase_names() {
        let tags = [
            (ContentTag::Red, "\"red\""),
            (ContentTag::Orange, "\"orange\""),
            (ContentTag::Yellow, "\"yellow\""),
            (ContentTag::Green, "\"green\""),
        ];

        for (tag, expected) in tags {
            assert_eq!(serde_json::to_string(&tag).unwrap(), expected);
        }
    }
}
