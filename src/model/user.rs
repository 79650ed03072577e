//! Player identity.

use serde::{Deserialize, Serialize};

/// Opaque stable identifier for a user. Assigned externally.
pub type UserId = String;

/// A player in a game.
///
/// Identity is carried entirely by `id`: roster membership, duplicate
/// detection, and removal all compare ids, never profile fields.
///
/// # Example
///
/// ```rust
/// use icebreaker::User;
///
/// let ana = User::new("user-1", "Ana");
/// let also_ana = User::new("user-1", "Ana B.");
/// assert_eq!(ana.id, also_ana.id);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct User {
    /// Opaque stable identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
}

impl User {
    /// Create a user from an id and display name.
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
