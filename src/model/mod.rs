//! Leaf value types: cards, options, and player identity.
//!
//! Everything in this module is a small immutable value with a serde wire
//! shape. None of it carries game logic; the state machine lives in
//! [`crate::reducer`].

mod card;
mod options;
mod user;

pub use card::{Card, ContentTag};
pub use options::Options;
pub use user::{User, UserId};
