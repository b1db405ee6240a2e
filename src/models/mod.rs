//! Data models for the characters API.

pub mod character;

pub use character::{Character, CharacterPage};
