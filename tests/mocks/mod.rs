//! Test doubles for the characters API.

pub mod mock_character_client;

pub use mock_character_client::MockCharacterClient;
