//! Async wrapper around synchronous CharacterClient.
//!
//! This module provides an async interface to the synchronous CharacterClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::{ApiResponse, CharacterClient};
use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Async access to the characters endpoint.
///
/// The checks only ever talk to the network through this trait, so a test
/// double can count and script every request.
#[async_trait]
pub trait AsyncCharacterClient: Send + Sync {
    /// Fetch the characters listing, optionally filtered by name.
    async fn get_characters(&self, name: Option<&str>) -> ApiResult<ApiResponse>;
}

/// Async wrapper around synchronous CharacterClient.
#[derive(Clone)]
pub struct AsyncCharacterClientImpl {
    client: Arc<CharacterClient>,
}

impl AsyncCharacterClientImpl {
    pub fn new(client: CharacterClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncCharacterClient for AsyncCharacterClientImpl {
    async fn get_characters(&self, name: Option<&str>) -> ApiResult<ApiResponse> {
        let client = self.client.clone();
        let name = name.map(str::to_string);

        tokio::task::spawn_blocking(move || client.get_characters(name.as_deref()))
            .await
            .map_err(|e| ApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
