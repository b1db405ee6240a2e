use async_trait::async_trait;
use character_api_smoke::error::{ApiError, ApiResult};
use character_api_smoke::{ApiResponse, AsyncCharacterClient};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Key used for requests without a name filter.
const UNFILTERED: &str = "";

/// Scripted response for one request shape.
#[derive(Clone)]
enum Scripted {
    Response(ApiResponse),
    ConnectionFailed(String),
}

/// Mock characters client for testing.
///
/// Serves canned responses keyed by the name filter and tracks every call
/// so tests can verify how many requests a run issued.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockCharacterClient {
    responses: Arc<Mutex<HashMap<String, Scripted>>>,
    calls: Arc<Mutex<Vec<Option<String>>>>,
}

#[allow(dead_code)]
impl MockCharacterClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client whose endpoint passes every check with the default expectations.
    pub fn healthy() -> Self {
        let mock = Self::new();
        mock.respond_json(None, 200, full_page(50));
        mock.respond_json(
            Some("Mickey Mouse"),
            200,
            json!({"data": [{"_id": 4703, "name": "Mickey Mouse"}], "count": 1}),
        );
        mock
    }

    /// Serve `body` with `status` for the given name filter.
    pub fn respond(&self, name: Option<&str>, status: u16, body: &str) {
        self.responses.lock().unwrap().insert(
            name.unwrap_or(UNFILTERED).to_string(),
            Scripted::Response(ApiResponse::new(status, body)),
        );
    }

    pub fn respond_json(&self, name: Option<&str>, status: u16, body: Value) {
        self.respond(name, status, &body.to_string());
    }

    /// Fail the given request shape at the transport level.
    pub fn fail_connection(&self, name: Option<&str>, message: &str) {
        self.responses.lock().unwrap().insert(
            name.unwrap_or(UNFILTERED).to_string(),
            Scripted::ConnectionFailed(message.to_string()),
        );
    }

    /// Total number of requests issued.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Name filters of every request, in order.
    pub fn calls(&self) -> Vec<Option<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn reset_calls(&self) {
        self.calls.lock().unwrap().clear();
    }
}

#[async_trait]
impl AsyncCharacterClient for MockCharacterClient {
    async fn get_characters(&self, name: Option<&str>) -> ApiResult<ApiResponse> {
        self.calls.lock().unwrap().push(name.map(str::to_string));

        let responses = self.responses.lock().unwrap();
        match responses.get(name.unwrap_or(UNFILTERED)) {
            Some(Scripted::Response(response)) => Ok(response.clone()),
            Some(Scripted::ConnectionFailed(message)) => {
                Err(ApiError::ConnectionFailed(message.clone()))
            }
            None => Ok(ApiResponse::new(404, "Not Found")),
        }
    }
}

/// A first page holding `n` named characters.
#[allow(dead_code)]
pub fn full_page(n: usize) -> Value {
    let data: Vec<Value> = (0..n)
        .map(|i| json!({"_id": i, "name": format!("Character {}", i)}))
        .collect();
    json!({
        "data": data,
        "count": n,
        "totalPages": 149,
        "nextPage": "http://api.disneyapi.dev/character?page=2&pageSize=50",
        "previousPage": null
    })
}
