//! Character records and the page envelope the endpoint returns.

use crate::error::{CheckError, CheckResult};
use serde::Deserialize;
use serde_json::Value;

/// One element of the `data` array.
///
/// Only `name` is inspected; the element is kept as raw JSON so that
/// records with unexpected shapes (or `null` entries) still count toward
/// page size.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Character(Value);

impl Character {
    pub fn new(value: Value) -> Self {
        Character(value)
    }

    /// The `name` attribute when it is a string.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Whether the record carries a truthy `name`.
    ///
    /// Empty strings, `0`, `false` and `null` do not count as a name.
    pub fn has_name(&self) -> bool {
        match self.0.get("name") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }
}

/// A single page of the characters listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterPage {
    pub data: Vec<Character>,
    pub count: Option<u64>,
    pub total_pages: Option<u64>,
    pub next_page: Option<String>,
    pub previous_page: Option<String>,
}

impl CharacterPage {
    /// Build a page from a parsed response body.
    ///
    /// Fails with [`CheckError::MissingData`] when `data` is absent or not an
    /// array. Pagination metadata is optional and ignored when malformed.
    pub fn from_value(mut body: Value) -> CheckResult<Self> {
        let data = match body.get_mut("data").map(Value::take) {
            Some(Value::Array(items)) => items.into_iter().map(Character::new).collect(),
            _ => return Err(CheckError::MissingData),
        };

        let text = |key: &str| body.get(key).and_then(Value::as_str).map(str::to_string);

        Ok(CharacterPage {
            data,
            count: body.get("count").and_then(Value::as_u64),
            total_pages: body.get("totalPages").and_then(Value::as_u64),
            next_page: text("nextPage"),
            previous_page: text("previousPage"),
        })
    }

    /// Parse a raw response body into a page.
    pub fn parse(body: &str) -> CheckResult<Self> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
