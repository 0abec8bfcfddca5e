use serde::Serialize;

use super::error::StoreResult;

/// Uniform `{ success, message, data }` envelope for UI consumers.
///
/// Built from any store result, so no error crosses into presentation code as
/// anything other than a message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Outcome<T> {
    // ---
    pub fn ok(data: T) -> Self {
        // ---
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        // ---
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

impl<T> From<StoreResult<T>> for Outcome<T> {
    fn from(result: StoreResult<T>) -> Self {
        match result {
            Ok(data) => Outcome::ok(data),
            Err(err) => Outcome::failed(err.to_string()),
        }
    }
}
