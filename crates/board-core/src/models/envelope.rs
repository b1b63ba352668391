use serde::{Deserialize, Serialize};

/// Envelope code signalling success
pub const SUCCESS_CODE: u16 = 200;

/// Wrapper shape all API responses use.
///
/// Success is judged by `code`, never by the HTTP status line; non-success
/// envelopes carry a human-readable `message` and list responses carry
/// their payload in `list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<T>>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Take the payload, treating a missing `list` as empty
    pub fn into_list(self) -> Vec<T> {
        self.list.unwrap_or_default()
    }
}
