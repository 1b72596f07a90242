use serde::Serialize;
use serde_json::Value;

/// Uniform wrapper every endpoint responds with. `success` and `message` are
/// always present; `data` only when there is a payload, `count` only when the
/// caller supplied one (so "no count" and "count is zero" stay distinct).
#[derive(Debug, Serialize, PartialEq)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl ApiResponse {
    pub fn format(
        success: bool,
        data: Option<Value>,
        message: impl Into<String>,
        count: Option<usize>,
    ) -> Self {
        Self {
            success,
            message: message.into(),
            data,
            count,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::format(false, None, message, None)
    }
}
