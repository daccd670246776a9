//! The invocation result surfaced back to the hosting runtime.

use serde::{Deserialize, Serialize};

/// Flat success/failure envelope returned from every invocation.
///
/// Success carries a human-readable message naming the keys written;
/// failure carries the stringified error chain. Domain failures never
/// surface as runtime errors, so the envelope is always produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResult {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InvocationResult {
    /// Successful invocation.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: Some(body.into()),
            error: None,
        }
    }

    /// Failed invocation carrying the stringified cause.
    pub fn failure(error: impl std::fmt::Display) -> Self {
        Self {
            status_code: 500,
            body: None,
            error: Some(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_serializes_with_status_code_casing() {
        let value = serde_json::to_value(InvocationResult::ok("done")).unwrap();
        assert_eq!(value, json!({ "statusCode": 200, "body": "done" }));
    }

    #[test]
    fn failure_carries_the_error_string() {
        let value = serde_json::to_value(InvocationResult::failure("boom")).unwrap();
        assert_eq!(value, json!({ "statusCode": 500, "error": "boom" }));
    }
}
