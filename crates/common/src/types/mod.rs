use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// JSON envelope shared by every `/api` response:
/// `{success, data?, error?, message?}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None, message: None }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self { success: true, data: Some(data), error: None, message: Some(message.into()) }
    }
}

impl ApiResponse<()> {
    /// Success carrying only a human-readable confirmation.
    pub fn ack(message: impl Into<String>) -> Self {
        Self { success: true, data: None, error: None, message: Some(message.into()) }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(error.into()), message: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_omits_data_and_error() {
        let v = serde_json::to_value(ApiResponse::ack("Service deleted")).unwrap();
        assert_eq!(v, serde_json::json!({"success": true, "message": "Service deleted"}));
    }

    #[test]
    fn fail_carries_error_only() {
        let v = serde_json::to_value(ApiResponse::fail("Not found")).unwrap();
        assert_eq!(v, serde_json::json!({"success": false, "error": "Not found"}));
    }

    #[test]
    fn ok_with_message_keeps_both() {
        let v = serde_json::to_value(ApiResponse::ok_with_message(vec![1, 2], "done")).unwrap();
        assert_eq!(v["data"], serde_json::json!([1, 2]));
        assert_eq!(v["message"], "done");
        assert!(v.get("error").is_none());
    }
}
