use core::fmt;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope shared by every JSON endpoint. The payload struct is
/// flattened into the envelope, so `ApiResponse<ProductsPayload>` serializes
/// as `{"success": true, "products": [...]}`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ApiResponse {{ success: {}, message: {:?}, data: {:?} }}",
            self.success, self.message, self.data
        )
    }
}

/// Envelope for endpoints whose whole payload is a confirmation message.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
    struct CountPayload {
        count: i64,
    }

    #[test]
    fn payload_is_flattened_into_envelope() {
        let response = ApiResponse::ok(CountPayload { count: 3 });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 3);
        assert!(json.get("message").is_none());
        assert!(json.get("data").is_none());
    }

    #[test]
    fn message_is_emitted_when_present() {
        let response = ApiResponse::with_message("Added", CountPayload { count: 1 });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Added");
        assert_eq!(json["count"], 1);
    }

    #[test]
    fn message_response_shape() {
        let json = serde_json::to_value(MessageResponse::new("Deleted")).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Deleted");
    }
}
