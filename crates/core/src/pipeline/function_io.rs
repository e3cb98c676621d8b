use serde::{Deserialize, Serialize};

use crate::encoding::domain::canvas_encoder::EncodedImage;
use crate::shared::constants::JSON_CONTENT_TYPE;

/// One inbound invocation, independent of the hosting transport.
#[derive(Clone, Debug, Default)]
pub struct FunctionRequest {
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl FunctionRequest {
    pub fn new(content_type: Option<&str>, body: Vec<u8>) -> Self {
        Self {
            content_type: content_type.map(str::to_string),
            body,
        }
    }
}

/// Body of every failure response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub message: String,
}

/// Transport-independent response: status, content type and body bytes.
#[derive(Clone, Debug)]
pub struct FunctionResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl FunctionResponse {
    pub fn image(encoded: EncodedImage) -> Self {
        Self {
            status: 200,
            content_type: encoded.content_type.to_string(),
            body: encoded.bytes,
        }
    }

    pub fn error(status: u16, message: impl Into<String>) -> Self {
        let payload = ErrorPayload {
            message: message.into(),
        };
        let body = serde_json::to_vec(&payload)
            .unwrap_or_else(|_| br#"{"message":"internal error"}"#.to_vec());
        Self {
            status,
            content_type: JSON_CONTENT_TYPE.to_string(),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_is_message_json() {
        let resp = FunctionResponse::error(400, "invalid image: bad \"header\"");
        assert_eq!(resp.status, 400);
        assert_eq!(resp.content_type, "application/json");

        let payload: ErrorPayload = serde_json::from_slice(&resp.body).unwrap();
        assert_eq!(payload.message, "invalid image: bad \"header\"");

        let raw: serde_json::Value = serde_json::from_slice(&resp.body).unwrap();
        assert_eq!(raw.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_image_response_carries_encoder_content_type() {
        let resp = FunctionResponse::image(EncodedImage {
            bytes: vec![1, 2, 3],
            content_type: "image/png",
        });
        assert_eq!(resp.status, 200);
        assert_eq!(resp.content_type, "image/png");
        assert_eq!(resp.body, vec![1, 2, 3]);
    }

    #[test]
    fn test_request_new_copies_content_type() {
        let req = FunctionRequest::new(Some("image/png"), vec![9]);
        assert_eq!(req.content_type.as_deref(), Some("image/png"));
        assert_eq!(req.body, vec![9]);
    }
}
