//! Response Envelope
//!
//! Every HTTP response in the marketplace API is wrapped in the same
//! JSON envelope: `{ "success": bool, "code": int, "data": ... }`,
//! where `success` is true iff the code is in the 2xx range.

use serde::Serialize;

/// Uniform response envelope for the HTTP boundary
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub code: u16,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap a payload with an explicit status code
    pub fn new(code: u16, data: T) -> Self {
        Self {
            success: (200..300).contains(&code),
            code,
            data,
        }
    }

    /// 200 OK envelope
    pub fn ok(data: T) -> Self {
        Self::new(200, data)
    }

    /// 201 Created envelope
    pub fn created(data: T) -> Self {
        Self::new(201, data)
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for Envelope<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_iff_2xx() {
        assert!(Envelope::ok("data").success);
        assert!(Envelope::created("data").success);
        assert!(Envelope::new(299, "data").success);
        assert!(!Envelope::new(404, "data").success);
        assert!(!Envelope::new(500, "data").success);
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_value(Envelope::ok(serde_json::json!({"id": 1}))).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["code"], 200);
        assert_eq!(json["data"]["id"], 1);
    }
}
