//! Request and response bodies for the HTTP API.
//!
//! Error bodies follow the FastAPI `detail` shape so clients written
//! against the earlier service keep working.

use hexrgb_common::{RgbColor, ValidationError};
use serde::{Deserialize, Serialize};

/// Body of `POST /convert`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub hex_code: String,
}

/// Successful conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertResponse {
    /// The code as the client sent it.
    pub hex_code: String,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// CSS form, e.g. `rgb(0, 255, 0)`.
    pub rgb: String,
}

impl ConvertResponse {
    pub fn new(hex_code: String, color: RgbColor) -> Self {
        Self {
            hex_code,
            red: color.red,
            green: color.green,
            blue: color.blue,
            rgb: color.to_css_string(),
        }
    }
}

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Path to the offending value, e.g. `["body", "hex_code"]`.
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ErrorDetail {
    fn new(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.into(),
        }
    }

    pub fn invalid_hex(err: ValidationError) -> Self {
        Self::new(&["body", "hex_code"], err.to_string(), "value_error")
    }

    pub fn json_invalid() -> Self {
        Self::new(&["body"], "JSON decode error", "json_invalid")
    }

    pub fn missing_hex_code() -> Self {
        Self::new(&["body", "hex_code"], "Field required", "missing")
    }

    pub fn hex_code_not_string() -> Self {
        Self::new(
            &["body", "hex_code"],
            "Input should be a valid string",
            "string_type",
        )
    }
}

/// 422 body: every problem found with the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub detail: Vec<ErrorDetail>,
}

impl From<ErrorDetail> for ValidationErrorResponse {
    fn from(detail: ErrorDetail) -> Self {
        Self {
            detail: vec![detail],
        }
    }
}

/// Non-field errors such as 404 and 405.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub detail: String,
}

impl MessageResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Parse a `/convert` body, reporting problems the way the field
/// validator would.
pub fn parse_convert_request(body: &[u8]) -> Result<ConvertRequest, ErrorDetail> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|_| ErrorDetail::json_invalid())?;

    match value.get("hex_code") {
        Some(serde_json::Value::String(hex_code)) => Ok(ConvertRequest {
            hex_code: hex_code.clone(),
        }),
        Some(_) => Err(ErrorDetail::hex_code_not_string()),
        None => Err(ErrorDetail::missing_hex_code()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_code() {
        let req = parse_convert_request(br##"{"hex_code": "#00FF00"}"##).unwrap();
        assert_eq!(req.hex_code, "#00FF00");
    }

    #[test]
    fn ignores_extra_fields() {
        let req = parse_convert_request(br#"{"hex_code": "abcdef", "alpha": 1}"#).unwrap();
        assert_eq!(req.hex_code, "abcdef");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_convert_request(b"{hex_code:").unwrap_err();
        assert_eq!(err.kind, "json_invalid");
        assert_eq!(err.loc, vec!["body"]);
    }

    #[test]
    fn rejects_missing_field() {
        let err = parse_convert_request(b"{}").unwrap_err();
        assert_eq!(err.kind, "missing");
        assert_eq!(err.loc, vec!["body", "hex_code"]);

        let err = parse_convert_request(b"[1, 2]").unwrap_err();
        assert_eq!(err.kind, "missing");
    }

    #[test]
    fn rejects_non_string_field() {
        let err = parse_convert_request(br#"{"hex_code": 255}"#).unwrap_err();
        assert_eq!(err.kind, "string_type");
    }

    #[test]
    fn convert_response_shape() {
        let resp = ConvertResponse::new("#FF5733".into(), RgbColor::new(255, 87, 51));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["red"], 255);
        assert_eq!(json["green"], 87);
        assert_eq!(json["blue"], 51);
        assert_eq!(json["rgb"], "rgb(255, 87, 51)");
        assert_eq!(json["hex_code"], "#FF5733");
    }

    #[test]
    fn validation_error_body_shape() {
        let body: ValidationErrorResponse =
            ErrorDetail::invalid_hex(ValidationError::InvalidLength { found: 3 }).into();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["detail"][0]["loc"][1], "hex_code");
        assert_eq!(json["detail"][0]["msg"], "invalid length");
        assert_eq!(json["detail"][0]["type"], "value_error");
    }
}
