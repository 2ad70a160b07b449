//! Interpretation of generation service response bodies
//!
//! The service may answer a success with `{ "readmeContent": "..." }` or with a
//! bare value, and a failure with `{ "message": "..." }`, some other JSON, plain
//! text, or nothing at all. These helpers turn each shape into the text the
//! form displays.

use serde_json::Value;

/// Body of a non-success response, decoded as far as it allows
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// Empty body
    Absent,
    /// Body that is not valid JSON
    Text(String),
    /// JSON body of any shape
    Json(Value),
}

impl ErrorBody {
    /// Decode a raw response body
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return ErrorBody::Absent;
        }
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => ErrorBody::Json(value),
            Err(_) => ErrorBody::Text(String::from_utf8_lossy(bytes).into_owned()),
        }
    }

    /// Message to show for this payload, if it carries one
    ///
    /// A non-empty `message` field wins; otherwise the payload itself is shown
    /// (strings verbatim, other JSON serialized). Empty, null, `false` and zero
    /// payloads yield `None` so the caller can fall back to a generic message.
    pub fn describe(&self) -> Option<String> {
        match self {
            ErrorBody::Absent => None,
            ErrorBody::Text(text) => (!text.is_empty()).then(|| text.clone()),
            ErrorBody::Json(value) => {
                if let Some(message) = value.get("message").filter(|m| is_truthy(m)) {
                    return Some(as_text(message));
                }
                is_truthy(value).then(|| as_text(value))
            }
        }
    }
}

/// Extract the README text from a success body
///
/// A truthy `readmeContent` field is preferred; any other body is returned as
/// text (bare JSON strings unquoted, other JSON serialized, non-JSON verbatim).
pub fn extract_readme(bytes: &[u8]) -> String {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => match value.get("readmeContent") {
            Some(content) if is_truthy(content) => as_text(content),
            _ => as_text(&value),
        },
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_wrapped_content() {
        let body = br##"{"readmeContent":"# Hello","projectName":"Hello"}"##;
        assert_eq!(extract_readme(body), "# Hello");
    }

    #[test]
    fn test_extract_bare_string() {
        assert_eq!(extract_readme(br##""# Bare\n\ntext""##), "# Bare\n\ntext");
    }

    #[test]
    fn test_extract_plain_text_body() {
        assert_eq!(extract_readme(b"# Not JSON at all"), "# Not JSON at all");
    }

    #[test]
    fn test_extract_empty_wrapper_falls_back_to_whole_body() {
        let body = br#"{"readmeContent":"","projectName":"x"}"#;
        let text = extract_readme(body);
        let reparsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(reparsed, json!({"readmeContent": "", "projectName": "x"}));
    }

    #[test]
    fn test_error_message_field_wins() {
        let body = ErrorBody::from_bytes(br#"{"message":"Repository not found","status":404}"#);
        assert_eq!(body.describe().as_deref(), Some("Repository not found"));
    }

    #[test]
    fn test_error_without_message_is_stringified() {
        let body = ErrorBody::from_bytes(br#"{"error":"boom"}"#);
        assert_eq!(body.describe().as_deref(), Some(r#"{"error":"boom"}"#));

        let body = ErrorBody::from_bytes(br#"{"message":""}"#);
        assert_eq!(body.describe().as_deref(), Some(r#"{"message":""}"#));
    }

    #[test]
    fn test_error_string_payloads_are_verbatim() {
        let body = ErrorBody::from_bytes(b"Internal Server Error");
        assert_eq!(body, ErrorBody::Text("Internal Server Error".to_string()));
        assert_eq!(body.describe().as_deref(), Some("Internal Server Error"));

        let body = ErrorBody::from_bytes(br#""quota exceeded""#);
        assert_eq!(body.describe().as_deref(), Some("quota exceeded"));
    }

    #[test]
    fn test_error_empty_payloads_have_no_description() {
        assert_eq!(ErrorBody::from_bytes(b""), ErrorBody::Absent);
        assert_eq!(ErrorBody::Absent.describe(), None);
        assert_eq!(ErrorBody::Json(Value::Null).describe(), None);
        assert_eq!(ErrorBody::Json(json!("")).describe(), None);
        assert_eq!(ErrorBody::Json(json!(0)).describe(), None);
        assert_eq!(ErrorBody::Json(json!(false)).describe(), None);
    }

    #[test]
    fn test_error_non_string_message_is_serialized() {
        let body = ErrorBody::Json(json!({"message": {"code": 7}}));
        assert_eq!(body.describe().as_deref(), Some(r#"{"code":7}"#));
    }
}
