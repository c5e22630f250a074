//! Common helpers for NITRO responses.

use reqwest::{Response, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::interface::ResponseUnwrapper;

/// Unwraps the `{type_name: [...]}` envelope NITRO puts around GET results.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeUnwrapper;

impl ResponseUnwrapper for EnvelopeUnwrapper {
    fn parse_return(&self, raw: Value, type_name: &str) -> Value {
        match raw {
            Value::Object(mut map) => {
                if let Some(records) = map.remove(type_name) {
                    return records;
                }
                // An error reply carries a non-zero errorcode and no records.
                let failed = map
                    .get("errorcode")
                    .and_then(Value::as_i64)
                    .map(|code| code != 0)
                    .unwrap_or(false);
                if failed {
                    Value::Object(map)
                } else {
                    // NITRO omits the key when nothing matched.
                    Value::Array(Vec::new())
                }
            }
            other => other,
        }
    }
}

/// Turns the reply to a mutating call into the transport contract:
/// `true` on success, the error body otherwise.
pub async fn execution_reply(resp: Response) -> Value {
    let status = resp.status();
    if status.is_success() {
        return Value::Bool(true);
    }
    let body = body_text(resp.text().await);
    debug!("NITRO request failed with status {}: {}", status, body);
    error_value(status, body)
}

/// Parses the body of a GET; non-2xx replies become error values.
pub async fn query_reply(resp: Response) -> Value {
    let status = resp.status();
    let body = body_text(resp.text().await);
    if !status.is_success() {
        debug!("NITRO query failed with status {}: {}", status, body);
        return error_value(status, body);
    }
    if body.trim().is_empty() {
        return Value::Object(Default::default());
    }
    serde_json::from_str(&body).unwrap_or(Value::String(body))
}

// A body that cannot be read still has to surface as a failure value.
fn body_text<E: std::fmt::Display>(read: Result<String, E>) -> String {
    read.unwrap_or_else(|e| format!("Failed to read response body: {}", e))
}

// Prefer the structured NITRO error document; fall back to the status line.
fn error_value(status: StatusCode, body: String) -> Value {
    match serde_json::from_str::<Value>(&body) {
        Ok(value @ Value::Object(_)) => value,
        _ if body.is_empty() => Value::String(format!("HTTP status {}", status)),
        _ => Value::String(format!("HTTP status {}: {}", status, body)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_return_unwraps_envelope() {
        let raw = json!({
            "errorcode": 0,
            "message": "Done",
            "severity": "NONE",
            "sslpolicy": [{"name": "pol1", "rule": "true", "action": "NOOP"}]
        });
        assert_eq!(
            EnvelopeUnwrapper.parse_return(raw, "sslpolicy"),
            json!([{"name": "pol1", "rule": "true", "action": "NOOP"}])
        );
    }

    #[test]
    fn test_parse_return_empty_match() {
        let raw = json!({"errorcode": 0, "message": "Done"});
        assert_eq!(EnvelopeUnwrapper.parse_return(raw, "sslpolicy"), json!([]));
    }

    #[test]
    fn test_parse_return_passes_errors_through() {
        let raw = json!({"errorcode": 258, "message": "No such resource"});
        assert_eq!(
            EnvelopeUnwrapper.parse_return(raw.clone(), "sslpolicy"),
            raw
        );
        assert_eq!(
            EnvelopeUnwrapper.parse_return(json!("timed out"), "sslpolicy"),
            json!("timed out")
        );
    }

    #[test]
    fn test_unreadable_body_is_reported() {
        let body = body_text(Err::<String, _>("connection reset by peer"));
        assert_eq!(body, "Failed to read response body: connection reset by peer");
        assert_eq!(
            error_value(StatusCode::BAD_GATEWAY, body),
            json!("HTTP status 502 Bad Gateway: Failed to read response body: connection reset by peer")
        );
        assert_eq!(body_text(Ok::<_, String>("{}".to_string())), "{}");
    }

    #[test]
    fn test_error_value_prefers_nitro_document() {
        let doc = json!({"errorcode": 273, "message": "Resource already exists"});
        assert_eq!(error_value(StatusCode::CONFLICT, doc.to_string()), doc);
        assert_eq!(
            error_value(StatusCode::SERVICE_UNAVAILABLE, String::new()),
            json!("HTTP status 503 Service Unavailable")
        );
    }
}
