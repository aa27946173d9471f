//! Graph API HTTP error classification.
//!
//! The Graph API reports failures as
//! `{"error": {"message", "type", "code", "error_subcode", "fbtrace_id"}}`.
//! The message is preserved as-is; the status and `error.code` decide the variant.

use super::types::MessengerError;

/// Graph error codes for invalid/expired tokens and session problems.
const AUTH_CODES: &[i64] = &[102, 190];

/// Graph error codes for application, user and page level throttling.
const THROTTLE_CODES: &[i64] = &[4, 17, 32, 613];

fn extract_error(json: &serde_json::Value) -> (Option<String>, Option<i64>) {
    let error = json.get("error");

    let message = error
        .and_then(|e| e.get("message"))
        .and_then(|v| v.as_str())
        .or_else(|| error.and_then(|e| e.as_str()))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let code = error.and_then(|e| e.get("code")).and_then(|v| v.as_i64());

    (message, code)
}

/// Map a non-2xx Graph API response to a [`MessengerError`].
pub fn classify_graph_http_error(status: u16, body_text: &str) -> MessengerError {
    let json = serde_json::from_str::<serde_json::Value>(body_text).ok();
    let (message, code) = json.as_ref().map(extract_error).unwrap_or((None, None));

    let message = message.unwrap_or_else(|| {
        let trimmed = body_text.trim();
        if trimmed.is_empty() {
            format!("HTTP {status}")
        } else {
            trimmed.to_string()
        }
    });

    let code_in = |set: &[i64]| code.is_some_and(|c| set.contains(&c));

    if status == 401 || status == 403 || code_in(AUTH_CODES) {
        return MessengerError::AuthenticationError(message);
    }
    if status == 429 || code_in(THROTTLE_CODES) {
        return MessengerError::RateLimitError(message);
    }
    if status == 404 {
        return MessengerError::NotFound(message);
    }

    MessengerError::ApiError {
        status,
        code,
        message,
        details: json,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_token_is_authentication_error() {
        let body = r#"{"error":{"message":"Error validating access token","type":"OAuthException","code":190,"fbtrace_id":"A1"}}"#;
        let err = classify_graph_http_error(400, body);
        assert_eq!(
            err,
            MessengerError::AuthenticationError("Error validating access token".into())
        );
    }

    #[test]
    fn throttling_codes_are_rate_limits() {
        let body = r#"{"error":{"message":"Application request limit reached","code":4}}"#;
        assert!(matches!(
            classify_graph_http_error(400, body),
            MessengerError::RateLimitError(_)
        ));
        assert!(matches!(
            classify_graph_http_error(429, ""),
            MessengerError::RateLimitError(_)
        ));
    }

    #[test]
    fn unclassified_errors_keep_code_and_details() {
        let body = r#"{"error":{"message":"(#100) Invalid parameter","type":"OAuthException","code":100,"error_subcode":2018001}}"#;
        match classify_graph_http_error(400, body) {
            MessengerError::ApiError {
                status,
                code,
                message,
                details,
            } => {
                assert_eq!(status, 400);
                assert_eq!(code, Some(100));
                assert_eq!(message, "(#100) Invalid parameter");
                let details = details.expect("details");
                assert_eq!(details["error"]["error_subcode"], 2018001);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn non_json_body_is_used_as_message() {
        match classify_graph_http_error(502, "Bad Gateway") {
            MessengerError::ApiError {
                message, details, ..
            } => {
                assert_eq!(message, "Bad Gateway");
                assert!(details.is_none());
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert_eq!(
            classify_graph_http_error(404, "").to_string(),
            "Not found: HTTP 404"
        );
    }
}
