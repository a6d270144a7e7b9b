//! Mapping of service exchanges to settled outcomes.

use serde_json::Value;

use crate::{error::PathwayError, models::Plan, service::ServiceResponse};

/// Shown when the service rejects a request without an `error` text.
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";

/// Shown when a failure carries no usable message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Turns one exchange into either a plan or a user-facing message.
///
/// The body is parsed as JSON whatever the status. A rejected request
/// surfaces the body's `error` string verbatim when present.
pub fn interpret(outcome: Result<ServiceResponse, PathwayError>) -> Result<Plan, String> {
    let response = outcome.map_err(|e| transport_message(&e))?;
    let parsed = serde_json::from_str::<Value>(&response.body);

    if !response.is_success() {
        let message = parsed
            .ok()
            .as_ref()
            .and_then(|body| body.get("error"))
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .map_or_else(|| REQUEST_FAILED_MESSAGE.to_string(), str::to_string);
        return Err(message);
    }

    let plan = parsed
        .and_then(serde_json::from_value::<Plan>)
        .map_err(|e| non_empty_or_generic(e.to_string()))?;
    Ok(plan)
}

fn transport_message(error: &PathwayError) -> String {
    let message = match error {
        PathwayError::Transport { source } => source.to_string(),
        other => other.to_string(),
    };
    non_empty_or_generic(message)
}

fn non_empty_or_generic(message: String) -> String {
    if message.trim().is_empty() {
        GENERIC_FAILURE_MESSAGE.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn respond(status: u16, body: &str) -> Result<Plan, String> {
        interpret(Ok(ServiceResponse::new(status, body)))
    }

    #[test]
    fn test_success_parses_plan() {
        let plan = respond(200, r#"{"goal":"Learn Rust","roadmap":[]}"#).expect("plan");
        assert_eq!(plan.goal, "Learn Rust");
    }

    #[test]
    fn test_rejection_surfaces_error_text() {
        assert_eq!(respond(400, r#"{"error":"bad input"}"#), Err("bad input".to_string()));
    }

    #[test]
    fn test_rejection_without_error_field() {
        assert_eq!(
            respond(500, r#"{"message":"boom"}"#),
            Err(REQUEST_FAILED_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_rejection_with_unparseable_body() {
        assert_eq!(
            respond(502, "<html>Bad Gateway</html>"),
            Err(REQUEST_FAILED_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_rejection_with_non_text_or_empty_error() {
        assert_eq!(
            respond(400, r#"{"error":{"code":7}}"#),
            Err(REQUEST_FAILED_MESSAGE.to_string())
        );
        assert_eq!(
            respond(400, r#"{"error":""}"#),
            Err(REQUEST_FAILED_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_success_with_null_fields_parses_plan() {
        let plan = respond(
            200,
            r#"{"goal":null,"roadmap":[{"week":1,"focus":"f","estimatedHours":5,"activities":null}]}"#,
        )
        .expect("plan");
        assert_eq!(plan.goal, "");
        assert!(plan.weeks()[0].activities.is_empty());
    }

    #[test]
    fn test_success_with_malformed_body_fails() {
        let message = respond(200, "not json").unwrap_err();
        assert!(!message.is_empty());
        assert_ne!(message, REQUEST_FAILED_MESSAGE);
    }

    #[test]
    fn test_success_with_wrong_shape_fails() {
        let message = respond(200, r#"{"goal":"g","roadmap":"soon"}"#).unwrap_err();
        assert!(!message.is_empty());
    }

    #[test]
    fn test_transport_failure_keeps_message() {
        let message = interpret(Err(PathwayError::configuration("connection refused"))).unwrap_err();
        assert!(message.contains("connection refused"));
    }
}
