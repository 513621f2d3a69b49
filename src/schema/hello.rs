use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request payload for the hello endpoint. Only `{"input": "hello"}` is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelloInput {
    pub input: String,
}

/// Response payload shared by the backend and edge routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
    pub success: bool,
}

impl HelloResponse {
    pub fn world() -> Self {
        Self {
            message: "world".to_string(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

/// One field-level violation: the field path plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Structured validation failure. Carried as a list so multiple simultaneous
/// violations can be reported.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", .issues.first().map(|issue| issue.message.as_str()).unwrap_or("Invalid input"))]
pub struct ValidationError {
    pub issues: Vec<FieldError>,
}

impl ValidationError {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![FieldError {
                field: field.into(),
                message: message.into(),
            }],
        }
    }

    pub fn first_message(&self) -> &str {
        self.issues
            .first()
            .map(|issue| issue.message.as_str())
            .unwrap_or("Invalid input")
    }
}

/// Validates an untyped JSON value against the hello input rule.
///
/// The rule is exact: the `input` field must be a string equal to "hello",
/// case-sensitive, with no trimming. The same function backs the server-side
/// handlers and the client-side form, so the two boundaries cannot drift.
pub fn validate_hello_input(value: &Value) -> Result<HelloInput, ValidationError> {
    let Some(object) = value.as_object() else {
        return Err(ValidationError::single("body", "Expected an object"));
    };

    let input = match object.get("input") {
        None => return Err(ValidationError::single("input", "Required")),
        Some(Value::String(s)) => s,
        Some(_) => return Err(ValidationError::single("input", "Expected a string")),
    };

    if input != "hello" {
        return Err(ValidationError::single(
            "input",
            "Input must be exactly 'hello'",
        ));
    }

    Ok(HelloInput {
        input: input.clone(),
    })
}
