use crate::client::HelloSubmitter;
use crate::schema::{HelloInput, HelloResponse, validate_hello_input};
use serde_json::json;

/// In-memory state of the hello form, scoped to one rendered view.
///
/// Holds the current text, the validation error to display (empty when the
/// text is valid), the in-flight flag, and the last response. Submission
/// goes through [`HelloSubmitter`] so tests can script the network.
#[derive(Debug, Default)]
pub struct HelloForm {
    input: String,
    error: String,
    is_submitting: bool,
    response: Option<HelloResponse>,
}

impl HelloForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn response(&self) -> Option<&HelloResponse> {
        self.response.as_ref()
    }

    /// Whether the submit control is enabled: non-empty input, no error.
    pub fn is_valid(&self) -> bool {
        !self.input.is_empty() && self.error.is_empty()
    }

    /// Updates the text and re-runs the shared rule for immediate feedback.
    /// A result from a previous submission is stale once the text changes.
    /// Ignored while a submission is in flight, the input is disabled then.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if self.is_submitting {
            return;
        }

        self.input = text.into();
        self.error = Self::validate(&self.input);

        if self.response.is_some() {
            self.response = None;
        }
    }

    /// Submits the current text through the given submitter.
    ///
    /// Re-validates first; an invalid form stores the error and performs no
    /// network call. A rejected submission stores the failure's message as
    /// the error text and, when the failure carries a structured response
    /// payload, keeps that as the last response too.
    pub async fn submit(&mut self, submitter: &dyn HelloSubmitter) {
        let error = Self::validate(&self.input);
        if !error.is_empty() {
            self.error = error;
            return;
        }

        self.is_submitting = true;
        self.error.clear();

        let input = HelloInput {
            input: self.input.clone(),
        };

        match submitter.submit_hello(&input).await {
            Ok(response) => {
                self.response = Some(response);
            }
            Err(e) => {
                self.error = e.to_string();
                if let Some(response) = e.response() {
                    if !response.success {
                        self.response = Some(response.clone());
                    }
                }
            }
        }

        self.is_submitting = false;
    }

    fn validate(text: &str) -> String {
        match validate_hello_input(&json!({ "input": text })) {
            Ok(_) => String::new(),
            Err(e) => e.first_message().to_string(),
        }
    }
}
