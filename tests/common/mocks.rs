use async_trait::async_trait;
use hello_stack::client::{ApiError, HelloSubmitter};
use hello_stack::schema::{HelloInput, HelloResponse};
use std::sync::{Arc, Mutex};

/// Mock submitter for form tests: scripted results, recorded requests.
pub struct MockSubmitter {
    pub results: Arc<Mutex<Vec<Result<HelloResponse, ApiError>>>>,
    pub requests: Arc<Mutex<Vec<HelloInput>>>,
}

impl MockSubmitter {
    pub fn new() -> Self {
        Self {
            results: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(self, response: HelloResponse) -> Self {
        self.results.lock().unwrap().push(Ok(response));
        self
    }

    pub fn with_error(self, error: ApiError) -> Self {
        self.results.lock().unwrap().push(Err(error));
        self
    }

    pub fn get_requests(&self) -> Vec<HelloInput> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HelloSubmitter for MockSubmitter {
    async fn submit_hello(&self, input: &HelloInput) -> Result<HelloResponse, ApiError> {
        self.requests.lock().unwrap().push(input.clone());

        let mut results = self.results.lock().unwrap();
        if results.is_empty() {
            return Err(ApiError::Unexpected(
                "No more mock results available".to_string(),
            ));
        }

        results.remove(0)
    }
}

impl Default for MockSubmitter {
    fn default() -> Self {
        Self::new()
    }
}
