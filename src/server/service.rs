use crate::schema::{HelloInput, HelloResponse};
use tracing::info;

/// Maps an already-validated input to the fixed response payload.
pub(crate) fn process_hello(input: &HelloInput) -> HelloResponse {
    info!("Processing hello input: {}", input.input);
    HelloResponse::world()
}
