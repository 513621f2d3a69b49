mod api;

pub use api::{ApiClient, ApiError, HealthStatus, HelloSubmitter};
