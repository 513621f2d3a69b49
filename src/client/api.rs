use crate::config::ClientConfig;
use crate::schema::{HelloInput, HelloResponse};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Transport and protocol failures surfaced to the user.
///
/// Each variant renders a distinct user-facing message; an HTTP-status
/// failure prefers the backend-supplied message and keeps the decoded body
/// when it matches the shared response shape.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request timeout - please try again")]
    Timeout,

    #[error("Network error - please check your connection and try again")]
    Network(#[source] reqwest::Error),

    #[error("Invalid response format: expected JSON, got {content_type}")]
    InvalidFormat { content_type: String, status: u16 },

    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        response: Option<HelloResponse>,
    },

    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    /// Structured payload carried by an HTTP-status failure, when the
    /// backend returned one.
    pub fn response(&self) -> Option<&HelloResponse> {
        match self {
            Self::Http { response, .. } => response.as_ref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Seam between the form and the network so tests can inject a double.
#[async_trait]
pub trait HelloSubmitter: Send + Sync {
    async fn submit_hello(&self, input: &HelloInput) -> Result<HelloResponse, ApiError>;
}

pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// The configured timeout bounds every call; a request that exceeds it
    /// is cancelled and reported as a timeout. There is no retry policy.
    pub fn new(config: ClientConfig) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            base_url: config.base_url,
            client,
        })
    }

    pub async fn send_hello(&self, input: &HelloInput) -> Result<HelloResponse, ApiError> {
        let url = format!("{}/hello", self.base_url);

        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(input)
            .send()
            .await
            .map_err(map_transport_error)?;

        decode_response(response).await
    }

    pub async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        let url = format!("{}/health", self.base_url);

        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_transport_error)?;

        decode_response(response).await
    }
}

#[async_trait]
impl HelloSubmitter for ApiClient {
    async fn submit_hello(&self, input: &HelloInput) -> Result<HelloResponse, ApiError> {
        self.send_hello(input).await
    }
}

fn map_transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else if e.is_connect() {
        ApiError::Network(e)
    } else {
        ApiError::Unexpected(e.to_string())
    }
}

async fn decode_response<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, ApiError> {
    let status = response.status();

    // Check the content type before the status: a proxy error page should
    // surface as a format failure, not be parsed as a backend message.
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !content_type.contains("application/json") {
        return Err(ApiError::InvalidFormat {
            content_type,
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(map_transport_error)?;

    if !status.is_success() {
        let payload: Option<HelloResponse> = serde_json::from_slice(&body).ok();
        let message = payload
            .as_ref()
            .map(|r| r.message.clone())
            .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));

        return Err(ApiError::Http {
            status: status.as_u16(),
            message,
            response: payload,
        });
    }

    serde_json::from_slice(&body).map_err(|e| ApiError::Unexpected(e.to_string()))
}
