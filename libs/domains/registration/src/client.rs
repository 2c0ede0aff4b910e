//! Backend client for the registration endpoint.

use std::time::Duration;

use async_trait::async_trait;
use core_config::api::ApiConfig;
use reqwest::{Client, Url, header::CONTENT_TYPE};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::error::{RegistrationError, RegistrationResult};
use crate::models::{ApiResponse, RegisteredUser, RegistrationRequest};

/// Path of the registration endpoint, relative to the backend origin
pub const REGISTER_PATH: &str = "/api/registrar";

/// Issues registration requests.
///
/// One call is one attempt with exactly one resolution. Implementations must
/// not retry or cache.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationClient: Send + Sync {
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> RegistrationResult<ApiResponse<RegisteredUser>>;
}

/// Error body the backend may attach to a non-2xx response
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// `RegistrationClient` speaking JSON over HTTP
#[derive(Clone, Debug)]
pub struct HttpRegistrationClient {
    client: Client,
    endpoint: Url,
}

impl HttpRegistrationClient {
    /// Create a client for the backend at `base_url`.
    ///
    /// `timeout` bounds the whole request; `None` waits for as long as the
    /// backend takes.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> RegistrationResult<Self> {
        let endpoint = endpoint_url(base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RegistrationError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &ApiConfig) -> RegistrationResult<Self> {
        Self::new(&config.base_url, config.timeout)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn endpoint_url(base_url: &str) -> RegistrationResult<Url> {
    let base = base_url.trim().trim_end_matches('/');
    Url::parse(&format!("{}{}", base, REGISTER_PATH))
        .map_err(|e| RegistrationError::InvalidEndpoint(format!("'{}': {}", base_url, e)))
}

#[async_trait]
impl RegistrationClient for HttpRegistrationClient {
    #[instrument(skip_all, fields(email = %request.email, rol = %request.role))]
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> RegistrationResult<ApiResponse<RegisteredUser>> {
        debug!(endpoint = %self.endpoint, "Sending registration request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .inspect_err(|e| warn!(error = %e, "Registration request failed"))?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            let parsed: ApiResponse<RegisteredUser> = serde_json::from_str(&body).map_err(|e| {
                warn!(%status, error = %e, "Registration response could not be parsed");
                RegistrationError::MalformedResponse(e.to_string())
            })?;

            info!(user_id = parsed.data.id, "Registration accepted");
            Ok(parsed)
        } else {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);

            warn!(%status, message = ?message, "Registration rejected");
            Err(RegistrationError::Rejected { status, message })
        }
    }
}
