/**
 * Auth API Client
 *
 * HTTP client functions for the register and login endpoints, plus the
 * `AuthApi` trait the form calls through so tests can substitute a
 * recording fake.
 *
 * The client code is synchronous (it is driven from a blocking UI
 * loop), so each call spins up a runtime around the async reqwest
 * client.
 */

use serde::Deserialize;
use thiserror::Error;
use tokio::runtime::Runtime;

use crate::client::config::Config;
use crate::client::storage::TokenStore;
use crate::shared::types::{LoginRequest, RegisterRequest, UserResponse};

/// Client-side API errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to create runtime: {0}")]
    Runtime(std::io::Error),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("request failed: {status} - {message}")]
    Status { status: u16, message: String },
    #[error("token storage failed: {0}")]
    Storage(#[from] crate::client::storage::StorageError),
}

/// Response payload from the auth endpoints
///
/// Every field is optional by design: the client never assumes the
/// backend's shape, it checks what actually came back.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuthPayload {
    /// Bearer token, present on successful register/login
    pub token: Option<String>,
    /// User record the token was issued for
    pub user: Option<UserResponse>,
    /// Server-provided message, present on errors
    pub message: Option<String>,
}

/// The seam between the form and the network
///
/// The form invokes these for their side effects (most importantly
/// token persistence on login); it does not base its own accept/reject
/// decision on the result.
pub trait AuthApi {
    fn register(&self, name: &str, email: &str, password: &str)
        -> Result<AuthPayload, ClientError>;
    fn login(&self, email: &str, password: &str) -> Result<AuthPayload, ClientError>;
}

/// reqwest-backed implementation of [`AuthApi`]
pub struct HttpAuthApi {
    config: Config,
    store: TokenStore,
}

impl HttpAuthApi {
    pub fn new(config: Config, store: TokenStore) -> Self {
        Self { config, store }
    }

    fn post_json(&self, url: &str, body: &impl serde::Serialize) -> Result<AuthPayload, ClientError> {
        let client = reqwest::Client::new();
        let rt = Runtime::new().map_err(ClientError::Runtime)?;

        rt.block_on(async {
            let response = client.post(url).json(body).send().await?;

            if !response.status().is_success() {
                let status = response.status().as_u16();
                let payload: AuthPayload = response.json().await.unwrap_or_default();
                return Err(ClientError::Status {
                    status,
                    message: payload
                        .message
                        .unwrap_or_else(|| "no message".to_string()),
                });
            }

            let payload: AuthPayload = response.json().await?;
            Ok(payload)
        })
    }
}

impl AuthApi for HttpAuthApi {
    fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthPayload, ClientError> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json(&self.config.api_url("/register"), &request)
    }

    /// Login, persisting the returned token under the fixed storage key
    /// when one is present
    fn login(&self, email: &str, password: &str) -> Result<AuthPayload, ClientError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let payload = self.post_json(&self.config.api_url("/login"), &request)?;

        if let Some(token) = &payload.token {
            self.store.save_token(token)?;
        }

        Ok(payload)
    }
}
