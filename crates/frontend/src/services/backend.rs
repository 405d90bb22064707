//! Backend session endpoints over `fetch`

use async_trait::async_trait;
use dash_auth_core::config::CSRF_HEADER_NAME;
use dash_auth_core::{AuthBackend, AuthError, BackendResponse, LoginRequest, Result, RuntimeConfig};
use gloo_net::http::{Request, RequestBuilder};
use serde_json::Value as JsonValue;
use tracing::debug;
use web_sys::RequestCredentials;

/// Talks to the Dash server hosting the app, sending its session cookies
#[derive(Clone, Debug)]
pub struct HttpAuthBackend {
    login_endpoint: String,
    authorization_endpoint: String,
}

impl HttpAuthBackend {
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            login_endpoint: config.login_endpoint(),
            authorization_endpoint: config.authorization_check_endpoint(),
        }
    }
}

/// Headers and credentials shared by both endpoints
fn prepare(builder: RequestBuilder, csrf_token: Option<&str>) -> RequestBuilder {
    let builder = builder
        .header("Accept", "application/json")
        .header("Content-Type", "application/json")
        .credentials(RequestCredentials::SameOrigin);
    match csrf_token {
        Some(token) => builder.header(CSRF_HEADER_NAME, token),
        None => builder,
    }
}

#[async_trait(?Send)]
impl AuthBackend for HttpAuthBackend {
    async fn login(&self, request: &LoginRequest) -> Result<BackendResponse> {
        let endpoint = &self.login_endpoint;
        debug!(%endpoint, "POST login");

        let response = prepare(Request::post(endpoint), request.csrf_token.as_deref())
            .json(&request.params)
            .map_err(|e| AuthError::serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::transport(endpoint, e.to_string()))?;

        let status = response.status();
        // A body that is not JSON fails the exchange like a network error
        let body: JsonValue = response
            .json()
            .await
            .map_err(|e| AuthError::transport(endpoint, format!("Invalid JSON response: {e}")))?;

        Ok(BackendResponse::new(status, Some(body)))
    }

    async fn check_authorization(&self, csrf_token: Option<&str>) -> Result<u16> {
        let endpoint = &self.authorization_endpoint;
        debug!(%endpoint, "GET authorization check");

        let response = prepare(Request::get(endpoint), csrf_token)
            .send()
            .await
            .map_err(|e| AuthError::transport(endpoint, e.to_string()))?;

        Ok(response.status())
    }
}
