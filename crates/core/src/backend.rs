//! Backend session endpoints

use crate::error::Result;
use crate::redirect::RedirectParams;
use async_trait::async_trait;
use serde_json::Value as JsonValue;

/// Body and token for `POST {prefix}_dash-login`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginRequest {
    pub params: RedirectParams,
    /// Echoed in the CSRF header when the cookie is present
    pub csrf_token: Option<String>,
}

/// Status and decoded JSON body of a backend response
#[derive(Clone, Debug, PartialEq)]
pub struct BackendResponse {
    pub status: u16,
    pub body: Option<JsonValue>,
}

impl BackendResponse {
    pub const fn new(status: u16, body: Option<JsonValue>) -> Self {
        Self { status, body }
    }
}

/// The two backend calls the redirect page makes.
///
/// Both are same-origin requests. An `Err` means no usable response arrived;
/// HTTP error statuses are returned as `Ok` with that status.
#[async_trait(?Send)]
pub trait AuthBackend {
    /// Exchange the provider's token or code for a session cookie
    async fn login(&self, request: &LoginRequest) -> Result<BackendResponse>;

    /// Ask whether the current session may view the app; returns the status
    async fn check_authorization(&self, csrf_token: Option<&str>) -> Result<u16>;
}
