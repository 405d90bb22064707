//! Runtime configuration embedded in the host page

use crate::error::{AuthError, Result};
use serde::{Deserialize, Serialize};

/// Path segment the OAuth provider redirects the popup back to
pub const REDIRECT_PATHNAME: &str = "_oauth-redirect";

/// Backend endpoint that exchanges the redirect parameters for a session
pub const LOGIN_PATHNAME: &str = "_dash-login";

/// Backend endpoint that reports whether the session may view the app
pub const IS_AUTHORIZED_PATHNAME: &str = "_is-authorized";

/// Id of the `<script type="application/json">` element holding the config
pub const CONFIG_ELEMENT_ID: &str = "_auth-config";

/// Id of the element the views mount into
pub const MOUNT_ELEMENT_ID: &str = "react-root";

/// Cookie holding the CSRF token set by the backend
pub const CSRF_COOKIE_NAME: &str = "_csrf_token";

/// Header echoing the CSRF token back to the backend
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// Address shown on the login page for account problems
pub const SUPPORT_EMAIL: &str = "support@solvebio.com";

/// OAuth `response_type` requested from the provider
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    /// Implicit flow, the provider returns `access_token`
    Token,
    /// Authorization code flow, the provider returns `code`
    Code,
}

impl ResponseType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::Code => "code",
        }
    }
}

impl std::fmt::Display for ResponseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// OAuth grant type configured on the backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    Implicit,
    AuthorizationCode,
}

impl GrantType {
    /// The `response_type` the provider must be asked for under this grant
    pub const fn response_type(self) -> ResponseType {
        match self {
            Self::Implicit => ResponseType::Token,
            Self::AuthorizationCode => ResponseType::Code,
        }
    }
}

/// Configuration the backend embeds in every auth page.
///
/// Parsed once per page load and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub oauth_client_id: String,
    pub oauth_response_type: ResponseType,
    pub oauth_state: String,
    pub solvebio_url: String,
    pub requests_pathname_prefix: String,
}

impl RuntimeConfig {
    /// Parse and validate the embedded JSON blob
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json.trim())
            .map_err(|e| AuthError::config(format!("Failed to parse auth config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Render the config as the JSON the host page embeds
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn validate(&self) -> Result<()> {
        if self.oauth_client_id.trim().is_empty() {
            return Err(AuthError::config("oauth_client_id must not be empty"));
        }
        if self.solvebio_url.trim().is_empty() {
            return Err(AuthError::config("solvebio_url must not be empty"));
        }
        Ok(())
    }

    /// `POST` endpoint exchanging the redirect parameters for a session cookie
    pub fn login_endpoint(&self) -> String {
        format!("{}{LOGIN_PATHNAME}", self.requests_pathname_prefix)
    }

    /// `GET` endpoint reporting whether the current session is authorized
    pub fn authorization_check_endpoint(&self) -> String {
        format!("{}{IS_AUTHORIZED_PATHNAME}", self.requests_pathname_prefix)
    }

    /// Redirect URI registered with the provider.
    ///
    /// Built from the origin and path prefix rather than the current path, so
    /// client-side routes and reverse-proxy prefixes do not leak into it.
    pub fn redirect_uri(&self, origin: &str) -> String {
        format!(
            "{origin}{}{REDIRECT_PATHNAME}",
            self.requests_pathname_prefix
        )
    }
}
