//! Error types shared by the login and redirect flows

/// Standard result type for dash-auth operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors raised while driving the OAuth popup flow
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The embedded runtime configuration is missing or malformed
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// A URL could not be built from the configuration
    #[error("Invalid URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    /// The browser refused to open the authorization popup
    #[error("The authorization window was blocked by the browser")]
    PopupBlocked,

    /// A browser API call failed
    #[error("Browser error: {message}")]
    Browser { message: String },

    /// The request never produced an HTTP response (network, CORS, decode)
    #[error("Request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    /// Serialization of a request or document failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl AuthError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid URL error
    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a browser error
    pub fn browser(message: impl Into<String>) -> Self {
        Self::Browser {
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
