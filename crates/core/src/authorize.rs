//! Authorization URL for the provider's consent page

use crate::config::RuntimeConfig;
use crate::error::{AuthError, Result};
use url::Url;

/// Build the provider URL the login popup is pointed at.
///
/// `origin` is the scheme, host and port of the page hosting the app, as
/// reported by `window.location.origin`.
pub fn authorization_url(config: &RuntimeConfig, origin: &str) -> Result<Url> {
    let base = format!("{}/authorize/", config.solvebio_url.trim_end_matches('/'));
    let mut url = Url::parse(&base).map_err(|e| AuthError::invalid_url(&base, e.to_string()))?;

    url.query_pairs_mut()
        .append_pair("response_type", config.oauth_response_type.as_str())
        .append_pair("state", &config.oauth_state)
        .append_pair("client_id", &config.oauth_client_id)
        .append_pair("redirect_uri", &config.redirect_uri(origin));

    Ok(url)
}
