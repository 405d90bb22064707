//! Parameters the provider appends to the redirect URL

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Values handed back by the provider.
///
/// The implicit flow carries `access_token` in the fragment; the
/// authorization code flow carries `code` in the query string. Both carry
/// `state`. Absent values are left out of the serialized login body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl RedirectParams {
    /// Parse from `location.hash` and `location.search`, preferring the fragment
    pub fn from_location(fragment: &str, query: &str) -> Self {
        let source = if fragment.is_empty() { query } else { fragment };
        Self::parse(source)
    }

    /// Parse a fragment or query string; the first occurrence of a key wins
    pub fn parse(input: &str) -> Self {
        let input = input
            .strip_prefix('#')
            .or_else(|| input.strip_prefix('?'))
            .unwrap_or(input);

        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(input.as_bytes()) {
            let slot = match key.as_ref() {
                "access_token" => &mut params.access_token,
                "code" => &mut params.code,
                "state" => &mut params.state,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }

    /// Whether the provider returned anything the backend can exchange
    pub const fn has_credentials(&self) -> bool {
        self.access_token.is_some() || self.code.is_some()
    }
}
