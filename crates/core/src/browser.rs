//! Browser capabilities the flows depend on
//!
//! The login and redirect flows never touch `window` or `document` directly.
//! Everything they need goes through [`Browser`], implemented over `web-sys`
//! in the frontend crate and by an in-memory fake in tests.

use crate::error::Result;
use crate::popup::{PopupGeometry, Viewport};
use percent_encoding::percent_decode_str;

/// Window, location and cookie access for the current page
pub trait Browser {
    /// Handle to a window opened by [`Browser::open_popup`]
    type Handle;

    /// `window.location.origin`
    fn origin(&self) -> Result<String>;

    /// `window.location.hash`, including the leading `#` when present
    fn location_fragment(&self) -> String;

    /// `window.location.search`, including the leading `?` when present
    fn location_query(&self) -> String;

    /// Inner size and screen offset of the current window
    fn viewport(&self) -> Viewport;

    /// Open `url` in a new window placed at `geometry`
    fn open_popup(&self, url: &str, title: &str, geometry: PopupGeometry) -> Result<Self::Handle>;

    /// Whether windows opened by script can be focused
    fn supports_focus(&self) -> bool;

    /// Bring a popup to the front
    fn focus(&self, handle: &Self::Handle) -> Result<()>;

    /// Whether the popup has been closed, by the user or by itself
    fn is_closed(&self, handle: &Self::Handle) -> bool;

    /// Reload the current page so the server re-evaluates the session
    fn reload_current_page(&self) -> Result<()>;

    /// Close the window this page is running in
    fn close_current_window(&self) -> Result<()>;

    /// Read a cookie from the document cookie jar
    fn read_cookie(&self, name: &str) -> Option<String>;

    /// Open `url` in a `width` x `height` window centered over this one
    fn open_centered_popup(
        &self,
        url: &str,
        title: &str,
        width: u32,
        height: u32,
    ) -> Result<Self::Handle> {
        let geometry = PopupGeometry::centered(self.viewport(), width, height);
        self.open_popup(url, title, geometry)
    }
}

/// Find `name` in a `document.cookie` string.
///
/// Pairs are separated by `;` and the first `=` splits name from value. A
/// value wrapped in double quotes is unquoted, then percent-decoded. A value
/// that does not decode to UTF-8 is returned as written. `+` stays `+`.
pub fn parse_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| {
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            percent_decode_str(value)
                .decode_utf8()
                .map_or_else(|_| value.to_string(), |decoded| decoded.into_owned())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cookie() {
        let jar = "theme=dark; _csrf_token=abc.def-123; session=xyz";
        assert_eq!(
            parse_cookie(jar, "_csrf_token").as_deref(),
            Some("abc.def-123")
        );
        assert_eq!(parse_cookie(jar, "theme").as_deref(), Some("dark"));
        assert_eq!(parse_cookie(jar, "missing"), None);
    }

    #[test]
    fn test_parse_cookie_keeps_equals_in_value() {
        let jar = "_csrf_token=IjA5ZTk==.Zw";
        assert_eq!(
            parse_cookie(jar, "_csrf_token").as_deref(),
            Some("IjA5ZTk==.Zw")
        );
    }

    #[test]
    fn test_parse_cookie_unquotes() {
        assert_eq!(
            parse_cookie("a=\"quoted value\"", "a").as_deref(),
            Some("quoted value")
        );
    }

    #[test]
    fn test_parse_cookie_percent_decodes() {
        assert_eq!(
            parse_cookie("_csrf_token=abc%3D%3D", "_csrf_token").as_deref(),
            Some("abc==")
        );
        assert_eq!(
            parse_cookie("_csrf_token=\"a%20b\"", "_csrf_token").as_deref(),
            Some("a b")
        );
    }

    #[test]
    fn test_parse_cookie_keeps_plus_and_bad_escapes() {
        assert_eq!(parse_cookie("t=a+b", "t").as_deref(), Some("a+b"));
        // Decodes to invalid UTF-8, so the raw value is kept
        assert_eq!(parse_cookie("t=%FF%FE", "t").as_deref(), Some("%FF%FE"));
        // Malformed escapes pass through untouched
        assert_eq!(parse_cookie("t=100%", "t").as_deref(), Some("100%"));
    }

    #[test]
    fn test_parse_cookie_empty_jar() {
        assert_eq!(parse_cookie("", "_csrf_token"), None);
    }

    #[test]
    fn test_prefix_names_do_not_match() {
        assert_eq!(parse_cookie("x_csrf_token=1", "_csrf_token"), None);
    }
}
