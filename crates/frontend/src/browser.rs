//! `web-sys` implementation of the browser capabilities

use dash_auth_core::{AuthError, Browser, PopupGeometry, Result, Viewport, parse_cookie};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlDocument, Window};

/// The page's own `window`
#[derive(Clone)]
pub struct WebBrowser {
    window: Window,
}

impl WebBrowser {
    pub fn new() -> Result<Self> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or_else(|| AuthError::browser("No window object available"))
    }

    /// Read a numeric property of `window`, e.g. `screenLeft`.
    ///
    /// Some of these are non-standard, so they are looked up reflectively and
    /// default to zero when missing.
    fn number_property(&self, name: &str) -> f64 {
        js_sys::Reflect::get(&self.window, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0)
    }
}

fn js_error(err: &JsValue) -> AuthError {
    AuthError::browser(format!("{err:?}"))
}

impl Browser for WebBrowser {
    type Handle = Window;

    fn origin(&self) -> Result<String> {
        self.window.location().origin().map_err(|e| js_error(&e))
    }

    fn location_fragment(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }

    fn location_query(&self) -> String {
        self.window.location().search().unwrap_or_default()
    }

    fn viewport(&self) -> Viewport {
        Viewport {
            inner_width: self.number_property("innerWidth"),
            inner_height: self.number_property("innerHeight"),
            screen_left: self.number_property("screenLeft"),
            screen_top: self.number_property("screenTop"),
        }
    }

    fn open_popup(&self, url: &str, title: &str, geometry: PopupGeometry) -> Result<Window> {
        self.window
            .open_with_url_and_target_and_features(url, title, &geometry.features())
            .map_err(|e| js_error(&e))?
            .ok_or(AuthError::PopupBlocked)
    }

    fn supports_focus(&self) -> bool {
        js_sys::Reflect::has(&self.window, &JsValue::from_str("focus")).unwrap_or(false)
    }

    fn focus(&self, handle: &Window) -> Result<()> {
        handle.focus().map_err(|e| js_error(&e))
    }

    fn is_closed(&self, handle: &Window) -> bool {
        handle.closed().unwrap_or_else(|e| {
            // An unreadable handle will never report open again
            warn!("Could not read popup state: {e:?}");
            true
        })
    }

    fn reload_current_page(&self) -> Result<()> {
        self.window.location().reload().map_err(|e| js_error(&e))
    }

    fn close_current_window(&self) -> Result<()> {
        self.window.close().map_err(|e| js_error(&e))
    }

    fn read_cookie(&self, name: &str) -> Option<String> {
        let document = self.window.document()?.dyn_into::<HtmlDocument>().ok()?;
        let cookies = document.cookie().ok()?;
        parse_cookie(&cookies, name)
    }
}
