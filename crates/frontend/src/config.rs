//! Runtime configuration read from the host page

use dash_auth_core::config::CONFIG_ELEMENT_ID;
use dash_auth_core::{AuthError, Result, RuntimeConfig};
use once_cell::unsync::OnceCell;
use std::rc::Rc;
use web_sys::Document;

thread_local! {
    /// Parsed once per page load
    static RUNTIME_CONFIG: OnceCell<Rc<RuntimeConfig>> = const { OnceCell::new() };
}

/// The page's runtime configuration, parsed on first use
pub fn runtime_config() -> Result<Rc<RuntimeConfig>> {
    RUNTIME_CONFIG.with(|cell| {
        cell.get_or_try_init(|| {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or_else(|| AuthError::config("No document available"))?;
            config_from_document(&document).map(Rc::new)
        })
        .cloned()
    })
}

/// Parse the JSON embedded in the `_auth-config` element of `document`
pub fn config_from_document(document: &Document) -> Result<RuntimeConfig> {
    let element = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .ok_or_else(|| AuthError::config(format!("Missing #{CONFIG_ELEMENT_ID} element")))?;
    let text = element.text_content().unwrap_or_default();
    RuntimeConfig::from_json(&text)
}
