//! Browser entry points for the Dash OAuth login pages
//!
//! Two pages share this crate: the login page ([`LoginView`]) and the page
//! the provider redirects the popup to ([`RedirectView`]). Each has its own
//! binary that reads the embedded config and mounts its view.

pub mod browser;
pub mod components;
pub mod config;
pub mod logging;
pub mod services;
pub mod timer;

pub use browser::WebBrowser;
pub use components::{
    LoginView, LoginViewProps, RedirectView, RedirectViewProps, ScreenView, ScreenViewProps,
};
pub use config::runtime_config;
pub use timer::IntervalTimer;

use dash_auth_core::config::MOUNT_ELEMENT_ID;
use yew::BaseComponent;

/// Render `C` into the page's mount element, or `<body>` when there is none
pub fn mount<C>(props: C::Properties)
where
    C: BaseComponent,
{
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ELEMENT_ID).or_else(|| d.body().map(Into::into)));

    match root {
        Some(root) => {
            yew::Renderer::<C>::with_root_and_props(root, props).render();
        }
        None => {
            yew::Renderer::<C>::with_props(props).render();
        }
    }
}

/// Shared startup for both binaries: panic hook, logging, config
pub fn start() -> Option<std::rc::Rc<dash_auth_core::RuntimeConfig>> {
    console_error_panic_hook::set_once();
    logging::init();

    match runtime_config() {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::error!("Cannot start without auth config: {e}");
            None
        }
    }
}
