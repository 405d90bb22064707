//! OAuth popup login flow for Dash apps
//!
//! The login page opens the provider's consent page in a centered popup and
//! reloads itself once the popup closes. The popup lands on the redirect
//! page, which trades the provider's token or code for a session cookie,
//! checks that the session may view the app, and closes itself.
//!
//! This crate holds everything that does not need a browser. The frontend
//! crate supplies [`Browser`], [`RepeatingTimer`] and [`AuthBackend`]
//! implementations over `web-sys`, `gloo` and `gloo-net`.

pub mod authorize;
pub mod backend;
pub mod browser;
pub mod config;
pub mod error;
pub mod flow;
pub mod login;
pub mod page;
pub mod popup;
pub mod redirect;
pub mod state;
pub mod timer;

#[cfg(any(test, feature = "tests"))]
pub mod tests;

pub use authorize::authorization_url;
pub use backend::{AuthBackend, BackendResponse, LoginRequest};
pub use browser::{Browser, parse_cookie};
pub use config::{GrantType, ResponseType, RuntimeConfig};
pub use error::{AuthError, Result};
pub use flow::RedirectFlow;
pub use login::{LoginFlow, PopupWatcher, WatchStatus};
pub use page::render_page;
pub use popup::{PopupGeometry, Viewport};
pub use redirect::RedirectParams;
pub use state::{LoginFailure, RedirectEvent, RedirectState, Screen};
pub use timer::{RepeatingTimer, Tick, TickFn};
