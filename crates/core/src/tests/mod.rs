//! In-memory stand-ins for the browser, timer and backend
//!
//! Used by this crate's tests and by downstream crates through the `tests`
//! feature, so flows can be exercised without a real browser.


pub use backend::ScriptedBackend;
pub use browser::{FakeBrowser, OpenedPopup, PopupId};
pub use timer::ManualTimer;
