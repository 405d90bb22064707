//! Login page flow: open the provider popup and wait for it to close

use crate::authorize::authorization_url;
use crate::browser::Browser;
use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::popup::{POLL_INTERVAL_MS, POPUP_HEIGHT, POPUP_TITLE, POPUP_WIDTH};
use crate::timer::{RepeatingTimer, Tick};
use std::rc::Rc;
use tracing::{debug, error, info};

/// Starts the OAuth flow from the login page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginFlow {
    config: RuntimeConfig,
}

impl LoginFlow {
    pub const fn new(config: RuntimeConfig) -> Self {
        Self { config }
    }

    /// Open the authorization popup and return a watcher for it
    pub fn begin<B: Browser>(&self, browser: &B) -> Result<PopupWatcher<B::Handle>> {
        let origin = browser.origin()?;
        let url = authorization_url(&self.config, &origin)?;
        debug!(url = %url, "Opening authorization popup");

        let handle =
            browser.open_centered_popup(url.as_str(), POPUP_TITLE, POPUP_WIDTH, POPUP_HEIGHT)?;

        if browser.supports_focus() {
            if let Err(e) = browser.focus(&handle) {
                debug!("Could not focus authorization popup: {e}");
            }
        }

        Ok(PopupWatcher::new(handle))
    }
}

/// Observed state of the popup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchStatus {
    Open,
    Closed,
}

/// Watches an authorization popup and reloads the opener once it closes
pub struct PopupWatcher<H> {
    handle: H,
    closed: bool,
}

impl<H> PopupWatcher<H> {
    pub const fn new(handle: H) -> Self {
        Self {
            handle,
            closed: false,
        }
    }

    pub const fn handle(&self) -> &H {
        &self.handle
    }

    /// Check the popup once.
    ///
    /// The first poll that sees the popup closed reloads the current page;
    /// later polls report `Closed` without reloading again.
    pub fn poll<B>(&mut self, browser: &B) -> WatchStatus
    where
        B: Browser<Handle = H>,
    {
        if self.closed {
            return WatchStatus::Closed;
        }
        if !browser.is_closed(&self.handle) {
            return WatchStatus::Open;
        }

        self.closed = true;
        info!("Authorization popup closed, reloading page");
        if let Err(e) = browser.reload_current_page() {
            error!("Failed to reload page: {e}");
        }
        WatchStatus::Closed
    }

    /// Poll every [`POLL_INTERVAL_MS`] on `timer` until the popup closes
    pub fn watch<B, T>(mut self, browser: Rc<B>, timer: &mut T)
    where
        B: Browser<Handle = H> + 'static,
        H: 'static,
        T: RepeatingTimer + ?Sized,
    {
        timer.start(
            POLL_INTERVAL_MS,
            Box::new(move || match self.poll(&*browser) {
                WatchStatus::Open => Tick::Continue,
                WatchStatus::Closed => Tick::Stop,
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResponseType;
    use crate::popup::{PopupGeometry, Viewport};
    use crate::tests::{FakeBrowser, ManualTimer};
    use std::collections::HashMap;
    use url::Url;

    fn flow() -> LoginFlow {
        LoginFlow::new(RuntimeConfig {
            oauth_client_id: "client".to_string(),
            oauth_response_type: ResponseType::Code,
            oauth_state: "state-1".to_string(),
            solvebio_url: "https://my.solvebio.com".to_string(),
            requests_pathname_prefix: "/app/".to_string(),
        })
    }

    #[test]
    fn test_begin_opens_centered_popup() {
        let browser = FakeBrowser::new("https://dash.example.com");

        let watcher = flow().begin(&browser).unwrap();

        let opened = browser.opened_popups();
        assert_eq!(opened.len(), 1);
        let popup = &opened[0];
        assert_eq!(popup.title, "Authorization");
        assert_eq!(
            popup.geometry,
            PopupGeometry {
                width: 1000,
                height: 1000,
                left: 460,
                top: 40,
            }
        );
        assert_eq!(*watcher.handle(), popup.handle);

        let url = Url::parse(&popup.url).unwrap();
        let pairs: HashMap<_, _> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs["client_id"], "client");
        assert_eq!(pairs["response_type"], "code");
        assert_eq!(pairs["state"], "state-1");
        assert_eq!(
            pairs["redirect_uri"],
            "https://dash.example.com/app/_oauth-redirect"
        );
    }

    #[test]
    fn test_begin_centers_over_offset_window() {
        // Opener maximized on a second monitor to the right of the primary
        let browser = FakeBrowser::new("http://localhost:8050").with_viewport(Viewport {
            inner_width: 2560.0,
            inner_height: 1440.0,
            screen_left: 1920.0,
            screen_top: 100.0,
        });

        flow().begin(&browser).unwrap();

        let opened = browser.opened_popups();
        assert_eq!(
            opened[0].geometry,
            PopupGeometry {
                width: 1000,
                height: 1000,
                left: 2700,
                top: 320,
            }
        );
    }

    #[test]
    fn test_begin_focuses_when_supported() {
        let browser = FakeBrowser::new("http://localhost:8050");
        flow().begin(&browser).unwrap();
        assert_eq!(browser.focus_count(), 1);

        let browser = FakeBrowser::new("http://localhost:8050").without_focus();
        flow().begin(&browser).unwrap();
        assert_eq!(browser.focus_count(), 0);
    }

    #[test]
    fn test_begin_blocked_popup() {
        let browser = FakeBrowser::new("http://localhost:8050").blocking_popups();
        let err = flow().begin(&browser).err().unwrap();
        assert_eq!(err, crate::AuthError::PopupBlocked);
    }

    #[test]
    fn test_poll_reloads_once() {
        let browser = FakeBrowser::new("http://localhost:8050");
        let mut watcher = flow().begin(&browser).unwrap();

        assert_eq!(watcher.poll(&browser), WatchStatus::Open);
        assert_eq!(browser.reload_count(), 0);

        browser.close_popup(*watcher.handle());
        assert_eq!(watcher.poll(&browser), WatchStatus::Closed);
        assert_eq!(watcher.poll(&browser), WatchStatus::Closed);
        assert_eq!(browser.reload_count(), 1);
    }

    #[test]
    fn test_watch_stops_timer_after_close() {
        let browser = Rc::new(FakeBrowser::new("http://localhost:8050"));
        let watcher = flow().begin(&*browser).unwrap();
        let handle = *watcher.handle();
        let mut timer = ManualTimer::default();

        watcher.watch(Rc::clone(&browser), &mut timer);
        assert!(timer.is_running());
        assert_eq!(timer.period_ms(), Some(100));

        timer.fire();
        timer.fire();
        assert!(timer.is_running());
        assert_eq!(browser.reload_count(), 0);

        browser.close_popup(handle);
        timer.fire();
        assert!(!timer.is_running());
        assert_eq!(browser.reload_count(), 1);

        // Nothing left to fire
        timer.fire();
        assert_eq!(browser.reload_count(), 1);
    }

    #[test]
    fn test_stopping_timer_abandons_watch() {
        let browser = Rc::new(FakeBrowser::new("http://localhost:8050"));
        let watcher = flow().begin(&*browser).unwrap();
        let handle = *watcher.handle();
        let mut timer = ManualTimer::default();

        watcher.watch(Rc::clone(&browser), &mut timer);
        timer.stop();

        browser.close_popup(handle);
        timer.fire();
        assert_eq!(browser.reload_count(), 0);
    }
}
