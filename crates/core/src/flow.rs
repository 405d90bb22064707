//! Redirect page flow: exchange the provider's answer for a session

use crate::backend::{AuthBackend, LoginRequest};
use crate::browser::Browser;
use crate::config::CSRF_COOKIE_NAME;
use crate::redirect::RedirectParams;
use crate::state::{RedirectEvent, RedirectState};
use tracing::{debug, error, info, warn};

/// Drives one login handshake from the redirect page.
///
/// Sends exactly one login request and, only when it succeeds, exactly one
/// authorization check. Nothing is retried and nothing times out beyond what
/// the transport does.
pub struct RedirectFlow<A> {
    backend: A,
}

impl<A: AuthBackend> RedirectFlow<A> {
    pub const fn new(backend: A) -> Self {
        Self { backend }
    }

    pub fn into_backend(self) -> A {
        self.backend
    }

    /// Run the handshake, reporting every state change to `on_state`.
    ///
    /// Closes the current window once the session is authorized. Returns the
    /// state the handshake settled in.
    pub async fn run<B, F>(&self, browser: &B, mut on_state: F) -> RedirectState
    where
        B: Browser,
        F: FnMut(&RedirectState),
    {
        let params =
            RedirectParams::from_location(&browser.location_fragment(), &browser.location_query());
        if !params.has_credentials() {
            warn!("Redirect carries neither access_token nor code");
        }

        let mut state = RedirectState::Idle;
        advance(&mut state, RedirectEvent::LoginStarted, &mut on_state);

        let request = LoginRequest {
            params,
            csrf_token: browser.read_cookie(CSRF_COOKIE_NAME),
        };
        debug!(has_csrf = request.csrf_token.is_some(), "Sending login request");

        let event = match self.backend.login(&request).await {
            Ok(response) => {
                info!(status = response.status, "Login request completed");
                RedirectEvent::LoginResponded {
                    status: response.status,
                    content: response.body,
                }
            }
            Err(e) => {
                error!("Login request failed: {e}");
                RedirectEvent::LoginTransportFailed(e.to_string())
            }
        };
        advance(&mut state, event, &mut on_state);

        if !state.awaiting_authorization() {
            return state;
        }

        let csrf_token = browser.read_cookie(CSRF_COOKIE_NAME);
        match self.backend.check_authorization(csrf_token.as_deref()).await {
            Ok(status) => {
                info!(status, "Authorization check completed");
                advance(
                    &mut state,
                    RedirectEvent::AuthorizationChecked { status },
                    &mut on_state,
                );
            }
            Err(e) => {
                // Same outcome as an indeterminate status: keep loading
                error!("Authorization check failed: {e}");
            }
        }

        if state == RedirectState::Authorized {
            info!("Session authorized, closing window");
            if let Err(e) = browser.close_current_window() {
                error!("Failed to close window: {e}");
            }
        }

        state
    }
}

fn advance<F>(state: &mut RedirectState, event: RedirectEvent, on_state: &mut F)
where
    F: FnMut(&RedirectState),
{
    *state = state.transition(event);
    on_state(state);
}
