//! Redirect page state machine
//!
//! The redirect page moves through a login exchange followed by an
//! authorization check. [`RedirectState::transition`] is the only way to move
//! between states and [`RedirectState::screen`] is the only input the view
//! layer renders from.

use serde_json::Value as JsonValue;
use tracing::warn;

/// HTTP status treated as success by both backend endpoints
pub const STATUS_OK: u16 = 200;

/// HTTP status the authorization check returns for a valid but denied session
pub const STATUS_FORBIDDEN: u16 = 403;

/// Status recorded when the login request never produced a response
pub const STATUS_TRANSPORT_FAILURE: u16 = 500;

/// Why the login exchange failed
#[derive(Clone, Debug, PartialEq)]
pub struct LoginFailure {
    pub status: u16,
    pub content: Option<JsonValue>,
}

/// Where the redirect page is in the login handshake
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RedirectState {
    /// Nothing sent yet
    #[default]
    Idle,
    /// Login request in flight
    LoggingIn,
    /// Backend accepted the login; waiting on the authorization check.
    /// `profile` is the login response body.
    LoggedInAwaitingAuth { profile: Option<JsonValue> },
    /// Session may view the app; the popup should close
    Authorized,
    /// Session is valid but may not view the app
    Denied,
    /// Login exchange failed
    Failed(LoginFailure),
}

/// Things that happen during the handshake
#[derive(Clone, Debug, PartialEq)]
pub enum RedirectEvent {
    LoginStarted,
    LoginResponded {
        status: u16,
        content: Option<JsonValue>,
    },
    LoginTransportFailed(String),
    AuthorizationChecked {
        status: u16,
    },
}

/// What the redirect page shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Loading,
    NotAuthorized,
    CloseWindow,
    Error { detail: Option<String> },
}

impl RedirectState {
    /// Next state after `event`.
    ///
    /// Events that do not apply to the current state leave it unchanged, so
    /// the machine only ever moves forward.
    pub fn transition(&self, event: RedirectEvent) -> Self {
        match (self, event) {
            (Self::Idle, RedirectEvent::LoginStarted) => Self::LoggingIn,

            (Self::LoggingIn, RedirectEvent::LoginResponded { status, content }) => {
                if status == STATUS_OK {
                    Self::LoggedInAwaitingAuth { profile: content }
                } else {
                    Self::Failed(LoginFailure { status, content })
                }
            }

            (Self::LoggingIn, RedirectEvent::LoginTransportFailed(message)) => {
                Self::Failed(LoginFailure {
                    status: STATUS_TRANSPORT_FAILURE,
                    content: Some(JsonValue::String(message)),
                })
            }

            (Self::LoggedInAwaitingAuth { .. }, RedirectEvent::AuthorizationChecked { status }) => {
                match status {
                    STATUS_OK => Self::Authorized,
                    STATUS_FORBIDDEN => Self::Denied,
                    // Indeterminate answers keep the page loading
                    _ => self.clone(),
                }
            }

            (state, event) => {
                warn!(?state, ?event, "Ignoring event in current redirect state");
                state.clone()
            }
        }
    }

    /// Whether the authorization check should be issued from this state
    pub const fn awaiting_authorization(&self) -> bool {
        matches!(self, Self::LoggedInAwaitingAuth { .. })
    }

    /// What the page renders for this state
    pub fn screen(&self) -> Screen {
        match self {
            Self::Idle | Self::LoggingIn | Self::LoggedInAwaitingAuth { .. } => Screen::Loading,
            Self::Authorized => Screen::CloseWindow,
            Self::Denied => Screen::NotAuthorized,
            Self::Failed(failure) => Screen::Error {
                detail: failure.content.as_ref().map(JsonValue::to_string),
            },
        }
    }
}
