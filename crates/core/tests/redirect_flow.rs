//! End-to-end tests for the redirect page handshake

use dash_auth_core::tests::{FakeBrowser, ScriptedBackend};
use dash_auth_core::{
    AuthError, RedirectFlow, RedirectParams, RedirectState, Screen, state::LoginFailure,
};
use serde_json::json;

fn browser_with_token() -> FakeBrowser {
    let browser = FakeBrowser::new("https://dash.example.com");
    browser.set_fragment("#access_token=T&state=S");
    browser.set_cookies("session=abc; _csrf_token=csrf-1");
    browser
}

async fn run(
    browser: &FakeBrowser,
    backend: ScriptedBackend,
) -> (RedirectState, Vec<RedirectState>, ScriptedBackend) {
    let flow = RedirectFlow::new(backend);
    let mut seen = Vec::new();
    let state = flow.run(browser, |s| seen.push(s.clone())).await;
    (state, seen, flow.into_backend())
}

#[tokio::test]
async fn test_login_body_from_fragment() {
    let browser = browser_with_token();
    let backend = ScriptedBackend::with_statuses(200, Some(json!({"id": 1})), 200);

    let (_, _, backend) = run(&browser, backend).await;

    let requests = backend.login_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].params,
        RedirectParams {
            access_token: Some("T".to_string()),
            code: None,
            state: Some("S".to_string()),
        }
    );
    assert_eq!(requests[0].csrf_token.as_deref(), Some("csrf-1"));
}

#[tokio::test]
async fn test_authorized_closes_window() {
    let browser = browser_with_token();
    let backend = ScriptedBackend::with_statuses(200, Some(json!({"id": 1})), 200);

    let (state, seen, backend) = run(&browser, backend).await;

    assert_eq!(state, RedirectState::Authorized);
    assert_eq!(state.screen(), Screen::CloseWindow);
    assert_eq!(browser.close_count(), 1);
    assert_eq!(backend.login_calls(), 1);
    assert_eq!(backend.authorization_calls(), 1);
    assert_eq!(
        backend.authorization_tokens(),
        vec![Some("csrf-1".to_string())]
    );
    assert_eq!(
        seen,
        vec![
            RedirectState::LoggingIn,
            RedirectState::LoggedInAwaitingAuth {
                profile: Some(json!({"id": 1}))
            },
            RedirectState::Authorized,
        ]
    );
}

#[tokio::test]
async fn test_denied_shows_message_and_keeps_window() {
    let browser = browser_with_token();
    let backend = ScriptedBackend::with_statuses(200, None, 403);

    let (state, _, _) = run(&browser, backend).await;

    assert_eq!(state, RedirectState::Denied);
    assert_eq!(state.screen(), Screen::NotAuthorized);
    assert_eq!(browser.close_count(), 0);
}

#[tokio::test]
async fn test_indeterminate_authorization_keeps_loading() {
    let browser = browser_with_token();
    let backend = ScriptedBackend::with_statuses(200, None, 502);

    let (state, _, _) = run(&browser, backend).await;

    assert!(state.awaiting_authorization());
    assert_eq!(state.screen(), Screen::Loading);
    assert_eq!(browser.close_count(), 0);
}

#[tokio::test]
async fn test_failed_authorization_request_keeps_loading() {
    let browser = browser_with_token();
    let backend = ScriptedBackend::new(
        Ok(dash_auth_core::BackendResponse::new(200, None)),
        Err(AuthError::transport("/_is-authorized", "offline")),
    );

    let (state, _, _) = run(&browser, backend).await;

    assert_eq!(state.screen(), Screen::Loading);
    assert_eq!(browser.close_count(), 0);
}

#[tokio::test]
async fn test_login_rejection_is_500() {
    let browser = browser_with_token();
    let backend = ScriptedBackend::new(
        Err(AuthError::transport("/_dash-login", "Failed to fetch")),
        Ok(200),
    );

    let (state, _, backend) = run(&browser, backend).await;

    match &state {
        RedirectState::Failed(LoginFailure { status, .. }) => assert_eq!(*status, 500),
        other => panic!("unexpected state {other:?}"),
    }
    assert!(matches!(state.screen(), Screen::Error { detail: Some(_) }));
    assert_eq!(backend.authorization_calls(), 0);
    assert_eq!(browser.close_count(), 0);
}

#[tokio::test]
async fn test_login_error_status_skips_authorization_check() {
    let browser = browser_with_token();
    let backend =
        ScriptedBackend::with_statuses(400, Some(json!({"error": "invalid_token"})), 200);

    let (state, seen, backend) = run(&browser, backend).await;

    assert_eq!(
        state.screen(),
        Screen::Error {
            detail: Some(r#"{"error":"invalid_token"}"#.to_string())
        }
    );
    assert_eq!(backend.authorization_calls(), 0);
    assert_eq!(seen.len(), 2);
}

#[tokio::test]
async fn test_code_flow_from_query() {
    let browser = FakeBrowser::new("https://dash.example.com");
    browser.set_query("?code=xyz&state=granted");
    let backend = ScriptedBackend::with_statuses(200, None, 200);

    let (_, _, backend) = run(&browser, backend).await;

    let params = &backend.login_requests()[0].params;
    assert_eq!(params.code.as_deref(), Some("xyz"));
    assert_eq!(params.access_token, None);
    assert_eq!(params.state.as_deref(), Some("granted"));
}

#[tokio::test]
async fn test_missing_csrf_cookie_still_sends() {
    let browser = FakeBrowser::new("https://dash.example.com");
    browser.set_fragment("#access_token=T");
    let backend = ScriptedBackend::with_statuses(200, None, 200);

    let (_, _, backend) = run(&browser, backend).await;

    assert_eq!(backend.login_requests()[0].csrf_token, None);
    assert_eq!(backend.authorization_tokens(), vec![None]);
}

#[tokio::test]
async fn test_each_mount_runs_one_chain() {
    let browser = browser_with_token();

    for _ in 0..3 {
        let backend = ScriptedBackend::with_statuses(200, None, 200);
        let (_, _, backend) = run(&browser, backend).await;
        assert_eq!(backend.login_calls(), 1);
        assert_eq!(backend.authorization_calls(), 1);
    }
    assert_eq!(browser.close_count(), 3);
}
