mod common;

use common::{ScriptedBackend, error_reply, session};
use fsbrowse_core::error::details;
use fsbrowse_core::redirect::{self, RouteDecision};
use fsbrowse_core::session::{resync, submit_login};
use fsbrowse_core::{
    ApiResponse, AppRoute, CancelToken, ClientError, LoginError, Location, SessionState, SessionStatus,
    SortDirection, SortField, SortSpec,
};

const FAR_FUTURE: &str = "2099-01-01T00:00:00Z";

#[tokio::test]
async fn test_resync_authenticates() {
    let backend = ScriptedBackend::new();
    backend.push_me(Ok(ApiResponse::ok(session("alice", FAR_FUTURE))));

    let mut state = SessionState::new();
    assert!(state.is_loading());
    state.finish_sync(resync(&backend, &CancelToken::new()).await.unwrap());

    assert!(!state.is_loading());
    assert!(state.is_authed());
    assert_eq!(state.session().unwrap().username, "alice");
}

#[tokio::test]
async fn test_resync_with_lapsed_session_is_unauthed() {
    let backend = ScriptedBackend::new();
    backend.push_me(Ok(ApiResponse::ok(session("alice", "2000-01-01T00:00:00Z"))));

    let mut state = SessionState::new();
    state.finish_sync(resync(&backend, &CancelToken::new()).await.unwrap());

    assert!(!state.is_authed());
    assert_eq!(state.status_at(chrono::Utc::now()), SessionStatus::Unauthed);
}

#[tokio::test]
async fn test_resync_expired_shows_message_on_login() {
    let backend = ScriptedBackend::new();
    backend.push_me(error_reply("Unauthorized", Some(details::SESSION_EXPIRED)));

    let mut state = SessionState::new();
    state.finish_sync(resync(&backend, &CancelToken::new()).await.unwrap());

    assert!(!state.is_authed());
    assert_eq!(
        state.error().unwrap().message(),
        "Failed to fetch session: Session expired"
    );
}

#[tokio::test]
async fn test_resync_transport_failure_never_panics() {
    let backend = ScriptedBackend::new();
    backend.push_me(Err(ClientError::Decode("not json".into())));

    let mut state = SessionState::new();
    state.finish_sync(resync(&backend, &CancelToken::new()).await.unwrap());

    assert!(!state.is_loading());
    assert_eq!(state.error().unwrap().message(), "Failed to fetch session");
}

#[tokio::test]
async fn test_superseded_resync_is_discarded() {
    let backend = ScriptedBackend::new();
    // Futures are lazy: the fresh resync is polled, and answered, first.
    backend.push_me(Ok(ApiResponse::ok(session("alice", FAR_FUTURE))));
    backend.push_me(Err(ClientError::Network("aborted".into())));

    let mut state = SessionState::new();
    let first = CancelToken::new();
    let stale = resync(&backend, &first);

    // Re-entering resync restarts the determination.
    first.cancel();
    state.begin_sync();
    let second = CancelToken::new();
    let outcome = resync(&backend, &second).await.unwrap();

    assert_eq!(stale.await, None);
    state.finish_sync(outcome);
    assert!(state.is_authed());
    assert!(state.error().is_none());
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let backend = ScriptedBackend::new();

    assert_eq!(
        submit_login(&backend, "", "secret").await,
        Err(LoginError::MissingFields)
    );
    assert_eq!(
        submit_login(&backend, "alice", "").await,
        Err(LoginError::MissingFields)
    );
    assert!(backend.login_attempts().is_empty());
    assert_eq!(
        LoginError::MissingFields.to_string(),
        "Username and password are required"
    );
}

#[tokio::test]
async fn test_login_error_messages() {
    let backend = ScriptedBackend::new();
    backend.push_login(error_reply("Unauthorized", Some(details::INVALID_CREDENTIALS)));
    backend.push_login(error_reply("Forbidden", Some("account locked")));
    backend.push_login(error_reply("Internal Server Error", None));
    backend.push_login(Err(ClientError::Network("offline".into())));

    let first = submit_login(&backend, "alice", "wrong").await.unwrap_err();
    assert_eq!(first.to_string(), "Invalid username or password");

    let second = submit_login(&backend, "alice", "secret").await.unwrap_err();
    assert_eq!(second.to_string(), "account locked");

    let third = submit_login(&backend, "alice", "secret").await.unwrap_err();
    assert_eq!(third, LoginError::Failed);

    let fourth = submit_login(&backend, "alice", "secret").await.unwrap_err();
    assert_eq!(fourth.to_string(), "Failed to log in");

    assert_eq!(backend.login_attempts().len(), 4);
}

#[tokio::test]
async fn test_login_redirects_to_preserved_location() {
    let backend = ScriptedBackend::new();
    backend.push_login(Ok(ApiResponse::ok(session("alice", FAR_FUTURE))));

    let login_page = Location::parse("/login", "?r=test-dir&p=s%3Dname%3Aasc");
    let mut state = SessionState::new();
    state.finish_sync(fsbrowse_core::SyncOutcome::Anonymous);
    assert_eq!(
        redirect::resolve(&login_page, state.is_authed()),
        RouteDecision::Render(AppRoute::Login)
    );

    let user = submit_login(&backend, "alice", "secret").await.unwrap();
    state.login(user);
    assert!(state.is_authed());

    let target = redirect::browse_redirect_url(&login_page.query);
    assert_eq!(target, "/browse/test-dir?s=name:asc");

    let (pathname, search) = target.split_once('?').unwrap();
    let landed = Location::parse(pathname, search);
    assert_eq!(
        redirect::resolve(&landed, state.is_authed()),
        RouteDecision::Render(AppRoute::Browse {
            path: "/test-dir".to_string()
        })
    );
    assert_eq!(
        landed.query.sort(),
        Some(SortSpec::new(SortField::Name, SortDirection::Asc))
    );
}

#[tokio::test]
async fn test_logout_clears_session() {
    let backend = ScriptedBackend::new();
    backend.push_logout(Ok(()));

    let mut state = SessionState::new();
    state.login(session("alice", FAR_FUTURE));

    fsbrowse_core::Backend::logout(&backend).await.unwrap();
    state.logout();

    assert!(!state.is_authed());
    let home = Location::parse("/", "");
    assert_eq!(
        redirect::resolve(&home, state.is_authed()),
        RouteDecision::Redirect("/login".to_string())
    );
}
