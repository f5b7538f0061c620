//! Session store state machine.
//!
//! ```text
//! Loading ──resync──▶ Authed | Unauthed | Errored
//! ```
//!
//! `Errored` and `Unauthed` both count as "not authed" for routing; `Errored`
//! additionally carries a message for the login page. The state is plain
//! data; the web layer wraps it in a signal and is its only writer.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::backend::Backend;
use crate::cancel::CancelToken;
use crate::error::{ApiError, ApiErrorKind, ClientError};
use crate::model::{ApiResponse, Credentials, UserSession};

/// Title recorded for failed resyncs.
const SYNC_FAILED_TITLE: &str = "Failed to fetch session";

/// Coarse session status for routing and display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Authed,
    Unauthed,
    Errored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    session: Option<UserSession>,
    error: Option<ApiError>,
    loading: bool,
}

impl SessionState {
    /// A fresh store is loading until its first resync resolves.
    pub fn new() -> Self {
        Self {
            session: None,
            error: None,
            loading: true,
        }
    }

    pub fn session(&self) -> Option<&UserSession> {
        self.session.as_ref()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authed_at(&self, now: DateTime<Utc>) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_valid_at(now))
    }

    /// Evaluated against the clock on every call, never cached.
    pub fn is_authed(&self) -> bool {
        self.is_authed_at(Utc::now())
    }

    pub fn status_at(&self, now: DateTime<Utc>) -> SessionStatus {
        if self.loading {
            SessionStatus::Loading
        } else if self.is_authed_at(now) {
            SessionStatus::Authed
        } else if self.error.is_some() {
            SessionStatus::Errored
        } else {
            SessionStatus::Unauthed
        }
    }

    /// Install a session and clear any session error. No network I/O.
    pub fn login(&mut self, session: UserSession) {
        self.session = Some(session);
        self.error = None;
    }

    /// Drop the session. Calling the logout endpoint is the caller's job.
    pub fn logout(&mut self) {
        self.session = None;
    }

    /// Record a session-level error for display on the login page.
    pub fn set_error(&mut self, error: ApiError) {
        self.error = Some(error);
    }

    pub fn begin_sync(&mut self) {
        self.loading = true;
    }

    /// Apply a resolved resync. Always clears the loading flag.
    pub fn finish_sync(&mut self, outcome: SyncOutcome) {
        match outcome {
            SyncOutcome::Authenticated(session) => self.login(session),
            SyncOutcome::Anonymous => self.session = None,
            SyncOutcome::Expired => {
                self.session = None;
                self.error = Some(ApiError::new(
                    format!("{}: Session expired", SYNC_FAILED_TITLE),
                    None,
                ));
            }
            SyncOutcome::Failed(error) => {
                self.session = None;
                self.error = Some(error);
            }
        }
        self.loading = false;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Resync
// =============================================================================

/// Result of asking the backend who the current user is.
#[derive(Clone, Debug, PartialEq)]
pub enum SyncOutcome {
    Authenticated(UserSession),
    /// No session exists; not an error.
    Anonymous,
    Expired,
    Failed(ApiError),
}

impl SyncOutcome {
    pub fn classify(result: Result<ApiResponse<UserSession>, ClientError>) -> Self {
        let response = match result {
            Ok(response) => response,
            Err(err) => {
                log::error!("Failed to fetch session: {}", err);
                return Self::Failed(ApiError::new(SYNC_FAILED_TITLE, None));
            }
        };

        match response.into_result() {
            Ok(session) => Self::Authenticated(session),
            Err(err) => match err.kind() {
                ApiErrorKind::AuthRequired | ApiErrorKind::SessionNotFound => Self::Anonymous,
                ApiErrorKind::SessionExpired => {
                    log::warn!("Session expired");
                    Self::Expired
                }
                _ => {
                    log::error!("Failed to fetch session: {}", err);
                    Self::Failed(ApiError::new(
                        format!("{}: {}", SYNC_FAILED_TITLE, err.message()),
                        None,
                    ))
                }
            },
        }
    }
}

/// Query the backend for the current session. Never fails.
///
/// Returns `None` when `token` was cancelled while the request was in
/// flight; a newer resync owns the outcome then.
pub async fn resync<B: Backend>(backend: &B, token: &CancelToken) -> Option<SyncOutcome> {
    log::debug!("Resyncing session");
    let result = backend.me().await;
    if token.is_cancelled() {
        log::debug!("Discarding superseded session resync");
        return None;
    }
    Some(SyncOutcome::classify(result))
}

// =============================================================================
// Login
// =============================================================================

/// Inline login-form errors. `Display` is the text shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Username and password are required")]
    MissingFields,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("{0}")]
    Rejected(String),
    #[error("Failed to log in")]
    Failed,
}

/// Validate and submit the login form.
///
/// Empty fields are rejected before any request is made.
pub async fn submit_login<B: Backend>(
    backend: &B,
    username: &str,
    password: &str,
) -> Result<UserSession, LoginError> {
    if username.is_empty() || password.is_empty() {
        return Err(LoginError::MissingFields);
    }

    let credentials = Credentials {
        username: username.to_string(),
        password: password.to_string(),
    };

    let response = backend.login(&credentials).await.map_err(|err| {
        log::error!("Failed to log in: {}", err);
        LoginError::Failed
    })?;

    response.into_result().map_err(|err| match err.kind() {
        ApiErrorKind::InvalidCredentials => LoginError::InvalidCredentials,
        _ => match err.detail {
            Some(detail) if !detail.is_empty() => LoginError::Rejected(detail),
            _ => LoginError::Failed,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::details;

    fn session(expires: &str) -> UserSession {
        UserSession {
            username: "user".to_string(),
            expires: expires.parse().unwrap(),
        }
    }

    fn now() -> DateTime<Utc> {
        "2024-06-01T12:00:00Z".parse().unwrap()
    }

    fn backend_error(detail: &str) -> Result<ApiResponse<UserSession>, ClientError> {
        Ok(ApiResponse::error(ApiError::new(
            "Unauthorized",
            Some(detail.to_string()),
        )))
    }

    #[test]
    fn test_new_store_is_loading() {
        let state = SessionState::new();
        assert!(state.is_loading());
        assert_eq!(state.status_at(now()), SessionStatus::Loading);
        assert!(!state.is_authed_at(now()));
    }

    #[test]
    fn test_expiry_is_checked_on_each_call() {
        let mut state = SessionState::new();
        state.finish_sync(SyncOutcome::Authenticated(session("2024-06-01T13:00:00Z")));

        assert!(state.is_authed_at(now()));
        assert_eq!(state.status_at(now()), SessionStatus::Authed);

        let later = "2024-06-01T13:00:01Z".parse().unwrap();
        assert!(!state.is_authed_at(later));
        assert_eq!(state.status_at(later), SessionStatus::Unauthed);
    }

    #[test]
    fn test_login_clears_error() {
        let mut state = SessionState::new();
        state.set_error(ApiError::new("Failed", None));
        state.login(session("2030-01-01T00:00:00Z"));
        assert!(state.error().is_none());
        assert_eq!(state.session().unwrap().username, "user");
    }

    #[test]
    fn test_logout_keeps_loading_flag() {
        let mut state = SessionState::new();
        state.finish_sync(SyncOutcome::Authenticated(session("2030-01-01T00:00:00Z")));
        state.logout();
        assert!(state.session().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_classify_ok() {
        let ok = Ok(ApiResponse::ok(session("2030-01-01T00:00:00Z")));
        assert!(matches!(
            SyncOutcome::classify(ok),
            SyncOutcome::Authenticated(_)
        ));
    }

    #[test]
    fn test_classify_no_session_is_silent() {
        assert_eq!(
            SyncOutcome::classify(backend_error(details::AUTH_REQUIRED)),
            SyncOutcome::Anonymous
        );
        assert_eq!(
            SyncOutcome::classify(backend_error(details::SESSION_NOT_FOUND)),
            SyncOutcome::Anonymous
        );

        let mut state = SessionState::new();
        state.finish_sync(SyncOutcome::Anonymous);
        assert_eq!(state.status_at(now()), SessionStatus::Unauthed);
        assert!(state.error().is_none());
    }

    #[test]
    fn test_classify_expired() {
        let outcome = SyncOutcome::classify(backend_error(details::SESSION_EXPIRED));
        assert_eq!(outcome, SyncOutcome::Expired);

        let mut state = SessionState::new();
        state.finish_sync(outcome);
        assert_eq!(state.status_at(now()), SessionStatus::Errored);
        assert_eq!(
            state.error().unwrap().message(),
            "Failed to fetch session: Session expired"
        );
    }

    #[test]
    fn test_classify_other_backend_error() {
        let outcome = SyncOutcome::classify(backend_error("database unavailable"));
        assert_eq!(
            outcome,
            SyncOutcome::Failed(ApiError::new(
                "Failed to fetch session: database unavailable",
                None
            ))
        );
    }

    #[test]
    fn test_classify_transport_error_is_generic() {
        let outcome = SyncOutcome::classify(Err(ClientError::Network("offline".into())));
        assert_eq!(
            outcome,
            SyncOutcome::Failed(ApiError::new("Failed to fetch session", None))
        );
    }

    #[test]
    fn test_failed_sync_clears_session() {
        let mut state = SessionState::new();
        state.finish_sync(SyncOutcome::Authenticated(session("2030-01-01T00:00:00Z")));
        state.begin_sync();
        assert!(state.is_loading());
        state.finish_sync(SyncOutcome::Failed(ApiError::new("Failed", None)));
        assert!(state.session().is_none());
        assert!(!state.is_loading());
    }
}
