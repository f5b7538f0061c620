//! Directory-fetch coordination.
//!
//! One [`ListingCoordinator`] owns the listing for the current route. Every
//! path change goes through [`ListingCoordinator::begin`], which cancels the
//! request in flight and decides whether a new one is needed. Results are
//! committed through [`ListingCoordinator::complete`], which discards anything
//! whose token was cancelled in the meantime, so a stale response arriving
//! late can never overwrite the current listing.

use crate::backend::{Backend, settle};
use crate::cancel::CancelToken;
use crate::error::{ApiError, ApiErrorKind, ClientError};
use crate::model::{ApiResponse, FileOrDir};

/// Observable listing state rendered by the browse view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingState {
    pub data: Option<FileOrDir>,
    /// Path `data` was fetched for. Lags `current_path` while a new fetch
    /// is pending, since the previous listing stays visible until then.
    pub listed_path: Option<String>,
    pub error: Option<ApiError>,
    pub loading: bool,
    pub current_path: String,
}

impl ListingState {
    /// Direct children of the listed directory.
    pub fn entries(&self) -> &[FileOrDir] {
        self.data.as_ref().map(FileOrDir::children).unwrap_or_default()
    }
}

/// Handle for a single issued fetch.
#[derive(Clone, Debug)]
pub struct FetchTicket {
    path: String,
    token: CancelToken,
}

impl FetchTicket {
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Token cancelled once this fetch is superseded.
    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// What the caller must do after a fetch resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingOutcome {
    /// Data or a displayable error was written to the state.
    Committed,
    /// The fetch was superseded; nothing changed.
    Discarded,
    /// The session is missing or expired; navigate to the login flow.
    LoginRequired { session_expired: bool },
}

#[derive(Clone, Debug, Default)]
pub struct ListingCoordinator {
    state: ListingState,
    in_flight: Option<CancelToken>,
}

impl ListingCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// Handle a path change or first mount.
    ///
    /// Returns a ticket when a fetch must be issued. Nothing is fetched while
    /// unauthenticated, or when the path's listing is already held.
    pub fn begin(&mut self, path: &str, authed: bool) -> Option<FetchTicket> {
        self.cancel_in_flight();
        self.state.current_path = path.to_string();

        let satisfied =
            self.state.listed_path.as_deref() == Some(path) && self.state.data.is_some();
        if !authed || satisfied {
            self.state.loading = false;
            return None;
        }

        log::debug!("Fetching listing for {}", path);
        let token = CancelToken::new();
        self.in_flight = Some(token.clone());
        self.state.loading = true;

        Some(FetchTicket {
            path: path.to_string(),
            token,
        })
    }

    /// Commit the result of a fetch issued by [`begin`](Self::begin).
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<ApiResponse<FileOrDir>, ClientError>,
    ) -> ListingOutcome {
        if ticket.is_cancelled() {
            log::debug!("Discarding superseded listing for {}", ticket.path);
            return ListingOutcome::Discarded;
        }

        self.in_flight = None;
        self.state.loading = false;

        match settle(result, "fetch files").into_result() {
            Ok(dir) => {
                self.state.data = Some(dir);
                self.state.error = None;
                self.state.listed_path = Some(ticket.path.clone());
                ListingOutcome::Committed
            }
            Err(err) => match err.kind() {
                ApiErrorKind::AuthRequired => ListingOutcome::LoginRequired {
                    session_expired: false,
                },
                ApiErrorKind::SessionExpired => ListingOutcome::LoginRequired {
                    session_expired: true,
                },
                _ => {
                    log::warn!("Failed to fetch files: {}", err);
                    self.state.data = None;
                    self.state.error = Some(err);
                    self.state.listed_path = None;
                    ListingOutcome::Committed
                }
            },
        }
    }

    /// Cancel the fetch in flight, if any. Used on teardown.
    pub fn cancel_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
        self.state.loading = false;
    }
}

/// Session error recorded when a listing reports an expired session.
pub fn session_expired_error() -> ApiError {
    ApiError::new("Failed to fetch files", Some("Session expired.".to_string()))
}

/// Issue the request described by `ticket`.
pub async fn fetch_listing<B: Backend>(
    backend: &B,
    ticket: &FetchTicket,
) -> Result<ApiResponse<FileOrDir>, ClientError> {
    backend.list_directory(ticket.path()).await
}
