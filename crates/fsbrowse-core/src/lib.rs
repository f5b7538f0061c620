//! Platform-independent core of the file browser.
//!
//! Everything here compiles and runs natively so the client's state machines
//! can be exercised without a browser:
//!
//! - [`model`] - wire types ([`UserSession`], [`FileOrDir`], [`ApiResponse`])
//! - [`error`] - [`ApiError`] taxonomy and [`ClientError`] transport failures
//! - [`backend`] - the [`Backend`] trait the web client implements over HTTP
//! - [`session`] - session store state machine and resync/login flows
//! - [`listing`] - directory-fetch coordination with superseded-request discard
//! - [`view`] - sort and filter derivation from query parameters
//! - [`route`], [`redirect`] - route parsing and authentication redirects
//! - [`path`], [`query`] - path normalization and `URLSearchParams`-style queries
//! - [`cancel`] - tokens that mark superseded requests
//! - [`format`] - human-readable sizes, dates and file types

pub mod backend;
pub mod cancel;
pub mod error;
pub mod format;
pub mod listing;
pub mod model;
pub mod path;
pub mod query;
pub mod redirect;
pub mod route;
pub mod session;
pub mod view;

pub use backend::Backend;
pub use cancel::CancelToken;
pub use error::{ApiError, ApiErrorKind, ClientError};
pub use listing::{FetchTicket, ListingCoordinator, ListingOutcome, ListingState};
pub use model::{ApiResponse, Credentials, EntryKind, FileOrDir, UserSession};
pub use query::SearchParams;
pub use redirect::RouteDecision;
pub use route::{AppRoute, Location};
pub use session::{LoginError, SessionState, SessionStatus, SyncOutcome};
pub use view::{SortDirection, SortField, SortSpec};
