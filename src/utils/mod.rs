//! Browser-facing utilities.
//!
//! Provides:
//! - [`HttpBackend`] - `fetch`-based implementation of the core `Backend`
//! - [`InFlight`] - cancellable, abortable request handle
//! - [`Debouncer`], [`delayed_flag`] - timer helpers
//! - [`dom`] - window, URL, and history access
//! - [`logger`] - `log` backend for the browser console

mod abort;
mod debounce;
pub mod dom;
mod fetch;
pub mod logger;

pub use abort::InFlight;
pub use debounce::{Debouncer, delayed_flag};
pub use fetch::HttpBackend;
