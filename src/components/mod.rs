//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`login`] - Login form
//! - [`browse`] - Directory browser
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browse;
pub mod icons;
pub mod login;
pub mod router;

pub use router::AppRouter;
