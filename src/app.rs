//! Root application module.
//!
//! Contains the main App component, the session store, and the
//! [`AppContext`] shared with every component.

use fsbrowse_core::session::{self, LoginError};
use fsbrowse_core::{ApiError, Backend, CancelToken, Location, SessionState, UserSession};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::utils::dom::{self, NavMode};
use crate::utils::{HttpBackend, InFlight};

// ============================================================================
// SessionStore
// ============================================================================

/// Reactive wrapper around [`SessionState`].
///
/// The store is the only writer of the session. Reads through the methods
/// below are tracked, so views re-render when the session changes.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    sync: StoredValue<Option<InFlight>, LocalStorage>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::new()),
            sync: StoredValue::new_local(None),
        }
    }

    /// Checks the expiry against the clock on every call.
    pub fn is_authed(&self) -> bool {
        self.state.with(SessionState::is_authed)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(SessionState::is_loading)
    }

    pub fn error(&self) -> Option<ApiError> {
        self.state.with(|s| s.error().cloned())
    }

    pub fn username(&self) -> Option<String> {
        self.state
            .with(|s| s.session().map(|session| session.username.clone()))
    }

    pub fn login(&self, session: UserSession) {
        self.state.update(|s| s.login(session));
    }

    pub fn logout(&self) {
        self.state.update(SessionState::logout);
    }

    pub fn set_error(&self, error: ApiError) {
        self.state.update(|s| s.set_error(error));
    }

    /// Ask the backend who we are. Restarts any resync already in flight.
    pub fn sync(&self) {
        let token = CancelToken::new();
        let request = InFlight::new(token.clone());
        let backend = request
            .signal()
            .map(HttpBackend::with_abort)
            .unwrap_or_default();

        // Replacing the previous handle drops it, which cancels and aborts.
        self.sync.set_value(Some(request));
        self.state.update(SessionState::begin_sync);

        let state = self.state;
        spawn_local(async move {
            if let Some(outcome) = session::resync(&backend, &token).await {
                state.update(|s| s.finish_sync(outcome));
            }
        });
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: SessionStore,

    /// Current URL. Written by [`navigate`](Self::navigate) and `popstate`.
    pub location: RwSignal<Location>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            session: SessionStore::new(),
            location: RwSignal::new(dom::current_location()),
        }
    }

    /// Client-side navigation to `url`.
    pub fn navigate(&self, url: &str, mode: NavMode) {
        log::debug!("Navigating to {} ({:?})", url, mode);
        dom::set_url(url, mode);
        self.location.set(dom::current_location());
    }

    /// Re-read the address bar after a `popstate`.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn sync_location(&self) {
        self.location.set(dom::current_location());
    }

    /// Submit the login form and, on success, land on the preserved
    /// browse location.
    pub async fn submit_login(&self, username: &str, password: &str) -> Result<(), LoginError> {
        let user = session::submit_login(&HttpBackend::new(), username, password).await?;
        self.session.login(user);

        let target = self
            .location
            .with_untracked(|l| fsbrowse_core::redirect::browse_redirect_url(&l.query));
        self.navigate(&target, NavMode::Replace);
        Ok(())
    }

    /// Log out on the backend, then locally. Stays put when the backend
    /// refuses.
    pub async fn logout(&self) {
        if let Err(err) = HttpBackend::new().logout().await {
            log::error!("Failed to log out: {}", err);
            return;
        }

        self.session.logout();
        self.navigate(fsbrowse_core::route::LOGIN_PATH, NavMode::Push);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// Creates and provides the global [`AppContext`], starts the initial
/// session resync, and renders the router.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx.session.sync();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #18181b;
                    color: #e4e4e7;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="color: #f87171; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #a1a1aa; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #27272a;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #71717a;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #f87171;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| dom::reload()
                            style="
                                background: #bef264;
                                color: #18181b;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 9999px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
