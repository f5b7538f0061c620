//! Application router component.
//!
//! Uses the History API directly instead of `leptos_router`.
//!
//! # Architecture
//!
//! - **`AppContext::location` is the source of truth**: written by
//!   `AppContext::navigate` and by `popstate` (back/forward buttons)
//! - **Nothing resolves while the session is loading**: a loading screen is
//!   shown until the first resync finishes
//! - **Redirects replace history**: auth detours never leave an entry behind

use fsbrowse_core::AppRoute;
use fsbrowse_core::redirect::{self, RouteDecision};
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::browse::BrowsePage;
use crate::components::login::LoginPage;
use crate::utils::dom::NavMode;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// What the router shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Page {
    Loading,
    Login,
    Browse,
    /// A redirect is pending; render nothing.
    Redirecting,
}

/// Main application router.
///
/// - `/` → `/browse` or `/login`
/// - `/login` → login form, or the preserved browse location when authed
/// - `/browse/*` → directory listing, or `/login?r=..&p=..` when not authed
/// - anything else → treated as `/`
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Set up popstate event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.sync_location();
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let decision = Memo::new(move |_| {
        if ctx.session.is_loading() {
            return None;
        }
        Some(ctx.location.with(|location| {
            redirect::resolve(location, ctx.session.is_authed())
        }))
    });

    Effect::new(move || {
        if let Some(RouteDecision::Redirect(url)) = decision.get() {
            ctx.navigate(&url, NavMode::Replace);
        }
    });

    let page = Memo::new(move |_| match decision.get() {
        None => Page::Loading,
        Some(RouteDecision::Render(AppRoute::Login)) => Page::Login,
        Some(RouteDecision::Render(AppRoute::Browse { .. })) => Page::Browse,
        Some(_) => Page::Redirecting,
    });

    move || match page.get() {
        Page::Loading => view! { <LoadingScreen /> }.into_any(),
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::Browse => view! { <BrowsePage /> }.into_any(),
        Page::Redirecting => ().into_any(),
    }
}

/// Full-screen placeholder shown until the session is known.
#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class=css::loadingScreen role="status" aria-live="polite">
            <span class=css::spinner aria-hidden="true"></span>
            <span>"Loading"</span>
        </div>
    }
}
