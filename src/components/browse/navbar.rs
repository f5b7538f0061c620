//! Navigation bar: breadcrumbs, search box, and logout button.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::breadcrumbs::Breadcrumbs;
use super::search_bar::SearchBar;
use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/browse/navbar.module.css");

#[component]
pub fn NavBar(path: Memo<String>) -> impl IntoView {
    view! {
        <header class=css::navbar>
            <Breadcrumbs path=path />
            <div class=css::actions>
                <SearchBar />
                <LogoutButton />
            </div>
        </header>
    }
}

/// Ends the session on the backend, then locally.
#[component]
fn LogoutButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let pending = RwSignal::new(false);

    let on_click = move |_: MouseEvent| {
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        spawn_local(async move {
            ctx.logout().await;
            pending.try_set(false);
        });
    };

    let title = move || match ctx.session.username() {
        Some(name) => format!("Log out {}", name),
        None => "Log out".to_string(),
    };

    view! {
        <button
            class=css::logout
            on:click=on_click
            disabled=move || pending.get()
            title=title
            aria-label="Log out"
        >
            <Icon icon=ic::LOGOUT />
            <span class=css::logoutLabel>"Log out"</span>
        </button>
    }
}
