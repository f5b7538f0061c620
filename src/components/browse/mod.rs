//! Browse page: navigation bar plus the listing for the current path.
//!
//! Components:
//! - [`BrowsePage`] - page root, owns the directory fetch
//! - [`NavBar`] - breadcrumbs, search box, logout button
//! - [`FileList`] - sortable, filterable listing

mod breadcrumbs;
mod file_list;
mod hook;
mod navbar;
mod search_bar;

use fsbrowse_core::view::apply_view;
use fsbrowse_core::ListingState;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::LOADING_INDICATOR_DELAY_MS;
use crate::utils::delayed_flag;

pub use file_list::FileList;
pub use navbar::NavBar;

stylance::import_crate_style!(css, "src/components/browse/browse.module.css");

#[component]
pub fn BrowsePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Holds the last browse path while a navigation away is unmounting us.
    let path = Memo::new(move |prev: Option<&String>| {
        ctx.location.with(|l| match l.route.browse_path() {
            Some(path) => path.to_string(),
            None => prev.cloned().unwrap_or_else(|| "/".to_string()),
        })
    });
    let query = Memo::new(move |_| ctx.location.with(|l| l.query.clone()));

    let listing = hook::use_directory(path);
    let loading = Memo::new(move |_| listing.with(|l| l.loading));
    let show_spinner = delayed_flag(loading.into(), LOADING_INDICATOR_DELAY_MS);

    // Filter, then sort; recomputed whenever the listing or query changes.
    let entries = Memo::new(move |_| {
        let filter = query.with(|q| q.filter());
        let sort = query.with(|q| q.sort());
        listing.with(|l| apply_view(l.entries(), filter.as_deref(), sort))
    });

    // Child links resolve against the directory actually shown.
    let listed = Memo::new(move |_| {
        listing.with(|l| l.listed_path.clone().unwrap_or_else(|| path.get()))
    });

    let body = Memo::new(move |_| listing.with(Body::of));

    view! {
        <div class=css::page>
            <NavBar path=path />
            <main class=css::content>
                <Show when=move || show_spinner.get()>
                    <div class=css::loading role="status">
                        <span class=css::spinner aria-hidden="true"></span>
                        "Loading"
                    </div>
                </Show>
                {move || match body.get() {
                    Body::Nothing => ().into_any(),
                    Body::Error(message) => view! {
                        <div class=css::error role="alert">{message}</div>
                    }.into_any(),
                    Body::Empty => view! { <div class=css::empty>"No contents"</div> }.into_any(),
                    Body::Entries => view! { <FileList entries=entries parent=listed /> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// What the listing area shows.
#[derive(Clone, Debug, PartialEq)]
enum Body {
    /// Nothing fetched yet.
    Nothing,
    Error(String),
    Empty,
    Entries,
}

impl Body {
    fn of(state: &ListingState) -> Self {
        if let Some(error) = &state.error {
            Self::Error(error.message().to_string())
        } else if state.data.is_none() {
            Self::Nothing
        } else if state.entries().is_empty() {
            Self::Empty
        } else {
            Self::Entries
        }
    }
}
