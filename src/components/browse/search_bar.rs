//! Debounced search box bound to the `q` query parameter.

use fsbrowse_core::Location;
use fsbrowse_core::query::params;
use leptos::ev::Event;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::FILTER_DEBOUNCE_MS;
use crate::utils::Debouncer;
use crate::utils::dom::NavMode;

stylance::import_crate_style!(css, "src/components/browse/search_bar.module.css");

/// Search input. Typing replaces the current history entry with the new
/// filter once input pauses; the sort parameter is carried over.
///
/// The box follows `q` when it changes underneath it (back/forward).
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let filter = Memo::new(move |_| {
        ctx.location.with(|l| {
            l.query
                .get(params::FILTER)
                .unwrap_or_default()
                .to_string()
        })
    });
    let term = RwSignal::new(filter.get_untracked());
    let debouncer = Debouncer::new(FILTER_DEBOUNCE_MS);

    // Our own navigation writes the trimmed term, which is a no-op here.
    Effect::new(move || {
        let filter = filter.get();
        if term.with_untracked(|t| t.trim() != filter) {
            debouncer.cancel();
            term.set(filter);
        }
    });

    let on_input = move |ev: Event| {
        let value = event_target_value(&ev);
        term.set(value.clone());

        debouncer.schedule(move || {
            let target = ctx.location.with_untracked(|l| {
                Location::new(l.route.clone(), l.query.for_filter(&value)).href()
            });
            ctx.navigate(&target, NavMode::Replace);
        });
    };

    view! {
        <label class=css::search>
            <span class=css::icon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
            <input
                class=css::input
                type="search"
                placeholder="Search"
                aria-label="Filter files"
                prop:value=move || term.get()
                on:input=on_input
            />
        </label>
    }
}
