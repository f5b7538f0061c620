//! Directory-fetch hook for the browse page.

use fsbrowse_core::listing::{fetch_listing, session_expired_error};
use fsbrowse_core::redirect::login_redirect_url;
use fsbrowse_core::{ListingCoordinator, ListingOutcome, ListingState};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::utils::dom::NavMode;
use crate::utils::{HttpBackend, InFlight};

/// Keep the listing for `path` loaded.
///
/// Each path change supersedes the previous fetch: its token is cancelled
/// and its `fetch` aborted, so a late response is discarded. Tearing the
/// page down does the same, because the in-flight handle is dropped with
/// the owning scope.
pub fn use_directory(path: Memo<String>) -> ReadSignal<ListingState> {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let coordinator = StoredValue::new(ListingCoordinator::new());
    let request = StoredValue::new_local(None::<InFlight>);
    let (listing, set_listing) = signal(ListingState::default());

    let publish = move || {
        if let Some(state) = coordinator.try_with_value(|c| c.state().clone()) {
            set_listing.try_set(state);
        }
    };

    Effect::new(move || {
        let path = path.get();
        let authed = ctx.session.is_authed();

        let ticket = coordinator
            .try_update_value(|c| c.begin(&path, authed))
            .flatten();
        publish();

        let Some(ticket) = ticket else {
            request.set_value(None);
            return;
        };

        let in_flight = InFlight::new(ticket.token().clone());
        let backend = in_flight
            .signal()
            .map(HttpBackend::with_abort)
            .unwrap_or_default();
        request.set_value(Some(in_flight));

        spawn_local(async move {
            let result = fetch_listing(&backend, &ticket).await;
            let Some(outcome) = coordinator.try_update_value(|c| c.complete(&ticket, result))
            else {
                return;
            };

            match outcome {
                ListingOutcome::Discarded => {}
                ListingOutcome::Committed => publish(),
                ListingOutcome::LoginRequired { session_expired } => {
                    publish();
                    // The backend no longer honors the session.
                    ctx.session.logout();
                    if session_expired {
                        ctx.session.set_error(session_expired_error());
                    }
                    let url = ctx
                        .location
                        .with_untracked(|l| login_redirect_url(ticket.path(), &l.query));
                    ctx.navigate(&url, NavMode::Push);
                }
            }
        });
    });

    listing
}
