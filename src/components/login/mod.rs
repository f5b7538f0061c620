//! Login page.
//!
//! Shows the inline form error first, otherwise the session error left by a
//! failed resync or an expired session.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/login/login.module.css");

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let message = Signal::derive(move || {
        form_error.get().or_else(|| {
            ctx.session
                .error()
                .map(|err| err.message().to_string())
        })
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let user = username.get_untracked();
        let pass = password.get_untracked();
        submitting.set(true);

        spawn_local(async move {
            match ctx.submit_login(&user, &pass).await {
                Ok(()) => form_error.try_set(None),
                Err(err) => form_error.try_set(Some(err.to_string())),
            };
            submitting.try_set(false);
        });
    };

    view! {
        <main class=css::page>
            <form class=css::card on:submit=on_submit novalidate=true>
                <h1 class=css::title>{APP_NAME}</h1>
                <p class=css::subtitle>"Sign in to browse files"</p>

                <label class=css::field>
                    <span class=css::label>"Username"</span>
                    <input
                        class=css::input
                        type="text"
                        name="username"
                        autocomplete="username"
                        bind:value=username
                    />
                </label>

                <label class=css::field>
                    <span class=css::label>"Password"</span>
                    <input
                        class=css::input
                        type="password"
                        name="password"
                        autocomplete="current-password"
                        bind:value=password
                    />
                </label>

                {move || message.get().map(|msg| view! {
                    <p class=css::error role="alert">{msg}</p>
                })}

                <button class=css::submit type="submit" disabled=move || submitting.get()>
                    "Log in"
                </button>
            </form>
        </main>
    }
}
