//! Breadcrumb trail for the current path.

use fsbrowse_core::path::breadcrumbs;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::dom::NavMode;

stylance::import_crate_style!(css, "src/components/browse/breadcrumbs.module.css");

/// `Home › seg1 › seg2`, each crumb linking to its cumulative path.
#[component]
pub fn Breadcrumbs(path: Memo<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <nav class=css::breadcrumbs aria-label="Breadcrumbs">
            {move || {
                let crumbs = breadcrumbs(&path.get());
                let last = crumbs.len() - 1;

                crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(idx, crumb)| {
                        let href = crumb.href.clone();
                        let on_click = move |ev: MouseEvent| {
                            ev.prevent_default();
                            ctx.navigate(&href, NavMode::Push);
                        };
                        let class = if idx == last {
                            format!("{} {}", css::crumb, css::current)
                        } else {
                            css::crumb.to_string()
                        };

                        view! {
                            {(idx > 0).then(|| view! {
                                <span class=css::separator aria-hidden="true">
                                    <Icon icon=ic::CHEVRON_RIGHT />
                                </span>
                            })}
                            <a
                                class=class
                                href=crumb.href
                                on:click=on_click
                                aria-current=(idx == last).then_some("page")
                            >
                                {(idx == 0).then(|| view! {
                                    <span class=css::homeIcon><Icon icon=ic::HOME /></span>
                                })}
                                {crumb.label}
                            </a>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
