//! File list component for the browse view.
//!
//! Column headers double as sort controls. Their state is exposed through
//! `data-active` and `data-direction` attributes.

use fsbrowse_core::format::{relative_time, size_label, type_label};
use fsbrowse_core::path::{browse_href, child_path};
use fsbrowse_core::{FileOrDir, Location, SortDirection, SortField, SortSpec};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::dom::NavMode;

stylance::import_crate_style!(css, "src/components/browse/file_list.module.css");

/// Rows for `entries`, children of the directory at `parent`.
///
/// `parent` is the path the listing was fetched for, which lags the route
/// while the next directory loads.
#[component]
pub fn FileList(entries: Memo<Vec<FileOrDir>>, parent: Memo<String>) -> impl IntoView {
    view! {
        <div class=css::list role="table" aria-label="Directory contents">
            <div class=css::listHeader role="row">
                <span class=css::headerIcon></span>
                {SortField::ALL
                    .into_iter()
                    .map(|field| view! { <SortButton field=field /> })
                    .collect_view()}
            </div>
            // Rows are not reactive, so any change to an entry or its parent
            // must produce a new key.
            <For
                each=move || {
                    let parent = parent.get();
                    entries
                        .get()
                        .into_iter()
                        .map(|entry| (parent.clone(), entry))
                        .collect::<Vec<_>>()
                }
                key=|(parent, entry)| {
                    (
                        parent.clone(),
                        entry.name.clone(),
                        entry.kind,
                        entry.size,
                        entry.modified.clone(),
                    )
                }
                children=move |(parent, entry)| view! { <FileListItem parent=parent entry=entry /> }
            />
        </div>
    }
}

/// Column header that sorts by `field`.
///
/// Clicking the active column flips its direction; clicking another column
/// activates it.
#[component]
fn SortButton(field: SortField) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let current = Memo::new(move |_| ctx.location.with(|l| l.query.sort()));
    let direction = Memo::new(move |_| {
        current
            .get()
            .filter(|spec| spec.field == field)
            .map(|spec| spec.direction)
    });

    let on_click = move |_: MouseEvent| {
        let next = SortSpec::after_click(current.get_untracked(), field);
        let target = ctx.location.with_untracked(|l| {
            Location::new(l.route.clone(), l.query.with_sort(next)).href()
        });
        ctx.navigate(&target, NavMode::Push);
    };

    view! {
        <button
            class=format!("{} {}", css::headerCell, column_class(field))
            role="columnheader"
            data-sort=field.as_str()
            data-active=move || if direction.get().is_some() { "true" } else { "false" }
            data-direction=move || direction.get().map(SortDirection::as_str)
            aria-sort=move || match direction.get() {
                Some(SortDirection::Asc) => "ascending",
                Some(SortDirection::Desc) => "descending",
                None => "none",
            }
            on:click=on_click
        >
            <span>{field.label()}</span>
            <span class=css::sortIcon aria-hidden="true">
                {move || direction.get().map(|dir| {
                    let icon = match dir {
                        SortDirection::Asc => ic::SORT_ASC,
                        SortDirection::Desc => ic::SORT_DESC,
                    };
                    view! { <Icon icon=icon /> }
                })}
            </span>
        </button>
    }
}

fn column_class(field: SortField) -> &'static str {
    match field {
        SortField::Name => css::colName,
        SortField::Modified => css::colModified,
        SortField::Type => css::colType,
        SortField::Size => css::colSize,
    }
}

#[component]
fn FileListItem(parent: String, entry: FileOrDir) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = ic::for_entry(&entry);
    let size = size_label(&entry);
    let kind = type_label(&entry);
    let modified = relative_time(&entry.modified, chrono::Utc::now());

    let name = if entry.is_dir() {
        let href = browse_href(&child_path(&parent, &entry.name));
        let target = href.clone();
        let on_click = move |ev: MouseEvent| {
            ev.prevent_default();
            ctx.navigate(&target, NavMode::Push);
        };

        view! {
            <a class=format!("{} {}", css::name, css::nameDir) href=href on:click=on_click>
                {entry.name.clone()}
            </a>
        }
        .into_any()
    } else {
        view! { <span class=css::name>{entry.name.clone()}</span> }.into_any()
    };

    view! {
        <div
            class=css::listItem
            role="row"
            data-name=entry.name.clone()
            data-type=entry.kind.as_str()
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=css::colName role="cell">{name}</span>
            <span class=css::colModified role="cell" title=entry.modified.clone()>{modified}</span>
            <span class=css::colType role="cell">{kind}</span>
            <span class=css::colSize role="cell">{size}</span>
        </div>
    }
}
