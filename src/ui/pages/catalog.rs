use dioxus::prelude::*;

use crate::{
    app::request_reload,
    domain::{is_cheapest, AppState, LoadState, ViewMode},
    ui::components::{
        filter_bar::FilterBar,
        service_card::ServiceCard,
        service_table::{ServiceRow, ServiceTable},
        status_panel::{ErrorPanel, LoadingPanel},
    },
};

#[component]
pub fn CatalogPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let reload = use_context::<Signal<u32>>();

    let load = state.with(|st| st.load.clone());
    let catalog = match load {
        LoadState::Loading => {
            return rsx! { LoadingPanel { message: "Loading services…" } };
        }
        LoadState::Failed(message) => {
            return rsx! {
                ErrorPanel { message, on_retry: move |_| request_reload(reload) }
            };
        }
        LoadState::Ready(catalog) => catalog,
    };

    let filter = state.with(|st| st.filter.clone());
    let view_mode = state.with(|st| st.view_mode);

    let total = catalog.services.len();
    let visible = state.with(|st| st.visible_services());
    let count = visible.len();
    let entries: Vec<_> = visible
        .into_iter()
        .map(|service| {
            let cheapest = is_cheapest(&service, &catalog.cheapest);
            (service, cheapest)
        })
        .collect();

    rsx! {
        div { class: "catalog",
            FilterBar { categories: catalog.category_options(), filter: filter.clone() }
            p { class: "result-count muted", "Showing {count} of {total} services" }
            if entries.is_empty() {
                div { class: "panel status-panel",
                    p { "No services match your filters." }
                }
            } else {
                match view_mode {
                    ViewMode::Cards => rsx! {
                        div { class: "card-grid",
                            for (service, cheapest) in entries {
                                ServiceCard { service, cheapest }
                            }
                        }
                    },
                    ViewMode::Table => rsx! {
                        ServiceTable {
                            rows: entries
                                .iter()
                                .map(|(service, cheapest)| ServiceRow::new(service, *cheapest))
                                .collect::<Vec<_>>(),
                        }
                    },
                }
            }
        }
    }
}
