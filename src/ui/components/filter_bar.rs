use dioxus::prelude::*;

use crate::domain::{AppState, CatalogFilter, SortKey, ALL_CATEGORIES};
use crate::ui::theme;

/// Category, search and sort controls. Every change writes straight into `AppState::filter`.
#[component]
pub fn FilterBar(categories: Vec<String>, filter: CatalogFilter) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let is_default = filter == CatalogFilter::default();

    rsx! {
        div { class: "panel filter-bar",
            div { class: "field field-wide",
                label { class: "section-label", r#for: "search", "Search" }
                input {
                    id: "search",
                    class: "control",
                    r#type: "search",
                    placeholder: "Search by name, description or advantage",
                    value: "{filter.search}",
                    oninput: move |evt| state.with_mut(|st| st.filter.search = evt.value()),
                }
            }
            div { class: "field",
                label { class: "section-label", r#for: "category", "Category" }
                select {
                    id: "category",
                    class: "control",
                    value: "{filter.category}",
                    onchange: move |evt| state.with_mut(|st| st.filter.category = evt.value()),
                    for category in categories {
                        option {
                            value: "{category}",
                            selected: category == filter.category,
                            "{category_label(&category)}"
                        }
                    }
                }
            }
            div { class: "field",
                label { class: "section-label", r#for: "sort", "Sort by" }
                select {
                    id: "sort",
                    class: "control",
                    value: "{filter.sort_key.as_str()}",
                    onchange: move |evt| {
                        if let Some(key) = SortKey::parse(&evt.value()) {
                            state.with_mut(|st| st.filter.sort_key = key);
                        }
                    },
                    for key in SortKey::ALL {
                        option {
                            value: "{key.as_str()}",
                            selected: key == filter.sort_key,
                            "{key.label()}"
                        }
                    }
                }
            }
            div { class: "field field-actions",
                button {
                    class: "btn btn-ghost",
                    title: "Toggle sort direction",
                    onclick: move |_| state.with_mut(|st| st.filter.direction = st.filter.direction.toggled()),
                    "{theme::direction_label(filter.direction)}"
                }
                button {
                    class: "btn btn-ghost",
                    disabled: is_default,
                    onclick: move |_| state.with_mut(|st| st.filter = CatalogFilter::default()),
                    "Reset"
                }
            }
        }
    }
}

fn category_label(category: &str) -> String {
    if category == ALL_CATEGORIES {
        "All categories".to_string()
    } else {
        category.to_string()
    }
}
