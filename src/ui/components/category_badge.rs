use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn CategoryBadge(category: String) -> Element {
    rsx! {
        span { class: "{theme::category_badge(&category)}", "{category}" }
    }
}

#[component]
pub fn CheapestBadge(category: String) -> Element {
    rsx! {
        span { class: "badge badge-cheapest", title: "Lowest starting price in {category}", "★ Cheapest in {category}" }
    }
}
