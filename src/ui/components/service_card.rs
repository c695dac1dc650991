use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{format_price_display, Service};
use crate::ui::components::category_badge::{CategoryBadge, CheapestBadge};
use crate::ui::components::tier_list::{ProsCons, TierList};
use crate::ui::theme;

#[component]
pub fn ServiceCard(service: Service, cheapest: bool) -> Element {
    let (starting_price, starting_tier) = starting_labels(&service);
    let detail_route = Route::ServiceDetail {
        id: service.id.clone(),
    };

    rsx! {
        article { class: "{theme::card_class(cheapest)}",
            header { class: "card-header",
                if let Some(logo) = service.logo_url.clone() {
                    img { class: "logo", src: "{logo}", alt: "{service.name} logo" }
                }
                div { class: "card-heading",
                    h3 { class: "card-title", "{service.name}" }
                    CategoryBadge { category: service.category.clone() }
                }
            }
            if cheapest {
                CheapestBadge { category: service.category.clone() }
            }
            p { class: "card-description", "{service.description}" }
            div { class: "starting-price",
                span { class: "section-label", "Starting at" }
                span { class: "price", "{starting_price}" }
                span { class: "muted", "{starting_tier}" }
            }
            TierList { tiers: service.tiers.clone() }
            ProsCons {
                advantages: service.advantages.clone(),
                disadvantages: service.disadvantages.clone(),
            }
            footer { class: "card-footer",
                Link { class: "link", to: detail_route, "Details" }
                a {
                    class: "link",
                    href: "{service.link}",
                    target: "_blank",
                    rel: "noreferrer",
                    "View pricing ↗"
                }
            }
        }
    }
}

/// Formatted starting price and its tier name, dashes when the service has no tiers.
pub fn starting_labels(service: &Service) -> (String, String) {
    service
        .starting_tier()
        .map(|tier| (format_price_display(&tier.price), tier.name.clone()))
        .unwrap_or_else(|| ("—".to_string(), String::new()))
}
