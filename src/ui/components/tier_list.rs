use dioxus::prelude::*;

use crate::domain::{format_price_display, PricingTier};

#[component]
pub fn TierList(tiers: Vec<PricingTier>) -> Element {
    rsx! {
        ul { class: "tier-list",
            for tier in tiers {
                li { class: "tier",
                    div { class: "tier-head",
                        span { class: "tier-name", "{tier.name}" }
                        span { class: "tier-price", "{format_price_display(&tier.price)}" }
                    }
                    if !tier.features.is_empty() {
                        ul { class: "feature-list",
                            for feature in tier.features {
                                li { "{feature}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Advantages and disadvantages side by side; empty lists are omitted.
#[component]
pub fn ProsCons(advantages: Vec<String>, disadvantages: Vec<String>) -> Element {
    rsx! {
        div { class: "pros-cons",
            if !advantages.is_empty() {
                div {
                    h4 { class: "section-label", "Advantages" }
                    ul { class: "pros",
                        for item in advantages {
                            li { "{item}" }
                        }
                    }
                }
            }
            if !disadvantages.is_empty() {
                div {
                    h4 { class: "section-label", "Disadvantages" }
                    ul { class: "cons",
                        for item in disadvantages {
                            li { "{item}" }
                        }
                    }
                }
            }
        }
    }
}
