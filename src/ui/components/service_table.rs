use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::Service;
use crate::ui::components::category_badge::CategoryBadge;
use crate::ui::components::service_card::starting_labels;

#[derive(Clone, PartialEq)]
pub struct ServiceRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub starting_price: String,
    pub starting_tier: String,
    pub tier_count: usize,
    pub cheapest: bool,
    pub link: String,
}

impl ServiceRow {
    pub fn new(service: &Service, cheapest: bool) -> Self {
        let (starting_price, starting_tier) = starting_labels(service);
        Self {
            id: service.id.clone(),
            name: service.name.clone(),
            category: service.category.clone(),
            starting_price,
            starting_tier,
            tier_count: service.tiers.len(),
            cheapest,
            link: service.link.clone(),
        }
    }

    fn row_class(&self) -> &'static str {
        if self.cheapest {
            "row-cheapest"
        } else {
            "row"
        }
    }
}

#[component]
pub fn ServiceTable(rows: Vec<ServiceRow>) -> Element {
    rsx! {
        div { class: "table-container",
            table { class: "service-table",
                thead {
                    tr {
                        th { "Service" }
                        th { "Category" }
                        th { class: "numeric", "Starting price" }
                        th { class: "numeric", "Tiers" }
                        th { span { class: "sr-only", "Links" } }
                    }
                }
                tbody {
                    for row in rows {
                        tr { class: "{row.row_class()}",
                            td {
                                div { class: "cell-name",
                                    span { class: "strong", "{row.name}" }
                                    if row.cheapest {
                                        span { class: "badge badge-cheapest", "★ Cheapest" }
                                    }
                                }
                            }
                            td { CategoryBadge { category: row.category.clone() } }
                            td { class: "numeric",
                                div { class: "strong", "{row.starting_price}" }
                                div { class: "muted", "{row.starting_tier}" }
                            }
                            td { class: "numeric", "{row.tier_count}" }
                            td { class: "cell-links",
                                Link {
                                    class: "link",
                                    to: Route::ServiceDetail { id: row.id.clone() },
                                    "Details"
                                }
                                a {
                                    class: "link",
                                    href: "{row.link}",
                                    target: "_blank",
                                    rel: "noreferrer",
                                    "Pricing ↗"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
