//! Single-service view. Reuses the loaded catalog and only asks the API
//! when the service is not already in memory (e.g. a deep link on the web).

use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{AppState, Service},
    infra::scout::{ScoutClient, ScoutClientError},
    ui::components::{
        category_badge::{CategoryBadge, CheapestBadge},
        service_card::starting_labels,
        status_panel::LoadingPanel,
        tier_list::{ProsCons, TierList},
    },
};

#[derive(Clone, Debug, PartialEq)]
enum DetailOutcome {
    Found(Service),
    NotFound,
    Failed,
}

#[component]
pub fn ServiceDetailPage(id: String) -> Element {
    let state = use_context::<Signal<AppState>>();

    let local = state.with(|st| {
        st.load
            .catalog()
            .and_then(|catalog| catalog.service(&id).cloned())
            .map(|service| {
                let cheapest = st.marks_cheapest(&service);
                (service, cheapest)
            })
    });

    let lookup_id = id.clone();
    let remote = use_resource(move || {
        let id = lookup_id.clone();
        async move {
            let in_memory = state
                .peek()
                .load
                .catalog()
                .map(|catalog| catalog.service(&id).is_some())
                .unwrap_or(false);
            if in_memory {
                return None;
            }
            Some(fetch_service(&id).await)
        }
    });

    if let Some((service, cheapest)) = local {
        return rsx! { ServiceDetailView { service, cheapest } };
    }

    let outcome = remote.read().clone();
    match outcome {
        Some(Some(DetailOutcome::Found(service))) => {
            let cheapest = state.with(|st| st.marks_cheapest(&service));
            rsx! { ServiceDetailView { service, cheapest } }
        }
        Some(Some(DetailOutcome::NotFound)) => rsx! {
            DetailMessage { text: "No service with id \"{id}\" exists." }
        },
        Some(Some(DetailOutcome::Failed)) => rsx! {
            DetailMessage { text: "Failed to load this service. Please try again later." }
        },
        _ => rsx! { LoadingPanel { message: "Loading service…" } },
    }
}

async fn fetch_service(id: &str) -> DetailOutcome {
    let client = match ScoutClient::new() {
        Ok(client) => client,
        Err(error) => {
            tracing::error!(%error, "Failed to initialise Scout client");
            return DetailOutcome::Failed;
        }
    };

    match client.get_service(id).await {
        Ok(service) => DetailOutcome::Found(service),
        Err(ScoutClientError::NotFound(_)) => {
            tracing::debug!(id, "Service not found");
            DetailOutcome::NotFound
        }
        Err(error) => {
            tracing::error!(id, %error, "Service detail request failed");
            DetailOutcome::Failed
        }
    }
}

#[component]
fn ServiceDetailView(service: Service, cheapest: bool) -> Element {
    let (starting_price, starting_tier) = starting_labels(&service);

    rsx! {
        div { class: "detail",
            Link { class: "link", to: Route::Home {}, "← Back to all services" }
            section { class: "panel detail-header",
                if let Some(logo) = service.logo_url.clone() {
                    img { class: "logo logo-large", src: "{logo}", alt: "{service.name} logo" }
                }
                div { class: "card-heading",
                    h1 { class: "detail-title", "{service.name}" }
                    div { class: "badge-row",
                        CategoryBadge { category: service.category.clone() }
                        if cheapest {
                            CheapestBadge { category: service.category.clone() }
                        }
                    }
                    p { class: "card-description", "{service.description}" }
                }
                div { class: "starting-price",
                    span { class: "section-label", "Starting at" }
                    span { class: "price", "{starting_price}" }
                    span { class: "muted", "{starting_tier}" }
                }
            }
            section { class: "panel",
                h2 { class: "section-label", "Pricing tiers" }
                TierList { tiers: service.tiers.clone() }
            }
            section { class: "panel",
                ProsCons {
                    advantages: service.advantages.clone(),
                    disadvantages: service.disadvantages.clone(),
                }
            }
            a {
                class: "btn btn-primary",
                href: "{service.link}",
                target: "_blank",
                rel: "noreferrer",
                "View official pricing ↗"
            }
        }
    }
}

#[component]
fn DetailMessage(text: String) -> Element {
    rsx! {
        div { class: "detail",
            Link { class: "link", to: Route::Home {}, "← Back to all services" }
            div { class: "panel status-panel",
                p { "{text}" }
            }
        }
    }
}
