use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    infra::scout::{load_catalog, LoadFailure, ScoutClient},
    ui::{
        pages::{CatalogPage, ServiceDetailPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/service/:id")]
    ServiceDetail { id: String },
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    // Bumped by the retry button; the catalog resource re-runs on every change.
    let reload = use_signal(|| 0u32);
    use_context_provider(|| reload.clone());

    let _catalog = use_resource({
        let state = state.clone();
        move || {
            let attempt = reload();
            async move { fetch_catalog(state.clone(), attempt).await }
        }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        tracing::warn!(error = %err, "Failed to persist user state");
    }
}

pub fn request_reload(mut reload: Signal<u32>) {
    reload.with_mut(|attempt| *attempt += 1);
}

async fn fetch_catalog(mut state: Signal<AppState>, attempt: u32) {
    tracing::debug!(attempt, "Starting catalog load");
    state.with_mut(|st| st.begin_load());

    let result = match ScoutClient::new() {
        Ok(client) => load_catalog(&client).await,
        Err(err) => {
            tracing::error!(error = %err, "Failed to initialise Scout client");
            Err(LoadFailure::from(err))
        }
    };

    state.with_mut(|st| st.finish_load(result));
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { CatalogPage {} } }
}

#[component]
pub fn ServiceDetail(id: String) -> Element {
    rsx! { Shell { ServiceDetailPage { key: "{id}", id } } }
}
