use serde::{Deserialize, Serialize};

use super::catalog_filter::{filter_services, is_cheapest, CatalogFilter};
use super::entities::{Catalog, Service};

/// Shown for every load failure; the underlying cause only goes to the log.
pub const LOAD_FAILURE_MESSAGE: &str =
    "Failed to load services. Please check that the API is reachable and try again.";

/// Colour scheme of the whole application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Cards => "Cards",
            ViewMode::Table => "Table",
        }
    }
}

/// Screen lifecycle: `Loading` ends in `Ready` or `Failed`; retry goes back to `Loading`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Catalog),
    Failed(String),
}

impl LoadState {
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            LoadState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub theme: Theme,
    pub view_mode: ViewMode,
    pub filter: CatalogFilter,
    pub load: LoadState,
}

impl AppState {
    pub fn begin_load(&mut self) {
        self.load = LoadState::Loading;
    }

    pub fn finish_load<E>(&mut self, result: Result<Catalog, E>) {
        self.load = match result {
            Ok(catalog) => LoadState::Ready(catalog),
            Err(_) => LoadState::Failed(LOAD_FAILURE_MESSAGE.to_string()),
        };
    }

    /// Services to display for the current filter; empty unless `Ready`.
    pub fn visible_services(&self) -> Vec<Service> {
        self.load
            .catalog()
            .map(|catalog| filter_services(&catalog.services, &self.filter))
            .unwrap_or_default()
    }

    /// Whether `service` leads its category in the loaded cheapest map.
    /// Always `false` until a catalog is `Ready`.
    pub fn marks_cheapest(&self, service: &Service) -> bool {
        self.load
            .catalog()
            .is_some_and(|catalog| is_cheapest(service, &catalog.cheapest))
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.theme = persisted.theme;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState { theme: self.theme }
    }
}

/// Preferences that survive restarts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CheapestEntry, PricingTier};

    fn catalog() -> Catalog {
        let service = |id: &str, name: &str, category: &str| Service {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            description: String::new(),
            advantages: Vec::new(),
            disadvantages: Vec::new(),
            tiers: vec![PricingTier {
                name: "Free".to_string(),
                price: "Free".to_string(),
                features: Vec::new(),
            }],
            logo_url: None,
            link: String::new(),
        };
        Catalog {
            services: vec![
                service("vercel", "Vercel", "Hosting"),
                service("resend", "Resend", "Email"),
            ],
            categories: vec!["Email".to_string(), "Hosting".to_string()],
            ..Catalog::default()
        }
    }

    #[test]
    fn starts_loading_with_light_theme() {
        let state = AppState::default();
        assert_eq!(state.load, LoadState::Loading);
        assert_eq!(state.theme, Theme::Light);
        assert!(state.visible_services().is_empty());
    }

    #[test]
    fn failed_load_keeps_no_partial_data() {
        let mut state = AppState::default();
        state.finish_load::<&str>(Err("categories endpoint down"));
        assert_eq!(
            state.load,
            LoadState::Failed(LOAD_FAILURE_MESSAGE.to_string())
        );
        assert!(state.load.catalog().is_none());
        assert!(state.visible_services().is_empty());
    }

    #[test]
    fn retry_returns_to_loading_then_ready() {
        let mut state = AppState::default();
        state.finish_load::<&str>(Err("boom"));
        state.begin_load();
        assert_eq!(state.load, LoadState::Loading);
        state.finish_load::<&str>(Ok(catalog()));
        assert_eq!(state.visible_services().len(), 2);
    }

    #[test]
    fn visible_services_follow_filter() {
        let mut state = AppState::default();
        state.finish_load::<&str>(Ok(catalog()));
        state.filter.category = "email".to_string();
        let visible = state.visible_services();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "resend");
    }

    #[test]
    fn cheapest_mark_uses_loaded_map_even_for_unlisted_services() {
        let mut state = AppState::default();
        let mut loaded = catalog();
        let mut outsider = loaded.services[1].clone();
        outsider.id = "postmark".to_string();
        loaded.cheapest.insert(
            "Email".to_string(),
            CheapestEntry {
                service: Some(outsider.clone()),
                price: Some(0.0),
                tier: None,
            },
        );

        assert!(!state.marks_cheapest(&outsider));
        state.finish_load::<&str>(Ok(loaded));
        assert!(state.marks_cheapest(&outsider));
        assert!(!state.marks_cheapest(&state.visible_services()[0]));
    }

    #[test]
    fn theme_toggles_and_persists() {
        let mut state = AppState::default();
        state.theme = state.theme.toggled();
        assert_eq!(state.theme, Theme::Dark);

        let json = serde_json::to_string(&state.to_persisted()).unwrap();
        assert_eq!(json, r#"{"theme":"dark"}"#);

        let mut restored = AppState::default();
        restored.apply_persisted(serde_json::from_str(&json).unwrap());
        assert_eq!(restored.theme, Theme::Dark);
    }

    #[test]
    fn missing_theme_defaults_to_light() {
        let persisted: PersistedState = serde_json::from_str("{}").unwrap();
        assert_eq!(persisted.theme, Theme::Light);
    }
}
