//! Catalog model, filtering and price heuristics live here.

pub mod app_state;
pub mod catalog_filter;
pub mod entities;
pub mod pricing;

pub use app_state::{AppState, LoadState, PersistedState, Theme, ViewMode};
pub use catalog_filter::{is_cheapest, CatalogFilter, SortDirection, SortKey};
pub use entities::{Catalog, CheapestMap, PricingTier, Service, ALL_CATEGORIES};
pub use pricing::format_price_display;
