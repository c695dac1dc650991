//! Category/search filtering and ordering of the service catalog.

use std::cmp::Ordering;

use super::entities::{CheapestMap, Service, ALL_CATEGORIES};
use super::pricing::starting_price_rank;

/// Sorting options for the catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Price,
    Category,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Price, SortKey::Category];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::Category => "category",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Price => "Starting price",
            Self::Category => "Category",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == raw)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// User selections that drive the derived catalog view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogFilter {
    pub category: String,
    pub search: String,
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
            sort_key: SortKey::default(),
            direction: SortDirection::default(),
        }
    }
}

impl CatalogFilter {
    pub fn matches_category(&self, service: &Service) -> bool {
        if self.category.to_lowercase() == ALL_CATEGORIES {
            return true;
        }
        service.category.to_lowercase() == self.category.to_lowercase()
    }

    pub fn matches_search(&self, service: &Service) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        service.name.to_lowercase().contains(&needle)
            || service.description.to_lowercase().contains(&needle)
            || service
                .advantages
                .iter()
                .any(|advantage| advantage.to_lowercase().contains(&needle))
    }

    pub fn matches(&self, service: &Service) -> bool {
        self.matches_category(service) && self.matches_search(service)
    }
}

/// Filter then stable-sort a copy of `services`; the input is left untouched.
pub fn filter_services(services: &[Service], filter: &CatalogFilter) -> Vec<Service> {
    let mut visible: Vec<Service> = services
        .iter()
        .filter(|service| filter.matches(service))
        .cloned()
        .collect();
    sort_services(&mut visible, filter.sort_key, filter.direction);
    visible
}

/// Stable sort; descending flips each comparison so ties keep list order.
pub fn sort_services(services: &mut [Service], key: SortKey, direction: SortDirection) {
    services.sort_by(|a, b| {
        let ord = match key {
            SortKey::Name => collate(&a.name, &b.name),
            SortKey::Category => collate(&a.category, &b.category),
            SortKey::Price => starting_price_rank(a.starting_price())
                .cmp(&starting_price_rank(b.starting_price())),
        };
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

/// Case-insensitive text order with a case-sensitive tie-break.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// True only for the exact service the backend marked cheapest in its category.
pub fn is_cheapest(service: &Service, cheapest: &CheapestMap) -> bool {
    cheapest
        .get(&service.category)
        .and_then(|entry| entry.service.as_ref())
        .map(|winner| winner.id == service.id)
        .unwrap_or(false)
}
