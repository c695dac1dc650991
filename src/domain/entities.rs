use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Synthetic category that disables the category filter.
pub const ALL_CATEGORIES: &str = "all";

/// Identifier for services returned by the Scout API.
pub type ServiceId = String;

/// One pricing plan of a service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    /// Display string such as `₹525/month`, `Free`, `Custom` or `₹4.15/M input tokens`.
    pub price: String,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub advantages: Vec<String>,
    #[serde(default)]
    pub disadvantages: Vec<String>,
    pub tiers: Vec<PricingTier>,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub link: String,
}

impl Service {
    /// Tier at index 0; its price is what the catalog calls the starting price.
    pub fn starting_tier(&self) -> Option<&PricingTier> {
        self.tiers.first()
    }

    pub fn starting_price(&self) -> Option<&str> {
        self.starting_tier().map(|tier| tier.price.as_str())
    }
}

/// Backend pointer to the lowest-priced service of one category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheapestEntry {
    #[serde(default)]
    pub service: Option<Service>,
    #[allow(dead_code)]
    #[serde(default)]
    pub price: Option<f64>,
    #[allow(dead_code)]
    #[serde(default)]
    pub tier: Option<PricingTier>,
}

pub type CheapestMap = HashMap<String, CheapestEntry>;

/// Everything one successful load produces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub services: Vec<Service>,
    /// Backend categories, in response order, without the `all` sentinel.
    pub categories: Vec<String>,
    pub cheapest: CheapestMap,
}

impl Catalog {
    /// Category choices for the filter: `all` first, then backend order.
    pub fn category_options(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(self.categories.iter().cloned())
            .collect()
    }

    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render_json() -> serde_json::Value {
        json!({
            "id": "render",
            "name": "Render",
            "category": "Hosting",
            "description": "Cloud platform for static sites, web services, and databases",
            "tiers": [
                {"name": "Free", "price": "₹0/month", "features": ["750 hours/month"]},
                {"name": "Starter", "price": "₹525/month", "features": ["2 GB RAM"]}
            ],
            "advantages": ["Easy deployment", "Free tier available"],
            "disadvantages": ["Cold starts on free tier"],
            "link": "https://render.com/pricing",
            "logo_url": "https://cdn.jsdelivr.net/npm/simple-icons@v9/icons/render.svg"
        })
    }

    #[test]
    fn service_deserializes_backend_shape() {
        let service: Service = serde_json::from_value(render_json()).unwrap();
        assert_eq!(service.id, "render");
        assert_eq!(service.tiers.len(), 2);
        assert_eq!(service.starting_price(), Some("₹0/month"));
        assert_eq!(service.disadvantages, vec!["Cold starts on free tier"]);
        assert!(service.logo_url.is_some());
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let service: Service = serde_json::from_value(json!({
            "id": "x",
            "name": "X",
            "category": "Email",
            "description": "",
            "tiers": [{"name": "Basic", "price": "$5"}],
            "link": "https://example.com"
        }))
        .unwrap();
        assert!(service.advantages.is_empty());
        assert!(service.disadvantages.is_empty());
        assert!(service.logo_url.is_none());
        assert!(service.tiers[0].features.is_empty());
    }

    #[test]
    fn starting_tier_is_none_without_tiers() {
        let mut service: Service = serde_json::from_value(render_json()).unwrap();
        service.tiers.clear();
        assert!(service.starting_tier().is_none());
        assert!(service.starting_price().is_none());
    }

    #[test]
    fn cheapest_map_tolerates_null_service() {
        let map: CheapestMap = serde_json::from_value(json!({
            "Hosting": {"service": render_json(), "price": 0, "tier": {"name": "Free", "price": "₹0/month"}},
            "Database": {"service": null}
        }))
        .unwrap();
        assert_eq!(
            map["Hosting"].service.as_ref().map(|s| s.id.as_str()),
            Some("render")
        );
        assert!(map["Database"].service.is_none());
    }

    #[test]
    fn category_options_prepend_all_and_keep_backend_order() {
        let catalog = Catalog {
            categories: vec!["Hosting".into(), "Database".into(), "Email".into()],
            ..Catalog::default()
        };
        assert_eq!(
            catalog.category_options(),
            vec!["all", "Hosting", "Database", "Email"]
        );
    }
}
