//! Thin asynchronous client for the SaaS Scout API.
//!
//! - Provides typed accessors for services, categories and the cheapest map.
//! - `load_catalog` fetches the three resources concurrently and fails fast.

use std::sync::OnceLock;

use reqwest::{Client, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

use crate::domain::{Catalog, CheapestMap, Service};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";
#[cfg(not(target_arch = "wasm32"))]
pub const BASE_URL_ENV: &str = "SAAS_SCOUT_API_URL";
const USER_AGENT: &str = concat!("saas-scout/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ScoutClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("base URL cannot carry a path: {0}")]
    InvalidBase(String),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("not found: {0}")]
    NotFound(String),
}

/// Any failed read during a catalog load. Callers show one static message for all of them.
#[derive(Debug, Error)]
#[error("catalog load failed: {source}")]
pub struct LoadFailure {
    #[from]
    source: ScoutClientError,
}

/// The three reads a catalog load needs.
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    async fn services(&self) -> Result<Vec<Service>, ScoutClientError>;
    async fn categories(&self) -> Result<Vec<String>, ScoutClientError>;
    async fn cheapest(&self) -> Result<CheapestMap, ScoutClientError>;
}

/// Issue all three reads at once; the first failure aborts the load.
pub async fn load_catalog<S: CatalogSource>(source: &S) -> Result<Catalog, LoadFailure> {
    tracing::info!("Loading service catalog");
    match tokio::try_join!(source.services(), source.categories(), source.cheapest()) {
        Ok((services, categories, cheapest)) => {
            tracing::info!(
                services = services.len(),
                categories = categories.len(),
                cheapest = cheapest.len(),
                "Catalog loaded"
            );
            Ok(Catalog {
                services,
                categories,
                cheapest,
            })
        }
        Err(error) => {
            tracing::error!(%error, "Catalog load failed");
            Err(error.into())
        }
    }
}

/// Picks the API base URL: runtime override, then build-time override, then localhost.
pub fn resolve_base_url(runtime: Option<String>, build_time: Option<&str>) -> String {
    let chosen = runtime
        .filter(|value| !value.trim().is_empty())
        .or_else(|| {
            build_time
                .filter(|value| !value.trim().is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let trimmed = chosen.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

/// Base URL for this process, resolved on first use.
pub fn configured_base_url() -> &'static str {
    static BASE_URL: OnceLock<String> = OnceLock::new();
    BASE_URL.get_or_init(|| {
        #[cfg(not(target_arch = "wasm32"))]
        let runtime = std::env::var(BASE_URL_ENV).ok();
        #[cfg(target_arch = "wasm32")]
        let runtime = None;

        resolve_base_url(runtime, option_env!("SAAS_SCOUT_API_URL"))
    })
}

#[derive(Debug, Deserialize)]
struct CategoriesDto {
    #[serde(default)]
    categories: Vec<String>,
}

#[derive(Clone)]
pub struct ScoutClient {
    http: Client,
    base_url: Url,
}

impl ScoutClient {
    pub fn new() -> Result<Self, ScoutClientError> {
        Self::with_base_url(configured_base_url())
    }

    pub fn with_base_url(base: &str) -> Result<Self, ScoutClientError> {
        let base_url = Url::parse(&resolve_base_url(Some(base.to_string()), None))?;
        if base_url.cannot_be_a_base() {
            return Err(ScoutClientError::InvalidBase(base.to_string()));
        }

        #[cfg(not(target_arch = "wasm32"))]
        let builder = Client::builder().user_agent(USER_AGENT);
        #[cfg(target_arch = "wasm32")]
        let builder = Client::builder();

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    pub async fn get_services(&self) -> Result<Vec<Service>, ScoutClientError> {
        let url = self.url("api/services")?;
        self.fetch_json(url).await
    }

    pub async fn get_service(&self, id: &str) -> Result<Service, ScoutClientError> {
        let url = self.service_url(id)?;
        tracing::debug!(%url, "Fetching service detail");
        self.fetch_json(url).await
    }

    pub async fn get_categories(&self) -> Result<Vec<String>, ScoutClientError> {
        let url = self.url("api/categories")?;
        let dto: CategoriesDto = self.fetch_json(url).await?;
        Ok(dto.categories)
    }

    pub async fn get_cheapest(&self) -> Result<CheapestMap, ScoutClientError> {
        let url = self.url("api/cheapest")?;
        self.fetch_json(url).await
    }

    async fn fetch_json<T>(&self, url: Url) -> Result<T, ScoutClientError>
    where
        T: DeserializeOwned,
    {
        let response = self.http.get(url.clone()).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ScoutClientError::NotFound(url.path().to_string()));
        }
        Ok(response.error_for_status()?.json().await?)
    }

    fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }

    fn service_url(&self, id: &str) -> Result<Url, ScoutClientError> {
        let mut url = self.url("api/services")?;
        url.path_segments_mut()
            .map_err(|_| ScoutClientError::InvalidBase(self.base_url.to_string()))?
            .push(id);
        Ok(url)
    }
}

impl CatalogSource for ScoutClient {
    async fn services(&self) -> Result<Vec<Service>, ScoutClientError> {
        self.get_services().await
    }

    async fn categories(&self) -> Result<Vec<String>, ScoutClientError> {
        self.get_categories().await
    }

    async fn cheapest(&self) -> Result<CheapestMap, ScoutClientError> {
        self.get_cheapest().await
    }
}
