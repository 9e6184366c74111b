use super::model::{CategoriesEnvelope, MealsEnvelope};
use super::{RecipeDataSource, SourceError};
use crate::config::Config;
use crate::model::{Category, MealRecord, MealSummary};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Public v1 endpoint of TheMealDB, using the shared test key `1`.
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// HTTP client for TheMealDB JSON API.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    http: Client,
    base_url: String,
}

impl MealDbClient {
    /// Creates a client with the base URL and timeouts from `config`.
    pub fn from_config(config: &Config) -> Result<Self, SourceError> {
        let http = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;
        Ok(Self::with_client(http, &config.base_url))
    }

    /// Wraps an existing `reqwest` client.
    pub fn with_client(http: Client, base_url: &str) -> Self {
        MealDbClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SourceError> {
        let url = format!("{}/{endpoint}", self.base_url);
        debug!(%url, ?query, "requesting");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| SourceError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    async fn meal_summaries(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<Vec<MealSummary>>, SourceError> {
        let envelope: MealsEnvelope = self.get_json(endpoint, query).await?;
        Ok(envelope
            .meals
            .map(|meals| meals.iter().map(MealSummary::from_record).collect()))
    }
}

#[async_trait]
impl RecipeDataSource for MealDbClient {
    async fn fetch_categories(&self) -> Result<Vec<Category>, SourceError> {
        let envelope: CategoriesEnvelope = self.get_json("categories.php", &[]).await?;
        Ok(envelope
            .categories
            .unwrap_or_default()
            .into_iter()
            .map(Category::from)
            .collect())
    }

    async fn search_meals_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Vec<MealSummary>>, SourceError> {
        self.meal_summaries("search.php", &[("s", name)]).await
    }

    async fn fetch_meals_by_category(
        &self,
        category: &str,
    ) -> Result<Option<Vec<MealSummary>>, SourceError> {
        self.meal_summaries("filter.php", &[("c", category)]).await
    }

    async fn fetch_meal_by_id(&self, id: &str) -> Result<Option<MealRecord>, SourceError> {
        let envelope: MealsEnvelope = self.get_json("lookup.php", &[("i", id)]).await?;
        Ok(envelope.meals.and_then(|meals| meals.into_iter().next()))
    }
}
