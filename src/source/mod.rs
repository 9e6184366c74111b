//! Access to the remote recipe API.
//!
//! [`RecipeDataSource`] is the seam between the pipeline and the network;
//! [`MealDbClient`] is the HTTP implementation.

use crate::model::{Category, MealRecord, MealSummary};
use async_trait::async_trait;
use thiserror::Error;

mod client;
mod model;

pub use client::{MealDbClient, DEFAULT_BASE_URL};

/// Errors that can occur when talking to the recipe API.
///
/// Every variant means the request could not produce a usable answer.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{endpoint} answered with HTTP status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The remote recipe API.
///
/// `Ok(None)` means the API answered but had nothing for the request;
/// `Err` means the request itself failed.
#[async_trait]
pub trait RecipeDataSource: Send + Sync {
    /// Lists every category.
    async fn fetch_categories(&self) -> Result<Vec<Category>, SourceError>;

    /// Finds meals whose name matches `name`.
    async fn search_meals_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Vec<MealSummary>>, SourceError>;

    /// Lists the meals filed under `category`.
    async fn fetch_meals_by_category(
        &self,
        category: &str,
    ) -> Result<Option<Vec<MealSummary>>, SourceError>;

    /// Fetches the raw record of one meal.
    async fn fetch_meal_by_id(&self, id: &str) -> Result<Option<MealRecord>, SourceError>;
}

#[async_trait]
impl<T: RecipeDataSource + ?Sized> RecipeDataSource for std::sync::Arc<T> {
    async fn fetch_categories(&self) -> Result<Vec<Category>, SourceError> {
        (**self).fetch_categories().await
    }

    async fn search_meals_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Vec<MealSummary>>, SourceError> {
        (**self).search_meals_by_name(name).await
    }

    async fn fetch_meals_by_category(
        &self,
        category: &str,
    ) -> Result<Option<Vec<MealSummary>>, SourceError> {
        (**self).fetch_meals_by_category(category).await
    }

    async fn fetch_meal_by_id(&self, id: &str) -> Result<Option<MealRecord>, SourceError> {
        (**self).fetch_meal_by_id(id).await
    }
}
