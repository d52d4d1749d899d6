//! PostgREST HTTP adapter for the route store.
//!
//! Speaks the PostgREST table dialect (the hosted backend the dashboard
//! persists to exposes exactly this): POST to insert, GET with a `select`
//! query to list, DELETE with an `id=eq.` filter to remove. Errors
//! propagate as [`StoreError`] rather than degrading to empty results.

use crate::error::StoreError;
use crate::model::OptimizedRoute;
use crate::traits::RouteStore;

#[derive(Debug, Clone)]
pub struct RestStoreConfig {
    pub base_url: String,
    pub table: String,
    pub timeout_secs: u64,
}

impl Default for RestStoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            table: "optimized_routes".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RestStore {
    config: RestStoreConfig,
    client: reqwest::blocking::Client,
}

impl RestStore {
    pub fn new(config: RestStoreConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn table_url(&self) -> String {
        format!("{}/{}", self.config.base_url, self.config.table)
    }
}

impl RouteStore for RestStore {
    fn insert(&mut self, route: &OptimizedRoute) -> Result<(), StoreError> {
        self.client
            .post(self.table_url())
            .header("Prefer", "return=minimal")
            .json(route)
            .send()
            .and_then(|resp| resp.error_for_status())?;

        Ok(())
    }

    fn list_all(&self) -> Result<Vec<OptimizedRoute>, StoreError> {
        let url = format!("{}?select=*&order=created_at.desc", self.table_url());
        let routes = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<Vec<OptimizedRoute>>())?;

        Ok(routes)
    }

    fn delete_by_id(&mut self, id: &str) -> Result<(), StoreError> {
        let url = format!("{}?id=eq.{}", self.table_url(), id);
        self.client
            .delete(url)
            .send()
            .and_then(|resp| resp.error_for_status())?;

        Ok(())
    }
}
