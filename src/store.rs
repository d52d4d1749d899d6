//! In-memory route store.
//!
//! Reference implementation of [`RouteStore`] for tests and for callers
//! without a backing service. The networked implementation lives in
//! `rest_store`.

use crate::error::StoreError;
use crate::model::OptimizedRoute;
use crate::traits::RouteStore;

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    routes: Vec<OptimizedRoute>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteStore for InMemoryStore {
    fn insert(&mut self, route: &OptimizedRoute) -> Result<(), StoreError> {
        self.routes.push(route.clone());
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<OptimizedRoute>, StoreError> {
        Ok(self.routes.clone())
    }

    fn delete_by_id(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.routes.len();
        self.routes.retain(|route| route.id != id);
        if self.routes.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
