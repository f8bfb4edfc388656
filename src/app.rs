//! Composition root.
//!
//! Wires source → repository → use case once at startup and hands out
//! stores bound to that use case.

use std::sync::Arc;

use crate::config::Config;
use crate::data::{CategoryMapper, CategoryRepositoryImpl, CategorySource, RemoteCategorySource};
use crate::domain::{CategoryRepository, FetchError, GetCategories, GetCategoriesUseCase};
use crate::ui::category::CategoryStore;

pub struct CategoryModule {
    get_categories: Arc<dyn GetCategories>,
}

impl CategoryModule {
    /// Build the production graph from configuration.
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let source: Arc<dyn CategorySource> = Arc::new(RemoteCategorySource::new(&config.api)?);
        Ok(Self::with_source(source))
    }

    /// Build the graph on top of an arbitrary source.
    pub fn with_source(source: Arc<dyn CategorySource>) -> Self {
        let repository: Arc<dyn CategoryRepository> =
            Arc::new(CategoryRepositoryImpl::new(source, CategoryMapper));
        Self {
            get_categories: Arc::new(GetCategoriesUseCase::new(repository)),
        }
    }

    pub fn get_categories(&self) -> Arc<dyn GetCategories> {
        Arc::clone(&self.get_categories)
    }

    /// Start a new UI session. Must be called from within a Tokio runtime.
    pub fn create_store(&self) -> CategoryStore {
        CategoryStore::new(self.get_categories())
    }
}
