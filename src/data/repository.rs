use std::sync::Arc;

use async_trait::async_trait;

use crate::data::mapper::CategoryMapper;
use crate::data::source::CategorySource;
use crate::domain::{CategoryDomain, CategoryRepository, PipelineResult};

/// Repository backed by a [`CategorySource`] and a [`CategoryMapper`].
///
/// Source failures come back as the error arm, unchanged. Nothing is cached.
pub struct CategoryRepositoryImpl {
    source: Arc<dyn CategorySource>,
    mapper: CategoryMapper,
}

impl CategoryRepositoryImpl {
    pub fn new(source: Arc<dyn CategorySource>, mapper: CategoryMapper) -> Self {
        Self { source, mapper }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryImpl {
    async fn get_categories(&self) -> PipelineResult<Vec<CategoryDomain>> {
        tracing::debug!("Fetching categories");

        match self.source.fetch().await {
            Ok(raw) => Ok(self.mapper.map(raw)),
            Err(err) => {
                tracing::warn!(kind = ?err.kind(), error = %err, "Category fetch failed");
                Err(err)
            }
        }
    }
}
