use std::sync::Arc;

use async_trait::async_trait;

use super::error::PipelineResult;
use super::model::CategoryDomain;
use super::repository::CategoryRepository;

/// The boundary the presentation layer calls to obtain categories.
///
/// Stores depend on this trait, so a test double can stand in for the
/// whole data layer.
#[async_trait]
pub trait GetCategories: Send + Sync {
    async fn invoke(&self) -> PipelineResult<Vec<CategoryDomain>>;
}

/// Delegates straight to a [`CategoryRepository`].
pub struct GetCategoriesUseCase {
    repository: Arc<dyn CategoryRepository>,
}

impl GetCategoriesUseCase {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl GetCategories for GetCategoriesUseCase {
    async fn invoke(&self) -> PipelineResult<Vec<CategoryDomain>> {
        tracing::debug!("GetCategoriesUseCase invoked");
        self.repository.get_categories().await
    }
}
