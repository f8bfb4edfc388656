use async_trait::async_trait;

use super::error::PipelineResult;
use super::model::CategoryDomain;

/// Source of domain categories.
///
/// Implementations fetch and map the list, reporting any failure through
/// the error arm of [`PipelineResult`] rather than panicking.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Fetch the current category list, in the order the service returned it.
    async fn get_categories(&self) -> PipelineResult<Vec<CategoryDomain>>;
}
