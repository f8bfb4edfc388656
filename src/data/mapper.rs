use crate::data::response::RawCategoryList;
use crate::domain::CategoryDomain;

/// Converts the wire representation into domain categories.
///
/// One domain item per raw item, same order, no filtering.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryMapper;

impl CategoryMapper {
    pub fn map(&self, response: RawCategoryList) -> Vec<CategoryDomain> {
        response
            .items
            .into_iter()
            .map(|raw| CategoryDomain::new(raw.id, raw.name))
            .collect()
    }
}
