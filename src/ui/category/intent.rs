use crate::domain::{CategoryDomain, ErrorKind};
use crate::ui::mvi::Intent;

/// Actions the view can send to the category store.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryIntent {
    /// The user selected a category.
    CategoryClicked { category_id: String },
}

impl Intent for CategoryIntent {}

/// Outcome of the store's fetch, fed through [`CategoryReducer`](super::CategoryReducer).
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryEvent {
    Loaded { categories: Vec<CategoryDomain> },
    Failed { kind: ErrorKind, message: String },
}

impl Intent for CategoryEvent {}
