use crate::domain::{CategoryDomain, ErrorKind};
use crate::ui::mvi::UiState;

/// Where the store is in its single fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadPhase {
    /// Fetch scheduled or in flight.
    #[default]
    Loading,
    /// The last fetch succeeded.
    Loaded,
    /// The fetch failed. Categories from before the failure are kept.
    Failed { kind: ErrorKind, message: String },
}

impl LoadPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Snapshot published by [`CategoryStore`](super::CategoryStore).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryViewState {
    /// Categories in the order the service returned them.
    pub categories: Vec<CategoryDomain>,
    pub phase: LoadPhase,
}

impl UiState for CategoryViewState {}
