//! Fetches trivia categories, maps them into domain values and publishes
//! them as an observable snapshot for a view to render.
//!
//! ```text
//! RemoteCategorySource ─→ CategoryMapper ─→ CategoryRepositoryImpl
//!         ─→ GetCategoriesUseCase ─→ CategoryStore ─→ view
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod logging;
pub mod ui;
