//! Domain layer: the category model, the repository contract and the
//! use case seam the presentation layer talks to.

mod error;
mod model;
mod repository;
mod use_case;

pub use error::{ErrorKind, FetchError, PipelineResult};
pub use model::CategoryDomain;
pub use repository::CategoryRepository;
pub use use_case::{GetCategories, GetCategoriesUseCase};
