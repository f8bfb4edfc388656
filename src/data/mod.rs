//! Data layer: talks to the trivia service and maps its payload into
//! domain categories.

mod mapper;
mod repository;
mod response;
mod source;

pub use mapper::CategoryMapper;
pub use repository::CategoryRepositoryImpl;
pub use response::{RawCategory, RawCategoryList};
pub use source::{CategorySource, RemoteCategorySource};
