pub mod category;
pub mod mvi;
pub mod render;
