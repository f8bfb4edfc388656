mod intent;
mod reducer;
mod state;
mod store;

pub use intent::{CategoryEvent, CategoryIntent};
pub use reducer::CategoryReducer;
pub use state::{CategoryViewState, LoadPhase};
pub use store::CategoryStore;
