//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ StateHolder ──→ watch::Receiver ──→ View
//!    ↑                                                         │
//!    └─────────────────────────────────────────────────────────┘
//! ```
//!
//! - **UiState**: immutable snapshot rendered by the view
//! - **Intent**: user action or system event (e.g. a finished fetch)
//! - **Reducer**: pure `(State, Intent) -> State`
//! - **StateHolder**: publishes the latest snapshot to any number of observers

mod holder;
mod intent;
mod reducer;
mod state;

pub use holder::StateHolder;
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
