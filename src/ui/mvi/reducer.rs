use super::intent::Intent;
use super::state::UiState;

/// Computes the next state for an intent.
///
/// Reducers are the only place transitions are decided. They must stay
/// pure: no I/O, no logging, no clock.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
