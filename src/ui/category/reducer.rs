use crate::ui::category::intent::CategoryEvent;
use crate::ui::category::state::{CategoryViewState, LoadPhase};
use crate::ui::mvi::Reducer;

pub struct CategoryReducer;

impl Reducer for CategoryReducer {
    type State = CategoryViewState;
    type Intent = CategoryEvent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CategoryEvent::Loaded { categories } => CategoryViewState {
                categories,
                phase: LoadPhase::Loaded,
            },
            // Failure never clears what is already shown
            CategoryEvent::Failed { kind, message } => CategoryViewState {
                phase: LoadPhase::Failed { kind, message },
                ..state
            },
        }
    }
}
