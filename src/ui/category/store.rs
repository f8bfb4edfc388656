//! Reactive store behind the category screen.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::GetCategories;
use crate::ui::category::intent::{CategoryEvent, CategoryIntent};
use crate::ui::category::reducer::CategoryReducer;
use crate::ui::category::state::CategoryViewState;
use crate::ui::mvi::StateHolder;

/// Owns the category snapshot for one UI session.
///
/// Creating the store schedules exactly one fetch. A successful fetch
/// replaces the categories; a failed one only moves the phase to
/// `Failed`. Closing or dropping the store aborts a fetch still in flight
/// and discards its result.
pub struct CategoryStore {
    state: Arc<StateHolder<CategoryViewState>>,
    fetch_task: JoinHandle<()>,
}

impl CategoryStore {
    /// Create the store and start loading.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(get_categories: Arc<dyn GetCategories>) -> Self {
        let state = Arc::new(StateHolder::new(CategoryViewState::default()));

        let task_state = Arc::clone(&state);
        let fetch_task = tokio::spawn(async move {
            let event = match get_categories.invoke().await {
                Ok(categories) => {
                    tracing::debug!(count = categories.len(), "Categories loaded");
                    CategoryEvent::Loaded { categories }
                }
                Err(err) => CategoryEvent::Failed {
                    kind: err.kind(),
                    message: err.to_string(),
                },
            };
            task_state.apply::<CategoryReducer>(event);
        });

        Self { state, fetch_task }
    }

    /// Current snapshot.
    pub fn state(&self) -> CategoryViewState {
        self.state.current()
    }

    /// Observe snapshots. The receiver starts at the current one.
    pub fn subscribe(&self) -> watch::Receiver<CategoryViewState> {
        self.state.subscribe()
    }

    /// Handle an action from the view.
    pub fn dispatch(&self, intent: CategoryIntent) {
        match intent {
            CategoryIntent::CategoryClicked { category_id } => {
                tracing::debug!(category_id = %category_id, "Category clicked");
            }
            #[allow(unreachable_patterns)]
            _ => {}
        }
    }

    /// Wait until the fetch has settled or the store is closed, and return
    /// the snapshot at that point.
    pub async fn wait_settled(&self) -> CategoryViewState {
        let mut rx = self.subscribe();
        if self.state.is_closed() {
            let current = rx.borrow().clone();
            return current;
        }

        let settled = match rx
            .wait_for(|s| !s.phase.is_loading() || self.state.is_closed())
            .await
        {
            Ok(snapshot) => snapshot.clone(),
            Err(_) => self.state(),
        };
        settled
    }

    /// End the session: stop publishing and abort the fetch if pending.
    pub fn close(&self) {
        if self.state.is_closed() {
            return;
        }
        self.state.close();
        self.fetch_task.abort();
        tracing::debug!("Category store closed");
    }

    pub fn is_closed(&self) -> bool {
        self.state.is_closed()
    }
}

impl Drop for CategoryStore {
    fn drop(&mut self) {
        self.close();
    }
}
