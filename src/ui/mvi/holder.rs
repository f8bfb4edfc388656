use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

use super::reducer::Reducer;
use super::state::UiState;

/// Holds the current snapshot and broadcasts replacements.
///
/// Backed by a `watch` channel: new subscribers see the latest snapshot
/// right away, and a reader never observes a half-written state. Once
/// [`close`](Self::close) is called every further update is dropped.
pub struct StateHolder<S: UiState> {
    sender: watch::Sender<S>,
    closed: AtomicBool,
}

impl<S: UiState> StateHolder<S> {
    pub fn new(initial: S) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender,
            closed: AtomicBool::new(false),
        }
    }

    /// Clone of the current snapshot.
    pub fn current(&self) -> S {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.sender.subscribe()
    }

    /// Run `R` over the current snapshot and publish the result.
    ///
    /// Returns `true` if observers were notified. Equal states and updates
    /// after `close` are not published.
    pub fn apply<R>(&self, intent: R::Intent) -> bool
    where
        R: Reducer<State = S>,
    {
        self.sender.send_if_modified(|state| {
            if self.closed.load(Ordering::SeqCst) {
                return false;
            }
            let next = R::reduce(state.clone(), intent);
            if next == *state {
                return false;
            }
            *state = next;
            true
        })
    }

    /// Stop publishing and wake every receiver so waiters can see the flag.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.sender.send_modify(|_| {});
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}
