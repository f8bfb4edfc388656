/// Marker trait for intents.
///
/// Intents are either user actions (a category was clicked) or events
/// produced by the system (a fetch completed). Reducers turn them into
/// new states.
pub trait Intent: Send + 'static {}
