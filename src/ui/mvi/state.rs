/// Marker trait for published UI snapshots.
///
/// Snapshots are replaced wholesale, never edited in place, so `Clone` is
/// how a new one is derived. `PartialEq` lets holders skip no-op updates.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
