// Public API
pub use store::{InMemorySnapshotStore, MatchSnapshot, SnapshotError, SnapshotStore};

// Internal modules
mod store;
