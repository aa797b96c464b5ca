//! Session layer: the controller that sequences engine calls for one
//! player, and the snapshot format it persists.
//!
//! ## Key Types
//!
//! - `Session`: Owns the live state, gates actions, saves after each step
//! - `Snapshot`: Persisted subset of `GameState` (JSON or bincode)
//! - `SnapshotStore`: Save backend (`MemoryStore`, `FileStore`)

pub mod controller;
pub mod snapshot;
pub mod store;

pub use controller::{GameOver, Session};
pub use snapshot::Snapshot;
pub use store::{FileStore, MemoryStore, SnapshotStore};
