//! # Storage Layer
//!
//! This module defines the storage abstraction for garage. The [`CarStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, cloud, etc.) without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## The Snapshot Contract
//!
//! The store holds exactly one value: the full car collection. `load` returns
//! everything that was last saved (or an empty collection when nothing has
//! been saved yet), and `save` overwrites the whole slot with a new snapshot.
//! There are no partial or incremental writes; every mutation of the
//! collection is followed by one full `save`.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole collection in a single `cars.json` (JSON array)
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution

use crate::error::Result;
use crate::model::Car;

pub mod fs;
pub mod memory;

/// Abstract interface for car collection storage.
///
/// Implementations persist and retrieve the collection as one full snapshot.
pub trait CarStore {
    /// Load the persisted collection. An unsaved slot yields an empty Vec.
    fn load(&self) -> Result<Vec<Car>>;

    /// Overwrite the slot with a full snapshot of the collection.
    fn save(&mut self, cars: &[Car]) -> Result<()>;
}
