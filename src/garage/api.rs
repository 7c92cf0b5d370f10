//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the
//! single entry point for all garage operations, regardless of the UI being
//! used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! The API explicitly avoids:
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over CarStore
//!
//! `GarageApi<S: CarStore>` is generic over the storage backend:
//! - Production: `GarageApi<FileStore>`
//! - Testing: `GarageApi<InMemoryStore>`
//!
//! This enables testing the API layer without touching the filesystem.

use crate::collection::{ChangeListener, Garage};
use crate::commands;
use crate::error::Result;
use crate::model::{CarFields, CarId};
use crate::store::CarStore;

/// The main API facade for garage operations.
///
/// Generic over `CarStore` to allow different storage backends.
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct GarageApi<S: CarStore> {
    garage: Garage<S>,
    paths: commands::GaragePaths,
}

impl<S: CarStore> GarageApi<S> {
    /// Open the store and load the collection into memory.
    pub fn open(store: S, paths: commands::GaragePaths) -> Result<Self> {
        Ok(Self {
            garage: Garage::open(store)?,
            paths,
        })
    }

    pub fn add_car(&mut self, fields: CarFields) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.garage, fields)
    }

    pub fn update_car(&mut self, id: CarId, fields: CarFields) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.garage, id, fields)
    }

    pub fn delete_car(&mut self, id: CarId, skip_confirm: bool) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.garage, id, skip_confirm)
    }

    pub fn list_cars(&self, brand_filter: &str) -> Result<commands::CmdResult> {
        commands::list::run(&self.garage, brand_filter)
    }

    pub fn show_car(&self, id: CarId) -> Result<commands::CmdResult> {
        commands::show::run(&self.garage, id)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    /// Register a listener invoked with the full collection after every
    /// successful mutation.
    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.garage.subscribe(listener)
    }

    pub fn paths(&self) -> &commands::GaragePaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, GaragePaths, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn api() -> GarageApi<InMemoryStore> {
        let paths = GaragePaths {
            data: PathBuf::from("/tmp/garage-test"),
        };
        GarageApi::open(InMemoryStore::new(), paths).unwrap()
    }

    #[test]
    fn dispatches_add_then_list() {
        let mut api = api();
        api.add_car(CarFields::new("VW".into(), "Golf".into(), 2020, 15000.0))
            .unwrap();

        let listed = api.list_cars("").unwrap();
        assert_eq!(listed.listed_cars.len(), 1);
    }

    #[test]
    fn dispatches_show_for_unknown_id() {
        let api = api();
        let result = api.show_car(1).unwrap();
        assert_eq!(result.messages[0].content, "Car not found!");
    }
}
