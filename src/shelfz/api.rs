//! # API Facade
//!
//! The single entry point for all shelfz operations, regardless of the UI
//! driving them. The facade dispatches to the command layer and returns
//! structured `Result<CmdResult>` values: no business logic, no I/O
//! assumptions, no presentation concerns. A terminal table, a web view, or
//! a test harness all consume the same read model.
//!
//! `CatalogApi<S: CatalogStore>` is generic over the dataset source:
//! production uses `FileStore`, tests use `InMemoryStore`.

use std::path::PathBuf;

use crate::commands;
use crate::error::Result;
use crate::filter::FilterState;
use crate::store::CatalogStore;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// The main API facade for shelfz operations.
pub struct CatalogApi<S: CatalogStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: CatalogStore> CatalogApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    /// The filtered, enriched, ordered rows for the given filter state.
    pub fn list_products(&self, filter: &FilterState) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    /// The select-owner control surface.
    pub fn owners(&self) -> Result<CmdResult> {
        commands::owners::run(&self.store)
    }

    /// The category multi-select control surface.
    pub fn categories(&self) -> Result<CmdResult> {
        commands::categories::run(&self.store)
    }

    /// Scaffold the bundled sample catalog through the store.
    pub fn init_catalog(&mut self) -> Result<CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}
