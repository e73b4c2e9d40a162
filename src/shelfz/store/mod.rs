//! # Dataset Loader
//!
//! The catalog is backed by three static relations loaded once per
//! invocation. The [`CatalogStore`] trait abstracts where they come from:
//!
//! - [`fs::FileStore`]: a JSON catalog file on disk. A missing file loads
//!   the bundled seed catalog, so a fresh install browses something useful
//!   before `init` has ever run.
//! - [`memory::InMemoryStore`]: an in-memory `Datasets` value for tests and
//!   embedders.
//!
//! Stores hand out the raw relations only; joining and filtering happen in
//! [`crate::join`] and [`crate::filter`]. Referential integrity is *not*
//! checked at load time — the join is where a dangling reference fails.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;
use crate::model::{Category, Product, User};

pub mod fs;
pub mod memory;
pub mod seed;

/// The three relations backing the catalog, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datasets {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

/// Abstract source of catalog data.
pub trait CatalogStore {
    /// Load the full set of relations.
    fn load(&self) -> Result<Datasets>;

    /// Persist a full set of relations (used to scaffold new catalogs).
    fn save(&mut self, data: &Datasets) -> Result<()>;

    /// Where the data lives, for user-facing messages. `None` for stores
    /// with no on-disk location.
    fn location(&self) -> Option<PathBuf>;
}
