use std::path::PathBuf;

use super::{seed, CatalogStore, Datasets};
use crate::error::Result;

/// In-memory catalog for testing and embedding.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    data: Datasets,
}

impl InMemoryStore {
    pub fn new(data: Datasets) -> Self {
        Self { data }
    }

    /// A store pre-populated with the bundled sample catalog.
    pub fn seeded() -> Self {
        Self {
            data: seed::datasets(),
        }
    }
}

impl CatalogStore for InMemoryStore {
    fn load(&self) -> Result<Datasets> {
        Ok(self.data.clone())
    }

    fn save(&mut self, data: &Datasets) -> Result<()> {
        self.data = data.clone();
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        None
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Category, Product, Sex, User};

    pub struct CatalogFixture {
        pub data: Datasets,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                data: Datasets::default(),
            }
        }

        pub fn with_user(mut self, id: u32, name: &str, sex: Sex) -> Self {
            self.data.users.push(User::new(id, name, sex));
            self
        }

        pub fn with_category(mut self, id: u32, title: &str, owner_id: u32) -> Self {
            self.data
                .categories
                .push(Category::new(id, title, "📦", owner_id));
            self
        }

        pub fn with_product(mut self, id: u32, name: &str, category_id: u32) -> Self {
            self.data.products.push(Product::new(id, name, category_id));
            self
        }

        pub fn store(self) -> InMemoryStore {
            InMemoryStore::new(self.data)
        }
    }
}
