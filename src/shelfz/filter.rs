//! Catalog filtering.
//!
//! [`FilterState`] holds the filter dimensions a browsing session can set
//! (owner, free-text search, category multi-select) and applies them to
//! joined catalog rows. A dimension at its default value is inactive and
//! skipped entirely; active dimensions compose as a logical AND.

use std::collections::BTreeSet;

use crate::model::CatalogProduct;

/// The owner dimension. `All` disables the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OwnerFilter {
    #[default]
    All,
    Name(String),
}

impl From<&str> for OwnerFilter {
    fn from(s: &str) -> Self {
        if s == "All" {
            OwnerFilter::All
        } else {
            OwnerFilter::Name(s.to_string())
        }
    }
}

impl From<String> for OwnerFilter {
    fn from(s: String) -> Self {
        OwnerFilter::from(s.as_str())
    }
}

impl std::fmt::Display for OwnerFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OwnerFilter::All => write!(f, "All"),
            OwnerFilter::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Current filter selections for a browsing session.
///
/// Fields are private: every change goes through the mutation API below, so
/// consumers of the read model can never scribble on the state behind the
/// controller's back. Applying the state never modifies it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    owner: OwnerFilter,
    search: String,
    categories: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(&self) -> &OwnerFilter {
        &self.owner
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    /// Replace the owner selection. Any name is accepted; names that match
    /// no catalog user simply filter everything out.
    pub fn set_owner(&mut self, owner: impl Into<OwnerFilter>) {
        self.owner = owner.into();
    }

    /// Replace the search text verbatim. No trimming: whitespace is part of
    /// the needle.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Add the category to the active set, or remove it if already active.
    pub fn toggle_category(&mut self, title: impl Into<String>) {
        let title = title.into();
        if !self.categories.remove(&title) {
            self.categories.insert(title);
        }
    }

    pub fn clear_categories(&mut self) {
        self.categories.clear();
    }

    /// Return every dimension to its default in one step.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply the active dimensions to `rows`, preserving order.
    ///
    /// One `retain` pass per active dimension: owner is exact and
    /// case-sensitive, search is a case-insensitive substring match on the
    /// product name, categories match on title membership.
    pub fn apply(&self, rows: &[CatalogProduct]) -> Vec<CatalogProduct> {
        let mut visible: Vec<CatalogProduct> = rows.to_vec();

        if let OwnerFilter::Name(name) = &self.owner {
            visible.retain(|row| row.user.name == *name);
        }

        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            visible.retain(|row| row.product.name.to_lowercase().contains(&needle));
        }

        if !self.categories.is_empty() {
            visible.retain(|row| self.categories.contains(&row.category.title));
        }

        visible
    }
}
