//! The bundled sample catalog.
//!
//! Serves two roles: the default data a fresh install browses, and the
//! content `shelfz init` writes out as a starting point for a real catalog.

use once_cell::sync::Lazy;

use super::Datasets;
use crate::model::{Category, Product, Sex, User};

static SEED: Lazy<Datasets> = Lazy::new(|| Datasets {
    users: vec![
        User::new(1, "Roma", Sex::M),
        User::new(2, "Anna", Sex::F),
        User::new(3, "Max", Sex::M),
        User::new(4, "John", Sex::M),
    ],
    categories: vec![
        Category::new(1, "Grocery", "🍞", 2),
        Category::new(2, "Drinks", "🍷", 1),
        Category::new(3, "Fruits", "🍏", 2),
        Category::new(4, "Electronics", "💻", 1),
        Category::new(5, "Clothes", "👚", 3),
    ],
    products: vec![
        Product::new(1, "Milk", 1),
        Product::new(2, "Bread", 1),
        Product::new(3, "Garlic", 1),
        Product::new(4, "Coke", 2),
        Product::new(5, "Fanta", 2),
        Product::new(6, "Orange Juice", 2),
        Product::new(7, "Apples", 3),
        Product::new(8, "Bananas", 3),
        Product::new(9, "Samsung Tablet", 4),
        Product::new(10, "Wireless Mouse", 4),
        Product::new(11, "Jeans", 5),
        Product::new(12, "T-Shirt", 5),
    ],
});

pub fn datasets() -> Datasets {
    SEED.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::join::join_products;

    #[test]
    fn seed_is_referentially_consistent() {
        let rows = join_products(&datasets()).unwrap();
        assert_eq!(rows.len(), datasets().products.len());
    }

    #[test]
    fn seed_has_an_owner_without_products() {
        // John appears in the owners surface but owns no category, so
        // filtering by him must be able to produce an empty table.
        let data = datasets();
        let john = data.users.iter().find(|u| u.name == "John").unwrap();
        assert!(!data.categories.iter().any(|c| c.owner_id == john.id));
    }
}
