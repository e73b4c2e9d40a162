use crate::error::{Result, ShelfzError};
use crate::model::CatalogProduct;
use crate::store::Datasets;

/// Joins every product with its category and the category's owner.
///
/// Rows come back in the products' original order. Resolution is by exact
/// id equality, first match wins. A product pointing at a missing category,
/// or a category pointing at a missing owner, is a data defect in the
/// catalog and fails the whole join rather than dropping the row.
pub fn join_products(data: &Datasets) -> Result<Vec<CatalogProduct>> {
    data.products
        .iter()
        .map(|product| {
            let category = data
                .categories
                .iter()
                .find(|category| category.id == product.category_id)
                .ok_or(ShelfzError::UnknownCategory {
                    product_id: product.id,
                    category_id: product.category_id,
                })?;
            let user = data
                .users
                .iter()
                .find(|user| user.id == category.owner_id)
                .ok_or(ShelfzError::UnknownOwner {
                    category_id: category.id,
                    owner_id: category.owner_id,
                })?;

            Ok(CatalogProduct {
                product: product.clone(),
                category: category.clone(),
                user: user.clone(),
            })
        })
        .collect()
}
