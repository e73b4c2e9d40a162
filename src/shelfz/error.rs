use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfzError {
    #[error("Product {product_id} references unknown category {category_id}")]
    UnknownCategory { product_id: u32, category_id: u32 },

    #[error("Category {category_id} references unknown owner {owner_id}")]
    UnknownOwner { category_id: u32, owner_id: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ShelfzError>;
