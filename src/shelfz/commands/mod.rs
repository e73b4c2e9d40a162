use crate::config::ShelfzConfig;
use crate::model::{CatalogProduct, Category, User};

pub mod categories;
pub mod config;
pub mod init;
pub mod list;
pub mod owners;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured result of a command: the read model handed to whatever
/// presentation layer is driving the library.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub products: Vec<CatalogProduct>,
    pub owners: Vec<User>,
    pub categories: Vec<Category>,
    pub config: Option<ShelfzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_products(mut self, products: Vec<CatalogProduct>) -> Self {
        self.products = products;
        self
    }

    pub fn with_owners(mut self, owners: Vec<User>) -> Self {
        self.owners = owners;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_config(mut self, config: ShelfzConfig) -> Self {
        self.config = Some(config);
        self
    }
}
