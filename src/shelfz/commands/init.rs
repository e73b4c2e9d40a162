use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{seed, CatalogStore};

/// Write the bundled sample catalog through the store, overwriting whatever
/// was there. The sample is a starting point meant to be edited.
pub fn run<S: CatalogStore>(store: &mut S) -> Result<CmdResult> {
    let data = seed::datasets();
    store.save(&data)?;

    let mut result = CmdResult::default();
    let target = match store.location() {
        Some(path) => format!("Initialized catalog at {}", path.display()),
        None => "Initialized catalog".to_string(),
    };
    result.add_message(CmdMessage::success(format!(
        "{} ({} products, {} categories)",
        target,
        data.products.len(),
        data.categories.len()
    )));
    Ok(result)
}
