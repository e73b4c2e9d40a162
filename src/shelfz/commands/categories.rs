use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CatalogStore;

/// The category multi-select control surface, in dataset order.
pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let data = store.load()?;
    Ok(CmdResult::default().with_categories(data.categories))
}
