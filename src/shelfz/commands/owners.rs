use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CatalogStore;

/// The select-owner control surface: every catalog user, in dataset order.
/// Users without categories are included — selecting one just yields an
/// empty table.
pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let data = store.load()?;
    Ok(CmdResult::default().with_owners(data.users))
}
