use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::FilterState;
use crate::join::join_products;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &S, filter: &FilterState) -> Result<CmdResult> {
    let data = store.load()?;
    let rows = join_products(&data)?;
    let visible = filter.apply(&rows);

    Ok(CmdResult::default().with_products(visible))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sex;
    use crate::store::memory::fixtures::CatalogFixture;

    fn store() -> crate::store::memory::InMemoryStore {
        CatalogFixture::new()
            .with_user(1, "Roma", Sex::M)
            .with_user(2, "Anna", Sex::F)
            .with_category(10, "Grocery", 1)
            .with_category(20, "Electronics", 2)
            .with_product(100, "Milk", 10)
            .with_product(200, "Samsung Tablet", 20)
            .store()
    }

    #[test]
    fn lists_the_whole_catalog_by_default() {
        let result = run(&store(), &FilterState::new()).unwrap();

        assert_eq!(result.products.len(), 2);
        assert_eq!(result.products[0].product.name, "Milk");
        assert_eq!(result.products[0].user.name, "Roma");
        assert_eq!(result.products[1].category.title, "Electronics");
    }

    #[test]
    fn owner_filter_narrows_the_rows() {
        let mut filter = FilterState::new();
        filter.set_owner("Roma");

        let result = run(&store(), &filter).unwrap();
        assert_eq!(result.products.len(), 1);
        assert_eq!(result.products[0].product.name, "Milk");

        filter.set_owner("Anna");
        let result = run(&store(), &filter).unwrap();
        assert_eq!(result.products.len(), 1);
        assert_eq!(result.products[0].product.name, "Samsung Tablet");
    }

    #[test]
    fn search_and_category_compose() {
        let mut filter = FilterState::new();
        filter.set_search("tablet");
        filter.toggle_category("Electronics");

        let result = run(&store(), &filter).unwrap();
        assert_eq!(result.products.len(), 1);

        filter.toggle_category("Electronics");
        filter.toggle_category("Grocery");
        let result = run(&store(), &filter).unwrap();
        assert!(result.products.is_empty());
    }

    #[test]
    fn dangling_reference_fails_the_command() {
        let broken = CatalogFixture::new()
            .with_user(1, "Roma", Sex::M)
            .with_product(100, "Milk", 99)
            .store();

        assert!(run(&broken, &FilterState::new()).is_err());
    }
}
