use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Product;
use crate::money::MoneyFormat;
use crate::pagination::{paginate, Page, DEFAULT_PAGE_SIZE};
use crate::presenter::present;
use crate::query;
use crate::sort::SortKey;
use crate::store::catalog;
use crate::store::KeyValueStore;

/// Everything needed to compute one visible page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub sort: SortKey,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortKey::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Reload → filter/sort → paginate, returning the raw page.
pub fn page<S: KeyValueStore>(store: &S, q: &ListQuery) -> Page<Product> {
    let products = catalog::load(store);
    let view = query::view(&products, &q.search, q.sort);
    paginate(&view, q.page_size, q.page)
}

/// The full recompute chain, ending in presentable table data.
pub fn run<S: KeyValueStore>(store: &S, q: &ListQuery, money: &MoneyFormat) -> Result<CmdResult> {
    let page = page(store, q);
    Ok(CmdResult::default().with_table(present(&page, money)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_first_page_newest_first() {
        let store = StoreFixture::new().with_products(16).build();
        let result = run(&store, &ListQuery::default(), &MoneyFormat::default()).unwrap();
        let table = result.table.unwrap();

        assert_eq!(table.rows.len(), 7);
        assert_eq!(table.total_pages, 3);
        assert_eq!(table.total_items, 16);
        assert_eq!(table.rows[0].name, "Product 16");
    }

    #[test]
    fn clamps_page_past_the_end() {
        let store = StoreFixture::new().with_products(16).build();
        let q = ListQuery {
            page: 5,
            ..ListQuery::default()
        };
        let table = run(&store, &q, &MoneyFormat::default())
            .unwrap()
            .table
            .unwrap();
        assert_eq!(table.page, 3);
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn search_and_sort_apply_before_paging() {
        let store = StoreFixture::new().with_products(12).build();
        let q = ListQuery {
            search: "product 1".into(),
            sort: SortKey::NameAsc,
            ..ListQuery::default()
        };
        let page = page(&store, &q);
        let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Product 1", "Product 10", "Product 11", "Product 12"]
        );
    }

    #[test]
    fn empty_store_gives_empty_table() {
        let store = StoreFixture::new().build();
        let table = run(&store, &ListQuery::default(), &MoneyFormat::default())
            .unwrap()
            .table
            .unwrap();
        assert!(table.is_empty());
        assert_eq!(table.page, 1);
        assert!(table.pager.is_none());
    }
}
