use crate::model::Product;
use crate::sort::SortKey;

/// Normalizes raw search input the way the query engine compares it.
pub fn normalize_search(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True when `needle` (already normalized) is empty or occurs in the product's
/// lowercased name or category.
pub fn matches(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}

/// Builds the view: filters by `search` and orders by `sort`.
///
/// The source collection is left untouched; sorting is stable, so products that
/// compare equal keep their stored order.
pub fn view(products: &[Product], search: &str, sort: SortKey) -> Vec<Product> {
    let needle = normalize_search(search);
    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|p| matches(p, &needle))
        .cloned()
        .collect();
    filtered.sort_by(sort.comparator());
    filtered
}
