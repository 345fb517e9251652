//! The product collection codec on top of a [`KeyValueStore`].
//!
//! Reads never fail: a missing, unreadable or malformed collection is an empty
//! one. Writes always replace the whole collection.

use super::KeyValueStore;
use crate::error::{Result, StockroomError};
use crate::ids::new_id;
use crate::model::Product;
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// The single key the collection is stored under.
pub const PRODUCTS_KEY: &str = "stockroom:products";

pub fn load<S: KeyValueStore>(store: &S) -> Vec<Product> {
    let raw = match store.get(PRODUCTS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            debug!(error = %e, "could not read product collection, treating as empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Product>>(&raw) {
        Ok(products) => {
            debug!(count = products.len(), "loaded product collection");
            products
        }
        Err(e) => {
            debug!(error = %e, "stored product collection is malformed, treating as empty");
            Vec::new()
        }
    }
}

pub fn save<S: KeyValueStore>(store: &mut S, products: &[Product]) -> Result<()> {
    let json = serde_json::to_string(products).map_err(StockroomError::Serialization)?;
    store.set(PRODUCTS_KEY, &json)?;
    debug!(count = products.len(), "saved product collection");
    Ok(())
}

/// Writes the demo products when the collection is empty.
/// Returns whether anything was written.
pub fn seed_if_empty<S: KeyValueStore>(store: &mut S, now: DateTime<Utc>) -> Result<bool> {
    if !load(store).is_empty() {
        return Ok(false);
    }
    save(store, &demo_products(now))?;
    debug!("seeded demo products");
    Ok(true)
}

/// The fixed demonstration set. The laptop is listed twice on purpose.
pub fn demo_products(now: DateTime<Utc>) -> Vec<Product> {
    // The demo data has always used 86 000 ms "seconds-per-day" arithmetic.
    let days_ago = |n: i64| now - Duration::milliseconds(86_000 * 24 * n);
    vec![
        Product::new(new_id(now), "Laptop Pro 14\"", "Tech", 1299.99, 5, days_ago(7)),
        Product::new(new_id(now), "Laptop Pro 14\"", "Tech", 1299.99, 5, days_ago(6)),
        Product::new(new_id(now), "Mouse inalámbrico", "Tech", 19.99, 42, days_ago(5)),
        Product::new(new_id(now), "Silla ergonómica", "Furniture", 159.9, 12, days_ago(4)),
        Product::new(new_id(now), "Escritorio de madera", "Furniture", 210.0, 4, days_ago(3)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use chrono::TimeZone;

    #[test]
    fn round_trip_preserves_order_and_values() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let products = vec![
            Product::new("b", "Desk", "Furniture", 210.0, 4, now),
            Product::new("a", "Mouse", "Tech", 19.99, 42, now),
            Product::new("c", "Odd", "Misc", 0.1 + 0.2, 0, now),
        ];
        let mut store = InMemoryStore::new();
        save(&mut store, &products).unwrap();
        assert_eq!(load(&store), products);
    }

    #[test]
    fn missing_collection_is_empty() {
        let store = InMemoryStore::new();
        assert!(load(&store).is_empty());
    }

    #[test]
    fn malformed_collection_is_empty() {
        let mut store = InMemoryStore::new();
        store.set(PRODUCTS_KEY, "{not json").unwrap();
        assert!(load(&store).is_empty());

        store.set(PRODUCTS_KEY, r#"{"id":"x"}"#).unwrap();
        assert!(load(&store).is_empty());
    }

    #[test]
    fn seeds_only_when_empty() {
        let mut store = InMemoryStore::new();
        assert!(seed_if_empty(&mut store, Utc::now()).unwrap());
        let seeded = load(&store);
        assert_eq!(seeded.len(), 5);
        assert_eq!(seeded[0].name, seeded[1].name);
        assert_ne!(seeded[0].id, seeded[1].id);

        assert!(!seed_if_empty(&mut store, Utc::now()).unwrap());
        assert_eq!(load(&store), seeded);
    }

    #[test]
    fn does_not_seed_over_existing_data() {
        let mut store = StoreFixture::new().with_products(2).build();
        assert!(!seed_if_empty(&mut store, Utc::now()).unwrap());
        assert_eq!(load(&store).len(), 2);
    }

    #[test]
    fn demo_timestamps_step_back_by_days() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let demo = demo_products(now);
        assert_eq!(
            demo[0].created_at.timestamp_millis(),
            1_700_000_000_000 - 86_000 * 24 * 7
        );
        assert!(demo.windows(2).all(|w| w[0].created_at < w[1].created_at));
    }

    #[test]
    fn save_surfaces_write_errors() {
        let mut store = InMemoryStore::new().fail_writes();
        assert!(save(&mut store, &[]).is_err());
    }
}
