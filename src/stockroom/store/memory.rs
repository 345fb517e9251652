use super::KeyValueStore;
use crate::error::{Result, StockroomError};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `set` fail, for exercising error paths.
    pub fn fail_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(StockroomError::Store("Simulated write error".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{timestamp_now, Product};
    use crate::store::catalog;
    use chrono::Duration;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        products: Vec<Product>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                products: Vec::new(),
            }
        }

        /// Adds `count` generic products, oldest first.
        pub fn with_products(mut self, count: usize) -> Self {
            let now = timestamp_now();
            for i in 0..count {
                self.products.push(Product::new(
                    format!("prod{:04}", i + 1),
                    format!("Product {}", i + 1),
                    "General",
                    (i + 1) as f64,
                    i as i64,
                    now - Duration::minutes((count - i) as i64),
                ));
            }
            self
        }

        pub fn with_product(mut self, product: Product) -> Self {
            self.products.push(product);
            self
        }

        /// Persists the collected products and returns the store.
        pub fn build(mut self) -> InMemoryStore {
            catalog::save(&mut self.store, &self.products).unwrap();
            self.store
        }
    }
}
