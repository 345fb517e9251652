//! # Storage Layer
//!
//! Persistence is a plain key-value provider: string keys, string values. The
//! whole product collection lives under a single key as a JSON array, and every
//! operation reads it in full and writes it back in full.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one file per key inside a data
//!   directory (`stockroom:products` is kept in `stockroom_products.json`).
//! - [`memory::InMemoryStore`]: no persistence, used by tests.
//!
//! The product codec on top of the raw store lives in [`catalog`].
//!
//! ## Storage Format
//!
//! ```text
//! <data-dir>/
//! ├── stockroom_products.json   # JSON array of products
//! └── config.json               # StockroomConfig
//! ```

use crate::error::Result;

pub mod catalog;
pub mod fs;
pub mod memory;

/// Abstract key-value persistence.
pub trait KeyValueStore {
    /// Value stored under `key`, or `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
