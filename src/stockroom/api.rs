//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all stockroom operations, regardless of the UI being used.
//!
//! It dispatches to `commands/*.rs`, applies configuration (page size, money
//! format, demo seeding) and returns structured `CmdResult`s. It does no I/O
//! beyond what the store does and never formats for a terminal.
//!
//! `StockroomApi<S: KeyValueStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::commands;
use crate::commands::list::ListQuery;
use crate::config::StockroomConfig;
use crate::error::Result;
use crate::model::{timestamp_now, Product};
use crate::money::MoneyFormat;
use crate::store::catalog;
use crate::store::KeyValueStore;
use std::io::Write;

pub struct StockroomApi<S: KeyValueStore> {
    store: S,
    config: StockroomConfig,
    paths: commands::StockroomPaths,
}

impl<S: KeyValueStore> StockroomApi<S> {
    pub fn new(store: S, config: StockroomConfig, paths: commands::StockroomPaths) -> Self {
        Self {
            store,
            config,
            paths,
        }
    }

    /// Seeds the demo set on an empty collection, if enabled in config.
    pub fn ensure_seeded(&mut self) -> Result<bool> {
        if !self.config.seed_demo_data {
            return Ok(false);
        }
        catalog::seed_if_empty(&mut self.store, timestamp_now())
    }

    pub fn list(&self, query: &ListQuery) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, query, &self.money_format())
    }

    pub fn find(&self, id: &str) -> Option<Product> {
        commands::get::find(&self.store, id)
    }

    pub fn get(&self, id: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn upsert(&mut self, product: Product) -> Result<commands::CmdResult> {
        commands::upsert::run(&mut self.store, product)
    }

    pub fn delete(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn export<W: Write>(&self, writer: W) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, writer)
    }

    pub fn import(&mut self, text: &str) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, text)
    }

    pub fn config_action(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size.max(1)
    }

    pub fn money_format(&self) -> MoneyFormat {
        self.config.money_format()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, StockroomPaths};
