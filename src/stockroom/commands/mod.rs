use crate::config::StockroomConfig;
use crate::error::Result;
use crate::model::Product;
use crate::presenter::TableView;
use crate::store::catalog;
use crate::store::KeyValueStore;
use std::path::PathBuf;

pub mod config;
pub mod delete;
pub mod export;
pub mod get;
pub mod import;
pub mod list;
pub mod upsert;

#[derive(Debug, Clone)]
pub struct StockroomPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub table: Option<TableView>,
    pub config: Option<StockroomConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_table(mut self, table: TableView) -> Self {
        self.table = Some(table);
        self
    }

    pub fn with_config(mut self, config: StockroomConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Loads the collection, applies `mutate`, and writes the whole collection back.
pub(crate) fn read_modify_write<S, F, T>(store: &mut S, mutate: F) -> Result<T>
where
    S: KeyValueStore,
    F: FnOnce(&mut Vec<Product>) -> T,
{
    let mut products = catalog::load(store);
    let out = mutate(&mut products);
    catalog::save(store, &products)?;
    Ok(out)
}
