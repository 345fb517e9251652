use crate::commands::CmdResult;
use crate::error::{Result, StockroomError};
use crate::model::Product;
use crate::store::catalog;
use crate::store::KeyValueStore;

/// First product with the given id, if any.
pub fn find<S: KeyValueStore>(store: &S, id: &str) -> Option<Product> {
    catalog::load(store).into_iter().find(|p| p.id == id)
}

pub fn run<S: KeyValueStore>(store: &S, id: &str) -> Result<CmdResult> {
    let product = find(store, id).ok_or_else(|| StockroomError::ProductNotFound(id.to_string()))?;
    Ok(CmdResult::default().with_affected_products(vec![product]))
}
