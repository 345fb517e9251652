use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockroomError};
use crate::model::Product;
use crate::store::catalog;
use crate::store::KeyValueStore;
use std::io::Write;
use tracing::info;

/// Default file name for exports.
pub const EXPORT_FILENAME: &str = "productos.json";

/// Pretty-printed (2-space indent) JSON array, the same shape as storage.
pub fn to_json(products: &[Product]) -> Result<String> {
    serde_json::to_string_pretty(products).map_err(StockroomError::Serialization)
}

/// Writes the whole collection to `writer`.
pub fn run<S: KeyValueStore, W: Write>(store: &S, mut writer: W) -> Result<CmdResult> {
    let products = catalog::load(store);
    let json = to_json(&products)?;
    writer
        .write_all(json.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(StockroomError::Io)?;

    info!(count = products.len(), "exported products");
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} products",
        products.len()
    )));
    Ok(result.with_affected_products(products))
}
