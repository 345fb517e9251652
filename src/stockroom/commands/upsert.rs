use crate::commands::{read_modify_write, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;
use crate::store::KeyValueStore;
use tracing::info;

/// Replaces the product with the same id in place, or inserts it at the front.
pub fn run<S: KeyValueStore>(store: &mut S, product: Product) -> Result<CmdResult> {
    let stored = product.clone();
    let replaced = read_modify_write(store, move |products| {
        match products.iter().position(|p| p.id == stored.id) {
            Some(idx) => {
                products[idx] = stored;
                true
            }
            None => {
                products.insert(0, stored);
                false
            }
        }
    })?;

    let mut result = CmdResult::default();
    if replaced {
        info!(id = %product.id, "product updated");
        result.add_message(CmdMessage::success(format!(
            "Product updated: {}",
            product.name
        )));
    } else {
        info!(id = %product.id, "product created");
        result.add_message(CmdMessage::success(format!(
            "Product created: {}",
            product.name
        )));
    }
    Ok(result.with_affected_products(vec![product]))
}
