use crate::commands::{read_modify_write, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::KeyValueStore;
use tracing::info;

/// Removes every product with the given id. A missing id is not an error; the
/// collection is written back unchanged.
pub fn run<S: KeyValueStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let removed = read_modify_write(store, |products| {
        let (removed, kept): (Vec<_>, Vec<_>) = products.drain(..).partition(|p| p.id == id);
        *products = kept;
        removed
    })?;

    let mut result = CmdResult::default();
    match removed.first() {
        Some(first) => {
            info!(id = %id, count = removed.len(), "product deleted");
            result.add_message(CmdMessage::success(format!(
                "Product deleted: {}",
                first.name
            )));
        }
        None => {
            result.add_message(CmdMessage::warning(format!("No product with id {}", id)));
        }
    }
    Ok(result.with_affected_products(removed))
}
