//! Replacing the collection from an exported file.
//!
//! The payload is trusted structurally but not semantically: it has to be a
//! JSON array of objects, and then it replaces the stored collection wholesale.
//! Field values (negative or fractional stock, empty names, odd timestamps) are
//! kept as they are, and mistyped ones are read leniently rather than failing
//! the whole file; only the edit form validates fields.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockroomError};
use crate::model::Product;
use crate::store::catalog;
use crate::store::KeyValueStore;
use serde_json::Value;
use tracing::{info, warn};

/// Parses an import payload without touching storage.
pub fn parse(text: &str) -> Result<Vec<Product>> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        warn!(error = %e, "import payload is not valid JSON");
        StockroomError::Import("invalid file".to_string())
    })?;

    if !value.is_array() {
        warn!("import payload is not an array");
        return Err(StockroomError::Import("invalid format".to_string()));
    }

    serde_json::from_value(value).map_err(|e| {
        warn!(error = %e, "import payload contains non-product entries");
        StockroomError::Import("invalid format".to_string())
    })
}

pub fn run<S: KeyValueStore>(store: &mut S, text: &str) -> Result<CmdResult> {
    let products = parse(text)?;
    catalog::save(store, &products)?;

    info!(count = products.len(), "imported products");
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} products",
        products.len()
    )));
    Ok(result.with_affected_products(products))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn array_replaces_collection() {
        let mut store = StoreFixture::new().with_products(3).build();
        let payload = r#"[{"id":"x","name":"Imported","category":"Misc","price":5,"stock":1,"createdAt":1700000000000}]"#;
        run(&mut store, payload).unwrap();

        let products = catalog::load(&store);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Imported");
        assert_eq!(products[0].created_at.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn object_payload_is_rejected_and_storage_untouched() {
        let mut store = StoreFixture::new().with_products(3).build();
        let before = catalog::load(&store);

        let err = run(&mut store, r#"{"products": []}"#).unwrap_err();
        assert!(matches!(err, StockroomError::Import(ref m) if m == "invalid format"));
        assert_eq!(catalog::load(&store), before);
    }

    #[test]
    fn unparsable_payload_is_rejected() {
        let mut store = StoreFixture::new().with_products(1).build();
        let err = run(&mut store, "not json at all").unwrap_err();
        assert!(matches!(err, StockroomError::Import(ref m) if m == "invalid file"));
        assert_eq!(catalog::load(&store).len(), 1);
    }

    #[test]
    fn non_object_entries_are_rejected() {
        let mut store = StoreFixture::new().with_products(1).build();
        assert!(run(&mut store, "[1, 2, 3]").is_err());
        assert_eq!(catalog::load(&store).len(), 1);
    }

    #[test]
    fn field_values_are_not_validated() {
        let mut store = StoreFixture::new().build();
        run(
            &mut store,
            r#"[{"id":"neg","name":"","category":"","price":-10,"stock":-4}]"#,
        )
        .unwrap();

        let products = catalog::load(&store);
        assert_eq!(products[0].price, -10.0);
        assert_eq!(products[0].stock, -4.0);
        assert_eq!(products[0].name, "");
    }

    #[test]
    fn fractional_and_mistyped_values_are_accepted() {
        let mut store = StoreFixture::new().with_products(2).build();
        let payload = r#"[
            {"id":"a","name":"Bulk rice","category":"Food","price":3,"stock":2.5,"createdAt":1700000000000},
            {"id":"b","name":"Odd","category":"Misc","price":"4.25","stock":"7","createdAt":-9e300}
        ]"#;
        let result = run(&mut store, payload).unwrap();
        assert_eq!(result.affected_products.len(), 2);

        let products = catalog::load(&store);
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].stock, 2.5);
        assert_eq!(products[1].price, 4.25);
        assert_eq!(products[1].stock, 7.0);
        assert_eq!(products[1].created_at.timestamp_millis(), 0);
    }

    #[test]
    fn empty_array_clears_collection() {
        let mut store = StoreFixture::new().with_products(4).build();
        run(&mut store, "[]").unwrap();
        assert!(catalog::load(&store).is_empty());
    }
}
