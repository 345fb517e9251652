#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn stockroom_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("stockroom"));
    cmd.env("STOCKROOM_DATA", data_dir.as_os_str())
        .env_remove("STOCKROOM_LOG")
        .current_dir(data_dir);
    cmd
}

fn stored_products(data_dir: &Path) -> Vec<Value> {
    let text = fs::read_to_string(data_dir.join("stockroom_products.json")).unwrap();
    match serde_json::from_str(&text).unwrap() {
        Value::Array(items) => items,
        other => panic!("expected an array, got {}", other),
    }
}

fn id_of(data_dir: &Path, name: &str) -> String {
    stored_products(data_dir)
        .iter()
        .find(|p| p["name"] == name)
        .and_then(|p| p["id"].as_str())
        .map(str::to_string)
        .unwrap()
}

#[test]
fn test_first_run_lists_demo_products() {
    let temp = TempDir::new().unwrap();

    stockroom_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Mouse inalámbrico"))
        .stdout(predicate::str::contains("USD\u{a0}1,299.99"))
        .stdout(predicate::str::contains("Page 1 of 1 · 5 products"));

    assert_eq!(stored_products(temp.path()).len(), 5);
}

#[test]
fn test_add_then_search() {
    let temp = TempDir::new().unwrap();

    stockroom_cmd(temp.path())
        .args(["add", "--name", "Desk lamp", "--category", "Home"])
        .args(["--price", "12.5", "--stock", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product created: Desk lamp"));

    stockroom_cmd(temp.path())
        .args(["list", "--search", "LAMP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Desk lamp"))
        .stdout(predicate::str::contains("USD\u{a0}12.50"))
        .stdout(predicate::str::contains("Mouse").not());
}

#[test]
fn test_invalid_form_is_rejected() {
    let temp = TempDir::new().unwrap();

    stockroom_cmd(temp.path())
        .args(["add", "--category", "Home", "--price", "1", "--stock", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Name is required"));

    stockroom_cmd(temp.path())
        .args(["add", "--name", "Lamp", "--category", "Home", "--price", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    assert_eq!(stored_products(temp.path()).len(), 5);
}

#[test]
fn test_edit_keeps_unset_fields() {
    let temp = TempDir::new().unwrap();
    stockroom_cmd(temp.path()).assert().success();
    let id = id_of(temp.path(), "Silla ergonómica");

    stockroom_cmd(temp.path())
        .args(["edit", &id, "--stock", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product updated: Silla ergonómica"));

    stockroom_cmd(temp.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("stock     9"))
        .stdout(predicate::str::contains("price     USD\u{a0}159.90"));

    let products = stored_products(temp.path());
    assert_eq!(products.len(), 5);
    let silla: Vec<&Value> = products.iter().filter(|p| p["id"] == id.as_str()).collect();
    assert_eq!(silla.len(), 1);
    assert_eq!(silla[0]["category"], "Furniture");
}

#[test]
fn test_delete_confirmation() {
    let temp = TempDir::new().unwrap();
    stockroom_cmd(temp.path()).assert().success();
    let id = id_of(temp.path(), "Mouse inalámbrico");

    stockroom_cmd(temp.path())
        .args(["delete", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing deleted."));
    assert_eq!(stored_products(temp.path()).len(), 5);

    stockroom_cmd(temp.path())
        .args(["delete", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 of 1 · 4 products"));
    assert_eq!(stored_products(temp.path()).len(), 4);
}

#[test]
fn test_unknown_id() {
    let temp = TempDir::new().unwrap();

    stockroom_cmd(temp.path())
        .args(["show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product not found: nope"));
}

#[test]
fn test_export_default_and_explicit_path() {
    let temp = TempDir::new().unwrap();

    stockroom_cmd(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 5 products"));
    let exported = fs::read_to_string(temp.path().join("productos.json")).unwrap();
    assert!(exported.starts_with("[\n  {\n    \"id\": "));

    let target = temp.path().join("backup.json");
    stockroom_cmd(temp.path())
        .args(["export", "--output", target.to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&target).unwrap(), exported);
}

#[test]
fn test_import_rejects_object_and_accepts_array() {
    let temp = TempDir::new().unwrap();
    stockroom_cmd(temp.path()).assert().success();

    let bad = temp.path().join("bad.json");
    fs::write(&bad, r#"{"products": []}"#).unwrap();
    stockroom_cmd(temp.path())
        .args(["import", bad.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import rejected: invalid format"));
    assert_eq!(stored_products(temp.path()).len(), 5);

    let good = temp.path().join("good.json");
    fs::write(
        &good,
        r#"[{"id":"x1","name":"Imported","category":"Misc","price":-3,"stock":2,"createdAt":1700000000000}]"#,
    )
    .unwrap();
    stockroom_cmd(temp.path())
        .args(["import", good.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 products"))
        .stdout(predicate::str::contains("-USD\u{a0}3.00"));

    let products = stored_products(temp.path());
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Imported");
}

#[test]
fn test_sort_by_price() {
    let temp = TempDir::new().unwrap();

    let output = stockroom_cmd(temp.path())
        .args(["list", "--sort", "price-asc"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let positions: Vec<usize> = ["USD\u{a0}19.99", "USD\u{a0}159.90", "USD\u{a0}210.00", "USD\u{a0}1,299.99"]
        .iter()
        .map(|price| stdout.find(price).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_page_size_config_and_clamping() {
    let temp = TempDir::new().unwrap();

    stockroom_cmd(temp.path())
        .args(["config", "page-size", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size set to 2"));

    stockroom_cmd(temp.path())
        .args(["list", "--page", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("‹ 1 2 [3] ›"))
        .stdout(predicate::str::contains("Page 3 of 3 · 5 products"));

    stockroom_cmd(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size = 2"))
        .stdout(predicate::str::contains("locale = es-PA"));
}

#[test]
fn test_largest_page_size_lists_everything() {
    let temp = TempDir::new().unwrap();

    stockroom_cmd(temp.path())
        .args(["config", "page-size", &usize::MAX.to_string()])
        .assert()
        .success();

    stockroom_cmd(temp.path())
        .args(["list", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 of 1 · 5 products"));
}

#[test]
fn test_shell_session() {
    let temp = TempDir::new().unwrap();

    stockroom_cmd(temp.path())
        .arg("shell")
        .write_stdin("search sill\nnew\nSilla plegable\nFurniture\n35\n6\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("search: \"sill\""))
        .stdout(predicate::str::contains("Product created: Silla plegable"))
        .stdout(predicate::str::contains("Page 1 of 1 · 2 products"));

    assert_eq!(stored_products(temp.path()).len(), 6);
}
