//! End-to-end tests for the `tavola` binary.
//!
//! Each test gets its own storage directory, and every invocation is a
//! separate process, so the cart state seen across commands has really
//! been through the persistence round-trip.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tavola(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tavola").unwrap();
    cmd.env("TAVOLA_CART_DIR", dir.path().join("store"))
        .current_dir(dir.path());
    cmd
}

#[test]
fn menu_lists_sample_items_with_ids() {
    let dir = TempDir::new().unwrap();
    tavola(&dir)
        .arg("menu")
        .assert()
        .success()
        .stdout(predicate::str::contains("Margherita Pizza"))
        .stdout(predicate::str::contains("[1]"))
        .stdout(predicate::str::contains("$16.99"))
        .stdout(predicate::str::contains("Desserts"));
}

#[test]
fn menu_category_filter() {
    let dir = TempDir::new().unwrap();
    tavola(&dir)
        .args(["menu", "--category", "desserts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tiramisu"))
        .stdout(predicate::str::contains("Margherita Pizza").not());

    tavola(&dir)
        .args(["menu", "--category", "sushi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found"));
}

#[test]
fn add_twice_merges_into_one_line_and_persists() {
    let dir = TempDir::new().unwrap();

    tavola(&dir).args(["add", "1"]).assert().success();
    tavola(&dir)
        .args(["add", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("x2 in cart"));

    // A fresh process sees the restored cart with exact totals.
    tavola(&dir)
        .arg("cart")
        .assert()
        .success()
        .stdout(predicate::str::contains("Margherita Pizza"))
        .stdout(predicate::str::contains("$33.98"))
        .stdout(predicate::str::contains("Tax"))
        .stdout(predicate::str::contains("$2.72"))
        .stdout(predicate::str::contains("$3.99"))
        .stdout(predicate::str::contains("$40.69"));
}

#[test]
fn add_unknown_or_bogus_item_fails() {
    let dir = TempDir::new().unwrap();
    tavola(&dir)
        .args(["add", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn qty_zero_removes_the_line() {
    let dir = TempDir::new().unwrap();

    tavola(&dir).args(["add", "1"]).assert().success();
    tavola(&dir)
        .args(["qty", "1", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    tavola(&dir)
        .arg("cart")
        .assert()
        .success()
        .stdout(predicate::str::contains("cart is empty"));
}

#[test]
fn note_is_set_and_shown_in_cart() {
    let dir = TempDir::new().unwrap();

    tavola(&dir).args(["add", "12"]).assert().success();
    tavola(&dir)
        .args(["note", "12", "no", "cocoa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no cocoa"));

    tavola(&dir)
        .arg("cart")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"no cocoa\""));
}

#[test]
fn clear_empties_the_cart() {
    let dir = TempDir::new().unwrap();

    tavola(&dir).args(["add", "1"]).assert().success();
    tavola(&dir)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cart cleared"));

    tavola(&dir)
        .arg("cart")
        .assert()
        .success()
        .stdout(predicate::str::contains("cart is empty"));
}

#[test]
fn checkout_places_the_order_and_clears_the_cart() {
    let dir = TempDir::new().unwrap();

    tavola(&dir).args(["add", "1"]).assert().success();
    tavola(&dir)
        .args([
            "checkout",
            "--name",
            "Ada Lovelace",
            "--phone",
            "555-0100",
            "--payment",
            "cash",
            "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ORD-"))
        .stdout(predicate::str::contains("$22.34"));

    tavola(&dir)
        .arg("cart")
        .assert()
        .success()
        .stdout(predicate::str::contains("cart is empty"));

    tavola(&dir)
        .arg("orders")
        .assert()
        .success()
        .stdout(predicate::str::contains("ORD-"))
        .stdout(predicate::str::contains("Pending"));
}

#[test]
fn checkout_of_an_empty_cart_fails() {
    let dir = TempDir::new().unwrap();
    tavola(&dir)
        .args(["checkout", "--name", "Ada", "--phone", "555-0100", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one item"));
}

#[test]
fn configured_delivery_fee_is_applied() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("tavola.toml"),
        "[restaurant]\nname = \"Trattoria Test\"\ndelivery_fee = \"2.50\"\n",
    )
    .unwrap();

    tavola(&dir).args(["add", "1"]).assert().success();
    tavola(&dir)
        .arg("cart")
        .assert()
        .success()
        .stdout(predicate::str::contains("$2.50"))
        // 16.99 + 1.3592 + 2.50
        .stdout(predicate::str::contains("$20.85"));
}
