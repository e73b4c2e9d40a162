use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::prelude::*;
use std::path::Path;

fn shelfz(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shelfz").unwrap();
    cmd.current_dir(dir);
    cmd
}

/// Point the binary at a file that does not exist so it deterministically
/// serves the bundled seed catalog, regardless of what the host machine has
/// in its user-wide data dir.
fn seed_args(dir: &Path) -> Vec<String> {
    vec![
        "--catalog".to_string(),
        dir.join("absent.json").display().to_string(),
    ]
}

#[test]
fn init_scaffolds_a_project_catalog() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelfz(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicates::str::contains("Initialized catalog"));

    assert!(temp_dir.path().join(".shelfz").join("catalog.json").exists());

    // The scaffolded catalog is what subsequent runs browse.
    shelfz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Milk"))
        .stdout(predicates::str::contains("Samsung Tablet"));
}

#[test]
fn bare_run_lists_the_full_table() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelfz(temp_dir.path())
        .args(seed_args(temp_dir.path()))
        .assert()
        .success()
        .stdout(predicates::str::contains("Product"))
        .stdout(predicates::str::contains("Milk"))
        .stdout(predicates::str::contains("Grocery"))
        .stdout(predicates::str::contains("Anna"));
}

#[test]
fn owner_flag_filters_rows() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelfz(temp_dir.path())
        .args(seed_args(temp_dir.path()))
        .args(["list", "--owner", "Anna"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Milk"))
        .stdout(predicates::str::contains("Apples"))
        .stdout(predicates::str::contains("Samsung Tablet").not());
}

#[test]
fn filters_compose_as_and() {
    let temp_dir = tempfile::tempdir().unwrap();

    // Anna owns Bananas; Fanta also matches the search but belongs to Roma.
    shelfz(temp_dir.path())
        .args(seed_args(temp_dir.path()))
        .args(["list", "--owner", "Anna", "--search", "an"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Bananas"))
        .stdout(predicates::str::contains("Fanta").not())
        .stdout(predicates::str::contains("Milk").not());
}

#[test]
fn category_flags_multi_select() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelfz(temp_dir.path())
        .args(seed_args(temp_dir.path()))
        .args(["list", "-C", "Fruits", "-C", "Clothes"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Apples"))
        .stdout(predicates::str::contains("Jeans"))
        .stdout(predicates::str::contains("Milk").not());
}

#[test]
fn no_match_prints_the_empty_state() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelfz(temp_dir.path())
        .args(seed_args(temp_dir.path()))
        .args(["list", "--search", "zzz"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "No products matching selected criteria.",
        ));
}

#[test]
fn owner_without_products_yields_the_empty_state() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelfz(temp_dir.path())
        .args(seed_args(temp_dir.path()))
        .args(["list", "--owner", "John"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "No products matching selected criteria.",
        ));
}

#[test]
fn owners_surface_includes_the_all_sentinel() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelfz(temp_dir.path())
        .args(seed_args(temp_dir.path()))
        .arg("owners")
        .assert()
        .success()
        .stdout(predicates::str::contains("All"))
        .stdout(predicates::str::contains("Roma"))
        .stdout(predicates::str::contains("John"));
}

#[test]
fn reads_a_custom_catalog_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("shop.json");
    std::fs::write(
        &catalog,
        r#"{
            "users": [{"id": 1, "name": "Dana", "sex": "f"}],
            "categories": [{"id": 1, "title": "Books", "icon": "📚", "ownerId": 1}],
            "products": [{"id": 1, "name": "Atlas", "categoryId": 1}]
        }"#,
    )
    .unwrap();

    shelfz(temp_dir.path())
        .args(["--catalog", catalog.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Atlas"))
        .stdout(predicates::str::contains("Dana"))
        .stdout(predicates::str::contains("Milk").not());
}

#[test]
fn dangling_reference_fails_loudly() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("broken.json");
    std::fs::write(
        &catalog,
        r#"{
            "users": [],
            "categories": [],
            "products": [{"id": 1, "name": "Ghost", "categoryId": 9}]
        }"#,
    )
    .unwrap();

    shelfz(temp_dir.path())
        .args(["--catalog", catalog.to_str().unwrap(), "list"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("unknown category 9"));
}

#[test]
fn show_icons_config_changes_the_category_column() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(temp_dir.path().join(".shelfz")).unwrap();

    shelfz(temp_dir.path())
        .args(["config", "show-icons", "false"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Set show-icons = false"));

    shelfz(temp_dir.path())
        .args(seed_args(temp_dir.path()))
        .arg("categories")
        .assert()
        .success()
        .stdout(predicates::str::contains("Grocery"))
        .stdout(predicates::str::contains("🍞").not());
}
