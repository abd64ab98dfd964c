use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn propsearch(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("propsearch").unwrap();
    cmd.env("PROPSEARCH_HOME", home)
        .env_remove("PROPSEARCH_LOG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn home_summarises_bundled_catalog() {
    let temp_dir = tempfile::tempdir().unwrap();

    propsearch(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("7 listings across 4 locations"));
}

#[test]
fn search_filters_and_is_remembered() {
    let temp_dir = tempfile::tempdir().unwrap();

    propsearch(temp_dir.path())
        .args(["search", "--type", "flat", "--max-price", "£400,000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prop2"))
        .stdout(predicate::str::contains("prop4"))
        .stdout(predicate::str::contains("prop1").not())
        .stdout(predicate::str::contains("prop6").not());

    let saved = std::fs::read_to_string(temp_dir.path().join("searchCriteria.json")).unwrap();
    assert!(saved.contains("\"type\":\"Flat\""));
    assert!(saved.contains("\"maxPrice\":400000"));

    // A bare `search` shows the restored results
    propsearch(temp_dir.path())
        .arg("search")
        .assert()
        .success()
        .stdout(predicate::str::contains("prop4"))
        .stdout(predicate::str::contains("prop7").not());

    propsearch(temp_dir.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("prop7"));
}

#[test]
fn inverted_price_range_is_ignored() {
    let temp_dir = tempfile::tempdir().unwrap();

    propsearch(temp_dir.path())
        .args(["search", "--min-price", "900000", "--max-price", "100000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ignored price range"))
        .stdout(predicate::str::contains("Showing all 7 properties"));
}

#[test]
fn favourites_survive_between_runs() {
    let temp_dir = tempfile::tempdir().unwrap();

    propsearch(temp_dir.path())
        .args(["fav", "add", "prop3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added to favorites"));

    propsearch(temp_dir.path())
        .args(["fav", "toggle", "prop5"])
        .assert()
        .success();

    propsearch(temp_dir.path())
        .args(["fav", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prop3"))
        .stdout(predicate::str::contains("prop5"));

    propsearch(temp_dir.path())
        .args(["fav", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 2 favorites"));

    propsearch(temp_dir.path())
        .arg("fav")
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorites yet"));
}

#[test]
fn drag_between_lists() {
    let temp_dir = tempfile::tempdir().unwrap();

    propsearch(temp_dir.path())
        .args(["drag", "propertyList", "favoritesList", "prop1"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(temp_dir.path().join("favorites.json")).unwrap();
    assert!(saved.contains("\"id\":\"prop1\""));

    propsearch(temp_dir.path())
        .args(["drag", "favoritesList", "none", "prop1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing changed"));

    propsearch(temp_dir.path())
        .args(["drag", "favoritesList", "propertyList", "prop1"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(temp_dir.path().join("favorites.json")).unwrap();
    assert_eq!(saved.trim(), "[]");
}

#[test]
fn unknown_zone_is_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    propsearch(temp_dir.path())
        .args(["drag", "sidebar", "favoritesList", "prop1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown drop zone"));
}

#[test]
fn detail_view_and_not_found() {
    let temp_dir = tempfile::tempdir().unwrap();

    propsearch(temp_dir.path())
        .args(["show", "prop1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 bedroom house in Petts Wood"))
        .stdout(predicate::str::contains("£750,000"))
        .stdout(predicate::str::contains("12 October 2022"));

    propsearch(temp_dir.path())
        .args(["open", "/property/nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Property not found: nope"));
}

#[test]
fn corrupt_favourites_file_is_tolerated() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("favorites.json"), "{{{ not json").unwrap();

    propsearch(temp_dir.path())
        .args(["fav", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorites yet"));
}

#[test]
fn custom_catalog_and_currency() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("listings.json");
    std::fs::write(
        &catalog,
        r#"[{"id": "x1", "type": "Flat", "bedrooms": 1, "price": 123456,
             "location": "Leeds", "picture": "x1.jpg",
             "added": {"month": "May", "day": 1, "year": 2024}}]"#,
    )
    .unwrap();

    propsearch(temp_dir.path())
        .args(["config", "currency", "$"])
        .assert()
        .success();

    propsearch(temp_dir.path())
        .args(["--catalog", catalog.to_str().unwrap(), "search", "--location", "Leeds"])
        .assert()
        .success()
        .stdout(predicate::str::contains("x1"))
        .stdout(predicate::str::contains("$123,456"));

    propsearch(temp_dir.path())
        .args(["--catalog", catalog.to_str().unwrap(), "locations"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Leeds\n"));
}

#[test]
fn missing_catalog_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    propsearch(temp_dir.path())
        .args(["--catalog", "/definitely/not/here.json", "home"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}
