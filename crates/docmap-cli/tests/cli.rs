//! CLI smoke tests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn docmap() -> Command {
    Command::cargo_bin("docmap-cli").expect("binary builds")
}

fn write_cities(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("cities.json");
    let mut file = std::fs::File::create(&path).expect("fixture file");
    write!(
        file,
        r#"[
  {{
    "geometry": {{"type": "Point", "coordinates": [-74.006, 40.7128]}},
    "properties": {{"name": "New York", "population": 8336817, "tags": ["a"]}}
  }}
]"#
    )
    .expect("fixture content");
    path
}

#[test]
fn mappers_lists_the_registry() {
    docmap()
        .arg("mappers")
        .assert()
        .success()
        .stdout(predicate::str::contains("geojson"))
        .stdout(predicate::str::contains("flat"))
        .stdout(predicate::str::contains("Supported"));
}

#[test]
fn schema_displays_inferred_attributes() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_cities(&dir);

    docmap()
        .args(["schema", path.to_str().unwrap(), "--collection", "cities"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Collection: cities"))
        .stdout(predicate::str::contains("geometry"))
        .stdout(predicate::str::contains("Integer"))
        .stdout(predicate::str::contains("Skipped Fields"))
        .stdout(predicate::str::contains("tags"));
}

#[test]
fn schema_with_unknown_strategy_fails_with_suggestion() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_cities(&dir);

    docmap()
        .args([
            "schema",
            path.to_str().unwrap(),
            "--strategy",
            "carrier-pigeon",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("docmap mappers"));
}

#[test]
fn geometry_prints_wkt() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_cities(&dir);

    docmap()
        .args(["geometry", path.to_str().unwrap(), "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("POINT"));
}

#[test]
fn classify_reports_a_spatial_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_cities(&dir);

    docmap()
        .args(["classify", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("spatial file"));
}

#[test]
fn classify_reports_a_missing_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("absent.zip");

    docmap()
        .args(["classify", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
