#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cinelog_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("cinelog"));
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn add_list_update_delete_workflow() {
    let temp = TempDir::new().unwrap();

    cinelog_cmd(&temp)
        .args(["add", "Alien", "1979", "8.5", "alien.jpg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Alien'"));

    // Naked execution defaults to list.
    cinelog_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 movie in total"))
        .stdout(predicate::str::contains("Alien (1979): 8.5"));

    cinelog_cmd(&temp)
        .args(["update", "Alien", "9.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 'Alien'"));

    cinelog_cmd(&temp)
        .args(["delete", "Alien"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 'Alien'"));

    cinelog_cmd(&temp)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 movies in total"));
}

#[test]
fn duplicate_add_is_refused() {
    let temp = TempDir::new().unwrap();

    cinelog_cmd(&temp)
        .args(["add", "Alien", "1979", "8.5"])
        .assert()
        .success();

    cinelog_cmd(&temp)
        .args(["add", "Alien", "2020", "1.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    cinelog_cmd(&temp)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alien (1979): 8.5"));
}

#[test]
fn missing_titles_are_reported_not_fatal() {
    let temp = TempDir::new().unwrap();

    cinelog_cmd(&temp)
        .args(["delete", "Nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));

    cinelog_cmd(&temp)
        .args(["update", "Nothing", "5.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn csv_backend_is_selectable() {
    let temp = TempDir::new().unwrap();

    cinelog_cmd(&temp)
        .args(["--storage", "csv", "add", "The Blob", "1958", "6.4"])
        .assert()
        .success();

    let raw = fs::read_to_string(temp.path().join("data/movies.csv")).unwrap();
    assert!(raw.starts_with("title,year,rating,poster\n"));

    cinelog_cmd(&temp)
        .args(["--storage", "csv", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Blob (1958): 6.4"));

    // The JSON backend must not see CSV data.
    cinelog_cmd(&temp)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 movies in total"));
}

#[test]
fn explicit_file_flag_overrides_the_default() {
    let temp = TempDir::new().unwrap();

    cinelog_cmd(&temp)
        .args(["--file", "catalog.json", "add", "Solaris", "1972", "8.0"])
        .assert()
        .success();

    assert!(temp.path().join("catalog.json").exists());
    assert!(!temp.path().join("data/movies.json").exists());
}

#[test]
fn stats_and_search_and_sorted() {
    let temp = TempDir::new().unwrap();

    for args in [
        ["add", "Alien", "1979", "8.5"],
        ["add", "Aliens", "1986", "8.3"],
        ["add", "Troll 2", "1990", "2.9"],
    ] {
        cinelog_cmd(&temp).args(args).assert().success();
    }

    cinelog_cmd(&temp)
        .args(["stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Average rating: 6.57"))
        .stdout(predicate::str::contains("Median rating:  8.30"))
        .stdout(predicate::str::contains("Best movie (8.5): Alien"))
        .stdout(predicate::str::contains("Worst movie (2.9): Troll 2"));

    cinelog_cmd(&temp)
        .args(["search", "alien"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 movies in total"));

    cinelog_cmd(&temp)
        .args(["sorted"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?s)Alien.*Aliens.*Troll 2").unwrap());
}

#[test]
fn generate_writes_a_static_page() {
    let temp = TempDir::new().unwrap();

    cinelog_cmd(&temp)
        .args(["add", "Alien", "1979", "8.5", "alien.jpg"])
        .assert()
        .success();

    cinelog_cmd(&temp)
        .args(["generate", "--title", "My Horror Shelf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("public/index.html"));

    let html = fs::read_to_string(temp.path().join("public/index.html")).unwrap();
    assert!(html.contains("<title>My Horror Shelf</title>"));
    assert!(html.contains("<h2>Alien</h2>"));
}

#[test]
fn corrupt_store_reports_a_parse_error() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("data")).unwrap();
    fs::write(temp.path().join("data/movies.json"), "{broken").unwrap();

    cinelog_cmd(&temp)
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot parse"));
}

#[test]
fn fetch_without_api_key_fails_cleanly() {
    let temp = TempDir::new().unwrap();

    cinelog_cmd(&temp)
        .env_remove("OMDB_API_KEY")
        .args(["fetch", "Alien"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("OMDB_API_KEY"));
}
