use assert_cmd::Command;
use mockito::{mock, server_url};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

mod common;

#[test]
fn favorite_survives_between_runs() -> Result<(), Box<dyn std::error::Error>> {
    let _m = mock("GET", "/fav/users")
        .with_status(200)
        .with_body(common::USERS_JSON)
        .create();

    let dir = tempdir()?;
    let favorites = dir.path().join("nested").join("favorites.json");
    let url = format!("{}/fav/users", server_url());

    Command::cargo_bin("roster")?
        .args(["--no-color", "--url", url.as_str()])
        .arg("--favorites")
        .arg(&favorites)
        .args(["fav", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Bob to favorites"))
        .stdout(predicate::str::contains("Favorites: 1"));

    assert_eq!(fs::read_to_string(&favorites)?, "[2]");

    Command::cargo_bin("roster")?
        .args(["--no-color", "--url", url.as_str()])
        .arg("--favorites")
        .arg(&favorites)
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("(B) Bob  #2  ★"))
        .stdout(predicate::str::contains("Ann").not())
        .stdout(predicate::str::contains("Found: 1 | Favorites: 1 | Total: 3"));

    Command::cargo_bin("roster")?
        .args(["--no-color", "--url", url.as_str()])
        .arg("--favorites")
        .arg(&favorites)
        .args(["fav", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed Bob from favorites"))
        .stdout(predicate::str::contains("Favorites: 0"));

    assert_eq!(fs::read_to_string(&favorites)?, "[]");

    Ok(())
}

#[test]
fn unknown_user_cannot_be_favorited() -> Result<(), Box<dyn std::error::Error>> {
    let _m = mock("GET", "/unknown/users")
        .with_status(200)
        .with_body(common::USERS_JSON)
        .create();

    let dir = tempdir()?;
    let favorites = dir.path().join("favorites.json");

    Command::cargo_bin("roster")?
        .args(["--no-color", "--url"])
        .arg(format!("{}/unknown/users", server_url()))
        .arg("--favorites")
        .arg(&favorites)
        .args(["fav", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("User #42 Not found"));

    assert!(!favorites.exists());

    Ok(())
}

#[test]
fn corrupt_favorites_file_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let _m = mock("GET", "/corrupt/users")
        .with_status(200)
        .with_body(common::USERS_JSON)
        .create();

    let dir = tempdir()?;
    let favorites = dir.path().join("favorites.json");
    fs::write(&favorites, "{oops")?;

    Command::cargo_bin("roster")?
        .args(["--no-color", "--url"])
        .arg(format!("{}/corrupt/users", server_url()))
        .arg("--favorites")
        .arg(&favorites)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Favorites: 0"));

    Ok(())
}

#[test]
fn browse_session_marks_favorite() -> Result<(), Box<dyn std::error::Error>> {
    let _m = mock("GET", "/browse/users")
        .with_status(200)
        .with_body(common::USERS_JSON)
        .create();

    let dir = tempdir()?;
    let favorites = dir.path().join("favorites.json");

    Command::cargo_bin("roster")?
        .args(["--no-color", "--url"])
        .arg(format!("{}/browse/users", server_url()))
        .arg("--favorites")
        .arg(&favorites)
        .arg("browse")
        .write_stdin("1\nan\n3\n1\n2\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(A) [An]n  #1  ★"))
        .stdout(predicate::str::contains("Sorted by name length, ascending"))
        .stdout(predicate::str::contains("Bye!"));

    assert_eq!(fs::read_to_string(&favorites)?, "[1]");

    Ok(())
}
