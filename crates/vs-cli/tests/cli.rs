use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn videoshop(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("videoshop").unwrap();
    cmd.current_dir(dir)
        .env_remove("VIDEOSHOP_CONFIG")
        .arg("--no-color");
    cmd
}

fn write_catalog(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("catalog.toml");
    fs::write(
        &path,
        r#"
[[discs]]
name = "Last Action Hero"
image = "lac"
genre = "Äktschn/Comedy"
type = "dvd"
price = { amount = "9.99", currency = "EUR" }

[[discs.comments]]
text = "Great"
rating = 4

[[discs.comments]]
text = "Even better"
rating = 5

[[discs]]
name = "Akira"
image = "akira"
genre = "Animation/Action/Sci-Fi"
type = "bluray"
price = { amount = "19.99", currency = "EUR" }
"#,
    )
    .unwrap();
    path
}

#[test]
fn show_lists_discs_with_ratings() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path());

    videoshop(dir.path())
        .args(["show", "catalog.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Last Action Hero"))
        .stdout(predicate::str::contains("4.50 (2)"))
        .stdout(predicate::str::contains("not rated"))
        .stdout(predicate::str::contains("2 discs, 2 comments"));
}

#[test]
fn comment_updates_rating_and_saves() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path());

    videoshop(dir.path())
        .args([
            "comment", "catalog.toml", "--disc", "Last Action Hero", "--rating", "3",
            "--text", "Fine", "--author", "Vincent", "--save",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("4.00 (3 comments)"));

    videoshop(dir.path())
        .args(["show", "catalog.toml", "--comments"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4.00 (3)"))
        .stdout(predicate::str::contains("Fine (Vincent)"));
}

#[test]
fn comment_without_save_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path());
    let before = fs::read_to_string(&path).unwrap();

    videoshop(dir.path())
        .args(["comment", "catalog.toml", "--disc", "Akira", "--rating", "5", "--text", "Wow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5.00 (1 comments)"));

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn comment_rejects_out_of_range_rating() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path());

    videoshop(dir.path())
        .args(["comment", "catalog.toml", "--disc", "Akira", "--rating", "9", "--text", "Wow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Rating 9 is outside 1..=5"));
}

#[test]
fn comment_respects_configured_rating_range() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path());
    fs::write(dir.path().join("config.toml"), "[rating]\nmax_rating = 10\n").unwrap();

    videoshop(dir.path())
        .args([
            "--config", "config.toml", "comment", "catalog.toml", "--disc", "Akira", "--rating",
            "9", "--text", "Wow",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("9.00"));
}

#[test]
fn comment_on_unknown_disc_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path());

    videoshop(dir.path())
        .args(["comment", "catalog.toml", "--disc", "Fido", "--rating", "3", "--text", "?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Disc not found: Fido"));
}

#[test]
fn comment_by_id_from_previous_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path());
    assert!(!fs::read_to_string(&path).unwrap().contains("id ="));

    let output = videoshop(dir.path())
        .args(["export", "catalog.toml", "--format", "json-compact"])
        .output()
        .unwrap();
    let data: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let akira_id = data["discs"][1]["id"].as_str().unwrap().to_string();

    videoshop(dir.path())
        .args(["show", "catalog.toml", "--ids"])
        .assert()
        .success()
        .stdout(predicate::str::contains(akira_id.as_str()));

    videoshop(dir.path())
        .args(["comment", "catalog.toml", "--disc", &akira_id, "--rating", "4", "--text", "Kaneda!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rated 'Akira': 4.00"));
}

#[test]
fn add_uses_configured_currency_for_bare_price() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path());
    fs::write(dir.path().join("config.toml"), "[catalog]\ndefault_currency = \"USD\"\n").unwrap();

    videoshop(dir.path())
        .args([
            "--config", "config.toml", "add", "catalog.toml", "--name", "Fido", "--image", "fido",
            "--genre", "Comedy", "--type", "Blu-Ray", "--price", "12.50", "--save",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Blu-ray 'Fido' at 12.50 USD"));

    videoshop(dir.path())
        .args(["show", "catalog.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12.50 USD"))
        .stdout(predicate::str::contains("3 discs, 2 comments"));
}

#[test]
fn add_keeps_explicit_currency_and_rejects_bad_price() {
    let dir = tempfile::tempdir().unwrap();

    videoshop(dir.path())
        .args([
            "add", "new.json", "--name", "Akira", "--image", "akira", "--genre", "Anime",
            "--type", "dvd", "--price", "CHF 20", "--save",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("20 CHF"));
    assert!(dir.path().join("new.json").exists());

    videoshop(dir.path())
        .args([
            "add", "new.json", "--name", "Fido", "--image", "fido", "--genre", "Comedy",
            "--type", "dvd", "--price", "cheap",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid price"));
}

#[test]
fn export_json_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path());

    let output = videoshop(dir.path())
        .args(["export", "catalog.toml", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let data: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(data["stats"]["discs"], 2);
    assert_eq!(data["discs"][0]["rating"], 4.5);
    assert_eq!(data["discs"][1]["type"], "bluray");
}

#[test]
fn export_markdown_to_file() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path());

    videoshop(dir.path())
        .args(["export", "catalog.toml", "--output", "report.md"])
        .assert()
        .success();

    let report = fs::read_to_string(dir.path().join("report.md")).unwrap();
    assert!(report.contains("# Videoshop Catalog"));
    assert!(report.contains("### Akira"));
}

#[test]
fn sample_writes_loadable_catalog() {
    let dir = tempfile::tempdir().unwrap();

    videoshop(dir.path())
        .args(["sample", "--output", "sample.json"])
        .assert()
        .success();

    videoshop(dir.path())
        .args(["sample", "--output", "sample.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    videoshop(dir.path())
        .args(["show", "sample.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ghost in the Shell"));
}

#[test]
fn config_init_and_validate() {
    let dir = tempfile::tempdir().unwrap();

    videoshop(dir.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(dir.path().join(".videoshop/config.toml").exists());

    videoshop(dir.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path());
    fs::write(dir.path().join("bad.toml"), "[rating]\nmin_rating = 9\n").unwrap();

    videoshop(dir.path())
        .args(["--config", "bad.toml", "show", "catalog.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min_rating"));
}
