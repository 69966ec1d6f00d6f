use assert_cmd::Command;
use predicates::prelude::*;

fn tome(db: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("tome").unwrap();
    cmd.arg("--db").arg(db);
    cmd
}

fn extract_id(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    let start = text.find("id=").expect("add output should carry the id") + 3;
    text[start..start + 36].to_string()
}

fn add_dune(db: &std::path::Path) -> String {
    let output = tome(db)
        .args([
            "add", "-t", "Dune", "-a", "Frank Herbert", "--year", "1965", "--genre", "sf",
            "--tags", "classic", "desert",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    extract_id(&output.stdout)
}

fn full_cycle(db: &std::path::Path) {
    let id = add_dune(db);

    // duplicate add is refused but exits cleanly
    tome(db)
        .args(["add", "-t", "dune", "-a", "frank herbert", "--year", "1965"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped"));

    tome(db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("Total: 1"));

    // show accepts a short prefix
    tome(db)
        .args(["show", &id[..8]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("Year: 1965"));

    tome(db)
        .args(["update", &id[..8], "--pages", "604"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book updated."));

    tome(db)
        .args(["add-quote", &id[..8], "Fear is the mind-killer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quote added."));
    tome(db)
        .args(["add-quote", &id[..8], "  FEAR is the mind-killer "])
        .assert()
        .success()
        .stdout(predicate::str::contains("already saved"));

    tome(db)
        .args(["del-quote", &id[..8], "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid quote index."));

    tome(db)
        .args(["remove", &id[..8]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));
    tome(db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 0"));
}

#[test]
fn test_full_cycle_json_backend() {
    let dir = tempfile::tempdir().unwrap();
    full_cycle(&dir.path().join("library.json"));
}

#[test]
fn test_full_cycle_sqlite_backend() {
    let dir = tempfile::tempdir().unwrap();
    full_cycle(&dir.path().join("library.db"));
}

#[test]
fn test_env_var_selects_database_path() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("from-env.json");

    let mut cmd = Command::cargo_bin("tome").unwrap();
    cmd.env("TOME_DB", &db)
        .args(["add", "-t", "Solaris", "-a", "Stanislaw Lem"])
        .assert()
        .success();
    assert!(db.exists());

    let mut cmd = Command::cargo_bin("tome").unwrap();
    cmd.env("TOME_DB", &db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Solaris"));
}

#[test]
fn test_ambiguous_prefix_lists_candidates() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("library.json");
    let doc = r#"[
        {"id": "abc11111-0000-4000-8000-000000000001",
         "title": "One", "author": "First",
         "added_at": "2024-01-01T00:00:00Z"},
        {"id": "abc22222-0000-4000-8000-000000000002",
         "title": "Two", "author": "Second",
         "added_at": "2024-01-02T00:00:00Z"}
    ]"#;
    std::fs::write(&db, doc).unwrap();

    tome(&db)
        .args(["show", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Multiple books match"))
        .stdout(predicate::str::contains("One / First"))
        .stdout(predicate::str::contains("Two / Second"));

    tome(&db)
        .args(["show", "abc1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Year: n/a"));

    tome(&db)
        .args(["show", "zzzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book not found."));
}

#[test]
fn test_csv_roundtrip_through_binary() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("library.json");
    let csv = dir.path().join("export.csv");
    let dst = dir.path().join("fresh.json");

    add_dune(&src);
    tome(&src)
        .args(["export-csv", csv.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 records"));

    tome(&dst)
        .args(["import-csv", csv.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported or updated 1 records"));

    let original = std::fs::read_to_string(&src).unwrap();
    let imported = std::fs::read_to_string(&dst).unwrap();
    assert_eq!(original, imported);
}

#[test]
fn test_migrate_sqlite_through_binary() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("library.json");
    let dst = dir.path().join("library.db");

    add_dune(&src);
    tome(&src)
        .args([
            "migrate-sqlite",
            "--src",
            src.to_str().unwrap(),
            "--dst",
            dst.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Migration complete: 1 records"));

    tome(&dst)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"));
}

#[test]
fn test_corrupt_json_document_is_survivable() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("library.json");
    std::fs::write(&db, "{ definitely not a catalog").unwrap();

    tome(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 0"));
}
