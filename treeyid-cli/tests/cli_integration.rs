//! Integration tests for the treeyid CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn treeyid() -> Command {
    Command::cargo_bin("treeyid").unwrap()
}

fn prep_fixtures(out: &Path) {
    treeyid()
        .arg("prep")
        .arg("-i")
        .arg(fixture_path("*.psd"))
        .arg("-o")
        .arg(out)
        .arg("-q")
        .assert()
        .success();
}

#[test]
fn test_convert() {
    treeyid()
        .args(["convert", "kol", "N"])
        .assert()
        .success()
        .stdout("קול\tqul\n");
}

#[test]
fn test_split() {
    treeyid()
        .args(["split", "P~D", "אױפֿן"])
        .assert()
        .success()
        .stdout("אױפֿ ן\n");
}

#[test]
fn test_split_not_found() {
    treeyid()
        .args(["split", "N~N", "קינד"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no split rule for N~N"));
}

#[test]
fn test_prep_applies_corpus_mods_by_prefix() {
    let temp_dir = TempDir::new().unwrap();
    let prepared = temp_dir.path().join("prepared");
    prep_fixtures(&prepared);

    let modern = fs::read_to_string(prepared.join("1947-sample.txt")).unwrap();
    assert_eq!(
        modern,
        "SAMPLE,1.1\t(IP-MAT (NP-SBJ (PRO ikh@)) (MDF @'l) (PP (P oyf@) (NP (D @n) (N dakh))) (VB geyn) (E_S .))\n\
         notreeid\t(CODE <P_2>)\n"
    );

    let old = fs::read_to_string(prepared.join("1589-sample.txt")).unwrap();
    assert!(old.starts_with("OLD,1.1\t(IP-MAT (NP-SBJ (PRO ikh)) (MDF 'l)"));
    assert!(!old.contains("OLD,1.2"));
}

#[test]
fn test_dropped_tree_is_logged() {
    let temp_dir = TempDir::new().unwrap();
    treeyid()
        .arg("prep")
        .arg("-i")
        .arg(fixture_path("1589-sample.psd"))
        .arg("-o")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("ROOT_REF"));
}

#[test]
fn test_prep_then_process() {
    let temp_dir = TempDir::new().unwrap();
    let prepared = temp_dir.path().join("prepared");
    let out = temp_dir.path().join("out");
    prep_fixtures(&prepared);

    treeyid()
        .arg("process")
        .arg("-i")
        .arg(prepared.join("*.txt").display().to_string())
        .arg("-o")
        .arg(&out)
        .arg("-q")
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(out.join("json/1947-sample.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(json[0]["tree_id"], "SAMPLE,1.1");
    assert_eq!(json[0]["leaves"][0]["pos"], "PRO~MDF");
    assert_eq!(json[0]["leaves"][0]["ltype"], "s");
    assert_eq!(json[1]["tree_id"], "notreeid");

    let script = fs::read_to_string(out.join("psd-yid/1947-sample.psd")).unwrap();
    assert!(script.contains("(P אױפֿ@) (NP (D @ן) (N דאַך))"));
    assert!(script.ends_with("(ID SAMPLE,1.1))\n( (CODE <P_2>))\n"));

    let psd = fs::read_to_string(out.join("psd/1589-sample.psd")).unwrap();
    assert!(psd.starts_with("( (IP-MAT (NP-SBJ (PRO ikh)) (MDF 'l)"));

    let pos = fs::read_to_string(out.join("pos/1589-sample.txt")).unwrap();
    assert!(pos.contains("\tdakh\tN\tדאַך\t"));
}

#[test]
fn test_generate_config_and_use_it() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("treeyid.toml");

    treeyid()
        .arg("generate-config")
        .arg("-o")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    let content = fs::read_to_string(&config).unwrap();
    fs::write(&config, content.replace("keep_parens = false", "keep_parens = true")).unwrap();

    let source = temp_dir.path().join("parens.psd");
    fs::write(
        &source,
        "( (IP-MAT (CODE <paren>) (NP-SBJ (PRO er)) (CODE <$$paren>) (VBF geyt)) (ID P,1))\n",
    )
    .unwrap();

    treeyid()
        .arg("prep")
        .arg("-c")
        .arg(&config)
        .arg("-i")
        .arg(source.display().to_string())
        .arg("-o")
        .arg(temp_dir.path())
        .assert()
        .success();

    let prepared = fs::read_to_string(temp_dir.path().join("parens.txt")).unwrap();
    assert!(prepared.contains("(OPAREN -LRB-)"));
}

#[test]
fn test_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "[processing]\ncatalogue = \"brackets\"\n").unwrap();

    treeyid()
        .arg("convert")
        .arg("kol")
        .arg("N")
        .arg("-c")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    treeyid()
        .arg("process")
        .arg("-i")
        .arg("nonexistent*.txt")
        .arg("-o")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_help_lists_commands() {
    treeyid()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("prep"))
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("generate-config"));
}
