//! Integration tests for the vault-opener CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Interactive prompts cannot be driven without a terminal, so every
//! test passes the vault path and `--key-file` explicitly.

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes128Gcm, Nonce};
use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const KEY_HEX: &str = "000102030405060708090a0b0c0d0e0f";
const IV_HEX: &str = "0102030405060708090a0b0c";
const PAYLOAD: &str = r#"[{"category":"email","title":"Email","username":"me@example.com","secret":"hunter2"},{"title":"Garage","notes":"code is on the fridge"}]"#;

/// Helper: get a Command pointing at the vault-opener binary.
fn vault_opener() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("vault-opener").expect("binary should exist")
}

/// Helper: a temp dir holding `my_legacy.vault` and `master.key`.
fn fixture() -> TempDir {
    let tmp = TempDir::new().unwrap();

    let key = hex::decode(KEY_HEX).unwrap();
    let nonce = hex::decode(IV_HEX).unwrap();
    let ciphertext = Aes128Gcm::new_from_slice(&key)
        .unwrap()
        .encrypt(Nonce::<U12>::from_slice(&nonce), PAYLOAD.as_bytes())
        .unwrap();
    let vault = serde_json::json!({
        "ciphertext": hex::encode(ciphertext),
        "iv": IV_HEX,
    });

    tmp.child("my_legacy.vault")
        .write_str(&vault.to_string())
        .unwrap();
    tmp.child("master.key")
        .write_str(&format!("{KEY_HEX}\n"))
        .unwrap();
    tmp
}

#[test]
fn help_flag_shows_usage() {
    vault_opener()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Offline recovery tool for encrypted vault files",
        ))
        .stdout(predicate::str::contains("open"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("inspect"));
}

#[test]
fn version_flag_shows_version() {
    vault_opener()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vault-opener"));
}

#[test]
fn no_args_shows_help() {
    vault_opener()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn open_displays_entries() {
    let tmp = fixture();

    vault_opener()
        .args(["open", "my_legacy.vault", "--key-file", "master.key", "--no-save-prompt"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("VAULT UNLOCKED"))
        .stdout(predicate::str::contains("2 entries found"))
        .stdout(predicate::str::contains("EMAIL"))
        .stdout(predicate::str::contains("GENERAL"))
        .stdout(predicate::str::contains("hunter2"));

    // Nothing is written without being asked.
    tmp.child("RECOVERED_DATA.txt")
        .assert(predicate::path::missing());
}

#[test]
fn open_masks_secrets() {
    let tmp = fixture();

    vault_opener()
        .args([
            "open",
            "my_legacy.vault",
            "--key-file",
            "master.key",
            "--no-save-prompt",
            "--mask",
        ])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn open_with_wrong_key_fails() {
    let tmp = fixture();
    tmp.child("wrong.key")
        .write_str("ffffffffffffffffffffffffffffffff")
        .unwrap();

    vault_opener()
        .args(["open", "my_legacy.vault", "--key-file", "wrong.key", "--no-save-prompt"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid key or corrupted data"))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn open_with_short_key_reports_key_error() {
    let tmp = fixture();
    tmp.child("short.key").write_str("0011").unwrap();

    vault_opener()
        .args(["open", "my_legacy.vault", "--key-file", "short.key"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid key material"));
}

#[test]
fn open_missing_vault_fails() {
    let tmp = fixture();

    vault_opener()
        .args(["open", "nope.vault", "--key-file", "master.key"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn inspect_reports_envelope_without_key() {
    let tmp = fixture();

    vault_opener()
        .args(["inspect", "my_legacy.vault"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("well-formed vault"))
        .stdout(predicate::str::contains("12 bytes"));
}

#[test]
fn inspect_rejects_malformed_vault() {
    let tmp = TempDir::new().unwrap();
    tmp.child("bad.vault")
        .write_str(r#"{"ciphertext":"abc"}"#)
        .unwrap();

    vault_opener()
        .args(["inspect", "bad.vault"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid vault file format"));
}

#[test]
fn export_writes_json_array() {
    let tmp = fixture();

    vault_opener()
        .args([
            "export",
            "my_legacy.vault",
            "--key-file",
            "master.key",
            "--yes",
            "--output",
            "recovered.json",
        ])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("DELETE THIS FILE AFTER USE"));

    let written = std::fs::read_to_string(tmp.path().join("recovered.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed[0]["secret"], "hunter2");
    assert_eq!(parsed[1]["title"], "Garage");
    assert_eq!(parsed[1]["category"], "General");
}

#[test]
fn export_uses_configured_defaults() {
    let tmp = fixture();
    tmp.child(".vault-opener.toml")
        .write_str("output_file = \"from-config.json\"\nexport_indent = 2\n")
        .unwrap();

    vault_opener()
        .args(["export", "my_legacy.vault", "--key-file", "master.key", "--yes"])
        .current_dir(tmp.path())
        .assert()
        .success();

    let written = std::fs::read_to_string(tmp.path().join("from-config.json")).unwrap();
    assert!(written.starts_with("[\n  {\n    \""));
}

#[test]
fn export_refuses_to_overwrite() {
    let tmp = fixture();
    tmp.child("RECOVERED_DATA.txt").write_str("old").unwrap();

    vault_opener()
        .args(["export", "my_legacy.vault", "--key-file", "master.key", "--yes"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    tmp.child("RECOVERED_DATA.txt").assert("old");
}

#[test]
fn completions_prints_script() {
    vault_opener()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vault-opener"));
}
