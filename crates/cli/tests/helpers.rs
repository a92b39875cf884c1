use std::fs;

use module_carver::{read_source, sha256_bytes};
use tempfile::tempdir;

#[test]
fn read_source_returns_file_contents() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("agent.js");
    fs::write(&path, "function a() {}\n").expect("write source");

    assert_eq!(read_source(&path).expect("read"), "function a() {}\n");
}

#[test]
fn read_source_fails_fast_when_missing() {
    let dir = tempdir().expect("tempdir");
    let err = read_source(&dir.path().join("missing.js")).unwrap_err();
    assert!(err.to_string().contains("Source file not found"), "unexpected error: {err}");
}

#[test]
fn read_source_rejects_directories() {
    let dir = tempdir().expect("tempdir");
    let err = read_source(dir.path()).unwrap_err();
    assert!(err.to_string().contains("Source file not found"));
}

#[test]
fn sha256_bytes_matches_known_hash() {
    let hash = sha256_bytes(b"abc");
    assert_eq!(hash, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
}
