//! CLI integration tests for nufetch.
//!
//! These tests run the binary against a local one-shot HTTP server that
//! plays the role of the package registry, so no network access is needed.

use std::fs;
use std::io::{Cursor, Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::process::Command;
use std::thread::{self, JoinHandle};

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Get the nufetch binary command.
fn nufetch() -> Command {
    Command::cargo_bin("nufetch").unwrap()
}

/// Build a zip archive in memory from (entry path, content) pairs.
fn sample_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    let mut writer = ZipWriter::new(&mut buf);
    let options = SimpleFileOptions::default();
    for (name, data) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap();
    buf.into_inner()
}

/// Serve exactly one HTTP response on a random local port, regardless of
/// the request path. Returns the registry base URL and the server thread.
fn serve_once(status_line: &'static str, body: Vec<u8>) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        // Drain the request head before answering
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = stream.read(&mut buf).unwrap();
            request.extend_from_slice(&buf[..n]);
            if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let header = format!(
            "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        stream.write_all(header.as_bytes()).unwrap();
        stream.write_all(&body).unwrap();
    });

    (format!("http://{addr}"), handle)
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

// ============================================================================
// success path
// ============================================================================

#[test]
fn test_provision_writes_headers_and_libs() {
    let tmp = TempDir::new().unwrap();
    let archive = sample_zip(&[
        ("include/foo.h", b"HDR"),
        ("native/bar.dll", b"BIN"),
        ("test.pkg.nuspec", b"<xml/>"),
    ]);
    let (registry, server) = serve_once("200 OK", archive);

    nufetch()
        .args(["--registry", &registry])
        .args(["--package", "test.pkg"])
        .args(["--pkg-version", "1.0.0"])
        .arg("--out-dir")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("provisioned 2 file(s)"));

    server.join().unwrap();

    assert_eq!(
        fs::read(tmp.path().join("include/foo.h")).unwrap(),
        b"HDR"
    );
    assert_eq!(fs::read(tmp.path().join("lib/bar.dll")).unwrap(), b"BIN");

    // Exactly those two files, nothing else
    assert_eq!(file_names(&tmp.path().join("include")), vec!["foo.h"]);
    assert_eq!(file_names(&tmp.path().join("lib")), vec!["bar.dll"]);
}

#[test]
fn test_provision_flattens_nested_entries() {
    let tmp = TempDir::new().unwrap();
    let archive = sample_zip(&[("runtimes/win-x64/native/nethost.h", b"HDR")]);
    let (registry, server) = serve_once("200 OK", archive);

    nufetch()
        .args(["--registry", &registry])
        .args(["--package", "test.pkg"])
        .args(["--pkg-version", "1.0.0"])
        .arg("--out-dir")
        .arg(tmp.path())
        .assert()
        .success();

    server.join().unwrap();

    assert!(tmp.path().join("include/nethost.h").is_file());
    assert!(!tmp.path().join("include/runtimes").exists());
}

// ============================================================================
// failure paths
// ============================================================================

#[test]
fn test_missing_package_fails_and_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let (registry, server) = serve_once("404 Not Found", Vec::new());

    nufetch()
        .args(["--registry", &registry])
        .args(["--package", "no.such.pkg"])
        .args(["--pkg-version", "9.9.9"])
        .arg("--out-dir")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 404"));

    server.join().unwrap();

    // No output directories were created
    assert!(!tmp.path().join("include").exists());
    assert!(!tmp.path().join("lib").exists());
}

#[test]
fn test_corrupt_archive_fails() {
    let tmp = TempDir::new().unwrap();
    let (registry, server) = serve_once("200 OK", b"this is not a zip".to_vec());

    nufetch()
        .args(["--registry", &registry])
        .args(["--package", "test.pkg"])
        .args(["--pkg-version", "1.0.0"])
        .arg("--out-dir")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("zip archive"));

    server.join().unwrap();

    assert!(!tmp.path().join("include").exists());
    assert!(!tmp.path().join("lib").exists());
}
