//! Remote-to-remote staging tests.
//!
//! These tests verify that:
//! - same-named files from different directories never share a staging file
//! - the staging directory is back to its previous state after every call
//! - a failed upload fails the call but keeps earlier successful elements
//! - routers sharing one staging directory from several threads don't collide

#[path = "../common/mod.rs"]
mod common;

use common::{FakeHost, count_entries};
use sshcopy::{Endpoint, Router, TransferOptions};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn remote_router<'a>(
    source: &'a FakeHost,
    destination: &'a FakeHost,
    staging: &Path,
) -> Router<&'a FakeHost> {
    Router::new(
        Endpoint::Remote(source),
        Endpoint::Remote(destination),
        Some(staging),
    )
    .unwrap()
}

#[test]
fn test_single_file() {
    let staging = TempDir::new().unwrap();
    let source = FakeHost::new();
    let destination = FakeHost::new();
    source.put("/home/user/report.txt", "quarterly");
    destination.mkdir("/backup");

    let router = remote_router(&source, &destination, staging.path());

    assert!(router.copy("/home/user/report.txt", "/backup/report.txt").unwrap());
    destination.assert_file_content("/backup/report.txt", "quarterly");
    assert_eq!(count_entries(staging.path()), 0);
}

#[test]
fn test_same_basename_does_not_cross_contaminate() {
    let staging = TempDir::new().unwrap();
    let source = FakeHost::new();
    let destination = FakeHost::new();
    source.put("/dirA/blah.txt", "X");
    source.put("/dirB/blah.txt", "Y");
    destination.mkdir("/outA");
    destination.mkdir("/outB");

    let router = remote_router(&source, &destination, staging.path());
    let ok = router
        .copy(
            ["/dirA/blah.txt", "/dirB/blah.txt"],
            ["/outA/blah.txt", "/outB/blah.txt"],
        )
        .unwrap();

    assert!(ok);
    destination.assert_file_content("/outA/blah.txt", "X");
    destination.assert_file_content("/outB/blah.txt", "Y");

    let staged = source.received_into();
    assert_eq!(staged.len(), 2);
    assert_ne!(staged[0], staged[1]);
    for path in &staged {
        assert_ne!(path.file_name().unwrap(), "blah.txt");
        let name = path.file_name().unwrap().to_str().unwrap();
        assert_eq!(name.len(), 10);
        assert!(name.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(
            fs::canonicalize(path.parent().unwrap()).unwrap(),
            fs::canonicalize(staging.path()).unwrap()
        );
    }
    assert_eq!(count_entries(staging.path()), 0);
}

#[test]
fn test_staging_dir_with_trailing_separator() {
    let staging = TempDir::new().unwrap();
    let source = FakeHost::new();
    let destination = FakeHost::new();
    source.put("/a.txt", "A");

    let with_slash = format!("{}/", staging.path().display());
    let router = remote_router(&source, &destination, Path::new(&with_slash));

    assert!(router.copy("/a.txt", "/a.txt").unwrap());
    destination.assert_file_content("/a.txt", "A");
    assert_eq!(count_entries(staging.path()), 0);
}

#[test]
fn test_unwritable_destination_fails_and_cleans_up() {
    let staging = TempDir::new().unwrap();
    fs::write(staging.path().join("unrelated"), "keep me").unwrap();
    let source = FakeHost::new();
    let destination = FakeHost::new();
    source.put("/dirA/blah.txt", "X");
    source.put("/dirB/blah.txt", "Y");
    source.put("/dirC/blah.txt", "Z");
    destination.mkdir("/outA");

    let router = remote_router(&source, &destination, staging.path());
    let ok = router
        .copy(
            ["/dirA/blah.txt", "/dirB/blah.txt", "/dirC/blah.txt"],
            ["/outA/blah.txt", "/missing/blah.txt", "/outA/other.txt"],
        )
        .unwrap();

    assert!(!ok);
    // first element already landed and stays
    destination.assert_file_content("/outA/blah.txt", "X");
    // third element was never attempted
    assert!(!destination.exists("/outA/other.txt"));
    assert_eq!(source.receives(), 2);
    assert_eq!(destination.sends(), 2);
    // only the pre-existing file is left in the staging dir
    assert_eq!(count_entries(staging.path()), 1);
    assert_eq!(
        fs::read_to_string(staging.path().join("unrelated")).unwrap(),
        "keep me"
    );
}

#[test]
fn test_missing_remote_source_skips_upload() {
    let staging = TempDir::new().unwrap();
    let source = FakeHost::new();
    let destination = FakeHost::new();

    let router = remote_router(&source, &destination, staging.path());

    assert!(!router.copy("/nope.txt", "/nope.txt").unwrap());
    assert_eq!(source.receives(), 1);
    assert_eq!(destination.sends(), 0);
    assert_eq!(count_entries(staging.path()), 0);
}

#[test]
fn test_missing_staging_dir_fails_the_copy() {
    let staging = TempDir::new().unwrap();
    let gone = staging.path().join("gone");
    let source = FakeHost::new();
    let destination = FakeHost::new();
    source.put("/a.txt", "A");

    // construction does no I/O, so a missing dir only shows up at copy time
    let router = remote_router(&source, &destination, &gone);

    assert!(!router.copy("/a.txt", "/a.txt").unwrap());
    assert_eq!(source.receives(), 0);
    assert!(!gone.exists());
}

#[test]
fn test_warning_reports_failure() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    static WARNINGS: AtomicUsize = AtomicUsize::new(0);
    fn on_warning(_msg: &str) {
        WARNINGS.fetch_add(1, Ordering::SeqCst);
    }

    let staging = TempDir::new().unwrap();
    let source = FakeHost::new();
    let destination = FakeHost::new();

    let router = remote_router(&source, &destination, staging.path())
        .with_options(TransferOptions::default().with_warn_handler(on_warning));

    assert!(!router.copy("/nope.txt", "/nope.txt").unwrap());
    assert_eq!(WARNINGS.load(Ordering::SeqCst), 1);
}

#[test]
fn test_concurrent_routers_share_staging_dir() {
    let staging = TempDir::new().unwrap();
    let source = FakeHost::new();
    let destination = FakeHost::new();
    for i in 0..8 {
        source.put(&format!("/in{i}/blah.txt"), &format!("content {i}"));
        destination.mkdir(&format!("/out{i}"));
    }

    std::thread::scope(|scope| {
        for i in 0..8 {
            let (source, destination, staging) = (&source, &destination, staging.path());
            scope.spawn(move || {
                let router = remote_router(source, destination, staging);
                let ok = router
                    .copy(
                        format!("/in{i}/blah.txt"),
                        format!("/out{i}/blah.txt"),
                    )
                    .unwrap();
                assert!(ok);
            });
        }
    });

    for i in 0..8 {
        destination.assert_file_content(&format!("/out{i}/blah.txt"), &format!("content {i}"));
    }
    assert_eq!(count_entries(staging.path()), 0);
}
