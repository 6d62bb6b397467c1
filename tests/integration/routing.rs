//! Strategy selection and construction tests.
//!
//! These tests verify that:
//! - each endpoint combination routes to exactly one strategy
//! - only the primitives of that strategy are used
//! - invalid configurations are refused before any I/O

#[path = "../common/mod.rs"]
mod common;

use common::{FakeHost, count_entries, write_local};
use rstest::rstest;
use sshcopy::{Endpoint, Error, Router, Strategy};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn endpoint(host: &FakeHost, remote: bool) -> Endpoint<&FakeHost> {
    if remote {
        Endpoint::Remote(host)
    } else {
        Endpoint::Local
    }
}

#[rstest]
#[case::local_to_remote(false, true, Strategy::LocalToRemote)]
#[case::local_to_local(false, false, Strategy::LocalToLocal)]
#[case::remote_to_local(true, false, Strategy::RemoteToLocal)]
#[case::remote_to_remote(true, true, Strategy::RemoteToRemote)]
fn test_strategy_table(
    #[case] source_remote: bool,
    #[case] destination_remote: bool,
    #[case] expected: Strategy,
) {
    let staging = TempDir::new().unwrap();
    let source = FakeHost::new();
    let destination = FakeHost::new();

    let router = Router::new(
        endpoint(&source, source_remote),
        endpoint(&destination, destination_remote),
        Some(staging.path()),
    )
    .unwrap();

    assert_eq!(router.strategy(), expected);
}

#[rstest]
#[case::local_to_remote(false, true, 0, 1)]
#[case::local_to_local(false, false, 0, 0)]
#[case::remote_to_local(true, false, 1, 0)]
#[case::remote_to_remote(true, true, 1, 1)]
fn test_strategy_uses_expected_primitives(
    #[case] source_remote: bool,
    #[case] destination_remote: bool,
    #[case] expected_receives: usize,
    #[case] expected_sends: usize,
) {
    let local = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    let source = FakeHost::new();
    let destination = FakeHost::new();

    let src = if source_remote {
        source.put("/data/in.txt", "payload");
        "/data/in.txt".into()
    } else {
        write_local(local.path(), "in.txt", "payload")
    };
    let dst = if destination_remote {
        "/out.txt".into()
    } else {
        local.path().join("out.txt")
    };

    let router = Router::new(
        endpoint(&source, source_remote),
        endpoint(&destination, destination_remote),
        Some(staging.path()),
    )
    .unwrap();

    assert!(router.copy(&src, &dst).unwrap());
    assert_eq!(source.receives(), expected_receives);
    assert_eq!(destination.sends(), expected_sends);
    assert_eq!(source.sends(), 0);
    assert_eq!(destination.receives(), 0);

    if destination_remote {
        destination.assert_file_content("/out.txt", "payload");
    } else {
        assert_eq!(fs::read_to_string(&dst).unwrap(), "payload");
    }
    assert_eq!(count_entries(staging.path()), 0);
}

#[test]
fn test_both_remote_without_staging_dir_is_refused() {
    let source = FakeHost::new();
    let destination = FakeHost::new();

    let err = Router::new(Endpoint::Remote(&source), Endpoint::Remote(&destination), None)
        .unwrap_err();

    assert!(matches!(err, Error::InvalidConfiguration(_)));
}

#[test]
fn test_both_remote_with_empty_staging_dir_is_refused() {
    let source = FakeHost::new();
    let destination = FakeHost::new();

    let err = Router::new(
        Endpoint::Remote(&source),
        Endpoint::Remote(&destination),
        Some(Path::new("")),
    )
    .unwrap_err();

    assert!(matches!(err, Error::InvalidConfiguration(_)));
}

#[test]
fn test_unusable_source_handle_is_refused() {
    let source = FakeHost::disconnected();

    let err = Router::new(Endpoint::Remote(&source), Endpoint::Local, None).unwrap_err();

    assert!(matches!(err, Error::InvalidConfiguration(_)));
    assert_eq!(source.receives(), 0);
}

#[test]
fn test_unusable_destination_handle_is_refused() {
    let destination = FakeHost::disconnected();

    let err = Router::new(Endpoint::Local, Endpoint::Remote(&destination), None).unwrap_err();

    assert!(matches!(err, Error::InvalidConfiguration(_)));
}

#[test]
fn test_staging_dir_trailing_separators_are_stripped() {
    let source = FakeHost::new();
    let destination = FakeHost::new();

    let router = Router::new(
        Endpoint::Remote(&source),
        Endpoint::Remote(&destination),
        Some(Path::new("/tmp/staging/\\//")),
    )
    .unwrap();

    assert_eq!(router.staging_dir(), Some(Path::new("/tmp/staging")));
}

#[test]
fn test_staging_dir_ignored_when_one_side_is_local() {
    let destination = FakeHost::new();

    let router = Router::new(Endpoint::Local, Endpoint::Remote(&destination), None).unwrap();

    assert_eq!(router.strategy(), Strategy::LocalToRemote);
    assert!(router.staging_dir().is_none());
}

#[test]
fn test_router_is_reusable() {
    let local = TempDir::new().unwrap();
    let destination = FakeHost::new();
    let a = write_local(local.path(), "a.txt", "A");
    let b = write_local(local.path(), "b.txt", "B");

    let router = Router::new(Endpoint::Local, Endpoint::Remote(&destination), None).unwrap();

    assert!(router.copy(&a, "/a.txt").unwrap());
    assert!(router.copy(&b, "/b.txt").unwrap());
    destination.assert_file_content("/a.txt", "A");
    destination.assert_file_content("/b.txt", "B");
    assert_eq!(destination.sends(), 2);
}
