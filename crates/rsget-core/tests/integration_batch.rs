//! Integration test: local HTTP server, real curl transport, sequential batch.
//!
//! Starts minimal static servers, runs batches against them, and asserts
//! file contents, per-item failure isolation, and overwrite-on-rerun.

mod common;

use rsget_core::batch::{BatchRunner, ItemError};
use rsget_core::fetch::FetchError;
use tempfile::tempdir;

#[test]
fn batch_writes_each_body_in_order() {
    let body_a = b"<html>alpha</html>".to_vec();
    // Binary body: must round-trip byte-for-byte.
    let body_b: Vec<u8> = (0u8..=255).cycle().take(4096).collect();
    let url_a = common::static_server::start(200, body_a.clone());
    let url_b = common::static_server::start(200, body_b.clone());

    let dir = tempdir().unwrap();
    let runner = BatchRunner::new(dir.path());
    let outcome = runner.run(&[url_a, url_b]);

    assert_eq!(outcome.len(), 2);
    assert!(outcome.all_succeeded());
    assert_eq!(
        std::fs::read(dir.path().join("request_0.html")).unwrap(),
        body_a
    );
    assert_eq!(
        std::fs::read(dir.path().join("request_1.html")).unwrap(),
        body_b
    );
}

#[test]
fn http_error_item_is_isolated() {
    let body = b"still here".to_vec();
    let url_missing = common::static_server::start(404, b"gone".to_vec());
    let url_good = common::static_server::start(200, body.clone());

    let dir = tempdir().unwrap();
    let runner = BatchRunner::new(dir.path());
    let outcome = runner.run(&[url_missing, url_good]);

    let items = outcome.items();
    assert!(matches!(
        items[0].result,
        Err(ItemError::Fetch(FetchError::Http(404)))
    ));
    assert!(!dir.path().join("request_0.html").exists());
    assert!(items[1].result.is_ok());
    assert_eq!(
        std::fs::read(dir.path().join("request_1.html")).unwrap(),
        body
    );
}

#[test]
fn connection_refused_item_is_isolated() {
    let body = b"<html>ok</html>".to_vec();
    let url_dead = common::static_server::refused_url();
    let url_good = common::static_server::start(200, body.clone());

    let dir = tempdir().unwrap();
    let runner = BatchRunner::new(dir.path());
    let outcome = runner.run(&[url_dead, url_good]);

    let items = outcome.items();
    assert!(matches!(
        items[0].result,
        Err(ItemError::Fetch(FetchError::Curl(_)))
    ));
    assert!(!dir.path().join("request_0.html").exists());
    assert_eq!(
        std::fs::read(dir.path().join("request_1.html")).unwrap(),
        body
    );
}

#[test]
fn rerun_overwrites_previous_output() {
    let url_first = common::static_server::start(200, b"first run".to_vec());
    let url_second = common::static_server::start(200, b"second run".to_vec());

    let dir = tempdir().unwrap();
    let runner = BatchRunner::new(dir.path());

    let outcome = runner.run(&[url_first]);
    assert!(outcome.all_succeeded());
    let outcome = runner.run(&[url_second]);
    assert!(outcome.all_succeeded());

    assert_eq!(
        std::fs::read(dir.path().join("request_0.html")).unwrap(),
        b"second run"
    );
}
