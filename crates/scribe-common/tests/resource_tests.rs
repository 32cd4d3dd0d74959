//! Integration tests for text resource loading.

use std::fs;
use std::path::PathBuf;

use scribe_common::resource::{DataUrl, ResourceError, load_text};

/// Helper to write a scratch file unique to one test.
fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("scribe-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_data_url_parse_splits_metadata() {
    let url = DataUrl::parse("data:text/html;base64,PGI+").unwrap();
    assert_eq!(url.metadata, "text/html;base64");
    assert_eq!(url.payload, "PGI+");
    assert!(url.is_base64());
}

#[test]
fn test_data_url_missing_comma() {
    assert!(matches!(
        DataUrl::parse("data:text/plain"),
        Err(ResourceError::InvalidDataUrl(_))
    ));
}

#[test]
fn test_load_base64_data_url() {
    assert_eq!(load_text("data:text/html;base64,PGI+aGk8L2I+").unwrap(), "<b>hi</b>");
}

#[test]
fn test_load_percent_encoded_data_url() {
    assert_eq!(load_text("data:text/plain,a%20b").unwrap(), "a b");
}

#[test]
fn test_load_invalid_base64() {
    assert!(matches!(
        load_text("data:;base64,@@@"),
        Err(ResourceError::Decode(_))
    ));
}

#[test]
fn test_load_non_utf8_data_url() {
    assert!(matches!(
        load_text("data:application/octet-stream,%FF%FE"),
        Err(ResourceError::NotUtf8(_))
    ));
}

#[test]
fn test_load_plain_path() {
    let path = scratch_file("plain.html", "<p>snippet</p>");
    assert_eq!(load_text(path.to_str().unwrap()).unwrap(), "<p>snippet</p>");
    fs::remove_file(path).unwrap();
}

#[test]
fn test_load_file_url() {
    let path = scratch_file("url.html", "<hr/>");
    let location = format!("file://{}", path.display());
    assert_eq!(load_text(&location).unwrap(), "<hr/>");
    fs::remove_file(path).unwrap();
}

#[test]
fn test_load_missing_file() {
    let err = load_text("/definitely/not/here/snippet.html").unwrap_err();
    assert!(matches!(err, ResourceError::Read { .. }));
    assert!(err.to_string().contains("/definitely/not/here/snippet.html"));
}
