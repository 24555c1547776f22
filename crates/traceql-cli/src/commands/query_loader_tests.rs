use std::io::Write;
use std::path::Path;

use super::query_loader::{LoadError, load_query_source};

#[test]
fn inline_text_wins() {
    let query = load_query_source(None, Some("{ .a = 1 }")).unwrap();
    assert_eq!(query.name, "<query>");
    assert_eq!(query.text, "{ .a = 1 }");
}

#[test]
fn reads_query_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{{ span:duration > 1s }}").unwrap();

    let query = load_query_source(Some(file.path()), None).unwrap();
    assert_eq!(query.text, "{ span:duration > 1s }\n");
    assert_eq!(query.name, file.path().to_string_lossy());
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.traceql");

    let err = load_query_source(Some(&path), None).unwrap_err();
    assert!(matches!(err, LoadError::File { .. }));
    assert!(err.to_string().starts_with("failed to read '"));
}

#[test]
fn no_input() {
    let err = load_query_source(None::<&Path>, None).unwrap_err();
    assert!(matches!(err, LoadError::Missing));
}
