use std::fs;

use picohttp::http::response::{ContentType, StatusCode};
use picohttp::routes::files;

#[tokio::test]
async fn test_serve_binary_file_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let content = vec![0u8, 255, 0, 1, 2, 0, 3];
    fs::write(dir.path().join("blob"), &content).unwrap();

    let resp = files::serve(Some(dir.path()), "blob").await;

    assert_eq!(resp.status, StatusCode::Ok);
    assert_eq!(resp.content_type, ContentType::OctetStream);
    assert_eq!(resp.body, content);
    assert_eq!(resp.content_length(), content.len());
}

#[tokio::test]
async fn test_serve_nested_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/inner.txt"), b"nested").unwrap();

    let resp = files::serve(Some(dir.path()), "sub/inner.txt").await;

    assert_eq!(resp.status, StatusCode::Ok);
    assert_eq!(resp.body, b"nested");
}

#[tokio::test]
async fn test_serve_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();

    let resp = files::serve(Some(dir.path()), "missing").await;

    assert_eq!(resp.status, StatusCode::NotFound);
    assert_eq!(resp.body, b"Not Found");
}

#[tokio::test]
async fn test_serve_without_root_is_not_found() {
    let resp = files::serve(None, "anything").await;

    assert_eq!(resp.status, StatusCode::NotFound);
}

#[tokio::test]
async fn test_serve_rejects_traversal_even_when_target_exists() {
    let outer = tempfile::tempdir().unwrap();
    let root = outer.path().join("root");
    fs::create_dir(&root).unwrap();
    fs::write(outer.path().join("secret"), b"keep out").unwrap();

    let resp = files::serve(Some(&root), "../secret").await;

    assert_eq!(resp.status, StatusCode::NotFound);
}

#[tokio::test]
async fn test_serve_rejects_absolute_names() {
    let dir = tempfile::tempdir().unwrap();

    let resp = files::serve(Some(dir.path()), "/etc/hostname").await;

    assert_eq!(resp.status, StatusCode::NotFound);
}

#[tokio::test]
async fn test_serve_rejects_empty_name() {
    let dir = tempfile::tempdir().unwrap();

    let resp = files::serve(Some(dir.path()), "").await;

    assert_eq!(resp.status, StatusCode::NotFound);
}

#[tokio::test]
async fn test_serve_existing_but_unreadable_entry_is_internal_error() {
    // A directory passes the existence check but cannot be read as a file.
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("subdir")).unwrap();

    let resp = files::serve(Some(dir.path()), "subdir").await;

    assert_eq!(resp.status, StatusCode::InternalServerError);
}
