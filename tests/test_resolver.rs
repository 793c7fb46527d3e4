use std::fs;

use oneshotd::config::StaticFilesConfig;
use oneshotd::resolver::{Resolution, Resolver};
use tempfile::TempDir;

fn document_root() -> (TempDir, Resolver) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("home.html"), b"<h1>home</h1>").unwrap();
    fs::write(dir.path().join("error.html"), b"<h1>not found</h1>").unwrap();
    fs::write(dir.path().join("data.bin"), vec![0u8, 1, 2, 3, 255]).unwrap();

    let resolver = Resolver::new(&StaticFilesConfig {
        root: dir.path().to_path_buf(),
        default_document: "home.html".to_string(),
        error_document: "error.html".to_string(),
    });

    (dir, resolver)
}

#[test]
fn test_root_serves_default_document() {
    let (_dir, resolver) = document_root();

    assert_eq!(
        resolver.resolve("/"),
        Resolution::Resource(b"<h1>home</h1>".to_vec())
    );
}

#[test]
fn test_existing_file_is_loaded_verbatim() {
    let (_dir, resolver) = document_root();

    assert_eq!(
        resolver.resolve("/data.bin"),
        Resolution::Resource(vec![0u8, 1, 2, 3, 255])
    );
}

#[test]
fn test_missing_target_falls_back_to_error_document() {
    let (_dir, resolver) = document_root();

    assert_eq!(
        resolver.resolve("/missing.png"),
        Resolution::ErrorDocument(b"<h1>not found</h1>".to_vec())
    );
}

#[test]
fn test_missing_error_document_is_unreadable_not_a_loop() {
    let (dir, resolver) = document_root();
    fs::remove_file(dir.path().join("error.html")).unwrap();

    // both the target and the fallback are gone; exactly one substitution happens
    assert_eq!(resolver.resolve("/missing.png"), Resolution::Unreadable);
}

#[test]
fn test_directory_target_is_unreadable() {
    let (dir, resolver) = document_root();
    fs::create_dir(dir.path().join("subdir")).unwrap();

    assert_eq!(resolver.resolve("/subdir"), Resolution::Unreadable);
}

#[test]
fn test_root_resolution_is_idempotent_with_direct_name() {
    let (_dir, resolver) = document_root();

    assert_eq!(resolver.target_path("/"), resolver.target_path("/home.html"));
    assert_eq!(resolver.resolve("/"), resolver.resolve("/home.html"));
}
