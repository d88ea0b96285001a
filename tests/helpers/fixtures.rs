//! Fixture stylesheets under `tests/fixtures`, and scratch package layouts.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Absolute path of a checked-in fixture.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Contents of a checked-in fixture.
pub fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixture(name))
        .unwrap_or_else(|e| panic!("fixture {name} should be readable: {e}"))
}

pub fn canonical(path: impl AsRef<Path>) -> PathBuf {
    fs::canonicalize(path.as_ref()).expect("path should exist")
}

/// A temporary directory populated with `(relative path, content)` files.
pub fn layout(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    for (relative, content) in files {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, content).expect("write layout file");
    }
    dir
}
