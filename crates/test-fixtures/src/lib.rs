//! Golden fixture loader shared by the integration tests of every Vigil crate.
//!
//! Fixtures are JSON files under `crates/test-fixtures/golden/`, addressed by
//! paths relative to the fixture root such as `golden/pipeline/mixed_feed.json`.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

const FIXTURE_DIR: &str = "test-fixtures";

/// The `test-fixtures` directory nearest to the calling crate's manifest.
///
/// # Panics
/// Panics when no ancestor of `CARGO_MANIFEST_DIR` contains one.
pub fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    Path::new(&manifest_dir)
        .ancestors()
        .map(|dir| dir.join(FIXTURE_DIR))
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| panic!("no {FIXTURE_DIR}/ directory above {manifest_dir}"))
}

/// Deserialize the fixture at `relative_path`.
///
/// # Panics
/// Panics if the file is missing or does not match `T`.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let raw = std::fs::read(&path)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()));
    serde_json::from_slice(&raw)
        .unwrap_or_else(|e| panic!("malformed fixture {}: {e}", path.display()))
}

/// The fixture at `relative_path` as untyped JSON.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// JSON files directly inside `subdir`, sorted by name. Empty when the
/// directory does not exist.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(fixtures_root().join(subdir)) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_directories_are_discoverable() {
        assert!(fixture_exists("golden/privacy"));
        assert!(fixture_exists("golden/pipeline"));
        assert!(!list_fixtures("golden/privacy").is_empty());
        assert!(list_fixtures("golden/missing").is_empty());
    }

    #[test]
    fn pii_samples_load_as_json() {
        let value = load_fixture_value("golden/privacy/pii_samples.json");
        assert!(value.is_object() || value.is_array());
    }
}
