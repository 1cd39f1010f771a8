/// Best-effort manifest reading.
use std::fs;
use std::path::Path;

use super::model::Manifest;

/// File name of a package manifest.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Read and parse the manifest at `path`.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD before parsing.
///
/// Returns `None` when the file is missing, unreadable, not valid JSON, or
/// not a JSON object. All of these mean "no manifest here" to the locator.
#[must_use]
pub fn read_manifest(path: &Path) -> Option<Manifest> {
    let bytes = fs::read(path).ok()?;
    let text = String::from_utf8_lossy(&bytes);
    let value = serde_json::from_str(&text).ok()?;
    Manifest::from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_reads_valid_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE_NAME);
        fs::write(&path, r#"{"name":"x","version":"1.0.0"}"#).unwrap();
        let m = read_manifest(&path).unwrap();
        assert_eq!(m.version(), Some("1.0.0"));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE_NAME);
        fs::write(&path, b"{\"name\":\"foo\",\"description\":\"caf\xE9\",\"version\":\"2.0.0\"}")
            .unwrap();
        let m = read_manifest(&path).unwrap();
        assert_eq!(m.display_name().as_deref(), Some("foo"));
        assert_eq!(m.version(), Some("2.0.0"));
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempdir().unwrap();
        assert!(read_manifest(&dir.path().join(MANIFEST_FILE_NAME)).is_none());
    }

    #[test]
    fn test_malformed_json_is_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE_NAME);
        fs::write(&path, "{ \"name\": ").unwrap();
        assert!(read_manifest(&path).is_none());
    }

    #[test]
    fn test_json_array_is_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE_NAME);
        fs::write(&path, "[]").unwrap();
        assert!(read_manifest(&path).is_none());
    }

    #[test]
    fn test_directory_is_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE_NAME);
        fs::create_dir(&path).unwrap();
        assert!(read_manifest(&path).is_none());
    }
}
