//! Atomic JSON document I/O
//!
//! The ledger file is either completely replaced or left untouched; a crash
//! mid-write never leaves a half-written document behind.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::LedgerError;

/// Read a JSON document, treating a missing file as the default value
///
/// A file that exists but cannot be opened or parsed is a storage error; it
/// is never silently replaced with the default.
pub fn read_json<T, P>(path: P) -> Result<T, LedgerError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => {
            return Err(LedgerError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| LedgerError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Replace a JSON document atomically
///
/// The document is written to a sibling temp file, synced, and renamed over
/// the target. On any failure the temp file is removed and the target keeps
/// its previous contents. Missing parent directories are created.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), LedgerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Sibling temp file keeps the final rename on a single filesystem
    let temp_path = temp_sibling(path);

    if let Err(e) = write_and_sync(&temp_path, data) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Storage(format!("Failed to replace {}: {}", path.display(), e))
    })
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_and_sync<T: Serialize>(path: &Path, data: &T) -> Result<(), LedgerError> {
    let file = File::create(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create {}: {}", path.display(), e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| LedgerError::Storage(format!("Failed to serialize ledger data: {}", e)))?;
    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to write {}: {}", path.display(), e)))?;

    // Sync before the rename so the replacement is durable, not just atomic
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Snapshot {
        label: String,
        count: u32,
    }

    fn snapshot() -> Snapshot {
        Snapshot {
            label: "march".to_string(),
            count: 3,
        }
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refused"))
        }
    }

    #[test]
    fn test_missing_file_reads_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let data: Snapshot = read_json(&path).unwrap();
        assert_eq!(data, Snapshot::default());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corrupt.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<Snapshot, _>(&path).unwrap_err();
        assert!(matches!(err, LedgerError::Storage(_)));
    }

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");

        write_json_atomic(&path, &snapshot()).unwrap();

        let loaded: Snapshot = read_json(&path).unwrap();
        assert_eq!(loaded, snapshot());
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");

        write_json_atomic(&path, &snapshot()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("data.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_missing_parents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("data.json");

        write_json_atomic(&path, &snapshot()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_failed_write_cleans_up_and_keeps_target() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        write_json_atomic(&path, &snapshot()).unwrap();

        write_json_atomic(&path, &Unserializable).unwrap_err();

        // Previous contents intact, no temp residue
        let loaded: Snapshot = read_json(&path).unwrap();
        assert_eq!(loaded, snapshot());
        assert!(!temp_dir.path().join("data.json.tmp").exists());
    }
}
