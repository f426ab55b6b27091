//! JSON file reads and atomic writes
//!
//! A failed write never leaves a half-written ledger behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::LedgerError;

/// Read JSON from a file, returning a default value if the file doesn't exist
///
/// A file that exists but cannot be parsed as `T` is reported as
/// [`LedgerError::CorruptData`]; it is never replaced by the default.
pub fn read_json<T, P>(path: P) -> Result<T, LedgerError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }
    if !path.is_file() {
        return Err(LedgerError::Io(format!(
            "{} is not a regular file",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| LedgerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            LedgerError::Io(format!("Failed to read {}: {}", path.display(), e))
        } else {
            LedgerError::corrupt(path, e.to_string())
        }
    })
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The target is either completely replaced or left untouched.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), LedgerError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    let written = serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| LedgerError::Storage(format!("Failed to serialize data: {}", e)))
        .and_then(|_| {
            writer
                .flush()
                .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))
        })
        .and_then(|_| {
            writer
                .get_ref()
                .sync_all()
                .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))
        });

    if let Err(err) = written {
        drop(writer);
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    drop(writer);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Storage(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    Ok(())
}

/// Whether `path` exists and holds well-formed JSON of any shape
pub fn json_file_valid<P: AsRef<Path>>(path: P) -> bool {
    File::open(path.as_ref())
        .map(BufReader::new)
        .is_ok_and(|reader| serde_json::from_reader::<_, serde_json::Value>(reader).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Row {
        name: String,
        value: f64,
    }

    #[test]
    fn test_missing_file_reads_as_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let data: Vec<Row> = read_json(&path).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_written_rows_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.json");

        let data = vec![
            Row {
                name: "first".to_string(),
                value: 1.5,
            },
            Row {
                name: "second".to_string(),
                value: 2.0,
            },
        ];

        write_json_atomic(&path, &data).unwrap();
        assert!(path.exists());

        let loaded: Vec<Row> = read_json(&path).unwrap();
        assert_eq!(data, loaded);
    }

    #[test]
    fn test_invalid_json_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "[{\"name\": ").unwrap();

        let err = read_json::<Vec<Row>, _>(&path).unwrap_err();
        assert!(err.is_corrupt_data());
    }

    #[test]
    fn test_directory_is_io_error_not_corrupt() {
        let temp_dir = TempDir::new().unwrap();

        let err = read_json::<Vec<Row>, _>(temp_dir.path()).unwrap_err();
        assert!(matches!(err, LedgerError::Io(ref msg) if msg.contains("not a regular file")));
        assert!(!err.is_corrupt_data());
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shape.json");
        fs::write(&path, r#"[{"name": "no value"}]"#).unwrap();

        let err = read_json::<Vec<Row>, _>(&path).unwrap_err();
        assert!(err.is_corrupt_data());
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.json");
        let temp_path = temp_dir.path().join("rows.json.tmp");

        write_json_atomic(&path, &vec![Row::default()]).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.json");

        write_json_atomic(&path, &vec![Row::default(), Row::default()]).unwrap();
        write_json_atomic(&path, &Vec::<Row>::new()).unwrap();

        let loaded: Vec<Row> = read_json(&path).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("rows.json");

        write_json_atomic(&path, &Vec::<Row>::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_into_file_parent_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("rows.json");

        let err = write_json_atomic(&path, &Vec::<Row>::new()).unwrap_err();
        assert!(err.is_storage());
    }

    #[test]
    fn test_json_file_validity_check() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");

        fs::write(&good, r#"{"any": "shape"}"#).unwrap();
        fs::write(&bad, "Lunch,10,Food").unwrap();

        assert!(json_file_valid(&good));
        assert!(!json_file_valid(&bad));
        assert!(!json_file_valid(dir.path().join("absent.json")));
    }
}
