use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use tracing::{debug, error, warn};

use crate::errors::SpendlogError;
use crate::records::PurchaseRecord;

/// Strict read: io and parse failures propagate. An empty file is an empty
/// collection, not a parse error.
pub fn read_records(path: &Path) -> Result<Vec<PurchaseRecord>, SpendlogError> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(Vec::new());
    }
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Full overwrite of the record file as pretty-printed JSON, creating the
/// parent directory on first save.
pub fn write_records(path: &Path, records: &[PurchaseRecord]) -> Result<(), SpendlogError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Loads the record collection, falling back to an empty one on any
/// failure. The program starts regardless of the state of the record file.
pub fn load(path: &Path) -> Vec<PurchaseRecord> {
    debug!("Loading records from {}", path.display());
    match read_records(path) {
        Ok(records) => {
            println!(
                "Loaded {} purchase records from {}",
                records.len(),
                path.display()
            );
            records
        }
        Err(SpendlogError::Io(err)) if err.kind() == ErrorKind::NotFound => {
            println!(
                "No record file at {}, starting with an empty list",
                path.display()
            );
            Vec::new()
        }
        Err(SpendlogError::Json(err)) => {
            warn!("Record file {} is corrupt: {}", path.display(), err);
            println!("Record file is corrupt ({err}), starting with an empty list");
            Vec::new()
        }
        Err(err) => {
            error!("Could not load records from {}: {}", path.display(), err);
            println!("Could not load records ({err}), starting with an empty list");
            Vec::new()
        }
    }
}

/// Saves the whole collection, reporting failure without raising it: the
/// in-memory store stays authoritative either way.
pub fn save(path: &Path, records: &[PurchaseRecord]) {
    match write_records(path, records) {
        Ok(()) => {
            debug!("Saved {} records to {}", records.len(), path.display());
            println!("Saved {} records to {}", records.len(), path.display());
        }
        Err(err) => {
            error!("Could not save records to {}: {}", path.display(), err);
            println!("Could not save records ({err}); recent changes are kept in memory only");
        }
    }
}

#[cfg(test)]
mod storage_tests {
    use std::fs::{self, File};

    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use tempfile::tempdir;

    use crate::records::PurchaseRecord;

    use super::{load, read_records, write_records};

    fn sample_records() -> Vec<PurchaseRecord> {
        vec![
            PurchaseRecord {
                id: 1,
                item_name: "Milk".to_string(),
                category: "Groceries".to_string(),
                cost: Decimal::new(350, 2),
                purchase_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            },
            PurchaseRecord {
                id: 2,
                item_name: "Laptop".to_string(),
                category: "Electronics".to_string(),
                cost: Decimal::new(99999, 2),
                purchase_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            },
        ]
    }

    #[test]
    fn round_trip_preserves_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("purchases.json");
        let records = sample_records();
        write_records(&path, &records).unwrap();
        assert_eq!(read_records(&path).unwrap(), records);
    }

    #[test]
    fn saved_file_is_readable_json_with_stable_field_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("purchases.json");
        write_records(&path, &sample_records()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"item_name\": \"Milk\""));
        assert!(content.contains("\"cost\": 3.5"));
        assert!(content.contains("\"purchase_date\": \"2024-05-01\""));
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        assert!(load(&dir.path().join("absent.json")).is_empty());
    }

    #[test]
    fn load_empty_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("purchases.json");
        File::create(&path).unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn load_corrupt_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("purchases.json");
        fs::write(&path, "{ this is not a record file").unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("purchases.json");
        write_records(&path, &sample_records()).unwrap();
        assert_eq!(read_records(&path).unwrap().len(), 2);
    }
}
