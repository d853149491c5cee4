use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::ServiceError;
use crate::models::{InspectionRecord, RecordDraft};
use crate::store::RecordStore;

/// Flat-file record store: one JSON array of records at a fixed path,
/// fully rewritten on every mutation.
///
/// Records are stored without identifiers; a record's id is its position in
/// the array. The file is re-read at the start of every operation so the
/// on-disk state stays the single source of truth across requests. There is
/// no locking: under concurrent mutation the last writer wins, an accepted
/// limitation of the single-instance deployment this adapter targets.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    async fn load(&self) -> Result<Vec<RecordDraft>, ServiceError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            // A store that has never been written to is empty, not broken.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ServiceError::Io(e)),
        };

        let records = serde_json::from_slice(&bytes)?;
        Ok(records)
    }

    async fn save(&self, records: &[RecordDraft]) -> Result<(), ServiceError> {
        let bytes = serde_json::to_vec_pretty(records)?;
        tokio::fs::write(&self.path, bytes).await?;
        debug!(count = records.len(), path = %self.path.display(), "Rewrote record file");
        Ok(())
    }
}

#[async_trait]
impl RecordStore for FileStore {
    async fn list_all(&self) -> Result<Vec<InspectionRecord>, ServiceError> {
        let records = self.load().await?;
        Ok(records
            .into_iter()
            .enumerate()
            .map(|(index, draft)| InspectionRecord::from_draft(index as i64, draft))
            .collect())
    }

    async fn create(&self, draft: RecordDraft) -> Result<i64, ServiceError> {
        let mut records = self.load().await?;
        records.push(draft);
        self.save(&records).await?;
        Ok((records.len() - 1) as i64)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let mut records = self.load().await?;

        let Ok(index) = usize::try_from(id) else {
            return Ok(false);
        };
        if index >= records.len() {
            return Ok(false);
        }

        records.remove(index);
        self.save(&records).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(date: &str, unit_no: &str) -> RecordDraft {
        RecordDraft {
            date: date.to_string(),
            location: "Dockside".to_string(),
            unit_no: unit_no.to_string(),
            serial_no: "SN-1".to_string(),
            manufacture_date: "2019-06-01".to_string(),
            condition: "Fair".to_string(),
            inspector: "M. Jones".to_string(),
            weight: "250.5".parse().unwrap(),
            notes: "Surface rust".to_string(),
            r#type: "Hook".to_string(),
        }
    }

    fn store(dir: &tempfile::TempDir) -> FileStore {
        FileStore::new(dir.path().join("inspections.json"))
    }

    #[tokio::test]
    async fn missing_file_lists_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn created_records_get_positional_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        assert_eq!(store.create(draft("2024-01-10", "A1")).await.unwrap(), 0);
        assert_eq!(store.create(draft("2024-03-05", "B2")).await.unwrap(), 1);

        let records = store.list_all().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 0);
        assert_eq!(records[0].unit_no, "A1");
        assert_eq!(records[1].id, 1);
        assert_eq!(records[1].unit_no, "B2");
    }

    #[tokio::test]
    async fn create_round_trips_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        let submitted = draft("2024-05-01", "C7");
        store.create(submitted.clone()).await.unwrap();

        let records = store.list_all().await.unwrap();
        let got = &records[0];
        assert_eq!(got.date, submitted.date);
        assert_eq!(got.location, submitted.location);
        assert_eq!(got.serial_no, submitted.serial_no);
        assert_eq!(got.manufacture_date, submitted.manufacture_date);
        assert_eq!(got.condition, submitted.condition);
        assert_eq!(got.inspector, submitted.inspector);
        assert_eq!(got.weight, submitted.weight);
        assert_eq!(got.notes, submitted.notes);
        assert_eq!(got.r#type, submitted.r#type);
    }

    #[tokio::test]
    async fn delete_removes_and_reindexes() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        store.create(draft("2024-01-10", "A1")).await.unwrap();
        store.create(draft("2024-03-05", "B2")).await.unwrap();

        assert!(store.delete(0).await.unwrap());

        let records = store.list_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 0);
        assert_eq!(records[0].unit_no, "B2");
    }

    #[tokio::test]
    async fn out_of_range_delete_reports_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        store.create(draft("2024-01-10", "A1")).await.unwrap();

        assert!(!store.delete(5).await.unwrap());
        assert!(!store.delete(-1).await.unwrap());
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn state_is_visible_across_store_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inspections.json");

        FileStore::new(&path)
            .create(draft("2024-01-10", "A1"))
            .await
            .unwrap();

        // A fresh handle sees the committed state: the file, not process
        // memory, is authoritative.
        let records = FileStore::new(&path).list_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].unit_no, "A1");
    }

    #[tokio::test]
    async fn corrupt_file_surfaces_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inspections.json");
        tokio::fs::write(&path, b"not json").await.unwrap();

        let err = FileStore::new(&path).list_all().await.unwrap_err();
        assert!(matches!(err, ServiceError::SerializationError(_)));
    }
}
