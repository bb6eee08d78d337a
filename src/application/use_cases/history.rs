use std::collections::HashSet;

use tracing::{info, warn};

use crate::domain::comparison::ComparisonRecord;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::storage::{LocalStore, HISTORY_KEY, VISITED_KEY};

/// Saved comparisons, newest first, persisted in a local JSON store
pub struct ComparisonHistory {
    store: LocalStore,
}

impl ComparisonHistory {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<ComparisonRecord>> {
        Ok(self
            .store
            .get::<Vec<ComparisonRecord>>(HISTORY_KEY)?
            .unwrap_or_default())
    }

    pub fn get(&self, id: &str) -> Result<ComparisonRecord> {
        self.list()?
            .into_iter()
            .find(|record| record.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Comparison {} not found", id)))
    }

    /// Prepend a record. Ids are never reused.
    pub fn save(&self, record: ComparisonRecord) -> Result<ComparisonRecord> {
        if !record.is_valid() {
            return Err(AppError::ValidationError(
                "Please enter text in at least one of the text areas before saving".to_string(),
            ));
        }

        let mut records = self.list()?;
        if records.iter().any(|existing| existing.id == record.id) {
            return Err(AppError::ValidationError(format!(
                "Comparison {} already exists",
                record.id
            )));
        }

        records.insert(0, record.clone());
        self.store.set(HISTORY_KEY, &records)?;
        info!(id = %record.id, total = records.len(), "Comparison saved");
        Ok(record)
    }

    /// Prepend an imported batch, keeping the batch's own order.
    /// The batch is rejected as a whole if any record is empty or reuses an id.
    pub fn import(&self, batch: Vec<ComparisonRecord>) -> Result<usize> {
        if batch.is_empty() {
            return Ok(0);
        }

        let existing = self.list()?;
        let mut seen: HashSet<&str> = existing.iter().map(|record| record.id.as_str()).collect();
        for (index, record) in batch.iter().enumerate() {
            if !record.is_valid() {
                warn!(index = index, "Rejected import batch with empty record");
                return Err(AppError::ValidationError(format!(
                    "Record {} has no text in either text area",
                    index + 1
                )));
            }
            if !seen.insert(record.id.as_str()) {
                warn!(id = %record.id, "Rejected import batch with reused id");
                return Err(AppError::ValidationError(format!(
                    "Comparison {} already exists",
                    record.id
                )));
            }
        }

        let imported = batch.len();
        let records: Vec<ComparisonRecord> = batch.into_iter().chain(existing).collect();

        self.store.set(HISTORY_KEY, &records)?;
        info!(imported = imported, total = records.len(), "Comparisons imported");
        Ok(imported)
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.list()?;
        let before = records.len();
        records.retain(|record| record.id != id);

        if records.len() == before {
            warn!(id = %id, "Delete requested for unknown comparison");
            return Err(AppError::NotFound(format!("Comparison {} not found", id)));
        }

        self.store.set(HISTORY_KEY, &records)?;
        info!(id = %id, remaining = records.len(), "Comparison deleted");
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.store.set(HISTORY_KEY, &Vec::<ComparisonRecord>::new())?;
        info!("Comparison history cleared");
        Ok(())
    }

    pub fn has_visited(&self) -> Result<bool> {
        Ok(self.store.get::<bool>(VISITED_KEY)?.unwrap_or(false))
    }

    pub fn mark_visited(&self) -> Result<()> {
        self.store.set(VISITED_KEY, &true)
    }

    pub fn reset_visited(&self) -> Result<()> {
        self.store.remove(VISITED_KEY).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> (tempfile::TempDir, ComparisonHistory) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().join("history.json"));
        (dir, ComparisonHistory::new(store))
    }

    fn record(text_a: &str) -> ComparisonRecord {
        ComparisonRecord::new("", "", text_a, "", None)
    }

    #[test]
    fn test_save_lists_newest_first() {
        let (_dir, history) = history();
        history.save(record("first")).unwrap();
        history.save(record("second")).unwrap();

        let texts: Vec<_> = history.list().unwrap().into_iter().map(|r| r.text_a).collect();
        assert_eq!(texts, vec!["second", "first"]);
    }

    #[test]
    fn test_save_rejects_duplicate_id_and_empty_record() {
        let (_dir, history) = history();
        let saved = history.save(record("once")).unwrap();

        assert!(matches!(
            history.save(saved.clone()),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            history.save(ComparisonRecord::empty()),
            Err(AppError::ValidationError(_))
        ));
        assert_eq!(history.list().unwrap().len(), 1);
        assert_eq!(history.get(&saved.id).unwrap(), saved);
    }

    #[test]
    fn test_import_prepends_batch_in_order() {
        let (_dir, history) = history();
        history.save(record("old")).unwrap();

        let count = history
            .import(vec![record("batch 1"), record("batch 2")])
            .unwrap();
        assert_eq!(count, 2);

        let texts: Vec<_> = history.list().unwrap().into_iter().map(|r| r.text_a).collect();
        assert_eq!(texts, vec!["batch 1", "batch 2", "old"]);
    }

    #[test]
    fn test_import_rejects_empty_records_and_reused_ids() {
        let (_dir, history) = history();
        let kept = history.save(record("kept")).unwrap();

        assert!(matches!(
            history.import(vec![record("fine"), ComparisonRecord::empty()]),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            history.import(vec![kept.clone()]),
            Err(AppError::ValidationError(_))
        ));

        let twice = record("twice");
        assert!(matches!(
            history.import(vec![twice.clone(), twice]),
            Err(AppError::ValidationError(_))
        ));

        assert_eq!(history.list().unwrap(), vec![kept]);
    }

    #[test]
    fn test_delete_and_clear() {
        let (_dir, history) = history();
        let keep = history.save(record("keep")).unwrap();
        let drop = history.save(record("drop")).unwrap();

        history.delete(&drop.id).unwrap();
        assert!(matches!(history.delete(&drop.id), Err(AppError::NotFound(_))));
        assert_eq!(history.list().unwrap(), vec![keep]);

        history.clear().unwrap();
        assert!(history.list().unwrap().is_empty());
    }

    #[test]
    fn test_visited_flag() {
        let (_dir, history) = history();
        assert!(!history.has_visited().unwrap());

        history.mark_visited().unwrap();
        assert!(history.has_visited().unwrap());

        history.reset_visited().unwrap();
        assert!(!history.has_visited().unwrap());
    }

    #[test]
    fn test_persisted_json_uses_camel_case_keys() {
        let (dir, history) = history();
        history
            .save(ComparisonRecord::new("Save", "button", "a", "b", Some("n".into())))
            .unwrap();

        let raw = std::fs::read_to_string(dir.path().join("history.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let stored = &json[HISTORY_KEY][0];
        assert_eq!(stored["referenceText"], "Save");
        assert_eq!(stored["textA"], "a");
        assert_eq!(stored["notes"], "n");
    }
}
