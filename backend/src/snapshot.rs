use shared::DatasetRecord;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate kepid {0} in snapshot")]
    DuplicateKepid(i64),
}

/// The bundled catalog served as the listing fallback.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    records: Vec<DatasetRecord>,
}

impl Snapshot {
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, SnapshotError> {
        let records: Vec<DatasetRecord> = serde_json::from_str(raw)?;
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.kepid) {
                return Err(SnapshotError::DuplicateKepid(record.kepid));
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[DatasetRecord] {
        &self.records
    }
}
