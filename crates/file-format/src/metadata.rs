use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata attached to a loaded cabinet batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchMetadata {
    /// Batch name, typically the source file stem; names the root node.
    pub name: String,
    pub cabinet_count: usize,
    pub loaded_at: DateTime<Utc>,
}

impl BatchMetadata {
    pub fn new(name: impl Into<String>, cabinet_count: usize) -> Self {
        Self {
            name: name.into(),
            cabinet_count,
            loaded_at: Utc::now(),
        }
    }
}
