//! Core types and error definitions for subset_core.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub type SubsetResult<T> = Result<T, SubsetError>;

#[derive(Debug, Error)]
pub enum SubsetError {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("json error at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("source image file missing: {path}")]
    MissingImageFile { path: PathBuf },
}

/// Named dataset partition under a COCO root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Partition {
    Train,
    Val,
}

impl Partition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Partition::Train => "train",
            Partition::Val => "val",
        }
    }
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts for one processed partition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionSummary {
    /// Partition name the output was written under.
    pub partition: Partition,
    /// Partition the source data was actually read from.
    pub source_partition: Partition,
    pub images_selected: usize,
    pub images_total: usize,
    pub annotations_selected: usize,
    pub annotations_total: usize,
}
