// COCO object-detection annotation format
// http://cocodataset.org/#format-data

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use thiserror::Error;

/// One entry of the top-level `images` array.
///
/// Only the fields the tooling reads are typed; everything else (width,
/// height, license, coco_url, ...) rides in `extra` and is written back
/// verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CocoImage {
    pub id: u64,
    pub file_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of the top-level `annotations` array. An annotation belongs to
/// exactly one image via `image_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CocoAnnotation {
    pub image_id: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// In-memory form of one annotation file.
///
/// `info`, `licenses`, and `categories` are opaque to the tooling and pass
/// through untouched, as do any unrecognized top-level keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CocoDataset {
    pub info: Value,
    pub licenses: Value,
    pub categories: Value,
    pub images: Vec<CocoImage>,
    pub annotations: Vec<CocoAnnotation>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("annotations[{index}] references unknown image id {image_id}")]
    DanglingAnnotation { index: usize, image_id: u64 },
}

impl CocoDataset {
    /// Identifiers of every image record in this descriptor.
    pub fn image_ids(&self) -> HashSet<u64> {
        self.images.iter().map(|img| img.id).collect()
    }

    /// Check that every annotation references an image present in `images`.
    pub fn validate_integrity(&self) -> Result<(), ValidationError> {
        let ids = self.image_ids();
        for (index, ann) in self.annotations.iter().enumerate() {
            if !ids.contains(&ann.image_id) {
                return Err(ValidationError::DanglingAnnotation {
                    index,
                    image_id: ann.image_id,
                });
            }
        }
        Ok(())
    }
}
