use crate::types::Partition;
use std::path::{Path, PathBuf};

/// Path resolution for the COCO directory convention:
/// `<root>/<partition>2017/<file_name>` for images and
/// `<root>/annotations/instances_<partition>2017.json` for annotations.
///
/// The same layout applies to source and target roots.
#[derive(Debug, Clone)]
pub struct CocoLayout {
    root: PathBuf,
}

impl CocoLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn images_dir(&self, partition: Partition) -> PathBuf {
        self.root.join(format!("{partition}2017"))
    }

    pub fn annotations_dir(&self) -> PathBuf {
        self.root.join("annotations")
    }

    pub fn annotation_file(&self, partition: Partition) -> PathBuf {
        self.annotations_dir()
            .join(format!("instances_{partition}2017.json"))
    }
}
