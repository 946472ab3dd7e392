//! Loading, reducing, and writing COCO annotation files plus image copies.

use crate::layout::CocoLayout;
use crate::select::{filter_annotations, select_images, selected_ids};
use crate::types::{Partition, PartitionSummary, SubsetError, SubsetResult};
use coco_contracts::CocoDataset;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Parse one annotation file into a descriptor.
pub fn load_dataset(path: &Path) -> SubsetResult<CocoDataset> {
    let raw = fs::read(path).map_err(|e| SubsetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_slice(&raw).map_err(|e| SubsetError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Serialize a descriptor to `path`, creating the parent directory if
/// needed. Output is compact JSON.
pub fn save_dataset(path: &Path, dataset: &CocoDataset) -> SubsetResult<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    if !parent.exists() {
        fs::create_dir_all(parent).map_err(|e| SubsetError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    let file = fs::File::create(path).map_err(|e| SubsetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer(&mut writer, dataset).map_err(|e| SubsetError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    writer.flush().map_err(|e| SubsetError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Extract the first `count` images (by file name) of one partition plus the
/// annotations that reference them, writing a self-contained copy under
/// `target_root`.
///
/// With `use_train_source` set, the partition is built from the train source
/// pool while still being written under its own name; this lets tiny
/// fixtures populate both partitions from a single pool.
///
/// A `count` past the number of available images selects all of them and
/// logs a warning. A selected image whose file is absent from the source
/// directory is fatal; a failed run leaves the target partially written.
pub fn subset_partition(
    coco_root: &Path,
    target_root: &Path,
    partition: Partition,
    count: usize,
    use_train_source: bool,
) -> SubsetResult<PartitionSummary> {
    let source_partition = if use_train_source {
        Partition::Train
    } else {
        partition
    };
    let source = CocoLayout::new(coco_root);
    let target = CocoLayout::new(target_root);

    let source_images_dir = source.images_dir(source_partition);
    let dataset = load_dataset(&source.annotation_file(source_partition))?;
    let images_total = dataset.images.len();
    let annotations_total = dataset.annotations.len();

    if count > images_total {
        warn!(
            "requested {count} images but the {source_partition} source has only {images_total}; using all {images_total}"
        );
    }

    let images = select_images(dataset.images, count);
    let ids = selected_ids(&images);
    let annotations = filter_annotations(dataset.annotations, &ids);

    let reduced = CocoDataset {
        info: dataset.info,
        licenses: dataset.licenses,
        categories: dataset.categories,
        images,
        annotations,
        extra: dataset.extra,
    };

    let target_images_dir = target.images_dir(partition);
    fs::create_dir_all(&target_images_dir).map_err(|e| SubsetError::Io {
        path: target_images_dir.clone(),
        source: e,
    })?;
    save_dataset(&target.annotation_file(partition), &reduced)?;

    info!(
        "copying {} selected {partition} images",
        reduced.images.len()
    );
    let bar = ProgressBar::new(reduced.images.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")
            .progress_chars("#>-"),
    );
    bar.set_message(format!("{partition}2017"));
    for img in &reduced.images {
        let src = source_images_dir.join(&img.file_name);
        let dst = target_images_dir.join(&img.file_name);
        if !src.exists() {
            return Err(SubsetError::MissingImageFile { path: src });
        }
        debug!("copy {} -> {}", src.display(), dst.display());
        fs::copy(&src, &dst).map_err(|e| SubsetError::Io {
            path: src.clone(),
            source: e,
        })?;
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(PartitionSummary {
        partition,
        source_partition,
        images_selected: reduced.images.len(),
        images_total,
        annotations_selected: reduced.annotations.len(),
        annotations_total,
    })
}
