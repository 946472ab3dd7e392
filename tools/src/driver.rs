//! Top-level driver: reset the target root, then subset both partitions.

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use subset_core::{subset_partition, Partition, PartitionSummary};

/// Resolved options for one subsetting run.
#[derive(Debug, Clone)]
pub struct RunOpts {
    pub coco_dir: PathBuf,
    pub target_dir: PathBuf,
    pub num_images: usize,
    pub copy_val_as_train: bool,
}

/// Remove any previous target tree, then subset train and val in order.
///
/// Errors abort the run mid-way; a partially written target is left behind
/// and is cleared again on the next invocation.
pub fn run(opts: &RunOpts) -> Result<Vec<PartitionSummary>> {
    if opts.target_dir.exists() {
        fs::remove_dir_all(&opts.target_dir)
            .with_context(|| format!("clear target dir {}", opts.target_dir.display()))?;
    }
    fs::create_dir_all(&opts.target_dir)
        .with_context(|| format!("create target dir {}", opts.target_dir.display()))?;

    let mut summaries = Vec::new();
    for partition in [Partition::Train, Partition::Val] {
        let summary = subset_partition(
            &opts.coco_dir,
            &opts.target_dir,
            partition,
            opts.num_images,
            opts.copy_val_as_train,
        )
        .with_context(|| format!("subset {partition} partition"))?;
        info!(
            "{}: selected {}/{} images, {}/{} annotations (source: {})",
            summary.partition,
            summary.images_selected,
            summary.images_total,
            summary.annotations_selected,
            summary.annotations_total,
            summary.source_partition,
        );
        summaries.push(summary);
    }
    Ok(summaries)
}
