//! Pure selection and filtering transforms over descriptor lists.

use coco_contracts::{CocoAnnotation, CocoImage};
use std::collections::HashSet;

/// Sort images by file name ascending and keep the first `count`.
///
/// The sort is stable, so records sharing a file name keep their source
/// order. A `count` past the end of the list selects everything; the caller
/// decides how loudly to report that.
pub fn select_images(mut images: Vec<CocoImage>, count: usize) -> Vec<CocoImage> {
    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    images.truncate(count);
    images
}

/// Identifiers of the selected image records.
pub fn selected_ids(images: &[CocoImage]) -> HashSet<u64> {
    images.iter().map(|img| img.id).collect()
}

/// Keep only annotations referencing a selected image, preserving the
/// original relative order.
pub fn filter_annotations(
    annotations: Vec<CocoAnnotation>,
    ids: &HashSet<u64>,
) -> Vec<CocoAnnotation> {
    annotations
        .into_iter()
        .filter(|ann| ids.contains(&ann.image_id))
        .collect()
}
