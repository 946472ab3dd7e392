//! COCO dataset subsetting utilities.
//!
//! This crate provides:
//! - Filesystem layout resolution for the COCO directory convention
//! - Annotation descriptor load/save
//! - Pure image-selection and annotation-filtering transforms
//! - The per-partition subset operation (annotation write + image copies)

pub mod layout;
pub mod select;
pub mod subset;
pub mod types;

pub use layout::CocoLayout;
pub use select::{filter_annotations, select_images, selected_ids};
pub use subset::{load_dataset, save_dataset, subset_partition};
pub use types::*;
