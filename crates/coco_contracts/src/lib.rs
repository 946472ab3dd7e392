//! Shared data contracts for COCO annotation files.

pub mod coco;

pub use coco::{CocoAnnotation, CocoDataset, CocoImage, ValidationError};
