use coco_contracts::{CocoAnnotation, CocoDataset, CocoImage, ValidationError};
use serde_json::{json, Map};

fn image(id: u64, file_name: &str) -> CocoImage {
    CocoImage {
        id,
        file_name: file_name.to_string(),
        extra: Map::new(),
    }
}

fn annotation(image_id: u64) -> CocoAnnotation {
    CocoAnnotation {
        image_id,
        extra: Map::new(),
    }
}

fn dataset(images: Vec<CocoImage>, annotations: Vec<CocoAnnotation>) -> CocoDataset {
    CocoDataset {
        info: json!({"year": 2017}),
        licenses: json!([]),
        categories: json!([{"id": 1, "name": "person", "supercategory": "person"}]),
        images,
        annotations,
        extra: Map::new(),
    }
}

#[test]
fn consistent_dataset_passes() {
    let ds = dataset(
        vec![image(1, "a.jpg"), image(2, "b.jpg")],
        vec![annotation(1), annotation(2), annotation(1)],
    );
    assert!(ds.validate_integrity().is_ok());
}

#[test]
fn dangling_annotation_rejected() {
    let ds = dataset(vec![image(1, "a.jpg")], vec![annotation(1), annotation(7)]);
    let err = ds.validate_integrity().unwrap_err();
    match err {
        ValidationError::DanglingAnnotation { index, image_id } => {
            assert_eq!(index, 1);
            assert_eq!(image_id, 7);
        }
    }
}

#[test]
fn empty_dataset_passes() {
    let ds = dataset(Vec::new(), Vec::new());
    assert!(ds.validate_integrity().is_ok());
}

#[test]
fn unknown_keys_survive_round_trip() {
    let raw = json!({
        "info": {"year": 2017, "description": "fixture"},
        "licenses": [{"id": 1, "name": "CC"}],
        "categories": [{"id": 1, "name": "person"}],
        "images": [
            {"id": 1, "file_name": "a.jpg", "width": 640, "height": 480, "license": 1}
        ],
        "annotations": [
            {"id": 9, "image_id": 1, "category_id": 1, "bbox": [0.0, 0.0, 10.0, 10.0], "iscrowd": 0}
        ],
        "segment_info": []
    });
    let ds: CocoDataset = serde_json::from_value(raw).expect("parse fixture");
    let back = serde_json::to_value(&ds).expect("serialize fixture");

    assert_eq!(back["images"][0]["width"], 640);
    assert_eq!(back["images"][0]["license"], 1);
    assert_eq!(back["annotations"][0]["bbox"], json!([0.0, 0.0, 10.0, 10.0]));
    assert_eq!(back["annotations"][0]["category_id"], 1);
    assert_eq!(back["segment_info"], json!([]));
}

#[test]
fn missing_required_key_is_a_parse_error() {
    let raw = json!({
        "info": {},
        "licenses": [],
        "categories": [],
        "annotations": []
    });
    assert!(serde_json::from_value::<CocoDataset>(raw).is_err());
}
