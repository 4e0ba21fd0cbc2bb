// src/classify.rs

use crate::types::Detection;

// COCO class names grouped into the three coarse categories we track.
// The tables are disjoint; anything else the detector reports is ignored.
pub const VEHICLE_CLASSES: [&str; 8] = [
    "bicycle",
    "car",
    "motorcycle",
    "bus",
    "truck",
    "train",
    "boat",
    "airplane",
];
pub const HUMAN_CLASSES: [&str; 1] = ["person"];
pub const ANIMAL_CLASSES: [&str; 10] = [
    "bird", "cat", "dog", "horse", "sheep", "cow", "elephant", "bear", "zebra", "giraffe",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Vehicle,
    Human,
    Animal,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Vehicle, Category::Human, Category::Animal];

    pub fn label_set(&self) -> &'static [&'static str] {
        match self {
            Category::Vehicle => &VEHICLE_CLASSES,
            Category::Human => &HUMAN_CLASSES,
            Category::Animal => &ANIMAL_CLASSES,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Vehicle => "Vehicles",
            Category::Human => "Humans",
            Category::Animal => "Animals",
        }
    }
}

/// Map a raw detection to its coarse category. A detection that fails the
/// confidence threshold or whose class is in none of the tables yields None
/// and is excluded from all counts; that is a normal, silent outcome.
pub fn classify(detection: &Detection, confidence_threshold: f32) -> Option<Category> {
    if detection.confidence < confidence_threshold {
        return None;
    }
    Category::ALL
        .into_iter()
        .find(|category| category.label_set().contains(&detection.class_name.as_str()))
}
