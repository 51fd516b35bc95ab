pub mod common;
pub mod data;
pub mod overlay;
pub mod scoring;

use std::fs;
use std::path::Path;

use anyhow::bail;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::{EvalBox, EvalConfig};
use crate::scoring::{match_boxes, MatchRecord, ScoreStats};

pub type Result<T, E = anyhow::Error> = std::result::Result<T, E>;

/// Per-image row of a dataset evaluation report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageScore {
    pub name: String,
    pub score: f64,
    pub stats: ScoreStats,
}

/// Scores one image's detections against its ground truth at the given IoU
/// acceptance threshold.
pub fn evaluate_image(detected: &[EvalBox], ground_truth: &[EvalBox],
                      threshold: f64) -> (Vec<MatchRecord>, ScoreStats) {
    match_boxes(detected, ground_truth, threshold)
}

/// Evaluates a whole dataset: one detection annotation file and one
/// ground-truth annotation file per image, paired with the images by sorted
/// file-name order. Detections are area-rescaled by the configured factor
/// and clamped to their image before scoring. Images are scored
/// independently in parallel.
pub fn evaluate_dataset(config: &EvalConfig) -> Result<Vec<ImageScore>> {
    log::info!("Evaluating dataset:\n{}", config.to_string());

    let images = data::load_images(&config.images_dir)?;
    let detections = data::load_bounding_boxes(&config.detections_dir, config.scale_factor)?;
    let ground_truth = data::load_bounding_boxes(&config.ground_truth_dir, 1.0)?;

    if images.len() != detections.len() || images.len() != ground_truth.len() {
        bail!(
            "Dataset mismatch: {} images, {} detection files, {} ground truth files",
            images.len(), detections.len(), ground_truth.len()
        );
    }

    let threshold = config.iou_threshold;
    let scores = images
        .par_iter()
        .zip(detections)
        .zip(ground_truth)
        .map(|(((name, image), mut detected), gt)| {
            let (img_width, img_height) = image.dimensions();
            for bbox in &mut detected {
                bbox.crop_to(img_width, img_height);
            }
            let (_, stats) = match_boxes(&detected, &gt, threshold);
            ImageScore {
                name: name.clone(),
                score: stats.average_iou(),
                stats,
            }
        })
        .collect();

    Ok(scores)
}

/// Writes a dataset evaluation report as pretty-printed JSON.
pub fn save_report(path: impl AsRef<Path>, scores: &[ImageScore]) -> Result<()> {
    let file = fs::File::create(path)?;
    serde_json::to_writer_pretty(file, scores)?;
    Ok(())
}
