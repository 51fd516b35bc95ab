use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::common::EvalBox;

/// Association of one ground-truth box with the detection selected for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub gt_index: usize,
    pub det_index: usize,
    pub iou: f64,
}

/// Per-call accumulation counters for one scoring pass. No state is kept
/// across calls.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreStats {
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub iou_sum: f64,
}

impl ScoreStats {
    /// Accumulated IoU normalized by the union-style count of all
    /// participating boxes (matched pairs, unmatched detections and
    /// unmatched ground truth), so extra or missing boxes dilute the score.
    ///
    /// Calling this when both box sets were empty is a contract violation.
    pub fn average_iou(&self) -> f64 {
        let total = self.true_positives + self.false_positives + self.false_negatives;
        assert!(total > 0, "average IoU is undefined for two empty box sets");
        self.iou_sum / total as f64
    }
}

/// Greedily matches detections to ground-truth boxes by descending IoU.
///
/// Builds the full |gt| x |det| IoU matrix, then repeatedly selects the
/// single largest remaining entry. A selection below `threshold` stops the
/// loop; remaining ground truth becomes false negatives. A selection whose
/// ground-truth row is still unmatched records a match and logs its IoU.
/// Either way the selected detection's whole column is invalidated, so each
/// detection is consumed by at most one selection, including selections
/// whose row was already matched. This is documented scorer behavior, not
/// an optimal assignment.
pub fn match_boxes(detected: &[EvalBox], ground_truth: &[EvalBox],
                   threshold: f64) -> (Vec<MatchRecord>, ScoreStats) {
    let n = ground_truth.len();
    let m = detected.len();

    let mut stats = ScoreStats {
        false_positives: m,
        ..Default::default()
    };
    let mut matches: Vec<MatchRecord> = Vec::new();
    let mut matched_gt: Vec<bool> = vec![false; n];

    let mut iou_scores: Array2<f64> =
        Array2::from_shape_fn((n, m), |(i, j)| detected[j].iou(&ground_truth[i]));

    for _ in 0..n {
        let mut max_iou = 0.;
        let mut best: Option<(usize, usize)> = None;

        for ((i, j), &iou) in iou_scores.indexed_iter() {
            if iou > max_iou {
                max_iou = iou;
                best = Some((i, j));
            }
        }

        // No strictly positive entry left: nothing to match or consume.
        let Some((gt_index, det_index)) = best else {
            break;
        };
        if max_iou < threshold {
            break;
        }

        if !matched_gt[gt_index] {
            matched_gt[gt_index] = true;
            matches.push(MatchRecord { gt_index, det_index, iou: max_iou });

            log::info!("-- IoU score for hand {}: {}", gt_index, max_iou);

            stats.iou_sum += max_iou;
            stats.false_positives -= 1;
            stats.true_positives += 1;
        }

        // The detection is consumed even when its row was already matched.
        iou_scores.column_mut(det_index).fill(-1.);
    }

    stats.false_negatives = n - stats.true_positives;
    (matches, stats)
}

/// Scores a detection set against ground truth at the given IoU acceptance
/// threshold, returning the single-scalar average IoU.
pub fn avg_iou_score(detected: &[EvalBox], ground_truth: &[EvalBox], threshold: f64) -> f64 {
    let (_, stats) = match_boxes(detected, ground_truth, threshold);
    stats.average_iou()
}
