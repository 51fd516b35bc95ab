use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::EvalBox;

/// Parses whitespace-separated `x y w h` integer quadruples from a record
/// stream into bounding boxes, applying symmetric area rescaling by
/// `scale_factor` to each box (1.0 is a no-op).
///
/// A quadruple that is short, unparsable or contains a negative value is
/// treated as end-of-data padding and skipped. Rescaled boxes are not
/// clamped here; see [`EvalBox::crop_to`].
pub fn extract_bboxes<R: BufRead>(reader: R, scale_factor: f64) -> Vec<EvalBox> {
    assert!(scale_factor > 0., "area scale factor must be positive");

    let mut tokens: Vec<String> = Vec::new();
    for line in reader.lines() {
        match line {
            Ok(line) => tokens.extend(line.split_whitespace().map(str::to_owned)),
            Err(err) => {
                log::warn!("Stopped reading annotation stream: {}", err);
                break;
            }
        }
    }

    let mut boxes = Vec::new();
    for quad in tokens.chunks(4) {
        if quad.len() < 4 {
            continue;
        }
        let vals: Vec<i32> = quad.iter().map(|t| t.parse().unwrap_or(-1)).collect();
        if vals.iter().any(|&v| v < 0) {
            continue;
        }
        let mut bbox = EvalBox::new(vals[0], vals[1], vals[2], vals[3]);
        bbox.scale_area(scale_factor);
        boxes.push(bbox);
    }
    boxes
}

/// Reads an annotation text file into bounding boxes.
///
/// A missing or unreadable file is recoverable: it is reported and an empty
/// list is returned.
pub fn load_bboxes(path: impl AsRef<Path>, scale_factor: f64) -> Vec<EvalBox> {
    match fs::File::open(path.as_ref()) {
        Ok(file) => extract_bboxes(BufReader::new(file), scale_factor),
        Err(err) => {
            log::warn!("Annotation file {} not found: {}", path.as_ref().display(), err);
            Vec::new()
        }
    }
}

/// Reads every annotation file in a folder, sorted by file name, into one
/// box set per file.
pub fn load_bounding_boxes(folder: impl AsRef<Path>, scale_factor: f64) -> anyhow::Result<Vec<Vec<EvalBox>>> {
    let mut paths: Vec<_> = fs::read_dir(folder.as_ref())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    Ok(paths.iter().map(|path| load_bboxes(path, scale_factor)).collect())
}
