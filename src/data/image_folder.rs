use std::fs;
use std::path::Path;

use image::RgbImage;

/// Loads every image in a folder, sorted by file name, returning each
/// image with its short display name (the file name without the folder).
pub fn load_images(folder: impl AsRef<Path>) -> anyhow::Result<Vec<(String, RgbImage)>> {
    let mut paths: Vec<_> = fs::read_dir(folder.as_ref())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let image = image::open(&path)?.to_rgb8();
        images.push((name, image));
    }
    Ok(images)
}
