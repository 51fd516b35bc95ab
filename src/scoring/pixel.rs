use image::{GrayImage, Rgb, RgbImage};

/// Fraction of pixels on which two single-channel masks agree, in `[0, 1]`.
///
/// The masks must have identical, nonzero dimensions; a mismatch is a
/// contract violation.
pub fn pixel_accuracy(detected: &GrayImage, ground_truth: &GrayImage) -> f64 {
    assert_eq!(detected.dimensions(), ground_truth.dimensions(),
               "mask dimensions must match");
    let total = detected.width() as u64 * detected.height() as u64;
    assert!(total > 0, "masks must be nonempty");

    let differing = detected
        .as_raw()
        .iter()
        .zip(ground_truth.as_raw())
        .filter(|(a, b)| a != b)
        .count();

    1. - differing as f64 / total as f64
}

/// True iff every pixel of the region shares the hue and saturation of the
/// top-left pixel. The value channel is ignored, so pure brightness
/// variation does not break monochromaticity.
pub fn is_monochromatic(input: &RgbImage) -> bool {
    assert!(input.width() > 0 && input.height() > 0, "region must be nonempty");

    let reference = hue_saturation(input.get_pixel(0, 0));
    input.pixels().all(|p| hue_saturation(p) == reference)
}

/// Full-range 8-bit hue and saturation of one RGB pixel.
fn hue_saturation(pixel: &Rgb<u8>) -> (u8, u8) {
    let (r, g, b) = (pixel[0] as f64, pixel[1] as f64, pixel[2] as f64);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let saturation = if max == 0. { 0. } else { 255. * delta / max };

    let hue_degrees = if delta == 0. {
        0.
    } else if max == r {
        60. * (g - b) / delta
    } else if max == g {
        120. + 60. * (b - r) / delta
    } else {
        240. + 60. * (r - g) / delta
    };
    let hue_degrees = if hue_degrees < 0. { hue_degrees + 360. } else { hue_degrees };

    ((hue_degrees * 255. / 360.).round() as u8, saturation.round() as u8)
}
