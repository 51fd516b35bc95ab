use image::{GrayImage, Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::common::EvalBox;

const BOX_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

const BG_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const FG_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
const PROB_BG_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
const PROB_FG_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Draws each box as a hollow red rectangle on the image. Empty boxes are
/// skipped.
pub fn draw_bboxes(image: &mut RgbImage, boxes: &[EvalBox]) {
    for bbox in boxes {
        if bbox.is_empty() {
            continue;
        }
        let rect = Rect::at(bbox.x, bbox.y).of_size(bbox.w as u32, bbox.h as u32);
        draw_hollow_rect_mut(image, rect, BOX_COLOR);
    }
}

/// Blends a 4-valued segmentation mask (0 = background, 1 = foreground,
/// 2 = probable background, 3 = probable foreground) over the image:
/// `out = t * image + (1 - t) * mask_color` with `t = transparency_level`.
///
/// The mask must match the image dimensions and the blend weight must lie
/// in `[0, 1]`; both are contract violations otherwise.
pub fn blend_mask(image: &RgbImage, mask: &GrayImage, transparency_level: f32) -> RgbImage {
    assert!((0. ..=1.).contains(&transparency_level),
            "blend weight must be in [0, 1]");
    assert_eq!(image.dimensions(), mask.dimensions(),
               "mask dimensions must match the image");

    let mut output = RgbImage::new(image.width(), image.height());
    for (x, y, out) in output.enumerate_pixels_mut() {
        let color = match mask.get_pixel(x, y)[0] {
            0 => BG_COLOR,
            1 => FG_COLOR,
            2 => PROB_BG_COLOR,
            3 => PROB_FG_COLOR,
            _ => Rgb([0, 0, 0]),
        };
        let pixel = image.get_pixel(x, y);
        for c in 0..3 {
            let blended = transparency_level * pixel[c] as f32
                + (1. - transparency_level) * color[c] as f32;
            out[c] = blended.round() as u8;
        }
    }
    output
}
