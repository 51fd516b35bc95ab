use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in image pixel coordinates, `(x, y)` top-left.
///
/// A box with zero width or height is legal; it has zero area and zero
/// overlap with anything.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalBox {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl EvalBox {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns the maximum x-coordinate of the bounding box.
    pub fn x_max(&self) -> i32 {
        self.x + self.w
    }

    /// Returns the maximum y-coordinate of the bounding box.
    pub fn y_max(&self) -> i32 {
        self.y + self.h
    }

    /// Returns the center x-coordinate of the bounding box.
    pub fn cx(&self) -> f64 {
        self.x as f64 + self.w as f64 / 2.
    }

    /// Returns the center y-coordinate of the bounding box.
    pub fn cy(&self) -> f64 {
        self.y as f64 + self.h as f64 / 2.
    }

    /// Computes the area of the bounding box.
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Computes the intersection area between this bounding box and another.
    pub fn intersect(&self, other: &EvalBox) -> i64 {
        let left = self.x.max(other.x);
        let right = self.x_max().min(other.x_max());
        let top = self.y.max(other.y);
        let bottom = self.y_max().min(other.y_max());
        (right - left).max(0) as i64 * (bottom - top).max(0) as i64
    }

    /// Computes the union area between this bounding box and another.
    pub fn union(&self, other: &EvalBox) -> i64 {
        self.area() + other.area() - self.intersect(other)
    }

    /// Computes the intersection over union (IoU) between this bounding box
    /// and another, in `[0, 1]`.
    ///
    /// Calling this on two zero-area boxes is a contract violation: the
    /// union area must be nonzero.
    pub fn iou(&self, other: &EvalBox) -> f64 {
        let union = self.union(other);
        assert!(union > 0, "IoU is undefined for a zero-area union");
        self.intersect(other) as f64 / union as f64
    }

    /// Checks if this bounding box completely contains another bounding box `other`.
    pub fn contains(&self, other: &EvalBox) -> bool {
        self.x <= other.x
            && self.x_max() >= other.x_max()
            && self.y <= other.y
            && self.y_max() >= other.y_max()
    }

    /// Rescales the box *area* by `factor` while keeping its center fixed,
    /// by growing (factor > 1) or shrinking (factor < 1) each side with
    /// symmetric integer padding:
    ///
    /// new_w = sqrt(factor) * w  and  new_w = w + 2*pad_x, so
    /// pad_x = 0.5 * w * (sqrt(factor) - 1), rounded; same for pad_y.
    ///
    /// The result may have a negative origin; callers intersecting it with
    /// real pixels must clamp with [`EvalBox::crop_to`] afterwards.
    pub fn scale_area(&mut self, factor: f64) {
        assert!(factor > 0., "area scale factor must be positive");
        let pad_x = (0.5 * self.w as f64 * (factor.sqrt() - 1.)).round() as i32;
        let pad_y = (0.5 * self.h as f64 * (factor.sqrt() - 1.)).round() as i32;
        self.x -= pad_x;
        self.y -= pad_y;
        self.w += 2 * pad_x;
        self.h += 2 * pad_y;
    }

    /// Clamps the box in place to `[0, img_width) x [0, img_height)`.
    ///
    /// The origin is moved into bounds and the extent shrunk so the box
    /// never overflows past the right/bottom edge; an in-bounds origin is
    /// never reduced. A box entirely outside the image collapses to an
    /// empty box on the nearest edge.
    pub fn crop_to(&mut self, img_width: u32, img_height: u32) {
        let img_width = img_width as i32;
        let img_height = img_height as i32;

        self.x = self.x.clamp(0, img_width);
        self.y = self.y.clamp(0, img_height);

        if img_width < self.x_max() {
            self.w = img_width - self.x;
        }
        if img_height < self.y_max() {
            self.h = img_height - self.y;
        }
        self.w = self.w.max(0);
        self.h = self.h.max(0);
    }

    /// Returns the box coordinates and size as `(x, y, w, h)`.
    pub fn xy_wh(&self) -> (i32, i32, i32, i32) {
        (self.x, self.y, self.w, self.h)
    }
}
