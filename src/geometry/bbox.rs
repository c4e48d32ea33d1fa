//! Axis-aligned bounding boxes in image-pixel space.

use image::GrayImage;
use serde::{Deserialize, Serialize};

/// Axis restriction for overlap and expansion operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Both axes.
    Both,
    /// Horizontal only.
    X,
    /// Vertical only.
    Y,
}

/// An immutable axis-aligned rectangle with `x1 < x2` and `y1 < y2`.
///
/// Coordinates are integer pixels. All operations return new boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge.
    pub x1: i32,
    /// Top edge.
    pub y1: i32,
    /// Right edge (exclusive extent).
    pub x2: i32,
    /// Bottom edge (exclusive extent).
    pub y2: i32,
}

impl BoundingBox {
    /// Create a new bounding box.
    ///
    /// # Panics
    ///
    /// Panics if `x1 >= x2` or `y1 >= y2`. A degenerate box indicates
    /// corrupted geometry upstream and is a caller error, not user input.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        assert!(x1 < x2, "degenerate box: x1={} >= x2={}", x1, x2);
        assert!(y1 < y2, "degenerate box: y1={} >= y2={}", y1, y2);
        Self { x1, y1, x2, y2 }
    }

    /// Center point of the box.
    pub fn center(&self) -> (f32, f32) {
        (
            (self.x1 + self.x2) as f32 / 2.0,
            (self.y1 + self.y2) as f32 / 2.0,
        )
    }

    /// Width in pixels.
    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    /// Height in pixels.
    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Area in square pixels.
    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Grow (or, with a negative factor, shrink) the box symmetrically
    /// around its center by a fraction of its size, rounding to integer
    /// pixels.
    pub fn expanded(&self, factor: f32, axis: Axis) -> Self {
        let mut x1 = self.x1 as f32;
        let mut y1 = self.y1 as f32;
        let mut x2 = self.x2 as f32;
        let mut y2 = self.y2 as f32;
        if matches!(axis, Axis::X | Axis::Both) {
            let width = self.width() as f32;
            x1 -= factor * width;
            x2 += factor * width;
        }
        if matches!(axis, Axis::Y | Axis::Both) {
            let height = self.height() as f32;
            y1 -= factor * height;
            y2 += factor * height;
        }
        Self::new(x1 as i32, y1 as i32, x2 as i32, y2 as i32)
    }

    /// Shrink the box by a fraction of its size.
    pub fn shrunk(&self, factor: f32, axis: Axis) -> Self {
        self.expanded(-factor, axis)
    }

    /// Translate the box by a pixel offset.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x1 + dx, self.y1 + dy, self.x2 + dx, self.y2 + dy)
    }

    /// Intersection of two boxes, or `None` if they do not overlap.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let x1 = self.x1.max(other.x1);
        let y1 = self.y1.max(other.y1);
        let x2 = self.x2.min(other.x2);
        let y2 = self.y2.min(other.y2);
        if x2 <= x1 || y2 <= y1 {
            return None;
        }
        Some(Self::new(x1, y1, x2, y2))
    }

    /// Smallest box containing both boxes. Always defined.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            self.x1.min(other.x1),
            self.y1.min(other.y1),
            self.x2.max(other.x2),
            self.y2.max(other.y2),
        )
    }

    /// Intersection over union of the two boxes, in `[0, 1]`.
    ///
    /// With `Axis::X` or `Axis::Y` the other axis is degenerated to `[0, 1]`
    /// so the measure reduces to one-dimensional interval overlap.
    pub fn overlap(&self, other: &Self, axis: Axis) -> f32 {
        let (a, b) = match axis {
            Axis::Both => (*self, *other),
            Axis::X => (
                Self::new(self.x1, 0, self.x2, 1),
                Self::new(other.x1, 0, other.x2, 1),
            ),
            Axis::Y => (
                Self::new(0, self.y1, 1, self.y2),
                Self::new(0, other.y1, 1, other.y2),
            ),
        };

        let Some(intersection) = a.intersect(&b) else {
            return 0.0;
        };
        let intersection_area = intersection.area() as f32;
        intersection_area / (a.area() + b.area() - intersection.area()) as f32
    }

    /// Approximate containment: true when at least `ratio` of `other` lies
    /// inside `self`, measured as the overlap of `other` against the
    /// intersection.
    pub fn contains_approx(&self, other: &Self, ratio: f32) -> bool {
        match self.intersect(other) {
            Some(intersection) => other.overlap(&intersection, Axis::Both) > ratio,
            None => false,
        }
    }

    /// Extract the sub-image covered by this box, clamped to the image
    /// bounds. Returns `None` when the box lies entirely outside the image.
    pub fn crop(&self, img: &GrayImage) -> Option<GrayImage> {
        let x1 = self.x1.max(0) as u32;
        let y1 = self.y1.max(0) as u32;
        let x2 = (self.x2.max(0) as u32).min(img.width());
        let y2 = (self.y2.max(0) as u32).min(img.height());
        if x2 <= x1 || y2 <= y1 {
            return None;
        }
        Some(image::imageops::crop_imm(img, x1, y1, x2 - x1, y2 - y1).to_image())
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})/({}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}
