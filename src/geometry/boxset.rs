//! Ordered collections of bounding boxes with threshold-based set algebra.

use crate::error::{Error, Result};

use super::{Axis, BoundingBox};

/// An ordered collection of boxes whose set operators pair up boxes by IoU.
///
/// Two boxes are treated as "the same" element when their overlap exceeds
/// `overlap_threshold`; containment tests use `containment_ratio`.
#[derive(Debug, Clone)]
pub struct BoundingBoxSet {
    boxes: Vec<BoundingBox>,
    /// IoU above which two boxes pair up in set operations.
    pub overlap_threshold: f32,
    /// Ratio for the mutual approximate-containment test.
    pub containment_ratio: f32,
}

impl Default for BoundingBoxSet {
    fn default() -> Self {
        Self {
            boxes: Vec::new(),
            overlap_threshold: 0.4,
            containment_ratio: 0.8,
        }
    }
}

impl BoundingBoxSet {
    /// Create an empty set with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from boxes, keeping the default thresholds.
    pub fn from_boxes(boxes: Vec<BoundingBox>) -> Self {
        Self {
            boxes,
            ..Self::default()
        }
    }

    /// Set the pairing threshold.
    pub fn with_overlap_threshold(mut self, threshold: f32) -> Self {
        self.overlap_threshold = threshold;
        self
    }

    /// Number of boxes in the set.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether the set has no boxes.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Append a box.
    pub fn push(&mut self, b: BoundingBox) {
        self.boxes.push(b);
    }

    /// Iterate over the boxes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, BoundingBox> {
        self.boxes.iter()
    }

    /// The boxes as a slice.
    pub fn as_slice(&self) -> &[BoundingBox] {
        &self.boxes
    }

    /// Fold the set into the smallest box containing every member.
    pub fn outer_box(&self) -> Result<BoundingBox> {
        let mut iter = self.boxes.iter();
        let first = *iter.next().ok_or(Error::EmptySet)?;
        Ok(iter.fold(first, |acc, b| acc.union(b)))
    }

    /// Boxes present in both sets: every pair whose IoU exceeds the
    /// threshold contributes its intersection.
    pub fn intersect(&self, other: &Self) -> Self {
        let mut result = self.empty_like();
        for box_a in &self.boxes {
            for box_b in &other.boxes {
                if box_a.overlap(box_b, Axis::Both) > self.overlap_threshold {
                    if let Some(i) = box_a.intersect(box_b) {
                        result.push(i);
                    }
                }
            }
        }
        result
    }

    /// Boxes present in either set: every pair whose IoU exceeds the
    /// threshold contributes its union.
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.empty_like();
        for box_a in &self.boxes {
            for box_b in &other.boxes {
                if box_a.overlap(box_b, Axis::Both) > self.overlap_threshold {
                    result.push(box_a.union(box_b));
                }
            }
        }
        result
    }

    /// Boxes in `self` with no overlapping partner in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = self.empty_like();
        for box_a in &self.boxes {
            let found = other
                .boxes
                .iter()
                .any(|box_b| box_a.overlap(box_b, Axis::Both) > self.overlap_threshold);
            if !found {
                result.push(*box_a);
            }
        }
        result
    }

    /// Whether some member and `item` approximately contain each other.
    pub fn contains(&self, item: &BoundingBox) -> bool {
        self.boxes.iter().any(|b| {
            b.contains_approx(item, self.containment_ratio)
                && item.contains_approx(b, self.containment_ratio)
        })
    }

    /// Remove near-duplicate boxes (mutual approximate containment),
    /// keeping the first occurrence. Idempotent.
    pub fn deduplicate(&self) -> Self {
        let mut unique = self.empty_like();
        for b in &self.boxes {
            if !unique.contains(b) {
                unique.push(*b);
            }
        }
        unique
    }

    fn empty_like(&self) -> Self {
        Self {
            boxes: Vec::new(),
            overlap_threshold: self.overlap_threshold,
            containment_ratio: self.containment_ratio,
        }
    }
}

impl FromIterator<BoundingBox> for BoundingBoxSet {
    fn from_iter<T: IntoIterator<Item = BoundingBox>>(iter: T) -> Self {
        Self::from_boxes(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BoundingBoxSet {
    type Item = &'a BoundingBox;
    type IntoIter = std::slice::Iter<'a, BoundingBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
