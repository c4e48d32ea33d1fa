//! A recognized text token with its pixel-space box.

use crate::geometry::BoundingBox;

/// A single OCR word (or detected bullet glyph) and its bounding box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// The recognized characters.
    pub text: String,
    /// The word's box in page pixels.
    pub bounding_box: BoundingBox,
}

impl Word {
    /// Create a new word.
    pub fn new(text: impl Into<String>, bounding_box: BoundingBox) -> Self {
        Self {
            text: text.into(),
            bounding_box,
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" @ {}", self.text, self.bounding_box)
    }
}
