//! A clustered line of words within one column.

use crate::error::{Error, Result};
use crate::geometry::BoundingBox;

use super::{clean_text, Word};

/// Units for expressing a line's indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentUnits {
    /// Fraction of the column width. Comparable across columns.
    ColWidth,
    /// Raw pixels.
    Pixels,
    /// Multiples of the mean word height on the line.
    LineHeight,
}

/// An ordered sequence of words on one visual line.
///
/// Created with at least one word; bullet extraction may leave it empty,
/// after which it is pruned from its item.
#[derive(Debug, Clone)]
pub struct Line {
    /// The words, left to right.
    pub words: Vec<Word>,
    /// Estimated font weight; above 1.0 reads as bold. Absent until a page
    /// raster has been supplied.
    pub fontweight: Option<f32>,
    /// The column this line belongs to. Needed for indentation.
    pub column_box: Option<BoundingBox>,
}

impl Line {
    /// Create a line from words.
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words,
            fontweight: None,
            column_box: None,
        }
    }

    /// Create a line from words with a column back-reference.
    pub fn with_column(words: Vec<Word>, column_box: BoundingBox) -> Self {
        Self {
            words,
            fontweight: None,
            column_box: Some(column_box),
        }
    }

    /// Append a word.
    pub fn add_word(&mut self, word: Word) {
        self.words.push(word);
    }

    /// Union of the words' boxes, or `None` when the line is empty.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut iter = self.words.iter().map(|w| &w.bounding_box);
        let first = *iter.next()?;
        Some(iter.fold(first, |acc, b| acc.union(b)))
    }

    /// The line text: word texts space-joined, with punctuation-aware
    /// cleanup.
    pub fn text(&self) -> String {
        clean_text(&self.raw_text())
    }

    /// The plain space-joined word texts, without cleanup.
    pub fn raw_text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Indentation of the first word relative to the column's left edge.
    pub fn indentation(&self, units: IndentUnits) -> Result<f32> {
        let word = self.words.first().ok_or(Error::EmptyLine)?;
        self.indentation_of(&word.bounding_box, units)
    }

    /// Indentation of an arbitrary box (a specific word, or the item's
    /// bullet) relative to the column's left edge.
    pub fn indentation_of(&self, word_box: &BoundingBox, units: IndentUnits) -> Result<f32> {
        let column = self.column_box.as_ref().ok_or(Error::NoColumn)?;
        let indent = (word_box.x1 - column.x1) as f32;
        match units {
            IndentUnits::ColWidth => Ok(indent / column.width() as f32),
            IndentUnits::Pixels => Ok(indent),
            IndentUnits::LineHeight => {
                if self.words.is_empty() {
                    return Err(Error::EmptyLine);
                }
                let mean_height = self
                    .words
                    .iter()
                    .map(|w| w.bounding_box.height() as f32)
                    .sum::<f32>()
                    / self.words.len() as f32;
                Ok(indent / mean_height)
            }
        }
    }
}
