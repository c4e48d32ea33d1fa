//! Outline items: one or more lines with an optional bullet and a depth.

use crate::error::{Error, Result};
use crate::geometry::BoundingBox;

use super::{clean_text, IndentUnits, Line, Word};

/// One logical outline entry, possibly spanning several physical lines.
#[derive(Debug, Clone)]
pub struct Item {
    /// The lines, in reading order.
    pub lines: Vec<Line>,
    /// The bullet or numbering token stripped off the first line, if any.
    pub bullet: Option<Word>,
    /// Nesting depth, assigned by indentation inference.
    pub tabs: u32,
}

impl Item {
    /// Create an item from lines.
    pub fn new(lines: Vec<Line>) -> Self {
        Self {
            lines,
            bullet: None,
            tabs: 0,
        }
    }

    /// Create an item from lines with a bullet.
    pub fn with_bullet(lines: Vec<Line>, bullet: Option<Word>) -> Self {
        Self {
            lines,
            bullet,
            tabs: 0,
        }
    }

    /// Create an item holding a single line.
    pub fn from_line(line: Line) -> Self {
        Self::new(vec![line])
    }

    /// Append lines to the item.
    pub fn add_lines(&mut self, lines: impl IntoIterator<Item = Line>) {
        self.lines.extend(lines);
    }

    /// Union of the lines' boxes (optionally including the bullet), or
    /// `None` when no line has any words.
    pub fn bounding_box(&self, include_bullet: bool) -> Option<BoundingBox> {
        let mut boxes: Vec<BoundingBox> = Vec::new();
        if include_bullet {
            if let Some(ref bullet) = self.bullet {
                boxes.push(bullet.bounding_box);
            }
        }
        boxes.extend(self.lines.iter().filter_map(|l| l.bounding_box()));
        let mut iter = boxes.into_iter();
        let first = iter.next()?;
        Some(iter.fold(first, |acc, b| acc.union(&b)))
    }

    /// Indentation of the item's bullet (when present and requested) or its
    /// first word, relative to the first line's column.
    pub fn indentation(&self, include_bullet: bool, units: IndentUnits) -> Result<f32> {
        let first_line = self.lines.first().ok_or(Error::EmptyItem)?;
        let word_box = match (&self.bullet, include_bullet) {
            (Some(bullet), true) => bullet.bounding_box,
            _ => {
                first_line
                    .words
                    .first()
                    .ok_or(Error::EmptyLine)?
                    .bounding_box
            }
        };
        first_line.indentation_of(&word_box, units)
    }

    /// Mean font weight over the lines that have one.
    pub fn average_fontweight(&self) -> Option<f32> {
        let weights: Vec<f32> = self.lines.iter().filter_map(|l| l.fontweight).collect();
        if weights.is_empty() {
            return None;
        }
        Some(weights.iter().sum::<f32>() / weights.len() as f32)
    }

    /// The item text: line texts joined with `separator` and cleaned up.
    pub fn text(&self, separator: &str) -> String {
        let joined = self
            .lines
            .iter()
            .map(|l| l.raw_text().trim().to_string())
            .collect::<Vec<_>>()
            .join(separator);
        clean_text(&joined)
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref bullet) = self.bullet {
            write!(f, "[{}] ", bullet.text)?;
        }
        write!(f, "'{}'", self.text(" "))
    }
}

/// An ordered sequence of items for a page or a whole document.
#[derive(Debug, Clone, Default)]
pub struct ItemList {
    /// The items, in reading order.
    pub items: Vec<Item>,
}

impl ItemList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list from items.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Append an item, dropping it when it has no lines.
    pub fn add_item(&mut self, item: Item) {
        if !item.lines.is_empty() {
            self.items.push(item);
        }
    }

    /// Append every item of another list, in order.
    pub fn extend(&mut self, other: ItemList) {
        self.items.extend(other.items);
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Union of all item boxes.
    pub fn outer_box(&self, include_bullet: bool) -> Result<BoundingBox> {
        let mut iter = self
            .items
            .iter()
            .filter_map(|item| item.bounding_box(include_bullet));
        let first = iter.next().ok_or(Error::EmptySet)?;
        Ok(iter.fold(first, |acc, b| acc.union(&b)))
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ItemList {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
