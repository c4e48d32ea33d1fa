//! Bullet extraction: splitting a leading bullet token off a line.
//!
//! Two strategies. The pattern strategy matches the accumulated leading
//! text against the configured bullet regexes; the space-gap strategy cuts
//! at the first inter-word gap wider than a multiple of the mean character
//! width. The pipeline tries patterns first and falls back to the gap.

use regex::Regex;

use crate::config::LayoutConfig;
use crate::error::{Error, Result};
use crate::model::{Item, Line, Word};

/// Compile the configured bullet patterns, anchored at the line start.
pub fn compile_bullet_patterns(config: &LayoutConfig) -> Result<Vec<Regex>> {
    config
        .bullet_patterns
        .iter()
        .map(|pattern| {
            Regex::new(&format!("^(?:{pattern})")).map_err(|source| Error::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

impl Line {
    /// Try each pattern as a prefix of the concatenated leading word texts
    /// (whitespace ignored). On the first match, the words accumulated so
    /// far leave the line whole and become the bullet: text without
    /// spaces, box their union. Whole words, so a bullet OCR merged into
    /// the following token (`-naming`) is still caught.
    pub fn extract_bullet_by_pattern(&mut self, patterns: &[Regex]) -> Option<Word> {
        let mut accumulated = String::new();
        for i in 0..self.words.len() {
            accumulated.push_str(self.words[i].text.trim());
            if patterns.iter().any(|p| p.is_match(&accumulated)) {
                let consumed: Vec<Word> = self.words.drain(..=i).collect();
                let bounds = consumed
                    .iter()
                    .skip(1)
                    .fold(consumed[0].bounding_box, |acc, w| acc.union(&w.bounding_box));
                return Some(Word::new(accumulated, bounds));
            }
        }
        None
    }

    /// Cut the line at the first inter-word gap wider than
    /// `threshold × mean character width`. The words before the gap become
    /// the bullet: space-joined text, box their union.
    pub fn extract_bullet_by_space(&mut self, threshold: f32) -> Option<Word> {
        if self.words.len() < 2 {
            return None;
        }
        let total_chars: usize = self
            .words
            .iter()
            .map(|w| w.text.trim().chars().count())
            .sum();
        if total_chars == 0 {
            return None;
        }
        let total_width: i32 = self.words.iter().map(|w| w.bounding_box.width()).sum();
        let mean_char_width = total_width as f32 / total_chars as f32;

        for i in 0..self.words.len() - 1 {
            let gap = self.words[i + 1].bounding_box.x1 - self.words[i].bounding_box.x2;
            if gap as f32 > mean_char_width * threshold {
                let consumed: Vec<Word> = self.words.drain(..=i).collect();
                let text = consumed
                    .iter()
                    .map(|w| w.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                let bounds = consumed
                    .iter()
                    .skip(1)
                    .fold(consumed[0].bounding_box, |acc, w| acc.union(&w.bounding_box));
                return Some(Word::new(text, bounds));
            }
        }
        None
    }
}

impl Item {
    /// Split a bullet off the item's first line, pattern strategy first,
    /// space-gap as fallback. Lines emptied by the extraction are pruned.
    ///
    /// Extracting from an item that already carries a bullet is
    /// [`Error::BulletAlreadyExtracted`].
    pub fn extract_bullet(&mut self, patterns: &[Regex], config: &LayoutConfig) -> Result<()> {
        if self.bullet.is_some() {
            return Err(Error::BulletAlreadyExtracted);
        }
        let Some(line) = self.lines.first_mut() else {
            return Ok(());
        };
        self.bullet = line
            .extract_bullet_by_pattern(patterns)
            .or_else(|| line.extract_bullet_by_space(config.bullet_threshold));
        self.lines.retain(|l| !l.words.is_empty());
        Ok(())
    }
}
