//! Item assembly: merging single-line items into logical entries and
//! splitting out embedded section headers.

use crate::config::LayoutConfig;
use crate::model::{Item, ItemList, Line};

impl ItemList {
    /// Merge consecutive single-line items into multi-line items.
    ///
    /// A new item starts when a line carries a bullet or, with
    /// `factor_in_fontweight` enabled, when bold status flips. Items whose
    /// merged text is empty are dropped.
    pub fn merge_lines(self, config: &LayoutConfig) -> ItemList {
        let mut merged = ItemList::new();
        let mut current: Option<Item> = None;
        let mut prev_bold = false;

        for item in self.items {
            let bold = item.average_fontweight().is_some_and(|w| w > 1.0);
            let starts_new = item.bullet.is_some()
                || (config.factor_in_fontweight && bold != prev_bold);
            prev_bold = bold;

            match current.as_mut() {
                Some(open) if !starts_new => open.add_lines(item.lines),
                _ => {
                    if let Some(done) = current.take() {
                        push_nonempty(&mut merged, done);
                    }
                    current = Some(item);
                }
            }
        }
        if let Some(done) = current {
            push_nonempty(&mut merged, done);
        }

        log::debug!("merged into {} item(s)", merged.len());
        merged
    }

    /// Split items that swallowed a section header into
    /// (pre-header, header, post-header) sub-items. A header may span
    /// several physical lines; the original bullet stays on the first
    /// sub-item only.
    pub fn split_section_headers(self, config: &LayoutConfig) -> ItemList {
        let mut result = ItemList::new();
        for item in self.items {
            for part in split_item(item, &config.section_headers) {
                result.add_item(part);
            }
        }
        result
    }
}

fn push_nonempty(list: &mut ItemList, item: Item) {
    if item.text(" ").is_empty() {
        log::debug!("dropping item with no text");
        return;
    }
    list.add_item(item);
}

fn split_item(item: Item, headers: &[String]) -> Vec<Item> {
    let texts: Vec<String> = item.lines.iter().map(|l| l.text()).collect();
    let mut ranges: Vec<(usize, usize)> = headers
        .iter()
        .flat_map(|h| find_header_ranges(&texts, h))
        .collect();
    if ranges.is_empty() {
        return vec![item];
    }
    ranges.sort_unstable();

    let Item { lines, bullet, tabs } = item;
    let mut segments: Vec<Vec<Line>> = Vec::new();
    let mut cursor = 0;
    for (start, end) in ranges {
        if start < cursor {
            continue;
        }
        if start > cursor {
            segments.push(lines[cursor..start].to_vec());
        }
        segments.push(lines[start..=end].to_vec());
        cursor = end + 1;
    }
    if cursor < lines.len() {
        segments.push(lines[cursor..].to_vec());
    }

    let mut bullet = Some(bullet);
    segments
        .into_iter()
        .map(|segment| {
            let mut part = Item::with_bullet(segment, bullet.take().flatten());
            part.tabs = tabs;
            part
        })
        .collect()
}

/// Line ranges (inclusive) whose texts, joined in order, spell out
/// `header`. A header line must be a prefix of the remaining header text,
/// so partial matches resume from scratch on the line that broke them.
fn find_header_ranges(texts: &[String], header: &str) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut seeking = header;
    let mut started_at: Option<usize> = None;
    let mut i = 0;
    while i < texts.len() {
        let t = texts[i].trim();
        let remainder = if t.is_empty() { None } else { seeking.strip_prefix(t) };
        match remainder {
            Some(rest) => {
                started_at.get_or_insert(i);
                let rest = rest.trim_start();
                if rest.is_empty() {
                    ranges.push((started_at.take().unwrap_or(i), i));
                    seeking = header;
                } else {
                    seeking = rest;
                }
                i += 1;
            }
            None if started_at.is_some() => {
                seeking = header;
                started_at = None;
            }
            None => i += 1,
        }
    }
    ranges
}
