//! Column segmentation from the horizontal word-density histogram.
//!
//! The x-axis density of word boxes dips inside column gutters; smoothing
//! the raw histogram and finding prominent local minima of the smoothed
//! curve yields the gutter positions. Block-level boxes that fit no
//! detected column (footnotes, call-outs) are carried as standalone
//! reading-order units.

use crate::config::LayoutConfig;
use crate::geometry::{Axis, BoundingBox};
use crate::model::Word;

/// How a column was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Detected from the density histogram; spans the page height.
    Segmented,
    /// A block-level box that fit inside no segmented column.
    LoneBlock,
}

/// One reading-order unit of the page.
#[derive(Debug, Clone)]
pub struct Column {
    /// The column's extent in page pixels.
    pub bounds: BoundingBox,
    pub kind: ColumnKind,
}

/// Segment a page into reading-order columns.
///
/// `block_boxes` are the coarse block-level OCR boxes, used only to spot
/// lone blocks. An empty word list yields no columns.
pub fn segment_columns(
    page_width: i32,
    page_height: i32,
    words: &[Word],
    block_boxes: &[BoundingBox],
    config: &LayoutConfig,
) -> Vec<Column> {
    let mut boxes = words.iter().map(|w| &w.bounding_box);
    let Some(first) = boxes.next() else {
        log::debug!("no words on page, skipping column segmentation");
        return Vec::new();
    };
    let outer = boxes.fold(*first, |acc, b| acc.union(b));

    let density = word_density(&outer, words);
    let window = (page_width / config.smoothing_granularity as i32).max(1) as usize;
    let smoothed = smooth_triangular(&density, window);
    let gutters = find_gutters(&smoothed, config.peak_prominence, config.peak_min_width);
    log::debug!(
        "found {} column gutter(s) at {:?} (relative to x={})",
        gutters.len(),
        gutters,
        outer.x1
    );

    let mut boundaries = vec![outer.x1];
    boundaries.extend(gutters.iter().map(|&g| outer.x1 + g as i32));
    boundaries.push(outer.x2);

    let bottom = page_height.max(outer.y2);
    let mut columns: Vec<Column> = boundaries
        .windows(2)
        .filter(|pair| pair[1] > pair[0])
        .map(|pair| Column {
            bounds: BoundingBox::new(pair[0], 0, pair[1], bottom)
                .expanded(config.column_margin, Axis::X),
            kind: ColumnKind::Segmented,
        })
        .collect();

    for block in block_boxes {
        let fits = columns.iter().any(|c| {
            c.kind == ColumnKind::Segmented
                && c.bounds.contains_approx(block, config.containment_ratio)
        });
        if fits {
            continue;
        }
        let lone = Column {
            bounds: *block,
            kind: ColumnKind::LoneBlock,
        };
        // Reading-order position: before the first column starting at or
        // past the block's right edge, after a column the block clears
        // vertically, else last.
        if let Some(i) = columns.iter().position(|c| c.bounds.x1 >= block.x2) {
            columns.insert(i, lone);
        } else if let Some(i) = columns.iter().position(|c| block.y2 <= c.bounds.y1) {
            columns.insert(i + 1, lone);
        } else {
            columns.push(lone);
        }
    }

    columns
}

/// The words belonging to `column`, in input order.
///
/// For a segmented column, words that also fall inside some lone block are
/// excluded so they are not assigned twice.
pub fn words_in_column(
    words: &[Word],
    column: &Column,
    all_columns: &[Column],
    config: &LayoutConfig,
) -> Vec<Word> {
    words
        .iter()
        .filter(|w| {
            column
                .bounds
                .contains_approx(&w.bounding_box, config.containment_ratio)
        })
        .filter(|w| {
            column.kind == ColumnKind::LoneBlock
                || !all_columns.iter().any(|c| {
                    c.kind == ColumnKind::LoneBlock
                        && c.bounds.contains_approx(&w.bounding_box, config.containment_ratio)
                })
        })
        .cloned()
        .collect()
}

/// Count, for every x in `[outer.x1, outer.x2)`, the word boxes a thin
/// vertical divider at x intersects.
fn word_density(outer: &BoundingBox, words: &[Word]) -> Vec<f32> {
    (outer.x1..outer.x2)
        .map(|x| {
            let divider = BoundingBox::new(x - 1, outer.y1, x + 1, outer.y2);
            words
                .iter()
                .filter(|w| w.bounding_box.intersect(&divider).is_some())
                .count() as f32
        })
        .collect()
}

/// Triangular-weight moving average. Weights taper linearly from the center
/// and are renormalized at the edges, so a constant signal stays constant.
fn smooth_triangular(signal: &[f32], window: usize) -> Vec<f32> {
    let half = (window / 2).max(1) as isize;
    let n = signal.len() as isize;
    (0..n)
        .map(|i| {
            let mut acc = 0.0f32;
            let mut total = 0.0f32;
            for j in (i - half).max(0)..=(i + half).min(n - 1) {
                let weight = (half + 1 - (j - i).abs()) as f32;
                acc += weight * signal[j as usize];
                total += weight;
            }
            acc / total
        })
        .collect()
}

/// Indices of local minima of `signal` whose prominence and width (on the
/// negated signal) pass the thresholds. Plateau minima report their
/// midpoint.
fn find_gutters(signal: &[f32], min_prominence: f32, min_width: usize) -> Vec<usize> {
    let negated: Vec<f32> = signal.iter().map(|v| -v).collect();
    local_maxima(&negated)
        .into_iter()
        .filter(|&peak| {
            let prominence = peak_prominence(&negated, peak);
            prominence >= min_prominence
                && peak_width(&negated, peak, prominence) >= min_width as f32
        })
        .collect()
}

fn local_maxima(signal: &[f32]) -> Vec<usize> {
    let mut peaks = Vec::new();
    let n = signal.len();
    let mut i = 1;
    while i + 1 < n {
        if signal[i - 1] < signal[i] {
            let start = i;
            while i + 1 < n && signal[i + 1] == signal[i] {
                i += 1;
            }
            if i + 1 < n && signal[i + 1] < signal[i] {
                peaks.push((start + i) / 2);
            }
        }
        i += 1;
    }
    peaks
}

/// Height of a peak above the higher of the two valley floors separating it
/// from taller terrain (or the signal ends).
fn peak_prominence(signal: &[f32], peak: usize) -> f32 {
    let height = signal[peak];

    let mut left_min = height;
    for j in (0..peak).rev() {
        if signal[j] > height {
            break;
        }
        left_min = left_min.min(signal[j]);
    }

    let mut right_min = height;
    for &v in &signal[peak + 1..] {
        if v > height {
            break;
        }
        right_min = right_min.min(v);
    }

    height - left_min.max(right_min)
}

/// Peak width at half its prominence, with linear interpolation at the
/// crossings.
fn peak_width(signal: &[f32], peak: usize, prominence: f32) -> f32 {
    let level = signal[peak] - prominence / 2.0;

    let mut left = 0.0f32;
    for j in (0..peak).rev() {
        if signal[j] < level {
            let t = (signal[j + 1] - level) / (signal[j + 1] - signal[j]);
            left = j as f32 + (1.0 - t);
            break;
        }
    }

    let mut right = (signal.len() - 1) as f32;
    for j in peak + 1..signal.len() {
        if signal[j] < level {
            let t = (signal[j - 1] - level) / (signal[j - 1] - signal[j]);
            right = (j - 1) as f32 + t;
            break;
        }
    }

    right - left
}
