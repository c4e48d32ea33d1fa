//! # unscan
//!
//! Page-layout reconstruction for scanned, OCR'd documents.
//!
//! This library takes the flat word boxes a cloud OCR service returns for a
//! scanned page and rebuilds the logical reading structure: columns, lines,
//! bulleted outline items, and nesting depth, rendered as a nested Markdown
//! list.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unscan::{LayoutConfig, OcrDocument};
//!
//! fn main() -> unscan::Result<()> {
//!     // Load a cached OCR result
//!     let doc = OcrDocument::from_path("scan.json")?;
//!
//!     // Reconstruct the outline and render it
//!     let config = LayoutConfig::default();
//!     let items = unscan::reconstruct_document(&doc, &[], &config)?;
//!     print!("{}", unscan::render::to_markdown(&items));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Column segmentation**: gutters from the horizontal word-density
//!   histogram, plus lone blocks in reading order
//! - **Line clustering**: greedy vertical-overlap grouping, left to right
//! - **Bullet extraction**: pattern and space-gap strategies
//! - **Item assembly**: line merging and section-header splitting
//! - **Depth inference**: an online reducer over bullet type, indentation,
//!   and font weight
//! - **Parallel processing**: Uses Rayon for multi-page documents

pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod ocr;
pub mod render;

// Re-export commonly used types
pub use config::LayoutConfig;
pub use error::{Error, Result};
pub use geometry::{Axis, BoundingBox, BoundingBoxSet};
pub use layout::{
    annotate_font_weights, assign_tab_levels, segment_columns, BulletType, Column, ColumnKind,
};
pub use model::{IndentUnits, Item, ItemList, Line, Word};
pub use ocr::{OcrDocument, OcrPage};

use rayon::prelude::*;

/// Reconstruct the outline of a single page.
///
/// `glyphs` are bullet/dash glyph words detected outside the OCR text
/// (for instance by template matching); pass an empty slice when there are
/// none. Depth is not assigned here — run [`assign_tab_levels`] once over
/// the document-merged list.
///
/// # Example
///
/// ```no_run
/// use unscan::{reconstruct_page, LayoutConfig, OcrDocument};
///
/// let doc = OcrDocument::from_path("scan.json").unwrap();
/// let items = reconstruct_page(&doc.pages[0], &[], &LayoutConfig::default()).unwrap();
/// println!("{} item(s)", items.len());
/// ```
pub fn reconstruct_page(
    page: &OcrPage,
    glyphs: &[Word],
    config: &LayoutConfig,
) -> Result<ItemList> {
    if page.width <= 0 || page.height <= 0 {
        return Err(Error::InvalidOcr(format!(
            "page has non-positive dimensions {}x{}",
            page.width, page.height
        )));
    }
    let patterns = layout::compile_bullet_patterns(config)?;
    let words = page.words();
    let blocks = page.block_boxes();
    // Glyph words count toward the density histogram and the column
    // extent, but stay separate for clustering.
    let mut extent_words = words.clone();
    extent_words.extend(glyphs.iter().cloned());
    let columns = layout::segment_columns(page.width, page.height, &extent_words, &blocks, config);
    log::debug!(
        "page {}x{}: {} word(s), {} column(s)",
        page.width,
        page.height,
        words.len(),
        columns.len()
    );

    // Clustering is per column; assembly runs once over the page's
    // column-ordered lines, so an item may continue into the next column.
    let mut items = ItemList::new();
    for column in &columns {
        let column_words = layout::words_in_column(&words, column, &columns, config);
        for line in layout::cluster_lines(&column_words, glyphs, &column.bounds, config) {
            let mut item = Item::from_line(line);
            item.extract_bullet(&patterns, config)?;
            items.add_item(item);
        }
    }
    Ok(items.merge_lines(config).split_section_headers(config))
}

/// Reconstruct a whole document: pages in parallel, merged in page order,
/// then one depth pass spanning page boundaries.
///
/// `glyphs_per_page` is indexed like `doc.pages`; missing entries mean no
/// detected glyphs for that page.
pub fn reconstruct_document(
    doc: &OcrDocument,
    glyphs_per_page: &[Vec<Word>],
    config: &LayoutConfig,
) -> Result<ItemList> {
    let pages: Vec<ItemList> = doc
        .pages
        .par_iter()
        .enumerate()
        .map(|(i, page)| {
            let glyphs = glyphs_per_page.get(i).map(Vec::as_slice).unwrap_or(&[]);
            reconstruct_page(page, glyphs, config)
        })
        .collect::<Result<_>>()?;

    let mut merged = ItemList::new();
    for page_items in pages {
        merged.extend(page_items);
    }
    assign_tab_levels(&mut merged, config);
    Ok(merged)
}

/// Convenience: reconstruct a document and render it as Markdown in one
/// call.
pub fn reconstruct_markdown(
    doc: &OcrDocument,
    glyphs_per_page: &[Vec<Word>],
    config: &LayoutConfig,
) -> Result<String> {
    let items = reconstruct_document(doc, glyphs_per_page, config)?;
    Ok(render::to_markdown(&items))
}
