//! Font-weight estimation from the page raster.
//!
//! The ink fraction of a line's crop, relative to what a normal-weight
//! render would produce, approximates its boldness. A tie-breaker signal
//! only; lines that cannot be measured are simply left unannotated.

use image::GrayImage;

use crate::config::LayoutConfig;
use crate::model::ItemList;

/// Estimate and store a font weight for every measurable line.
///
/// A pixel counts as ink below `ink_luma_threshold`; the ink fraction is
/// divided by `reference_ink_ratio`, so values above 1.0 read as bold.
pub fn annotate_font_weights(items: &mut ItemList, page: &GrayImage, config: &LayoutConfig) {
    for item in &mut items.items {
        for line in &mut item.lines {
            let Some(bounds) = line.bounding_box() else {
                continue;
            };
            let Some(crop) = bounds.crop(page) else {
                log::warn!("line at {bounds} lies outside the page raster");
                continue;
            };
            let total = (crop.width() * crop.height()) as f32;
            let ink = crop
                .pixels()
                .filter(|p| p.0[0] < config.ink_luma_threshold)
                .count() as f32;
            line.fontweight = Some(ink / total / config.reference_ink_ratio);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoundingBox;
    use crate::model::{Item, Line, Word};
    use image::Luma;

    fn line_at(y1: i32, y2: i32) -> Line {
        Line::new(vec![Word::new("text", BoundingBox::new(0, y1, 100, y2))])
    }

    #[test]
    fn test_ink_fraction_separates_bold_from_plain() {
        let mut page = GrayImage::from_pixel(100, 40, Luma([255]));
        // Heavy ink on the top line, light on the bottom one.
        for x in 0..40 {
            for y in 0..20 {
                page.put_pixel(x, y, Luma([0]));
            }
        }
        for x in 0..9 {
            for y in 20..40 {
                page.put_pixel(x, y, Luma([0]));
            }
        }

        let mut items = ItemList::from_items(vec![
            Item::from_line(line_at(0, 20)),
            Item::from_line(line_at(20, 40)),
        ]);
        annotate_font_weights(&mut items, &page, &LayoutConfig::default());

        let bold = items.items[0].lines[0].fontweight.unwrap();
        let plain = items.items[1].lines[0].fontweight.unwrap();
        assert!(bold > 1.0, "0.4 ink against a 0.18 reference reads bold");
        assert!(plain < 1.0);
        assert!(bold > plain);
    }

    #[test]
    fn test_line_outside_raster_left_unannotated() {
        let page = GrayImage::from_pixel(100, 40, Luma([255]));
        let mut items = ItemList::from_items(vec![Item::from_line(line_at(500, 520))]);
        annotate_font_weights(&mut items, &page, &LayoutConfig::default());
        assert!(items.items[0].lines[0].fontweight.is_none());
    }
}
