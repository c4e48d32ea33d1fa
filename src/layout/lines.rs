//! Greedy clustering of a column's words into visual lines.

use crate::config::LayoutConfig;
use crate::geometry::{Axis, BoundingBox};
use crate::model::{Line, Word};

struct Cluster {
    bounds: BoundingBox,
    words: Vec<Word>,
}

/// Cluster a column's words into [`Line`]s.
///
/// `words` are the column's OCR words; `glyphs` are separately detected
/// bullet glyphs, restricted to the column here. Words are taken in left-x
/// order and each joins the existing cluster with the highest y-axis IoU
/// above `line_overlap_threshold`, or starts a new one. Glyph words only
/// ever start clusters, so a bullet is never swallowed mid-line. Clusters
/// come back sorted by top y.
pub fn cluster_lines(
    words: &[Word],
    glyphs: &[Word],
    column_box: &BoundingBox,
    config: &LayoutConfig,
) -> Vec<Line> {
    let mut entries: Vec<(&Word, bool)> = words.iter().map(|w| (w, false)).collect();
    entries.extend(
        glyphs
            .iter()
            .filter(|g| column_box.contains_approx(&g.bounding_box, config.containment_ratio))
            .map(|g| (g, true)),
    );
    // Sorting by left edge seeds clusters with maximal vertical diversity,
    // so lines starting at similar x do not merge by accident.
    entries.sort_by_key(|(w, _)| w.bounding_box.x1);

    let mut clusters: Vec<Cluster> = Vec::new();
    for (word, is_glyph) in entries {
        let best = if is_glyph {
            None
        } else {
            clusters
                .iter_mut()
                .map(|c| {
                    let overlap = c.bounds.overlap(&word.bounding_box, Axis::Y);
                    (c, overlap)
                })
                .filter(|(_, overlap)| *overlap > config.line_overlap_threshold)
                .max_by(|(_, a), (_, b)| a.total_cmp(b))
                .map(|(c, _)| c)
        };
        match best {
            Some(cluster) => {
                cluster.bounds = cluster.bounds.union(&word.bounding_box);
                cluster.words.push(word.clone());
            }
            None => clusters.push(Cluster {
                bounds: word.bounding_box,
                words: vec![word.clone()],
            }),
        }
    }

    clusters.sort_by_key(|c| c.bounds.y1);
    log::debug!("clustered {} word(s) into {} line(s)", words.len(), clusters.len());

    clusters
        .into_iter()
        .map(|c| {
            let mut words = c.words;
            drop_duplicate_bullet(&mut words, config);
            Line::with_column(words, *column_box)
        })
        .collect()
}

/// When both template matching and text-pattern detection fire on the same
/// glyph, the line starts with two near-coincident copies; drop the second.
fn drop_duplicate_bullet(words: &mut Vec<Word>, config: &LayoutConfig) {
    if words.len() < 2 {
        return;
    }
    let overlap = words[0]
        .bounding_box
        .overlap(&words[1].bounding_box, Axis::Both);
    if overlap > config.duplicate_bullet_overlap && words[0].text.trim() == words[1].text.trim() {
        log::debug!("dropping duplicate bullet detection '{}'", words[1].text);
        words.remove(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, x1: i32, y1: i32, x2: i32, y2: i32) -> Word {
        Word::new(text, BoundingBox::new(x1, y1, x2, y2))
    }

    fn column() -> BoundingBox {
        BoundingBox::new(0, 0, 1000, 1000)
    }

    #[test]
    fn test_clusters_rows_into_lines() {
        // Two rows, words deliberately out of reading order.
        let words = vec![
            word("functions", 200, 102, 320, 121),
            word("sets", 0, 140, 60, 160),
            word("Algebra", 0, 100, 100, 120),
            word("and", 120, 101, 180, 120),
            word("maps", 80, 141, 150, 161),
        ];
        let lines = cluster_lines(&words, &[], &column(), &LayoutConfig::default());

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].raw_text(), "Algebra and functions");
        assert_eq!(lines[1].raw_text(), "sets maps");
        assert_eq!(lines[0].column_box, Some(column()));
    }

    #[test]
    fn test_clustering_is_deterministic() {
        let words = vec![
            word("b", 50, 0, 70, 20),
            word("a", 0, 1, 20, 21),
            word("c", 100, 2, 120, 22),
        ];
        let config = LayoutConfig::default();
        let first = cluster_lines(&words, &[], &column(), &config);
        let second = cluster_lines(&words, &[], &column(), &config);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.raw_text(), b.raw_text());
        }
    }

    #[test]
    fn test_glyph_starts_its_own_cluster() {
        let words = vec![word("text", 0, 100, 100, 120)];
        // Vertically aligned with the text, but a detected glyph must not
        // be swallowed by the existing line.
        let glyphs = vec![word("\u{2022}", 200, 100, 215, 120)];
        let lines = cluster_lines(&words, &glyphs, &column(), &LayoutConfig::default());
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_glyph_outside_column_ignored() {
        let words = vec![word("text", 0, 100, 100, 120)];
        let glyphs = vec![word("\u{2022}", 2000, 100, 2015, 120)];
        let lines = cluster_lines(&words, &glyphs, &column(), &LayoutConfig::default());
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_duplicate_bullet_dropped() {
        let words = vec![
            word("\u{2022}", 0, 100, 15, 120),
            word(" \u{2022}", 1, 101, 16, 121),
            word("topic", 40, 100, 110, 120),
        ];
        let lines = cluster_lines(&words, &[], &column(), &LayoutConfig::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].words.len(), 2);
        assert_eq!(lines[0].raw_text(), "\u{2022} topic");
    }
}
