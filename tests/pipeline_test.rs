//! End-to-end tests of the reconstruction pipeline.

use std::io::Write;

use unscan::ocr::{OcrBlock, OcrBox, OcrPage, OcrParagraph, OcrSymbol, OcrWord, Vertex};
use unscan::render::{parse_tab_depths, to_markdown};
use unscan::{
    reconstruct_document, reconstruct_page, BoundingBox, LayoutConfig, OcrDocument, Word,
};

fn quad(x1: i32, y1: i32, x2: i32, y2: i32) -> OcrBox {
    OcrBox {
        vertices: [
            Vertex { x: x1, y: y1 },
            Vertex { x: x2, y: y1 },
            Vertex { x: x2, y: y2 },
            Vertex { x: x1, y: y2 },
        ],
    }
}

fn ocr_word(text: &str, x1: i32, y1: i32, x2: i32, y2: i32) -> OcrWord {
    OcrWord {
        bounding_box: quad(x1, y1, x2, y2),
        symbols: text
            .chars()
            .map(|c| OcrSymbol {
                text: c.to_string(),
                confidence: 0.95,
                bounding_box: quad(x1, y1, x2, y2),
            })
            .collect(),
        confidence: 0.95,
    }
}

/// One block holding one paragraph with the given words, boxed by their
/// extent.
fn block(words: Vec<OcrWord>) -> OcrBlock {
    let rects: Vec<BoundingBox> = words
        .iter()
        .map(|w| w.bounding_box.to_rect().unwrap())
        .collect();
    let outer = rects[1..]
        .iter()
        .fold(rects[0], |acc, r| acc.union(r));
    OcrBlock {
        bounding_box: quad(outer.x1, outer.y1, outer.x2, outer.y2),
        paragraphs: vec![OcrParagraph {
            bounding_box: quad(outer.x1, outer.y1, outer.x2, outer.y2),
            words,
        }],
    }
}

fn page(width: i32, height: i32, blocks: Vec<OcrBlock>) -> OcrPage {
    OcrPage {
        width,
        height,
        blocks,
    }
}

#[test]
fn test_dotted_bullet_splits_off_heading() {
    let p = page(
        1000,
        600,
        vec![block(vec![
            ocr_word("1.2.3", 0, 0, 60, 25),
            ocr_word("Algebra", 70, 0, 150, 25),
            ocr_word("and", 160, 0, 220, 25),
            ocr_word("functions", 230, 0, 330, 25),
        ])],
    );
    let items = reconstruct_page(&p, &[], &LayoutConfig::default()).unwrap();

    assert_eq!(items.len(), 1);
    let item = &items.items[0];
    assert_eq!(item.bullet.as_ref().unwrap().text, "1.2.3");
    assert_eq!(item.text(" "), "Algebra and functions");
}

#[test]
fn test_nested_outline_depths() {
    // A numbered topic, two lettered sub-points, the next numbered topic.
    let rows: Vec<OcrWord> = vec![
        ocr_word("1.0.0", 0, 0, 60, 25),
        ocr_word("Numbers", 70, 0, 160, 25),
        ocr_word("1.1.0", 0, 50, 60, 75),
        ocr_word("Integers", 70, 50, 160, 75),
        ocr_word("a)", 40, 100, 70, 125),
        ocr_word("order", 80, 100, 150, 125),
        ocr_word("integers", 160, 100, 250, 125),
        ocr_word("b)", 40, 150, 70, 175),
        ocr_word("add", 80, 150, 140, 175),
        ocr_word("integers", 150, 150, 240, 175),
        ocr_word("1.2.0", 0, 200, 60, 225),
        ocr_word("Fractions", 70, 200, 170, 225),
    ];
    let doc = OcrDocument {
        pages: vec![page(1000, 600, vec![block(rows)])],
    };

    let items = reconstruct_document(&doc, &[], &LayoutConfig::default()).unwrap();
    let tabs: Vec<u32> = items.iter().map(|i| i.tabs).collect();
    assert_eq!(tabs, vec![0, 0, 1, 1, 0]);

    let markdown = to_markdown(&items);
    assert_eq!(
        markdown,
        "- 1.0.0 Numbers\n- 1.1.0 Integers\n\t- a) order integers\n\t- b) add integers\n- 1.2.0 Fractions\n"
    );
    assert_eq!(parse_tab_depths(&markdown), tabs);
}

#[test]
fn test_two_columns_read_left_then_right() {
    let left: Vec<OcrWord> = (0..10)
        .map(|row| ocr_word("alpha", 0, row * 40, 400, row * 40 + 20))
        .collect();
    let mut right: Vec<OcrWord> = vec![
        ocr_word("a)", 600, 0, 630, 20),
        ocr_word("beta", 640, 0, 1000, 20),
    ];
    right.extend((1..10).map(|row| ocr_word("beta", 600, row * 40, 1000, row * 40 + 20)));
    let p = page(1000, 400, vec![block(left), block(right)]);

    let items = reconstruct_page(&p, &[], &LayoutConfig::default()).unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.items[0].text(" ").starts_with("alpha"));
    assert_eq!(items.items[1].bullet.as_ref().unwrap().text, "a)");
    assert!(items.items[1].text(" ").starts_with("beta"));
}

#[test]
fn test_item_continues_across_column_boundary() {
    // A bulleted entry at the bottom of the left column whose text wraps
    // into the top of the right column.
    let mut left: Vec<OcrWord> = (0..9)
        .map(|row| ocr_word("filler", 0, row * 40, 400, row * 40 + 20))
        .collect();
    left.push(ocr_word("a)", 0, 360, 30, 380));
    left.push(ocr_word("solve", 40, 360, 200, 380));
    left.push(ocr_word("linear", 210, 360, 400, 380));

    let mut right: Vec<OcrWord> = vec![
        ocr_word("equations", 600, 0, 800, 20),
        ocr_word("daily", 810, 0, 1000, 20),
        ocr_word("b)", 600, 40, 630, 60),
        ocr_word("next", 640, 40, 1000, 60),
    ];
    right.extend((2..10).map(|row| ocr_word("more", 600, row * 40, 1000, row * 40 + 20)));
    let p = page(1000, 400, vec![block(left), block(right)]);

    let items = reconstruct_page(&p, &[], &LayoutConfig::default()).unwrap();
    let texts: Vec<String> = items.iter().map(|i| i.text(" ")).collect();

    assert_eq!(items.len(), 3);
    assert_eq!(items.items[1].bullet.as_ref().unwrap().text, "a)");
    assert_eq!(texts[1], "solve linear equations daily");
    assert_eq!(items.items[2].bullet.as_ref().unwrap().text, "b)");
}

#[test]
fn test_detected_glyphs_become_bullets() {
    let p = page(
        1000,
        600,
        vec![block(vec![
            ocr_word("apples", 25, 0, 200, 25),
            ocr_word("bananas", 25, 50, 210, 75),
        ])],
    );
    // Bullet glyphs found by template matching, absent from the OCR text.
    let glyphs = vec![
        Word::new("\u{2022}", BoundingBox::new(0, 0, 15, 25)),
        Word::new("\u{2022}", BoundingBox::new(0, 50, 15, 75)),
    ];

    let items = reconstruct_page(&p, &glyphs, &LayoutConfig::default()).unwrap();
    assert_eq!(items.len(), 2);
    for item in &items {
        assert_eq!(item.bullet.as_ref().unwrap().text, "\u{2022}");
    }

    // Plain glyph bullets are elided from the rendered list.
    let markdown = to_markdown(&items);
    assert_eq!(markdown, "- apples\n- bananas\n");
}

#[test]
fn test_section_header_split_inside_merged_item() {
    let p = page(
        1000,
        600,
        vec![block(vec![
            ocr_word("a)", 0, 0, 30, 25),
            ocr_word("intro", 40, 0, 110, 25),
            ocr_word("Content", 40, 50, 140, 75),
            ocr_word("sets", 40, 100, 100, 125),
        ])],
    );
    let items = reconstruct_page(&p, &[], &LayoutConfig::default()).unwrap();

    let texts: Vec<String> = items.iter().map(|i| i.text(" ")).collect();
    assert_eq!(texts, vec!["intro", "Content", "sets"]);
    assert!(items.items[0].bullet.is_some());
    assert!(items.items[1].bullet.is_none());
}

#[test]
fn test_document_round_trips_through_json_file() {
    let doc = OcrDocument {
        pages: vec![page(
            1000,
            600,
            vec![block(vec![
                ocr_word("1.2.3", 0, 0, 60, 25),
                ocr_word("Algebra", 70, 0, 150, 25),
            ])],
        )],
    };

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&doc).unwrap().as_bytes())
        .unwrap();

    let loaded = OcrDocument::from_path(file.path()).unwrap();
    let items = reconstruct_document(&loaded, &[], &LayoutConfig::default()).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items.items[0].bullet.as_ref().unwrap().text, "1.2.3");
    assert_eq!(items.items[0].text(" "), "Algebra");
}

#[test]
fn test_empty_page_yields_empty_outline() {
    let p = page(1000, 600, vec![]);
    let items = reconstruct_page(&p, &[], &LayoutConfig::default()).unwrap();
    assert!(items.is_empty());
}
