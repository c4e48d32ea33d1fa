//! Deserialization of cloud OCR output.
//!
//! Mirrors the provider's JSON hierarchy (page → block → paragraph → word →
//! symbol, each carrying a quadrilateral bounding box) and converts it into
//! the crate's axis-aligned [`Word`] model. Malformed boxes in the input are
//! skipped with a warning rather than failing the whole page; OCR noise is
//! expected.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::BoundingBox;
use crate::model::Word;

/// One corner of a quadrilateral OCR box. Providers omit zero coordinates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vertex {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

/// A quadrilateral bounding box, vertices in top-left, top-right,
/// bottom-right, bottom-left order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrBox {
    pub vertices: [Vertex; 4],
}

impl OcrBox {
    /// The smallest axis-aligned box covering all four vertices, or `None`
    /// when the vertices collapse to a degenerate rectangle.
    pub fn to_rect(&self) -> Option<BoundingBox> {
        let x1 = self.vertices.iter().map(|v| v.x).min()?;
        let x2 = self.vertices.iter().map(|v| v.x).max()?;
        let y1 = self.vertices.iter().map(|v| v.y).min()?;
        let y2 = self.vertices.iter().map(|v| v.y).max()?;
        if x1 >= x2 || y1 >= y2 {
            return None;
        }
        Some(BoundingBox::new(x1, y1, x2, y2))
    }
}

/// One recognized character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrSymbol {
    pub text: String,
    #[serde(default)]
    pub confidence: f32,
    pub bounding_box: OcrBox,
}

/// One recognized word, as a run of symbols.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrWord {
    pub bounding_box: OcrBox,
    pub symbols: Vec<OcrSymbol>,
    #[serde(default)]
    pub confidence: f32,
}

impl OcrWord {
    /// Concatenated symbol texts.
    pub fn text(&self) -> String {
        self.symbols.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrParagraph {
    pub bounding_box: OcrBox,
    pub words: Vec<OcrWord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrBlock {
    pub bounding_box: OcrBox,
    pub paragraphs: Vec<OcrParagraph>,
}

/// One scanned page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrPage {
    pub width: i32,
    pub height: i32,
    pub blocks: Vec<OcrBlock>,
}

impl OcrPage {
    /// Every word on the page as a model [`Word`], in block/paragraph
    /// order. Words with degenerate boxes are skipped with a warning.
    pub fn words(&self) -> Vec<Word> {
        let mut words = Vec::new();
        for block in &self.blocks {
            for paragraph in &block.paragraphs {
                for word in &paragraph.words {
                    match word.bounding_box.to_rect() {
                        Some(rect) => words.push(Word::new(word.text(), rect)),
                        None => {
                            log::warn!("skipping word '{}' with degenerate box", word.text());
                        }
                    }
                }
            }
        }
        words
    }

    /// Block-level boxes, used to spot lone blocks during column
    /// segmentation. Degenerate boxes are skipped.
    pub fn block_boxes(&self) -> Vec<BoundingBox> {
        self.blocks
            .iter()
            .filter_map(|b| b.bounding_box.to_rect())
            .collect()
    }
}

/// A full OCR result, one entry per scanned page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrDocument {
    pub pages: Vec<OcrPage>,
}

impl OcrDocument {
    /// Load from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load from any JSON reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load from a JSON byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_to_rect_takes_vertex_extremes() {
        // Slightly skewed quadrilateral, as scans produce.
        let skewed = OcrBox {
            vertices: [
                Vertex { x: 10, y: 12 },
                Vertex { x: 50, y: 10 },
                Vertex { x: 52, y: 30 },
                Vertex { x: 11, y: 32 },
            ],
        };
        assert_eq!(skewed.to_rect().unwrap(), BoundingBox::new(10, 10, 52, 32));
    }

    #[test]
    fn test_to_rect_rejects_degenerate() {
        assert!(quad(5, 5, 5, 20).to_rect().is_none());
        assert!(quad(5, 5, 20, 5).to_rect().is_none());
    }

    #[test]
    fn test_word_text_concatenates_symbols() {
        let word = OcrWord {
            bounding_box: quad(0, 0, 30, 10),
            symbols: vec![
                OcrSymbol {
                    text: "1".into(),
                    confidence: 0.99,
                    bounding_box: quad(0, 0, 10, 10),
                },
                OcrSymbol {
                    text: ".".into(),
                    confidence: 0.97,
                    bounding_box: quad(10, 0, 20, 10),
                },
                OcrSymbol {
                    text: "2".into(),
                    confidence: 0.99,
                    bounding_box: quad(20, 0, 30, 10),
                },
            ],
            confidence: 0.98,
        };
        assert_eq!(word.text(), "1.2");
    }

    #[test]
    fn test_deserialize_missing_vertex_coordinates() {
        // Providers drop zero-valued coordinates entirely.
        let json = r#"{
            "pages": [{
                "width": 100,
                "height": 100,
                "blocks": [{
                    "bounding_box": {"vertices": [{}, {"x": 40}, {"x": 40, "y": 20}, {"y": 20}]},
                    "paragraphs": [{
                        "bounding_box": {"vertices": [{}, {"x": 40}, {"x": 40, "y": 20}, {"y": 20}]},
                        "words": [{
                            "bounding_box": {"vertices": [{}, {"x": 40}, {"x": 40, "y": 20}, {"y": 20}]},
                            "symbols": [{
                                "text": "hi",
                                "bounding_box": {"vertices": [{}, {"x": 40}, {"x": 40, "y": 20}, {"y": 20}]}
                            }]
                        }]
                    }]
                }]
            }]
        }"#;
        let doc = OcrDocument::from_slice(json.as_bytes()).unwrap();
        let words = doc.pages[0].words();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text, "hi");
        assert_eq!(words[0].bounding_box, BoundingBox::new(0, 0, 40, 20));
    }
}
