//! Layout model types: words, lines, and outline items.
//!
//! Ownership is tree-shaped: an [`ItemList`] owns [`Item`]s, an item owns
//! [`Line`]s, a line owns [`Word`]s, and a word owns its box. The only
//! exception is the line's `column_box`, a copied back-reference used for
//! indentation math.

mod item;
mod line;
mod word;

pub use item::{Item, ItemList};
pub use line::{IndentUnits, Line};
pub use word::Word;

use regex::Regex;

/// Join artifacts left by word-level OCR: no space before trailing
/// punctuation, none inside parentheses, and dotted numeric identifiers
/// ("1. 2. 3") re-joined into "1.2.3".
pub(crate) fn clean_text(text: &str) -> String {
    let text = text
        .replace(" ,", ",")
        .replace(" .", ".")
        .replace(" :", ":")
        .replace(" ;", ";")
        .replace("( ", "(")
        .replace(" )", ")");
    let text = text.trim_start_matches('.').trim().to_string();

    let dotted = Regex::new(r"\d+\. \d+\. \d+").unwrap();
    dotted
        .replace_all(&text, |caps: &regex::Captures<'_>| {
            caps[0].replace(' ', "")
        })
        .into_owned()
}
