//! Markdown rendering of an [`ItemList`] as a nested list.

use crate::model::ItemList;

/// Render every item as a tab-indented list entry.
///
/// The item's bullet token is kept in front of the text, except for plain
/// `•`/`-` glyphs, which the list marker already stands for. Deterministic
/// and side-effect-free.
pub fn to_markdown(items: &ItemList) -> String {
    let mut out = String::new();
    for item in items {
        for _ in 0..item.tabs {
            out.push('\t');
        }
        out.push_str("- ");
        if let Some(bullet) = &item.bullet {
            let token = bullet.text.trim();
            if !token.is_empty() && token != "\u{2022}" && token != "-" {
                out.push_str(token);
                out.push(' ');
            }
        }
        out.push_str(&item.text(" "));
        out.push('\n');
    }
    out
}

/// The leading-tab count of every non-empty line. Inverse of the
/// indentation [`to_markdown`] emits.
pub fn parse_tab_depths(markdown: &str) -> Vec<u32> {
    markdown
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.chars().take_while(|&c| c == '\t').count() as u32)
        .collect()
}
