//! Indentation-depth inference.
//!
//! A single ordered pass over the items folds an explicit previous-item
//! state and assigns each item a nesting depth from the change in bullet
//! type, indentation, and font weight. Dotted-numeric bullets anchor the
//! depth: they always reset to the top level.

use crate::config::LayoutConfig;
use crate::model::{IndentUnits, Item, ItemList};

/// Coarse classification of a bullet token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletType {
    /// Dotted numeric, e.g. "1.2.3". Anchors the top level.
    Dotted,
    /// A plain bullet glyph.
    Bullet,
    /// A dash.
    Dash,
    /// Short alphanumeric with parenthesis, e.g. "a)".
    Letter,
    /// Any other non-empty token.
    Unknown,
}

impl BulletType {
    /// Classify a bullet token, `None` for empty text.
    pub fn classify(text: &str) -> Option<Self> {
        let t = text.trim();
        if t.is_empty() {
            None
        } else if t.contains('.') {
            Some(Self::Dotted)
        } else if t.contains('\u{2022}') {
            Some(Self::Bullet)
        } else if t.contains('-') {
            Some(Self::Dash)
        } else if t.contains(')') {
            Some(Self::Letter)
        } else {
            Some(Self::Unknown)
        }
    }
}

/// Indentation change between consecutive items, bucketed by the
/// same-level threshold `t` (in column widths).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RelIndent {
    VeryDedented,
    SomewhatDedented,
    Same,
    SomewhatIndented,
    VeryIndented,
}

impl RelIndent {
    fn bucket(delta: f32, t: f32) -> Self {
        if delta > 2.0 * t {
            Self::VeryIndented
        } else if delta > t {
            Self::SomewhatIndented
        } else if delta < -2.0 * t {
            Self::VeryDedented
        } else if delta < -t {
            Self::SomewhatDedented
        } else {
            Self::Same
        }
    }

    fn indented(self) -> bool {
        matches!(self, Self::SomewhatIndented | Self::VeryIndented)
    }

    fn dedented(self) -> bool {
        matches!(self, Self::SomewhatDedented | Self::VeryDedented)
    }
}

/// Font-weight change between consecutive items. `Same` whenever either
/// weight is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RelWeight {
    Same,
    Bolder,
    LessBold,
}

impl RelWeight {
    fn bucket(prev: Option<f32>, cur: Option<f32>, threshold: f32) -> Self {
        match (prev, cur) {
            (Some(p), Some(c)) if c - p > threshold => Self::Bolder,
            (Some(p), Some(c)) if p - c > threshold => Self::LessBold,
            _ => Self::Same,
        }
    }
}

/// Everything the reducer remembers about the previous item.
#[derive(Debug, Clone)]
struct PrevItemState {
    bullet_type: Option<BulletType>,
    bullet_indent: f32,
    item_indent: f32,
    fontweight: Option<f32>,
    tabs: i32,
}

impl PrevItemState {
    fn effective_indent(&self) -> f32 {
        if self.bullet_type.is_some() {
            self.bullet_indent
        } else {
            self.item_indent
        }
    }
}

/// `bullet_indent` compares the bullet (or line-start) positions and
/// drives the same-type and type-change rules; `text_indent` compares the
/// text starts and drives the bullet-lost/gained rules, since continuation
/// text aligns with the previous text, not with its bullet.
fn next_tabs(
    prev: &PrevItemState,
    current: Option<BulletType>,
    bullet_indent: RelIndent,
    text_indent: RelIndent,
    weight: RelWeight,
) -> i32 {
    use BulletType::Dotted;
    let same_type = || {
        let mut tabs = prev.tabs;
        match bullet_indent {
            RelIndent::VeryIndented => tabs += 1,
            RelIndent::VeryDedented => tabs -= 1,
            _ => {}
        }
        match weight {
            RelWeight::Bolder => tabs -= 1,
            RelWeight::LessBold => tabs += 1,
            RelWeight::Same => {}
        }
        tabs
    };
    match (prev.bullet_type, current) {
        // Dotted numbering anchors the hierarchy.
        (_, Some(Dotted)) => 0,
        (Some(Dotted), _) => 1,
        (None, None) => same_type(),
        (p, c) if p == c => same_type(),
        // Bullet lost: usually a continuation one level up, unless the
        // text moved right.
        (Some(_), None) => {
            if text_indent.indented() {
                prev.tabs + 1
            } else {
                prev.tabs - 1
            }
        }
        // Bullet gained: usually a sub-list, unless the text moved left.
        (None, Some(_)) => {
            if text_indent.dedented() {
                prev.tabs - 1
            } else {
                prev.tabs + 1
            }
        }
        // Bullet style changed: only the indentation signal is trusted.
        (Some(_), Some(_)) => {
            if bullet_indent.indented() {
                prev.tabs + 1
            } else if bullet_indent.dedented() {
                prev.tabs - 1
            } else {
                prev.tabs
            }
        }
    }
}

/// Assign a nesting depth to every item, in order. May span pages: run it
/// once over the document-merged list.
pub fn assign_tab_levels(items: &mut ItemList, config: &LayoutConfig) {
    let mut prev: Option<PrevItemState> = None;
    for item in &mut items.items {
        let fallback = prev.as_ref();
        let bullet_indent = indent_or_prev(item, true, fallback.map(|s| s.bullet_indent));
        let item_indent = indent_or_prev(item, false, fallback.map(|s| s.item_indent));
        let bullet_type = item
            .bullet
            .as_ref()
            .and_then(|b| BulletType::classify(&b.text));
        let fontweight = item.average_fontweight();

        // The first item is compared against itself, so a document opens
        // at depth 0 whatever its first bullet looks like.
        let state = prev.unwrap_or(PrevItemState {
            bullet_type,
            bullet_indent,
            item_indent,
            fontweight: None,
            tabs: 0,
        });

        let current_effective = if bullet_type.is_some() {
            bullet_indent
        } else {
            item_indent
        };
        let bullet_rel = RelIndent::bucket(
            current_effective - state.effective_indent(),
            config.same_level_threshold,
        );
        let text_rel = RelIndent::bucket(
            item_indent - state.item_indent,
            config.same_level_threshold,
        );
        let weight = RelWeight::bucket(
            state.fontweight,
            fontweight,
            config.same_fontweight_threshold,
        );

        let tabs = next_tabs(&state, bullet_type, bullet_rel, text_rel, weight).max(0);
        item.tabs = tabs as u32;
        prev = Some(PrevItemState {
            bullet_type,
            bullet_indent,
            item_indent,
            fontweight,
            tabs,
        });
    }
}

fn indent_or_prev(item: &Item, include_bullet: bool, fallback: Option<f32>) -> f32 {
    match item.indentation(include_bullet, IndentUnits::ColWidth) {
        Ok(indent) => indent,
        Err(e) => {
            log::warn!("cannot measure item indentation ({e}), keeping level");
            fallback.unwrap_or(0.0)
        }
    }
}
