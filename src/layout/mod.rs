//! Layout reconstruction stages.
//!
//! Each stage is a standalone function over the model types: column
//! segmentation, line clustering, bullet extraction, item assembly,
//! font-weight estimation, and indentation-depth inference. The pipeline in
//! the crate root chains them in that order.

mod assemble;
mod bullets;
mod columns;
mod fontweight;
mod indent;
mod lines;

pub use bullets::compile_bullet_patterns;
pub use columns::{segment_columns, words_in_column, Column, ColumnKind};
pub use fontweight::annotate_font_weights;
pub use indent::{assign_tab_levels, BulletType};
pub use lines::cluster_lines;
