//! Rendering reconstructed outlines to output formats.

mod markdown;

pub use markdown::{parse_tab_depths, to_markdown};
