//! Geometry primitives for page-space layout analysis.

mod bbox;
mod boxset;

pub use bbox::{Axis, BoundingBox};
pub use boxset::BoundingBoxSet;
