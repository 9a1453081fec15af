//! 2D primitives for piecewise-linear curves.
//!
//! - `Point`: x/y value whose identity and ordering are x only; optionally
//!   carries the instant its x was derived from.
//! - `LineEquation`: sloped (`y = m x + b`) or vertical (`x = c`).
//! - `Line`: bounded segment plus its infinite-line equation.
//! - `Polygon`: corner set sorted counterclockwise around its centroid, with
//!   shoelace area.

mod line;
mod point;
mod polygon;

pub use line::{Line, LineEquation};
pub use point::{dedup_x, sort_curve, Point};
pub use polygon::Polygon;

#[cfg(test)]
mod tests;
