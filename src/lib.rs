//! Flattening of SVG paths into polylines with near-uniform segment lengths.
//!
//! Curves are sampled along their arc length rather than their parameter,
//! so consecutive output vertices sit roughly `max_step_size` apart
//! regardless of how fast the curve parameterization moves.

pub mod error;
pub mod geometry;
pub mod math;
pub mod path;
pub mod tessellation;

pub use error::{ErrorKind, FlattenError, Result};
pub use geometry::curve::{
    flatten_arc, flatten_cubic_bezier, flatten_line, flatten_quadratic_bezier,
};
pub use math::arc_2d::{svg_arc_to_ellipse, EllipseArc};
pub use math::Point2;
pub use path::{flatten_raw_path, flatten_svg_path, PathCommand, RawCommand, Segment};
pub use tessellation::{FlattenOptions, Polyline};
