pub mod curve;

pub use curve::{CubicBezier, Curve, EllipticalArc, LineSegment, QuadraticBezier};
