use std::fmt;

use crate::error::PathError;
use crate::math::{Point2, Vector2};

/// Geometry carried by a path command.
///
/// Coordinates are absolute or relative to the current point depending on
/// [`PathCommand::relative`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo(Point2),
    LineTo(Point2),
    HorizontalLineTo(f64),
    VerticalLineTo(f64),
    CubicTo {
        ctrl1: Point2,
        ctrl2: Point2,
        to: Point2,
    },
    /// Cubic whose first control point reflects the previous cubic's second.
    SmoothCubicTo {
        ctrl2: Point2,
        to: Point2,
    },
    QuadraticTo {
        ctrl: Point2,
        to: Point2,
    },
    /// Quadratic whose control point reflects the previous quadratic's.
    SmoothQuadraticTo(Point2),
    ArcTo {
        radii: Vector2,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point2,
    },
    ClosePath,
}

/// One instruction of an SVG path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathCommand {
    pub segment: Segment,
    pub relative: bool,
}

impl PathCommand {
    /// An absolute command.
    #[must_use]
    pub fn absolute(segment: Segment) -> Self {
        Self {
            segment,
            relative: false,
        }
    }

    /// A command relative to the current point.
    #[must_use]
    pub fn relative(segment: Segment) -> Self {
        Self {
            segment,
            relative: true,
        }
    }

    /// Absolute move-to.
    #[must_use]
    pub fn move_to(x: f64, y: f64) -> Self {
        Self::absolute(Segment::MoveTo(Point2::new(x, y)))
    }

    /// Absolute line-to.
    #[must_use]
    pub fn line_to(x: f64, y: f64) -> Self {
        Self::absolute(Segment::LineTo(Point2::new(x, y)))
    }

    /// Whether this is a move-to, absolute or relative.
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self.segment, Segment::MoveTo(_))
    }

    /// The SVG path letter, lowercase for relative commands.
    #[must_use]
    pub fn letter(&self) -> char {
        let letter = match self.segment {
            Segment::MoveTo(_) => 'M',
            Segment::LineTo(_) => 'L',
            Segment::HorizontalLineTo(_) => 'H',
            Segment::VerticalLineTo(_) => 'V',
            Segment::CubicTo { .. } => 'C',
            Segment::SmoothCubicTo { .. } => 'S',
            Segment::QuadraticTo { .. } => 'Q',
            Segment::SmoothQuadraticTo(_) => 'T',
            Segment::ArcTo { .. } => 'A',
            Segment::ClosePath => 'Z',
        };
        if self.relative {
            letter.to_ascii_lowercase()
        } else {
            letter
        }
    }

    /// The numeric arguments in SVG order. Arc flags encode as `0.0`/`1.0`.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        match self.segment {
            Segment::MoveTo(p) | Segment::LineTo(p) | Segment::SmoothQuadraticTo(p) => {
                vec![p.x, p.y]
            }
            Segment::HorizontalLineTo(v) | Segment::VerticalLineTo(v) => vec![v],
            Segment::CubicTo { ctrl1, ctrl2, to } => {
                vec![ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y]
            }
            Segment::SmoothCubicTo { ctrl2: c, to } | Segment::QuadraticTo { ctrl: c, to } => {
                vec![c.x, c.y, to.x, to.y]
            }
            Segment::ArcTo {
                radii,
                x_axis_rotation,
                large_arc,
                sweep,
                to,
            } => vec![
                radii.x,
                radii.y,
                x_axis_rotation,
                f64::from(u8::from(large_arc)),
                f64::from(u8::from(sweep)),
                to.x,
                to.y,
            ],
            Segment::ClosePath => Vec::new(),
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())?;
        for v in self.values() {
            write!(f, " {v}")?;
        }
        Ok(())
    }
}

/// Untyped path command: an SVG letter and its numeric arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCommand {
    pub letter: char,
    pub values: Vec<f64>,
}

impl RawCommand {
    /// Creates a new raw command.
    #[must_use]
    pub fn new(letter: char, values: impl Into<Vec<f64>>) -> Self {
        Self {
            letter,
            values: values.into(),
        }
    }
}

impl From<&PathCommand> for RawCommand {
    fn from(command: &PathCommand) -> Self {
        Self::new(command.letter(), command.values())
    }
}

/// Number of values each SVG letter takes.
fn arity(letter: char) -> Option<usize> {
    match letter.to_ascii_uppercase() {
        'M' | 'L' | 'T' => Some(2),
        'H' | 'V' => Some(1),
        'C' => Some(6),
        'S' | 'Q' => Some(4),
        'A' => Some(7),
        'Z' => Some(0),
        _ => None,
    }
}

impl TryFrom<&RawCommand> for PathCommand {
    type Error = PathError;

    fn try_from(raw: &RawCommand) -> Result<Self, Self::Error> {
        let letter = raw.letter;
        let expected = arity(letter).ok_or(PathError::UnknownCommand(letter))?;
        if raw.values.len() != expected {
            return Err(PathError::InvalidArity {
                letter,
                expected,
                found: raw.values.len(),
            });
        }

        let v = &raw.values;
        let pt = |i: usize| Point2::new(v[i], v[i + 1]);
        let segment = match letter.to_ascii_uppercase() {
            'M' => Segment::MoveTo(pt(0)),
            'L' => Segment::LineTo(pt(0)),
            'H' => Segment::HorizontalLineTo(v[0]),
            'V' => Segment::VerticalLineTo(v[0]),
            'C' => Segment::CubicTo {
                ctrl1: pt(0),
                ctrl2: pt(2),
                to: pt(4),
            },
            'S' => Segment::SmoothCubicTo {
                ctrl2: pt(0),
                to: pt(2),
            },
            'Q' => Segment::QuadraticTo {
                ctrl: pt(0),
                to: pt(2),
            },
            'T' => Segment::SmoothQuadraticTo(pt(0)),
            'A' => Segment::ArcTo {
                radii: Vector2::new(v[0], v[1]),
                x_axis_rotation: v[2],
                large_arc: v[3] != 0.0,
                sweep: v[4] != 0.0,
                to: pt(5),
            },
            _ => Segment::ClosePath,
        };

        Ok(Self {
            segment,
            relative: letter.is_ascii_lowercase(),
        })
    }
}
