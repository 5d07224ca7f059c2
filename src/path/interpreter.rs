use std::fmt;

use tracing::{debug, trace};

use crate::error::{FlattenError, PathError, Result};
use crate::geometry::{CubicBezier, Curve, EllipticalArc, LineSegment, QuadraticBezier};
use crate::math::{Point2, Vector2};
use crate::tessellation::{FlattenOptions, Polyline};

use super::command::{PathCommand, RawCommand, Segment};

/// Curve family a shorthand command reflects from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveFamily {
    Cubic,
    Quadratic,
}

impl fmt::Display for CurveFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cubic => f.write_str("cubic"),
            Self::Quadratic => f.write_str("quadratic"),
        }
    }
}

/// Interpreter state between two commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathState {
    /// Where the pen is.
    pub current: Point2,
    /// Target of the last move-to; close-path returns here.
    pub subpath_start: Point2,
    /// Second control point of the previous command, if it was a cubic.
    pub last_cubic_ctrl: Option<Point2>,
    /// Control point of the previous command, if it was a quadratic.
    pub last_quadratic_ctrl: Option<Point2>,
    /// Whether `current` has already been written to the output, which only
    /// holds right after a move-to.
    pub current_emitted: bool,
}

impl Default for PathState {
    fn default() -> Self {
        Self {
            current: Point2::origin(),
            subpath_start: Point2::origin(),
            last_cubic_ctrl: None,
            last_quadratic_ctrl: None,
            current_emitted: false,
        }
    }
}

/// Result of applying one command.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: PathState,
    /// Move-to and line-to commands produced by this command, all absolute.
    pub output: Vec<PathCommand>,
}

/// `2 * origin - ctrl`: reflection of `ctrl` through `origin`.
fn reflect(origin: Point2, ctrl: Point2) -> Point2 {
    origin + (origin - ctrl)
}

impl PathState {
    fn resolve(&self, p: Point2, relative: bool) -> Point2 {
        if relative {
            self.current + p.coords
        } else {
            p
        }
    }

    /// Applies one command, returning the next state and the emitted commands.
    ///
    /// `index` is the command's position in the path; only index 0 is treated
    /// as the initial move.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::MissingReflectionAnchor`] for a shorthand curve
    /// not preceded by a curve of the same family.
    pub fn step(&self, command: &PathCommand, index: usize, options: &FlattenOptions) -> Result<Step> {
        let rel = command.relative;
        let max_step = options.max_step_size;
        let mut next = Self {
            last_cubic_ctrl: None,
            last_quadratic_ctrl: None,
            ..*self
        };

        let points = match command.segment {
            Segment::MoveTo(p) => {
                let target = self.resolve(p, rel);
                let mut output = Vec::with_capacity(2);
                // Non-initial moves are joined to the previous position.
                if index > 0 {
                    output.push(PathCommand::line_to(self.current.x, self.current.y));
                }
                output.push(PathCommand::move_to(target.x, target.y));
                next.current = target;
                next.subpath_start = target;
                next.current_emitted = true;
                return Ok(Step {
                    state: next,
                    output,
                });
            }
            Segment::LineTo(p) => {
                let to = self.resolve(p, rel);
                next.current = to;
                LineSegment::new(self.current, to).flatten(max_step)
            }
            Segment::HorizontalLineTo(x) => {
                let to = if rel {
                    Point2::new(self.current.x + x, self.current.y)
                } else {
                    Point2::new(x, self.current.y)
                };
                next.current = to;
                LineSegment::new(self.current, to).flatten(max_step)
            }
            Segment::VerticalLineTo(y) => {
                let to = if rel {
                    Point2::new(self.current.x, self.current.y + y)
                } else {
                    Point2::new(self.current.x, y)
                };
                next.current = to;
                LineSegment::new(self.current, to).flatten(max_step)
            }
            Segment::CubicTo { ctrl1, ctrl2, to } => {
                let ctrl1 = self.resolve(ctrl1, rel);
                self.cubic(&mut next, ctrl1, ctrl2, to, rel, max_step)
            }
            Segment::SmoothCubicTo { ctrl2, to } => {
                let anchor = self.last_cubic_ctrl.ok_or(PathError::MissingReflectionAnchor {
                    index,
                    family: CurveFamily::Cubic,
                })?;
                let ctrl1 = reflect(self.current, anchor);
                self.cubic(&mut next, ctrl1, ctrl2, to, rel, max_step)
            }
            Segment::QuadraticTo { ctrl, to } => {
                let ctrl = self.resolve(ctrl, rel);
                self.quadratic(&mut next, ctrl, to, rel, max_step)
            }
            Segment::SmoothQuadraticTo(to) => {
                let anchor = self
                    .last_quadratic_ctrl
                    .ok_or(PathError::MissingReflectionAnchor {
                        index,
                        family: CurveFamily::Quadratic,
                    })?;
                let ctrl = reflect(self.current, anchor);
                self.quadratic(&mut next, ctrl, to, rel, max_step)
            }
            Segment::ArcTo {
                radii,
                x_axis_rotation,
                large_arc,
                sweep,
                to,
            } => {
                let to = self.resolve(to, rel);
                next.current = to;
                arc(self.current, radii, x_axis_rotation, large_arc, sweep, to).flatten(max_step)
            }
            Segment::ClosePath => {
                next.current = self.subpath_start;
                LineSegment::new(self.current, self.subpath_start).flatten(max_step)
            }
        };

        // The first flattened point is the current point; skip it if already written.
        let skip = usize::from(self.current_emitted && !points.is_empty());
        next.current_emitted = self.current_emitted && points.is_empty();
        let output = points
            .into_iter()
            .skip(skip)
            .map(|p| PathCommand::line_to(p.x, p.y))
            .collect();

        Ok(Step {
            state: next,
            output,
        })
    }

    fn cubic(
        &self,
        next: &mut Self,
        ctrl1: Point2,
        ctrl2: Point2,
        to: Point2,
        rel: bool,
        max_step: f64,
    ) -> Vec<Point2> {
        let ctrl2 = self.resolve(ctrl2, rel);
        let to = self.resolve(to, rel);
        next.current = to;
        next.last_cubic_ctrl = Some(ctrl2);
        CubicBezier::new(self.current, ctrl1, ctrl2, to).flatten(max_step)
    }

    fn quadratic(
        &self,
        next: &mut Self,
        ctrl: Point2,
        to: Point2,
        rel: bool,
        max_step: f64,
    ) -> Vec<Point2> {
        let to = self.resolve(to, rel);
        next.current = to;
        next.last_quadratic_ctrl = Some(ctrl);
        QuadraticBezier::new(self.current, ctrl, to).flatten(max_step)
    }
}

fn arc(
    from: Point2,
    radii: Vector2,
    x_axis_rotation: f64,
    large_arc: bool,
    sweep: bool,
    to: Point2,
) -> EllipticalArc {
    EllipticalArc::from_svg(from, radii.x, radii.y, x_axis_rotation, large_arc, sweep, to)
}

/// Flattens a path into move-to and line-to commands.
///
/// Every curve is replaced by line-to commands whose vertices lie on the
/// curve, at most `max_step_size` apart. A final line-to at the last
/// position closes the output.
///
/// Every move-to after the first is preceded by a line-to the previous
/// position, so consecutive subpaths come out joined into one figure.
#[derive(Debug)]
pub struct FlattenPath<'a> {
    commands: &'a [PathCommand],
    options: FlattenOptions,
}

impl<'a> FlattenPath<'a> {
    /// Creates a new path flattening operation.
    #[must_use]
    pub fn new(commands: &'a [PathCommand], options: FlattenOptions) -> Self {
        Self { commands, options }
    }

    /// Executes the flattening.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid, the path is empty, does
    /// not start with a move-to, or uses a shorthand curve without a
    /// preceding curve of its family. No partial output is returned.
    pub fn execute(&self) -> Result<Vec<PathCommand>> {
        self.options.validate()?;
        let first = self.commands.first().ok_or(PathError::NoCommands)?;
        if !first.is_move() {
            return Err(PathError::NoInitialMove.into());
        }
        interpret(self.commands.iter().copied().map(Ok), &self.options)
    }
}

/// Folds [`PathState::step`] over `commands`, stopping at the first error.
///
/// Commands arrive as results so that decoding failures surface in order,
/// alongside interpretation failures.
fn interpret<I>(commands: I, options: &FlattenOptions) -> Result<Vec<PathCommand>>
where
    I: IntoIterator<Item = Result<PathCommand>>,
{
    debug!(max_step_size = options.max_step_size, "flattening path");

    let mut output = Vec::new();
    let state = commands.into_iter().enumerate().try_fold(
        PathState::default(),
        |state, (index, command)| {
            let command = command?;
            let step = state.step(&command, index, options)?;
            trace!(index, %command, emitted = step.output.len(), "applied command");
            output.extend(step.output);
            Ok::<_, FlattenError>(step.state)
        },
    )?;
    output.push(PathCommand::line_to(state.current.x, state.current.y));

    debug!(output = output.len(), "flattened path");
    Ok(output)
}

/// Flattens `commands` into move-to and line-to commands. See [`FlattenPath`].
///
/// # Errors
///
/// See [`FlattenPath::execute`].
pub fn flatten_svg_path(commands: &[PathCommand], options: &FlattenOptions) -> Result<Vec<PathCommand>> {
    FlattenPath::new(commands, *options).execute()
}

/// Decodes raw SVG commands and flattens them like [`flatten_svg_path`].
///
/// Each record is decoded just before it is applied, so errors are reported
/// in command order: an undecodable record only fails the path once every
/// command before it has been interpreted.
///
/// # Errors
///
/// As [`flatten_svg_path`], plus [`PathError::UnknownCommand`] and
/// [`PathError::InvalidArity`] for undecodable records.
pub fn flatten_raw_path(commands: &[RawCommand], options: &FlattenOptions) -> Result<Vec<PathCommand>> {
    options.validate()?;
    let first = commands.first().ok_or(PathError::NoCommands)?;
    if !matches!(first.letter, 'M' | 'm') {
        return Err(PathError::NoInitialMove.into());
    }
    interpret(
        commands
            .iter()
            .map(|raw| PathCommand::try_from(raw).map_err(FlattenError::from)),
        options,
    )
}

/// Splits flattened output into one polyline per move-to.
///
/// Commands other than absolute move-to and line-to are ignored.
#[must_use]
pub fn polylines(commands: &[PathCommand]) -> Vec<Polyline> {
    let mut result: Vec<Polyline> = Vec::new();
    for command in commands.iter().filter(|c| !c.relative) {
        match command.segment {
            Segment::MoveTo(p) => result.push(Polyline { points: vec![p] }),
            Segment::LineTo(p) => match result.last_mut() {
                Some(polyline) => polyline.points.push(p),
                None => result.push(Polyline { points: vec![p] }),
            },
            _ => {}
        }
    }
    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn options(step: f64) -> FlattenOptions {
        FlattenOptions::new(step).unwrap()
    }

    fn raw(letter: char, values: &[f64]) -> RawCommand {
        RawCommand::new(letter, values)
    }

    fn decoded(letter: char, values: &[f64]) -> PathCommand {
        PathCommand::try_from(&raw(letter, values)).unwrap()
    }

    fn point_of(command: &PathCommand) -> Point2 {
        match command.segment {
            Segment::MoveTo(p) | Segment::LineTo(p) => p,
            _ => panic!("unexpected command {command}"),
        }
    }

    #[test]
    fn move_then_line() {
        init_tracing();
        let commands = [PathCommand::move_to(0.0, 0.0), PathCommand::line_to(10.0, 0.0)];
        let out = flatten_svg_path(&commands, &options(5.0)).unwrap();
        assert_eq!(
            out,
            vec![
                PathCommand::move_to(0.0, 0.0),
                PathCommand::line_to(5.0, 0.0),
                PathCommand::line_to(10.0, 0.0),
            ]
        );
    }

    #[test]
    fn empty_path() {
        let err = flatten_svg_path(&[], &FlattenOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoCommands);
    }

    #[test]
    fn must_start_with_move() {
        let err = flatten_svg_path(&[PathCommand::line_to(1.0, 1.0)], &FlattenOptions::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoInitialMove);

        let relative_move = [PathCommand::relative(Segment::MoveTo(Point2::new(1.0, 1.0)))];
        assert!(flatten_svg_path(&relative_move, &FlattenOptions::default()).is_ok());
    }

    #[test]
    fn shorthand_cubic_without_anchor() {
        let commands = [
            raw('M', &[0.0, 0.0]),
            raw('S', &[10.0, 10.0, 20.0, 0.0]),
        ];
        let err = flatten_raw_path(&commands, &options(1.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingReflectionAnchor);
        assert_eq!(
            err,
            FlattenError::from(PathError::MissingReflectionAnchor {
                index: 1,
                family: CurveFamily::Cubic
            })
        );
    }

    #[test]
    fn shorthand_quadratic_after_cubic_has_no_anchor() {
        let commands = [
            raw('M', &[0.0, 0.0]),
            raw('C', &[0.0, 10.0, 10.0, 10.0, 10.0, 0.0]),
            raw('T', &[20.0, 0.0]),
        ];
        let err = flatten_raw_path(&commands, &options(1.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingReflectionAnchor);
    }

    #[test]
    fn unknown_command_aborts() {
        let commands = [raw('M', &[0.0, 0.0]), raw('L', &[1.0, 1.0]), raw('B', &[1.0])];
        let err = flatten_raw_path(&commands, &options(1.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownCommand);
    }

    #[test]
    fn raw_path_checks_initial_move_before_decoding() {
        let commands = [raw('L', &[1.0, 1.0]), raw('X', &[1.0])];
        let err = flatten_raw_path(&commands, &options(1.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoInitialMove);

        let err = flatten_raw_path(&[], &options(1.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoCommands);
    }

    #[test]
    fn raw_path_errors_follow_command_order() {
        let commands = [
            raw('M', &[0.0, 0.0]),
            raw('S', &[1.0, 1.0, 2.0, 2.0]),
            raw('X', &[1.0]),
        ];
        let err = flatten_raw_path(&commands, &options(1.0)).unwrap_err();
        assert_eq!(
            err,
            FlattenError::from(PathError::MissingReflectionAnchor {
                index: 1,
                family: CurveFamily::Cubic
            })
        );

        let commands = [
            raw('M', &[0.0, 0.0]),
            raw('L', &[1.0]),
            raw('S', &[1.0, 1.0, 2.0, 2.0]),
        ];
        let err = flatten_raw_path(&commands, &options(1.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArity);
    }

    #[test]
    fn tiny_step_keeps_only_endpoints() {
        let commands = [
            PathCommand::move_to(0.0, 0.0),
            PathCommand::line_to(1.0, 0.0),
            PathCommand::absolute(Segment::CubicTo {
                ctrl1: Point2::new(1.0, 1.0),
                ctrl2: Point2::new(2.0, 1.0),
                to: Point2::new(2.0, 0.0),
            }),
            PathCommand::absolute(Segment::ArcTo {
                radii: Vector2::new(1.0, 1.0),
                x_axis_rotation: 0.0,
                large_arc: false,
                sweep: true,
                to: Point2::new(4.0, 0.0),
            }),
        ];
        let out = flatten_svg_path(&commands, &options(f64::MIN_POSITIVE)).unwrap();
        assert_eq!(
            out,
            vec![PathCommand::move_to(0.0, 0.0), PathCommand::line_to(4.0, 0.0)]
        );
    }

    #[test]
    fn invalid_step_size() {
        let commands = [PathCommand::move_to(0.0, 0.0)];
        let bad = FlattenOptions { max_step_size: -1.0 };
        let err = flatten_svg_path(&commands, &bad).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidStepSize);
    }

    #[test]
    fn lone_move_ends_with_line_to() {
        let out = flatten_svg_path(&[PathCommand::move_to(3.0, 4.0)], &options(1.0)).unwrap();
        assert_eq!(
            out,
            vec![PathCommand::move_to(3.0, 4.0), PathCommand::line_to(3.0, 4.0)]
        );
    }

    #[test]
    fn relative_horizontal_vertical_and_close() {
        let commands = [
            raw('m', &[1.0, 1.0]),
            raw('h', &[4.0]),
            raw('v', &[4.0]),
            raw('H', &[1.0]),
            raw('z', &[]),
        ];
        let out = flatten_raw_path(&commands, &options(4.0)).unwrap();
        let points: Vec<Point2> = out.iter().map(point_of).collect();
        assert_eq!(
            points,
            vec![
                Point2::new(1.0, 1.0),
                Point2::new(5.0, 1.0),
                Point2::new(5.0, 5.0),
                Point2::new(1.0, 5.0),
                Point2::new(1.0, 1.0),
            ]
        );
    }

    #[test]
    fn non_initial_move_is_joined() {
        let commands = [
            PathCommand::move_to(0.0, 0.0),
            PathCommand::line_to(2.0, 0.0),
            PathCommand::move_to(10.0, 10.0),
            PathCommand::line_to(12.0, 10.0),
        ];
        let out = flatten_svg_path(&commands, &options(5.0)).unwrap();
        assert_eq!(
            out,
            vec![
                PathCommand::move_to(0.0, 0.0),
                PathCommand::line_to(2.0, 0.0),
                PathCommand::move_to(10.0, 10.0),
                PathCommand::line_to(12.0, 10.0),
            ]
        );

        let poly = polylines(&out);
        assert_eq!(poly.len(), 2);
        assert_eq!(poly[0].points, vec![Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)]);
    }

    #[test]
    fn full_circle_from_two_semicircles() {
        init_tracing();
        let commands = [
            raw('M', &[0.0, 0.0]),
            raw('A', &[50.0, 50.0, 0.0, 0.0, 1.0, 100.0, 0.0]),
            raw('A', &[50.0, 50.0, 0.0, 0.0, 1.0, 0.0, 0.0]),
        ];
        let out = flatten_raw_path(&commands, &options(2.0)).unwrap();
        let points: Vec<Point2> = out.iter().map(point_of).collect();

        let center = Point2::new(50.0, 0.0);
        for p in &points {
            assert_relative_eq!((p - center).norm(), 50.0, epsilon = 1e-6);
        }
        assert_eq!(points.first(), points.last());
        assert_eq!(points.len(), 1 + 79 + 79);
    }

    #[test]
    fn smooth_cubic_reflects_control_point() {
        let options = options(0.5);
        let commands = [
            raw('M', &[0.0, 0.0]),
            raw('C', &[0.0, 10.0, 10.0, 10.0, 10.0, 0.0]),
            raw('s', &[10.0, -10.0, 10.0, 0.0]),
        ];
        let smooth = flatten_raw_path(&commands, &options).unwrap();

        let explicit = [
            raw('M', &[0.0, 0.0]),
            raw('C', &[0.0, 10.0, 10.0, 10.0, 10.0, 0.0]),
            raw('C', &[10.0, -10.0, 20.0, -10.0, 20.0, 0.0]),
        ];
        let expected = flatten_raw_path(&explicit, &options).unwrap();
        assert_eq!(smooth, expected);
        assert_eq!(point_of(smooth.last().unwrap()), Point2::new(20.0, 0.0));
    }

    #[test]
    fn smooth_quadratic_chain() {
        let commands = [
            PathCommand::move_to(0.0, 0.0),
            PathCommand::absolute(Segment::QuadraticTo {
                ctrl: Point2::new(5.0, 10.0),
                to: Point2::new(10.0, 0.0),
            }),
            PathCommand::absolute(Segment::SmoothQuadraticTo(Point2::new(20.0, 0.0))),
            PathCommand::absolute(Segment::SmoothQuadraticTo(Point2::new(30.0, 0.0))),
        ];
        let out = flatten_svg_path(&commands, &options(1.0)).unwrap();
        let points: Vec<Point2> = out.iter().map(point_of).collect();

        // Second segment dips below the axis, third rises above it again.
        assert!(points.iter().any(|p| p.x > 10.5 && p.x < 19.5 && p.y < -1.0));
        assert!(points.iter().any(|p| p.x > 20.5 && p.x < 29.5 && p.y > 1.0));
        assert_abs_diff_eq!(points.last().unwrap().x, 30.0);
    }

    #[test]
    fn step_is_a_pure_transition() {
        let options = options(1.0);
        let state = PathState {
            current: Point2::new(2.0, 2.0),
            subpath_start: Point2::new(0.0, 0.0),
            last_cubic_ctrl: Some(Point2::new(1.0, 1.0)),
            last_quadratic_ctrl: None,
            current_emitted: false,
        };

        let smooth = PathCommand::relative(Segment::SmoothCubicTo {
            ctrl2: Point2::new(2.0, 0.0),
            to: Point2::new(2.0, 2.0),
        });
        let a = state.step(&smooth, 3, &options).unwrap();
        let b = state.step(&smooth, 3, &options).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.state.current, Point2::new(4.0, 4.0));
        assert_eq!(a.state.last_cubic_ctrl, Some(Point2::new(4.0, 2.0)));
        assert_eq!(a.output[0], PathCommand::line_to(2.0, 2.0));

        let close = PathCommand::absolute(Segment::ClosePath);
        let closed = a.state.step(&close, 4, &options).unwrap();
        assert_eq!(closed.state.current, Point2::new(0.0, 0.0));
        assert_eq!(closed.state.last_cubic_ctrl, None);
    }

    #[test]
    fn zero_radius_arc_is_drawn_as_line() {
        let commands = [raw('M', &[0.0, 0.0]), raw('A', &[0.0, 0.0, 0.0, 0.0, 1.0, 10.0, 0.0])];
        let out = flatten_raw_path(&commands, &options(5.0)).unwrap();
        assert_eq!(
            out,
            vec![
                PathCommand::move_to(0.0, 0.0),
                PathCommand::line_to(5.0, 0.0),
                PathCommand::line_to(10.0, 0.0),
            ]
        );
    }

    fn state_at(x: f64, y: f64) -> PathState {
        PathState {
            current: Point2::new(x, y),
            subpath_start: Point2::new(0.0, 0.0),
            last_cubic_ctrl: None,
            last_quadratic_ctrl: None,
            current_emitted: false,
        }
    }

    #[test]
    fn relative_curves_resolve_against_previous_point() {
        let options = options(1.0);
        let state = state_at(10.0, 10.0);

        let rel = state.step(&decoded('c', &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]), 1, &options).unwrap();
        let abs = state.step(&decoded('C', &[11.0, 12.0, 13.0, 14.0, 15.0, 16.0]), 1, &options).unwrap();
        assert_eq!(rel, abs);
        assert_eq!(rel.state.current, Point2::new(15.0, 16.0));
        assert_eq!(rel.state.last_cubic_ctrl, Some(Point2::new(13.0, 14.0)));

        let rel = state.step(&decoded('q', &[2.0, 4.0, 6.0, 0.0]), 1, &options).unwrap();
        let abs = state.step(&decoded('Q', &[12.0, 14.0, 16.0, 10.0]), 1, &options).unwrap();
        assert_eq!(rel, abs);
        assert_eq!(rel.state.current, Point2::new(16.0, 10.0));
        assert_eq!(rel.state.last_quadratic_ctrl, Some(Point2::new(12.0, 14.0)));

        let after_q = rel.state;
        let smooth = after_q.step(&decoded('t', &[4.0, 0.0]), 2, &options).unwrap();
        let explicit = after_q.step(&decoded('Q', &[20.0, 6.0, 20.0, 10.0]), 2, &options).unwrap();
        assert_eq!(smooth, explicit);
        assert_eq!(smooth.state.current, Point2::new(20.0, 10.0));
        assert_eq!(smooth.state.last_quadratic_ctrl, Some(Point2::new(20.0, 6.0)));

        let rel = state.step(&decoded('a', &[5.0, 5.0, 0.0, 0.0, 1.0, 10.0, 0.0]), 1, &options).unwrap();
        let abs = state.step(&decoded('A', &[5.0, 5.0, 0.0, 0.0, 1.0, 20.0, 10.0]), 1, &options).unwrap();
        assert_eq!(rel, abs);
        assert_eq!(rel.state.current, Point2::new(20.0, 10.0));
        let center = Point2::new(15.0, 10.0);
        for p in rel.output.iter().map(point_of) {
            assert_relative_eq!((p - center).norm(), 5.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn non_curve_commands_clear_both_memories() {
        let options = options(1.0);
        let state = PathState {
            last_cubic_ctrl: Some(Point2::new(8.0, 8.0)),
            last_quadratic_ctrl: Some(Point2::new(9.0, 9.0)),
            ..state_at(10.0, 10.0)
        };
        let commands = [
            raw('M', &[0.0, 0.0]),
            raw('l', &[1.0, 1.0]),
            raw('H', &[3.0]),
            raw('v', &[2.0]),
            raw('A', &[5.0, 5.0, 0.0, 0.0, 1.0, 20.0, 10.0]),
            raw('Z', &[]),
        ];
        for command in &commands {
            let step = state
                .step(&PathCommand::try_from(command).unwrap(), 1, &options)
                .unwrap();
            assert_eq!(step.state.last_cubic_ctrl, None, "after {}", command.letter);
            assert_eq!(step.state.last_quadratic_ctrl, None, "after {}", command.letter);
        }
    }

    #[test]
    fn interrupted_curve_chain_has_no_anchor() {
        let cases = [
            (
                [
                    raw('M', &[0.0, 0.0]),
                    raw('C', &[0.0, 10.0, 10.0, 10.0, 10.0, 0.0]),
                    raw('M', &[20.0, 0.0]),
                    raw('S', &[30.0, 10.0, 40.0, 0.0]),
                ],
                CurveFamily::Cubic,
            ),
            (
                [
                    raw('M', &[0.0, 0.0]),
                    raw('Q', &[5.0, 10.0, 10.0, 0.0]),
                    raw('L', &[20.0, 0.0]),
                    raw('T', &[30.0, 0.0]),
                ],
                CurveFamily::Quadratic,
            ),
            (
                [
                    raw('M', &[0.0, 0.0]),
                    raw('C', &[0.0, 10.0, 10.0, 10.0, 10.0, 0.0]),
                    raw('a', &[5.0, 5.0, 0.0, 0.0, 1.0, 10.0, 0.0]),
                    raw('s', &[10.0, 10.0, 20.0, 0.0]),
                ],
                CurveFamily::Cubic,
            ),
        ];
        for (commands, family) in cases {
            let err = flatten_raw_path(&commands, &options(1.0)).unwrap_err();
            assert_eq!(
                err,
                FlattenError::from(PathError::MissingReflectionAnchor { index: 3, family })
            );
        }
    }
}
