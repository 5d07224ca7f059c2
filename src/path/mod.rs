mod command;
mod interpreter;

pub use command::{PathCommand, RawCommand, Segment};
pub use interpreter::{
    flatten_raw_path, flatten_svg_path, polylines, CurveFamily, FlattenPath, PathState, Step,
};
