use thiserror::Error;

use crate::path::CurveFamily;

/// Top-level error type for path flattening.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlattenError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Params(#[from] ParamsError),
}

impl FlattenError {
    /// Returns the tag identifying what went wrong.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Path(e) => e.kind(),
            Self::Params(e) => e.kind(),
        }
    }
}

/// Errors raised while interpreting a command sequence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("no commands provided")]
    NoCommands,

    #[error("\"moveTo\" should be the first command")]
    NoInitialMove,

    #[error("unknown command '{0}'")]
    UnknownCommand(char),

    #[error("command '{letter}' expects {expected} values, got {found}")]
    InvalidArity {
        letter: char,
        expected: usize,
        found: usize,
    },

    #[error("shorthand {family} command at index {index} has no preceding {family} command to reflect")]
    MissingReflectionAnchor { index: usize, family: CurveFamily },
}

impl PathError {
    /// Returns the tag identifying what went wrong.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoCommands => ErrorKind::NoCommands,
            Self::NoInitialMove => ErrorKind::NoInitialMove,
            Self::UnknownCommand(_) => ErrorKind::UnknownCommand,
            Self::InvalidArity { .. } => ErrorKind::InvalidArity,
            Self::MissingReflectionAnchor { .. } => ErrorKind::MissingReflectionAnchor,
        }
    }
}

/// Errors related to flattening options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("max step size must be positive and finite, got {0}")]
    InvalidStepSize(f64),
}

impl ParamsError {
    /// Returns the tag identifying what went wrong.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidStepSize(_) => ErrorKind::InvalidStepSize,
        }
    }
}

/// Fieldless error tag, stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoCommands,
    NoInitialMove,
    UnknownCommand,
    InvalidArity,
    MissingReflectionAnchor,
    InvalidStepSize,
}

impl ErrorKind {
    /// Returns the tag as an upper snake case identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoCommands => "NO_COMMANDS",
            Self::NoInitialMove => "NO_FIRST_MOVE_TO",
            Self::UnknownCommand => "UNKNOWN_COMMAND",
            Self::InvalidArity => "INVALID_ARITY",
            Self::MissingReflectionAnchor => "MISSING_REFLECTION_ANCHOR",
            Self::InvalidStepSize => "INVALID_STEP_SIZE",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convenience type alias for results using [`FlattenError`].
pub type Result<T> = std::result::Result<T, FlattenError>;
