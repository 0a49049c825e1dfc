//! Error types.
//!
//! - [`SequenceError`]: invalid arguments to the sequence operations, surfaced to the caller.
//! - [`RecordError`]: a malformed employee record. Loading logs it and skips the line.
//! - [`SelectionError`]: a menu or registry choice out of range. The menu reports it and
//!   carries on with the next iteration.
//! - [`TimingError`]: the timed invocation did not complete.

/// Invalid argument to a sequence operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// The sequence has no elements
    #[error("sequence cannot be empty")]
    Empty,

    /// An index outside `0..len`
    #[error("index {index} is out of bounds for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Requested size is not positive
    #[error("size must be greater than 0, got {0}")]
    InvalidSize(usize),

    /// `10 * len` does not fit the element type
    #[error("a sequence of length {0} is too large to randomize")]
    TooLarge(usize),
}

/// Malformed employee record line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("invalid line format, expected `name | department | years`: {line}")]
    TooFewFields { line: String },

    #[error("invalid years of experience `{value}` in line: {line}")]
    InvalidYears { line: String, value: String },
}

/// Invalid menu or registry selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// 1-based choice outside `1..=len`
    #[error("invalid choice {choice}, expected a number between 1 and {len}")]
    OutOfRange { choice: usize, len: usize },

    #[error("invalid choice `{0}`, expected a number")]
    NotANumber(String),

    /// Sequence size that is not a non-negative number
    #[error("invalid array size `{0}`, expected a number greater than 0")]
    InvalidSize(String),

    #[error("no strategy named `{0}`")]
    UnknownName(String),
}

/// Failure of a timed invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimingError {
    #[error("{name} panicked before completing")]
    WorkerPanicked { name: String },
}

/// Top-level error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Timing(#[from] TimingError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// `true` for errors that only abort the current menu iteration.
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Sequence(_) | Error::Record(_) | Error::Selection(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
