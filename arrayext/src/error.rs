use strum_macros::{Display, EnumMessage, IntoStaticStr};
use thiserror::Error;

/// The operation that raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumMessage, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Op {
    /// Fill a range given by start and end index.
    #[strum(message = "fill from a start index up to an end index")]
    Fill,
    /// Fill a range given by Rust range bounds.
    #[strum(message = "fill a range")]
    FillRange,
}

/// Arrayext error.
///
/// Absence of a value (`find`, `index_of` and friends) is never an error;
/// it is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// Range out of bounds.
    ///
    /// The range `start..end` either runs backwards (`start > end`) or
    /// extends past the end of the sequence (`end > len`). Nothing was
    /// written.
    #[error("{op}: range {start}..{end} is out of bounds for length {len}")]
    OutOfRange {
        op: Op,
        start: usize,
        end: usize,
        len: usize,
    },
}

impl Error {
    /// The operation that raised this error.
    pub fn op(&self) -> Op {
        match self {
            Error::OutOfRange { op, .. } => *op,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
