//! Errors returned by the fallible operations of this crate.
//!
//! Only shape-checked containers and the integer helpers in [`algorithm`](crate::algorithm) can
//! fail. The simplifier is total and never returns an error.

use rug::Integer;
use std::{error, fmt::{self, Display, Formatter}};

/// Error returned if two containers do not have compatible dimensions.
///
/// This happens when adding two [`Vector`](crate::Vector)s of different dimension, or when
/// building a [`Matrix`](crate::Matrix) from columns of different height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionMismatch {
    /// The dimension that was required.
    pub expected: usize,

    /// The dimension that was given.
    pub found: usize,
}

impl Display for DimensionMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f,
            "incompatible dimensions: expected {}, found {}",
            self.expected, self.found
        )
    }
}

impl error::Error for DimensionMismatch {}

/// Error returned if an integer helper is given a value outside of its domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgument {
    /// The rejected value.
    pub value: Integer,

    /// What the value was required to be.
    pub requirement: Requirement,
}

/// The condition an [`InvalidArgument`] failed to meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// The value must be strictly positive.
    Positive,

    /// The value must be larger than 1.
    GreaterThanOne,
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.requirement {
            Requirement::Positive => write!(f, "`{}` is not positive", self.value),
            Requirement::GreaterThanOne => write!(f, "`{}` must be larger than 1", self.value),
        }
    }
}

impl error::Error for InvalidArgument {}

/// Utility enum to package any error that can occur in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Containers with incompatible dimensions.
    Dimension(DimensionMismatch),

    /// An integer outside of the domain of an operation.
    Argument(InvalidArgument),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimension(err) => write!(f, "{}", err),
            Self::Argument(err) => write!(f, "{}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Dimension(err) => Some(err),
            Self::Argument(err) => Some(err),
        }
    }
}

impl From<DimensionMismatch> for Error {
    fn from(error: DimensionMismatch) -> Self {
        Self::Dimension(error)
    }
}

impl From<InvalidArgument> for Error {
    fn from(error: InvalidArgument) -> Self {
        Self::Argument(error)
    }
}
