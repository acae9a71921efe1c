//! Error types for the Myriad decimal word engine.
//!
//! Organized by subsystem: arena capacity, text codec, and the compute
//! dispatcher. Every error is detected synchronously during a single
//! compute request and surfaced to the immediate caller; nothing is
//! retried internally (retrying a malformed operand or a zero divisor
//! cannot succeed without new input).

use std::error::Error;
use std::fmt;

/// The arena cannot satisfy an allocation.
///
/// Raised when a decoded operand or a computed result would exceed the
/// arena's fixed word capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityError {
    /// Number of words requested.
    pub requested: usize,
    /// Number of words still available in the arena.
    pub available: usize,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arena capacity exceeded: requested {} words, {} available",
            self.requested, self.available
        )
    }
}

impl Error for CapacityError {}

/// Errors from decoding operand text into word spans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// The operand text contains a character outside `0-9`.
    InvalidFormat {
        /// Byte offset of the offending character within the operand.
        position: usize,
    },
    /// The decoded operand does not fit in the arena.
    Capacity(CapacityError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { position } => {
                write!(f, "invalid number format: non-digit at byte {position}")
            }
            Self::Capacity(inner) => write!(f, "number is too big: {inner}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Capacity(inner) => Some(inner),
            Self::InvalidFormat { .. } => None,
        }
    }
}

impl From<CapacityError> for CodecError {
    fn from(e: CapacityError) -> Self {
        Self::Capacity(e)
    }
}

/// Errors from a top-level compute request.
///
/// All variants abort the request with no partial result. The arena
/// backing the failed request is discarded, so independent requests are
/// unaffected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComputeError {
    /// An operand failed to decode.
    InvalidOperand(CodecError),
    /// An operand or result would exceed the arena capacity.
    Capacity(CapacityError),
    /// The divisor of a divide/modulo request decodes to zero.
    DivisionByZero,
    /// The operation tag is not in the recognized set.
    ///
    /// This is an input-contract violation rather than a data error.
    UnknownOperation {
        /// The unrecognized tag, as received.
        tag: String,
    },
}

impl fmt::Display for ComputeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOperand(inner) => write!(f, "invalid operand: {inner}"),
            Self::Capacity(inner) => write!(f, "{inner}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::UnknownOperation { tag } => write!(f, "unknown operation: {tag:?}"),
        }
    }
}

impl Error for ComputeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidOperand(inner) => Some(inner),
            Self::Capacity(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<CapacityError> for ComputeError {
    fn from(e: CapacityError) -> Self {
        Self::Capacity(e)
    }
}

impl From<CodecError> for ComputeError {
    fn from(e: CodecError) -> Self {
        // Capacity failures keep their identity regardless of whether the
        // allocation was for an operand or a result.
        match e {
            CodecError::Capacity(inner) => Self::Capacity(inner),
            other => Self::InvalidOperand(other),
        }
    }
}
