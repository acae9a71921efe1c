//! The [`Op`] operation tag.

use std::fmt;
use std::str::FromStr;

use myriad_core::ComputeError;

/// The operation requested for one compute call.
///
/// Parses from the wire tags `add`, `sub`, `mul`, `div` and `mod`;
/// anything else is [`ComputeError::UnknownOperation`], which is an
/// input-contract violation rather than a data error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// Addition. Result is always non-negative.
    Add,
    /// Subtraction. The only operation that can produce a negative
    /// result.
    Sub,
    /// Multiplication. Result is always non-negative.
    Mul,
    /// Truncating integer division. Fails on a zero divisor.
    Div,
    /// Remainder of truncating division. Fails on a zero divisor.
    Mod,
}

impl Op {
    /// The wire tag for this operation.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Mod => "mod",
        }
    }
}

impl FromStr for Op {
    type Err = ComputeError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "add" => Ok(Self::Add),
            "sub" => Ok(Self::Sub),
            "mul" => Ok(Self::Mul),
            "div" => Ok(Self::Div),
            "mod" => Ok(Self::Mod),
            other => Err(ComputeError::UnknownOperation {
                tag: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
