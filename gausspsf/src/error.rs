use strum_macros::Display;
use thiserror::Error;

/// Caller-facing argument named in a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Arg {
    X,
    Y,
    Z,
    X2,
    Y2,
    #[strum(serialize = "parameters")]
    Params,
    #[strum(serialize = "data")]
    Data,
    #[strum(serialize = "weights")]
    Weights,
    #[strum(serialize = "output")]
    Output,
}

/// Precondition failures. All of them are detected before any output element
/// is written; degenerate parameters are never an error and propagate as
/// non-finite values instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("bad {arg}: {reason}")]
    InvalidInput { arg: Arg, reason: String },

    #[error("bad output array: expected shape {expected:?}, found {found:?}")]
    Layout {
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("bad {arg} array: expected {expected} elements, found {found}")]
    SizeMismatch {
        arg: Arg,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
