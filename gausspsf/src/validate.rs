//! Boundary checks run before any numeric work.

use crate::error::{Arg, Error, Result};

pub(crate) fn check_shape(expected: &[usize], found: &[usize]) -> Result<()> {
    if expected == found {
        return Ok(());
    }
    log::debug!("rejecting output buffer: expected shape {expected:?}, found {found:?}");
    Err(Error::Layout {
        expected: expected.to_vec(),
        found: found.to_vec(),
    })
}

pub(crate) fn check_len(arg: Arg, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        return Ok(());
    }
    log::debug!("rejecting {arg}: expected {expected} elements, found {found}");
    Err(Error::SizeMismatch {
        arg,
        expected,
        found,
    })
}

pub(crate) fn check_param_count(max: usize, found: usize) -> Result<()> {
    if found <= max {
        return Ok(());
    }
    log::debug!("rejecting parameter vector of length {found}, at most {max} accepted");
    Err(Error::InvalidInput {
        arg: Arg::Params,
        reason: format!("expected at most {max} values, found {found}"),
    })
}

/// Two-channel calls share one logical grid shape.
pub(crate) fn check_second_channel(x: &[f64], y: &[f64], x2: &[f64], y2: &[f64]) -> Result<()> {
    check_len(Arg::X2, x.len(), x2.len())?;
    check_len(Arg::Y2, y.len(), y2.len())
}
