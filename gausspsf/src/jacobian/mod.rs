//! Jacobian of the isotropic 2D model over a grid.
//!
//! The result has shape `(7, len(x), len(y))`, component axis fastest, so the
//! seven partials of one pixel are contiguous. Component order is
//! `[∂A, ∂x0, ∂y0, ∂σ, ∂b, ∂b_x, ∂b_y]`.

use common::parallel::for_each_column;
use common::Buffer3;

use crate::error::{Arg, Result};
use crate::fast_exp::{Exact, Exponential};
use crate::model::{JacobianKernel, JACOBIAN_LEN};
use crate::params::GaussParams;
use crate::validate::check_len;


pub fn jacobian(x: &[f64], y: &[f64], p: &GaussParams) -> Buffer3<f64> {
    let mut out = Buffer3::new_default(JACOBIAN_LEN, x.len(), y.len());
    fill_jacobian::<Exact>(&mut out, x, y, None, p);
    out
}

/// Jacobian with every component of pixel `(ix, iy)` multiplied by
/// `weights[ix + len(x) * iy]`.
///
/// `weights` must hold exactly `len(x) * len(y)` values.
pub fn jacobian_weighted(
    x: &[f64],
    y: &[f64],
    weights: &[f64],
    p: &GaussParams,
) -> Result<Buffer3<f64>> {
    check_len(Arg::Weights, x.len() * y.len(), weights.len())?;
    let mut out = Buffer3::new_default(JACOBIAN_LEN, x.len(), y.len());
    fill_jacobian::<Exact>(&mut out, x, y, Some(weights), p);
    Ok(out)
}

pub(crate) fn fill_jacobian<E: Exponential>(
    out: &mut [f64],
    x: &[f64],
    y: &[f64],
    weights: Option<&[f64]>,
    p: &GaussParams,
) {
    debug_assert_eq!(out.len(), JACOBIAN_LEN * x.len() * y.len());
    let kernel = JacobianKernel::new(p);
    let nx = x.len();
    for_each_column(out, JACOBIAN_LEN * nx, |iy, column| {
        let yv = y[iy];
        let column_weights = weights.map(|w| &w[iy * nx..(iy + 1) * nx]);
        for (ix, row) in column.chunks_exact_mut(JACOBIAN_LEN).enumerate() {
            let w = column_weights.map_or(1.0, |w| w[ix]);
            kernel.row_into::<E>(x[ix], yv, w, row);
        }
    });
}
