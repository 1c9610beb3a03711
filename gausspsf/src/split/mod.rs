//! Dual-channel model and fused weighted residual.
//!
//! Both channels share one logical grid shape `(Nx, Ny)`. The output buffer
//! stacks the channels along the row axis: shape `(len(x) + len(x2), Ny)`.
//! Its storage holds the first channel's `Nx·Ny` block followed by the
//! second's, each column-major, so `(x, y)` indexing does not address a
//! channel cell. Data and weight arrays are aligned to the same linear order.

use common::parallel::for_each_column;
use common::Buffer2;

use crate::error::{Arg, Result};
use crate::fast_exp::Exact;
use crate::grid::fill_gauss_2d;
use crate::model::GaussKernel;
use crate::params::{GaussParams, ParamVector, SplitParams};
use crate::validate::{check_len, check_second_channel, check_shape};

#[cfg(test)]
mod tests;

/// Writes both channels into `out`, which must have shape
/// `(len(x) + len(x2), len(y))`.
///
/// `x2`/`y2` must have the same lengths as `x`/`y`.
pub fn split_gauss_into(
    out: &mut Buffer2<f64>,
    x: &[f64],
    y: &[f64],
    x2: &[f64],
    y2: &[f64],
    p: &SplitParams,
) -> Result<()> {
    check_second_channel(x, y, x2, y2)?;
    check_output(out, x, y, x2)?;

    let [first, second] = p.channels();
    let (block1, block2) = out.split_at_mut(x.len() * y.len());
    fill_gauss_2d::<Exact>(block1, x, y, &first);
    fill_gauss_2d::<Exact>(block2, x2, y2, &second);
    Ok(())
}

/// [`split_gauss_into`] driven by a flat `[a, a2, x0, y0, sigma, b, b1, b_x, b_y]`
/// prefix. Hands the same buffer back.
pub fn split_gauss_pvec<'a>(
    p: &[f64],
    x: &[f64],
    y: &[f64],
    x2: &[f64],
    y2: &[f64],
    out: &'a mut Buffer2<f64>,
) -> Result<&'a mut Buffer2<f64>> {
    let params = SplitParams::from_slice(p)?;
    split_gauss_into(out, x, y, x2, y2, &params)?;
    Ok(out)
}

/// Weighted residual `weights · (data − model)` of the dual-channel model,
/// written into `out` without materialising the model.
///
/// `p` is a flat `SplitParams` prefix. `data` and `weights` must each hold
/// `2·len(x)·len(y)` values and `out` has the composer's shape. Every check
/// runs before `out` is touched.
#[allow(clippy::too_many_arguments)]
pub fn split_weighted_misfit<'a>(
    p: &[f64],
    data: &[f64],
    weights: &[f64],
    x: &[f64],
    y: &[f64],
    x2: &[f64],
    y2: &[f64],
    out: &'a mut Buffer2<f64>,
) -> Result<&'a mut Buffer2<f64>> {
    let params = SplitParams::from_slice(p)?;
    check_second_channel(x, y, x2, y2)?;
    let n = x.len() * y.len();
    check_len(Arg::Data, 2 * n, data.len())?;
    check_len(Arg::Weights, 2 * n, weights.len())?;
    check_output(out, x, y, x2)?;

    let [first, second] = params.channels();
    let (out1, out2) = out.split_at_mut(n);
    fill_misfit(out1, &data[..n], &weights[..n], x, y, &first);
    fill_misfit(out2, &data[n..], &weights[n..], x2, y2, &second);
    Ok(out)
}

/// Rows of both channels stacked, shared column count.
fn check_output(out: &Buffer2<f64>, x: &[f64], y: &[f64], x2: &[f64]) -> Result<()> {
    check_shape(&[x.len() + x2.len(), y.len()], &out.shape())
}

fn fill_misfit(out: &mut [f64], data: &[f64], weights: &[f64], x: &[f64], y: &[f64], p: &GaussParams) {
    let kernel = GaussKernel::new(p);
    let nx = x.len();
    for_each_column(out, nx, |iy, column| {
        let col = kernel.column(y[iy]);
        let start = iy * nx;
        let data = &data[start..start + nx];
        let weights = &weights[start..start + nx];
        for (ix, v) in column.iter_mut().enumerate() {
            *v = weights[ix] * (data[ix] - col.value::<Exact>(x[ix]));
        }
    });
}
