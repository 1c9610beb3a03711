//! Model evaluation over the outer product of coordinate axes.
//!
//! Output is column-major: X varies fastest, then Y, then Z. An empty axis
//! gives an empty output along that axis.

use common::parallel::for_each_column;
use common::{Buffer2, Buffer3};

use crate::error::Result;
use crate::fast_exp::{Exact, Exponential};
use crate::model::{AstigKernel, Gauss3dKernel, GaussKernel};
use crate::params::{AstigParams, Gauss3dParams, GaussParams};
use crate::validate::check_shape;


/// Isotropic 2D model on the `(len(x), len(y))` grid.
pub fn gauss_2d(x: &[f64], y: &[f64], p: &GaussParams) -> Buffer2<f64> {
    let mut out = Buffer2::new_default(x.len(), y.len());
    fill_gauss_2d::<Exact>(&mut out, x, y, p);
    out
}

/// Isotropic 2D model written into a caller buffer of shape `(len(x), len(y))`.
///
/// A buffer of any other shape is rejected and left untouched.
pub fn gauss_2d_into(out: &mut Buffer2<f64>, x: &[f64], y: &[f64], p: &GaussParams) -> Result<()> {
    check_shape(&[x.len(), y.len()], &out.shape())?;
    fill_gauss_2d::<Exact>(out, x, y, p);
    Ok(())
}

/// Astigmatic 2D model on the `(len(x), len(y))` grid.
pub fn astig_2d(x: &[f64], y: &[f64], p: &AstigParams) -> Buffer2<f64> {
    let mut out = Buffer2::new_default(x.len(), y.len());
    fill_astig_2d::<Exact>(&mut out, x, y, p);
    out
}

pub fn astig_2d_into(out: &mut Buffer2<f64>, x: &[f64], y: &[f64], p: &AstigParams) -> Result<()> {
    check_shape(&[x.len(), y.len()], &out.shape())?;
    fill_astig_2d::<Exact>(out, x, y, p);
    Ok(())
}

/// Normalised 3D model on the `(len(x), len(y), len(z))` grid.
pub fn gauss_3d(x: &[f64], y: &[f64], z: &[f64], p: &Gauss3dParams) -> Buffer3<f64> {
    let mut out = Buffer3::new_default(x.len(), y.len(), z.len());
    fill_gauss_3d::<Exact>(&mut out, x, y, z, p);
    out
}

// Fill passes. `out` must already hold `len(x) * len(y) [* len(z)]` elements.

pub(crate) fn fill_gauss_2d<E: Exponential>(out: &mut [f64], x: &[f64], y: &[f64], p: &GaussParams) {
    debug_assert_eq!(out.len(), x.len() * y.len());
    let kernel = GaussKernel::new(p);
    for_each_column(out, x.len(), |iy, column| {
        let col = kernel.column(y[iy]);
        for (v, &xi) in column.iter_mut().zip(x) {
            *v = col.value::<E>(xi);
        }
    });
}

pub(crate) fn fill_astig_2d<E: Exponential>(out: &mut [f64], x: &[f64], y: &[f64], p: &AstigParams) {
    debug_assert_eq!(out.len(), x.len() * y.len());
    let kernel = AstigKernel::new(p);
    for_each_column(out, x.len(), |iy, column| {
        let col = kernel.column(y[iy]);
        for (v, &xi) in column.iter_mut().zip(x) {
            *v = col.value::<E>(xi);
        }
    });
}

pub(crate) fn fill_gauss_3d<E: Exponential>(
    out: &mut [f64],
    x: &[f64],
    y: &[f64],
    z: &[f64],
    p: &Gauss3dParams,
) {
    debug_assert_eq!(out.len(), x.len() * y.len() * z.len());
    let kernel = Gauss3dKernel::new(p);
    let ny = y.len();
    // column c covers (y[c % ny], z[c / ny])
    for_each_column(out, x.len(), |c, column| {
        let col = kernel.column(y[c % ny], z[c / ny]);
        for (v, &xi) in column.iter_mut().zip(x) {
            *v = col.value::<E>(xi);
        }
    });
}
