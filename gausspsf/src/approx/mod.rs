//! Grid evaluators built on [`fast_exp`](crate::fast_exp::fast_exp).
//!
//! Same layouts and background conventions as the exact evaluators, with the
//! Gaussian factor off by up to about 4% (the peak of the isotropic model
//! lands near `0.97·a`). Use only where that error is acceptable, e.g. early
//! fitter iterations.

use common::{Buffer2, Buffer3};

use crate::fast_exp::Approximate;
use crate::grid::{fill_astig_2d, fill_gauss_2d};
use crate::jacobian::fill_jacobian;
use crate::model::JACOBIAN_LEN;
use crate::params::{AstigParams, GaussParams};


pub fn gauss_2d(x: &[f64], y: &[f64], p: &GaussParams) -> Buffer2<f64> {
    let mut out = Buffer2::new_default(x.len(), y.len());
    fill_gauss_2d::<Approximate>(&mut out, x, y, p);
    out
}

pub fn astig_2d(x: &[f64], y: &[f64], p: &AstigParams) -> Buffer2<f64> {
    let mut out = Buffer2::new_default(x.len(), y.len());
    fill_astig_2d::<Approximate>(&mut out, x, y, p);
    out
}

pub fn jacobian(x: &[f64], y: &[f64], p: &GaussParams) -> Buffer3<f64> {
    let mut out = Buffer3::new_default(JACOBIAN_LEN, x.len(), y.len());
    fill_jacobian::<Approximate>(&mut out, x, y, None, p);
    out
}
