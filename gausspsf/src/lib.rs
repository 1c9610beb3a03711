//! Gaussian point-spread-function models for emitter localisation.
//!
//! Evaluates isotropic, astigmatic and 3D Gaussian PSF models, the Jacobian of
//! the isotropic model and a fused dual-channel weighted residual over
//! rectangular coordinate grids. All grids are column-major (first axis
//! fastest) and every output cell depends only on its own coordinates, the
//! parameters and its weight.

pub mod error;
pub mod fast_exp;
pub mod grid;
pub mod jacobian;
pub mod model;
pub mod params;
pub mod split;

#[cfg(feature = "fast-exp")]
pub mod approx;

mod validate;

#[cfg(test)]
mod test_utils;

pub use common::{Buffer2, Buffer3};
pub use error::{Arg, Error, Result};
pub use fast_exp::{fast_exp, Approximate, Exact, Exponential};
pub use grid::{astig_2d, astig_2d_into, gauss_2d, gauss_2d_into, gauss_3d};
pub use jacobian::{jacobian, jacobian_weighted};
pub use model::{JACOBIAN_LEN, TDNORM};
pub use params::{AstigParams, Gauss3dParams, GaussParams, ParamVector, SplitParams};
pub use split::{split_gauss_into, split_gauss_pvec, split_weighted_misfit};
