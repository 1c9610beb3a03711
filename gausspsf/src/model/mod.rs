//! Closed-form Gaussian kernels evaluated at a single coordinate.
//!
//! Each kernel splits into per-call constants (`*Kernel`) and per-column
//! constants (`*Column`, everything that depends only on the slow axes). The
//! grid evaluators walk the same two stages, so a grid cell and a scalar call
//! at the same coordinates produce bit-identical values.

use crate::fast_exp::{Exact, Exponential};
use crate::params::{AstigParams, Gauss3dParams, GaussParams};


/// Normalisation of the 3D model, chosen so that `a` approximates the
/// integrated photon count.
pub const TDNORM: f64 = 15.75;

/// Number of components in a Jacobian row.
pub const JACOBIAN_LEN: usize = 7;

// ============================================================================
// Isotropic 2D
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub(crate) struct GaussKernel {
    a: f64,
    x0: f64,
    y0: f64,
    /// 2σ²
    ts2: f64,
    b: f64,
    b_x: f64,
    b_y: f64,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct GaussColumn {
    kernel: GaussKernel,
    dy2: f64,
    bg_y: f64,
}

impl GaussKernel {
    pub(crate) fn new(p: &GaussParams) -> Self {
        Self {
            a: p.a,
            x0: p.x0,
            y0: p.y0,
            ts2: 2.0 * p.sigma * p.sigma,
            b: p.b,
            b_x: p.b_x,
            b_y: p.b_y,
        }
    }

    #[inline]
    pub(crate) fn column(&self, y: f64) -> GaussColumn {
        let dy = y - self.y0;
        GaussColumn {
            kernel: *self,
            dy2: dy * dy,
            bg_y: self.b_y * dy + self.b,
        }
    }
}

impl GaussColumn {
    #[inline(always)]
    pub(crate) fn value<E: Exponential>(&self, x: f64) -> f64 {
        let k = &self.kernel;
        let dx = x - k.x0;
        k.a * E::exp(-(dx * dx + self.dy2) / k.ts2) + k.b_x * dx + self.bg_y
    }
}

// ============================================================================
// Astigmatic 2D
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub(crate) struct AstigKernel {
    a: f64,
    x0: f64,
    y0: f64,
    tsx2: f64,
    tsy2: f64,
    b: f64,
    b_x: f64,
    b_y: f64,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct AstigColumn {
    kernel: AstigKernel,
    /// (y - y0)² / 2σy²
    ey: f64,
    bg_y: f64,
}

impl AstigKernel {
    pub(crate) fn new(p: &AstigParams) -> Self {
        Self {
            a: p.a,
            x0: p.x0,
            y0: p.y0,
            tsx2: 2.0 * p.sigma_x * p.sigma_x,
            tsy2: 2.0 * p.sigma_y * p.sigma_y,
            b: p.b,
            b_x: p.b_x,
            b_y: p.b_y,
        }
    }

    #[inline]
    pub(crate) fn column(&self, y: f64) -> AstigColumn {
        let dy = y - self.y0;
        AstigColumn {
            kernel: *self,
            ey: dy * dy / self.tsy2,
            // raw coordinate, not offset by y0
            bg_y: self.b_y * y + self.b,
        }
    }
}

impl AstigColumn {
    #[inline(always)]
    pub(crate) fn value<E: Exponential>(&self, x: f64) -> f64 {
        let k = &self.kernel;
        let dx = x - k.x0;
        k.a * E::exp(-(dx * dx / k.tsx2 + self.ey)) + k.b_x * x + self.bg_y
    }
}

// ============================================================================
// 3D
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub(crate) struct Gauss3dKernel {
    /// a / (σ²·σz·TDNORM)
    amp: f64,
    x0: f64,
    y0: f64,
    z0: f64,
    ts2: f64,
    tsz2: f64,
    b: f64,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Gauss3dColumn {
    kernel: Gauss3dKernel,
    dy2: f64,
    ez: f64,
}

impl Gauss3dKernel {
    pub(crate) fn new(p: &Gauss3dParams) -> Self {
        Self {
            amp: p.a / (p.sigma * p.sigma * p.sigma_z * TDNORM),
            x0: p.x0,
            y0: p.y0,
            z0: p.z0,
            ts2: 2.0 * p.sigma * p.sigma,
            tsz2: 2.0 * p.sigma_z * p.sigma_z,
            b: p.b,
        }
    }

    #[inline]
    pub(crate) fn column(&self, y: f64, z: f64) -> Gauss3dColumn {
        let dy = y - self.y0;
        let dz = z - self.z0;
        Gauss3dColumn {
            kernel: *self,
            dy2: dy * dy,
            ez: dz * dz / self.tsz2,
        }
    }
}

impl Gauss3dColumn {
    #[inline(always)]
    pub(crate) fn value<E: Exponential>(&self, x: f64) -> f64 {
        let k = &self.kernel;
        let dx = x - k.x0;
        k.amp * E::exp(-(dx * dx + self.dy2) / k.ts2 - self.ez) + k.b
    }
}

// ============================================================================
// Jacobian of the isotropic model
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub(crate) struct JacobianKernel {
    x0: f64,
    y0: f64,
    sigma: f64,
    /// 1 / 2σ²
    inv_ts2: f64,
    /// a / σ²
    a_s2: f64,
}

impl JacobianKernel {
    pub(crate) fn new(p: &GaussParams) -> Self {
        Self {
            x0: p.x0,
            y0: p.y0,
            sigma: p.sigma,
            inv_ts2: 1.0 / (2.0 * p.sigma * p.sigma),
            a_s2: p.a / (p.sigma * p.sigma),
        }
    }

    /// Writes `[∂A, ∂x0, ∂y0, ∂σ, ∂b, ∂b_x, ∂b_y]` at `(x, y)`, each scaled by `w`.
    ///
    /// The first four entries are the exact partials of the Gaussian term
    /// `a·exp(-r²/2σ²)`, including the `a/σ²` factor on `∂x0`, `∂y0` and `∂σ`.
    /// They are not the full model partials: the centred background contributes
    /// `-b_x` to `∂x0` and `-b_y` to `∂y0`, and both are left out, so a fitter
    /// sees the slopes as independent of the centre. The background partials
    /// are the raw `1, x, y`. An unweighted row is `w = 1`.
    #[inline(always)]
    pub(crate) fn row_into<E: Exponential>(&self, x: f64, y: f64, w: f64, out: &mut [f64]) {
        let dx = x - self.x0;
        let dy = y - self.y0;
        let r2 = dx * dx + dy * dy;
        let g = w * E::exp(-r2 * self.inv_ts2);
        let ga = g * self.a_s2;
        out[0] = g;
        out[1] = dx * ga;
        out[2] = dy * ga;
        out[3] = r2 * ga / self.sigma;
        out[4] = w;
        out[5] = w * x;
        out[6] = w * y;
    }
}

// ============================================================================
// Scalar API
// ============================================================================

impl GaussParams {
    /// Model value at `(x, y)`.
    pub fn value(&self, x: f64, y: f64) -> f64 {
        self.value_with::<Exact>(x, y)
    }

    pub fn value_with<E: Exponential>(&self, x: f64, y: f64) -> f64 {
        GaussKernel::new(self).column(y).value::<E>(x)
    }

    /// Jacobian row at `(x, y)`.
    pub fn jacobian_at(&self, x: f64, y: f64) -> [f64; JACOBIAN_LEN] {
        self.jacobian_at_weighted(x, y, 1.0)
    }

    /// Jacobian row at `(x, y)`, every component multiplied by `w`.
    pub fn jacobian_at_weighted(&self, x: f64, y: f64, w: f64) -> [f64; JACOBIAN_LEN] {
        let mut row = [0.0; JACOBIAN_LEN];
        JacobianKernel::new(self).row_into::<Exact>(x, y, w, &mut row);
        row
    }
}

impl AstigParams {
    pub fn value(&self, x: f64, y: f64) -> f64 {
        self.value_with::<Exact>(x, y)
    }

    pub fn value_with<E: Exponential>(&self, x: f64, y: f64) -> f64 {
        AstigKernel::new(self).column(y).value::<E>(x)
    }
}

impl Gauss3dParams {
    pub fn value(&self, x: f64, y: f64, z: f64) -> f64 {
        self.value_with::<Exact>(x, y, z)
    }

    pub fn value_with<E: Exponential>(&self, x: f64, y: f64, z: f64) -> f64 {
        Gauss3dKernel::new(self).column(y, z).value::<E>(x)
    }
}
