//! Named parameter records and their flat-vector encoding.
//!
//! A flat vector assigns values to fields in canonical order; a shorter vector
//! leaves the trailing fields at their defaults (amplitudes and widths 1,
//! everything else 0). A longer vector is rejected.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validate::check_param_count;


/// A parameter record with a fixed canonical field order.
pub trait ParamVector: Sized + Default {
    /// Field names in canonical order.
    const NAMES: &'static [&'static str];
    const LEN: usize;

    /// Fills fields from a positional prefix, defaulting the rest.
    fn from_slice(values: &[f64]) -> Result<Self>;

    /// Encodes every field in canonical order.
    fn to_vec(&self) -> Vec<f64>;
}

macro_rules! param_vector {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* $field:ident = $default:expr ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: f64, )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self { $( $field: $default, )* }
            }
        }

        impl ParamVector for $name {
            const NAMES: &'static [&'static str] = &[$(stringify!($field)),*];
            const LEN: usize = Self::NAMES.len();

            fn from_slice(values: &[f64]) -> Result<Self> {
                check_param_count(Self::LEN, values.len())?;
                let mut params = Self::default();
                let mut values = values.iter().copied();
                $(
                    if let Some(v) = values.next() {
                        params.$field = v;
                    }
                )*
                Ok(params)
            }

            fn to_vec(&self) -> Vec<f64> {
                vec![$(self.$field),*]
            }
        }
    };
}

param_vector! {
    /// Isotropic 2D Gaussian with a planar background centred on the peak.
    pub struct GaussParams {
        /// Peak amplitude.
        a = 1.0,
        x0 = 0.0,
        y0 = 0.0,
        sigma = 1.0,
        /// Constant background.
        b = 0.0,
        /// Background slope along x.
        b_x = 0.0,
        /// Background slope along y.
        b_y = 0.0,
    }
}

param_vector! {
    /// Astigmatic 2D Gaussian. Its background slopes act on raw coordinates,
    /// not on offsets from the centre.
    pub struct AstigParams {
        a = 1.0,
        x0 = 0.0,
        y0 = 0.0,
        sigma_x = 1.0,
        sigma_y = 1.0,
        b = 0.0,
        b_x = 0.0,
        b_y = 0.0,
    }
}

param_vector! {
    /// Normalised 3D Gaussian with a constant background. `a` approximates the
    /// integrated photon count.
    pub struct Gauss3dParams {
        a = 1.0,
        x0 = 0.0,
        y0 = 0.0,
        z0 = 0.0,
        sigma = 1.0,
        sigma_z = 1.0,
        b = 0.0,
    }
}

param_vector! {
    /// One emitter seen through two channels. Position, width and background
    /// slopes are shared; each channel has its own amplitude and background.
    pub struct SplitParams {
        a = 1.0,
        a2 = 1.0,
        x0 = 0.0,
        y0 = 0.0,
        sigma = 1.0,
        b = 0.0,
        b1 = 0.0,
        b_x = 0.0,
        b_y = 0.0,
    }
}

impl SplitParams {
    /// Per-channel isotropic parameters: `(a, b)` for the first channel and
    /// `(a2, b1)` for the second.
    pub fn channels(&self) -> [GaussParams; 2] {
        let shared = GaussParams {
            x0: self.x0,
            y0: self.y0,
            sigma: self.sigma,
            b_x: self.b_x,
            b_y: self.b_y,
            ..GaussParams::default()
        };
        [
            GaussParams {
                a: self.a,
                b: self.b,
                ..shared
            },
            GaussParams {
                a: self.a2,
                b: self.b1,
                ..shared
            },
        ]
    }
}
