//! Exponential strategies for the model kernels.
//!
//! [`Exact`] is `f64::exp` and is what every default entry point uses.
//! [`Approximate`] is [`fast_exp`], a bit-pattern trick that trades accuracy
//! (relative error up to about 4%) for a handful of integer operations.
//!
//! # Algorithm
//! An IEEE 754 double with a zero low word has the value
//! `2^(hi/2^20 - 1023)` roughly, where `hi` is its high 32-bit word. Writing
//! `hi = 2^20/ln2 · y + 1023·2^20 - c` therefore yields `≈ e^y`, with the
//! mantissa bits doing linear interpolation between powers of two. The shift
//! `c` is chosen to minimise RMS relative error.


/// Scale from natural exponent to high-word units: `2^20 / ln 2`.
const EXP_A: f64 = 1_048_576.0 / std::f64::consts::LN_2;

/// High word of `1.0` (`1023 << 20`).
const ONE_HIGH_WORD: i32 = 1_072_693_248;

/// Error-balancing shift.
const EXP_C: i32 = 60_801;

/// Approximate `e^y`.
///
/// Branch-free and constant time. There is no range check: arguments whose
/// result falls outside the normal double range give an unspecified value,
/// possibly non-finite.
#[inline]
pub fn fast_exp(y: f64) -> f64 {
    let hi = (EXP_A * y + f64::from(ONE_HIGH_WORD - EXP_C)) as i32;
    f64::from_bits(u64::from(hi as u32) << 32)
}

/// The exponential used by a kernel, selected at compile time.
pub trait Exponential {
    fn exp(y: f64) -> f64;
}

/// Accurate exponential.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exact;

/// Low-precision [`fast_exp`]. Opt-in only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Approximate;

impl Exponential for Exact {
    #[inline(always)]
    fn exp(y: f64) -> f64 {
        y.exp()
    }
}

impl Exponential for Approximate {
    #[inline(always)]
    fn exp(y: f64) -> f64 {
        fast_exp(y)
    }
}
