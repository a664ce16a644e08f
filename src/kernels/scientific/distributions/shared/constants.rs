// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Mathematical Constants Module** - *Fixed Coefficients for Statistical Computing*
//!
//! Process-wide immutable constants shared by the special-function core and the
//! distribution adapters. Tables are evaluated at compile time and never mutated.

// ******** Constants ***********************************************/
/// The square root of 2: √2 ≈ 1.414213562373095.
pub(crate) const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// The square root of 2π: √(2π) ≈ 2.506628274631000.
///
/// Normalisation constant of the standard normal density.
pub(crate) const SQRT_2PI: f64 = 2.5066282746310002_f64;

/// Half of the natural logarithm of 2π: ½ln(2π) ≈ 0.918938533204673.
///
/// Appears in the Lanczos and Stirling forms of ln Γ and in every log-space density
/// normalisation derived from them.
pub const HALF_LOG_TWO_PI: f64 = 0.918_938_533_204_672_741_780_329_736_406;

/// Natural logarithm of π: ln(π) ≈ 1.144729885849400.
pub const LN_PI: f64 = 1.1447298858494002;

/// Reciprocal of π: 1/π ≈ 0.318309886183791.
pub const INV_PI: f64 = std::f64::consts::FRAC_1_PI;

/// ln Γ(½) = ½ln(π).
#[cfg(test)]
pub(crate) const LN_GAMMA_HALF: f64 = 0.572_364_942_924_700_087_071_713_675_677;

/// 2/√π, the leading factor of the error-function expansions.
pub(crate) const TWO_OVER_SQRT_PI: f64 = std::f64::consts::FRAC_2_SQRT_PI;

/// 2^(−3/2) = 1/(2√2).
pub(crate) const INV_TWO_SQRT_2: f64 = 0.353_553_390_593_273_762_200_422_181_052;

/// Euler–Mascheroni constant γ ≈ 0.577215664901533.
pub(crate) const EULER_GAMMA: f64 = 0.577_215_664_901_532_860_606_512_090_082;

/// Acklam's inverse normal CDF approximation coefficients (central numerator).
///
/// Rational minimax approximation to Φ⁻¹(p) with relative error below 1.15e-9 across
/// `P_LOW < p < 1 - P_LOW`, refined to full precision by one Halley step.
pub(crate) const A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];

/// Acklam's inverse normal CDF approximation coefficients (central denominator).
pub(crate) const B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];

/// Acklam's inverse normal CDF approximation coefficients (tail numerator).
pub(crate) const C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];

/// Acklam's inverse normal CDF approximation coefficients (tail denominator).
pub(crate) const D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

/// Breakpoint between Acklam's central and tail rational approximations (≈ 2σ).
pub(crate) const P_LOW: f64 = 0.02425;

/// Lanczos approximation coefficients, g = 7 and n = 9.
///
/// Gives ln Γ to near machine precision for arguments ≥ ½; smaller arguments go
/// through the reflection formula.
pub(crate) const COF: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Stirling series coefficients for the correction term
/// δ(x) = ln Γ(x) − (x − ½)ln x + x − ½ln(2π) ≈ S0/x − S1/x³ + S2/x⁵ − S3/x⁷ + S4/x⁹.
pub(crate) const STIRLING: [f64; 5] = [
    1.0 / 12.0,
    1.0 / 360.0,
    1.0 / 1260.0,
    1.0 / 1680.0,
    1.0 / 1188.0,
];

/// Argument from which the truncated Stirling series is used for δ(x).
///
/// The first omitted term, 691 / (360360 x¹¹), is below 3e-16 here.
pub(crate) const STIRLING_CUTOFF: f64 = 15.0;

/// Shape from which P(a, x) and Q(a, x) switch to the saddle-point expansion near x ≈ a.
pub(crate) const GAMMA_SADDLE_MIN_SHAPE: f64 = 100.0;

/// Half-width of the saddle-point band, as a fraction of the shape: |x − a| ≤ 0.3a.
///
/// Outside the band the series or continued fraction converges in under ~150 steps.
pub(crate) const GAMMA_SADDLE_BAND: f64 = 0.3;

/// Saddle-point coefficients multiplying the √m power sums, m = a − 1.
pub(crate) const GAMMA_SADDLE_A: [f64; 7] = [
    2.0 / 3.0,
    -4.0 / 135.0,
    8.0 / 2835.0,
    16.0 / 8505.0,
    -8992.0 / 12629925.0,
    -334144.0 / 492567075.0,
    698752.0 / 1477701225.0,
];

/// Saddle-point coefficients multiplying the signed-root power sums; also the Stirling
/// coefficients of the normalising scale m + B₀ + B₁/m + ….
pub(crate) const GAMMA_SADDLE_B: [f64; 7] = [
    1.0 / 12.0,
    1.0 / 288.0,
    -139.0 / 51840.0,
    -571.0 / 2488320.0,
    163879.0 / 209018880.0,
    5246819.0 / 75246796800.0,
    -534703531.0 / 902961561600.0,
];

/// Smaller shape from which I_x(a, b) uses the large-parameter asymptotic expansion.
pub(crate) const BETA_ASYMPTOTIC_MIN_SHAPE: f64 = 100.0;

/// Band of the large-parameter expansion: |a − (a + b)x| ≤ 0.03·min(a, b).
pub(crate) const BETA_ASYMPTOTIC_BAND: f64 = 0.03;

/// Terms of the large-parameter incomplete beta expansion.
pub(crate) const BETA_ASYMPTOTIC_TERMS: usize = 20;

/// Positive nodes of the 8-point Gauss–Legendre rule on [−1, 1].
pub(crate) const GAUSS_LEGENDRE_NODES: [f64; 4] = [
    0.183_434_642_495_649_804_94,
    0.525_532_409_916_328_985_82,
    0.796_666_477_413_626_739_59,
    0.960_289_856_497_536_231_68,
];

/// Weights paired with [`GAUSS_LEGENDRE_NODES`].
pub(crate) const GAUSS_LEGENDRE_WEIGHTS: [f64; 4] = [
    0.362_683_783_378_361_982_97,
    0.313_706_645_877_887_287_34,
    0.222_381_034_453_374_470_54,
    0.101_228_536_290_376_259_15,
];

/// B₂ᵢ/(2i)! for i = 1…8, the Euler–Maclaurin correction weights.
pub(crate) const BERNOULLI_OVER_FACTORIAL: [f64; 8] = [
    1.0 / 12.0,
    -1.0 / 720.0,
    1.0 / 30240.0,
    -1.0 / 1209600.0,
    1.0 / 47900160.0,
    -691.0 / 1307674368000.0,
    1.0 / 74724249600.0,
    -3617.0 / 10670622842880000.0,
];

/// Factorials 0! … 170!, evaluated at compile time.
///
/// Exact through 22!; beyond that each entry carries the rounding of one product per step,
/// well inside the accuracy of any downstream log-space use. 171! overflows `f64`.
const FACTORIALS: [f64; 171] = {
    let mut table = [1.0_f64; 171];
    let mut n = 1;
    while n < 171 {
        table[n] = table[n - 1] * n as f64;
        n += 1;
    }
    table
};

/// Factorial lookup for `n ≤ 170`; `+∞` above.
#[inline(always)]
pub fn factorial_lookup(n: u64) -> f64 {
    if n < FACTORIALS.len() as u64 {
        FACTORIALS[n as usize]
    } else {
        f64::INFINITY
    }
}
