//! Special functions on tensors needed by the Dirichlet density.

use candle_core::{bail, DType, Result, Tensor, D};

const LANCZOS_G: f64 = 7.0;

const LANCZOS_COEF: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

/// Element-wise log-gamma for positive arguments (Lanczos, g = 7).
///
/// ```text
/// lgamma(x + 1) = ½ log(2π) + (x + ½) log(t) - t + log(A(x)),  t = x + g + ½
/// lgamma(x)     = lgamma(x + 1) - log(x)
/// ```
///
/// Evaluated in f64 and cast back to the input dtype.
pub fn lgamma(x: &Tensor) -> Result<Tensor> {
    let z = x.to_dtype(DType::F64)?;

    let mut series = (z.zeros_like()? + LANCZOS_COEF[0])?;
    for (i, &c) in LANCZOS_COEF.iter().enumerate().skip(1) {
        let term = ((&z + i as f64)?.recip()? * c)?;
        series = (series + term)?;
    }

    let t = (&z + (LANCZOS_G + 0.5))?;
    let half_ln_2pi = 0.5 * (2.0 * std::f64::consts::PI).ln();

    let lgamma_z1 = (((&z + 0.5)? * t.log()?)? - &t)?;
    let lgamma_z1 = ((lgamma_z1 + series.log()?)? + half_ln_2pi)?;

    (lgamma_z1 - z.log()?)?.to_dtype(x.dtype())
}

/// Multivariate log-beta over the last dimension
///
/// log B(α) = Σ_k lgamma(α_k) - lgamma(Σ_k α_k)
///
/// * `alpha` - concentration tensor (..., K)
///
pub fn log_beta(alpha: &Tensor) -> Result<Tensor> {
    if alpha.rank() == 0 {
        bail!("log_beta needs at least one dimension, got a scalar");
    }
    let sum_lgamma = lgamma(alpha)?.sum(D::Minus1)?;
    let lgamma_sum = lgamma(&alpha.sum(D::Minus1)?)?;
    sum_lgamma - lgamma_sum
}

/// x * log(y) with broadcasting, exactly zero wherever x == 0.
///
/// Keeps 0 * log(0) = 0 instead of NaN. Where x != 0 and y == 0 the result
/// stays ±inf.
pub fn xlogy(x: &Tensor, y: &Tensor) -> Result<Tensor> {
    let prod = x.broadcast_mul(&y.log()?)?;
    let x = x.broadcast_as(prod.shape())?;
    x.eq(0.0)?.where_cond(&prod.zeros_like()?, &prod)
}
