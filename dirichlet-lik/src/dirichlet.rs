//! Stateless Dirichlet primitives on concentration tensors.
//!
//! Shapes follow the batch-first convention `(..., K)`; every function works
//! row-wise over the last dimension.

use candle_core::{bail, DType, Result, Tensor, D};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Gamma};
use rayon::prelude::*;

use crate::special_functions::{log_beta, xlogy};

/// Dirichlet log-density
///
/// log p(y | α) = Σ_k (α_k - 1) log(y_k) - log B(α)
///
/// with 0 · log(0) = 0 where α_k = 1.
///
/// * `concentration` - α, shape (..., K), all entries > 0
/// * `y` - simplex points, shape (..., K), broadcast against α
///
pub fn dirichlet_log_prob(concentration: &Tensor, y: &Tensor) -> Result<Tensor> {
    match (concentration.dims().last(), y.dims().last()) {
        (Some(ka), Some(ky)) if ka == ky => {}
        _ => bail!(
            "concentration {:?} and y {:?} must share the category dimension",
            concentration.dims(),
            y.dims()
        ),
    }

    let kernel = xlogy(&(concentration - 1.0)?, y)?.sum(D::Minus1)?;
    kernel.broadcast_sub(&log_beta(concentration)?)
}

/// Dirichlet mean: α_k / Σ_j α_j
pub fn dirichlet_mean(concentration: &Tensor) -> Result<Tensor> {
    concentration.broadcast_div(&concentration.sum_keepdim(D::Minus1)?)
}

/// Dirichlet marginal variance
///
/// Var[y_k] = α_k (S - α_k) / (S² (S + 1)),  S = Σ_j α_j
pub fn dirichlet_variance(concentration: &Tensor) -> Result<Tensor> {
    let total = concentration.sum_keepdim(D::Minus1)?;
    let numer = concentration.mul(&total.broadcast_sub(concentration)?)?;
    let denom = (total.sqr()? * (&total + 1.0)?)?;
    numer.broadcast_div(&denom)
}

/// Draw `n` Dirichlet samples by normalising independent Gamma(α, 1) variates.
///
/// Returns a tensor of shape `(n, *concentration.dims())` in the dtype of
/// `concentration`. Draw `i` uses the generator seeded with `seed + i`, so a
/// given seed reproduces the same samples regardless of thread scheduling.
/// Without a seed, the base seed comes from the thread-local generator.
///
/// Unlike the density and moment functions, a non-positive or NaN
/// concentration is an error here rather than a NaN draw.
///
/// * `concentration` - α, shape (..., K)
/// * `n` - number of draws
/// * `seed` - optional base seed
///
pub fn sample_dirichlet(concentration: &Tensor, n: usize, seed: Option<u64>) -> Result<Tensor> {
    if concentration.rank() == 0 {
        bail!("concentration must have a category dimension, got a scalar");
    }

    let mut shape = vec![n];
    shape.extend_from_slice(concentration.dims());

    if n == 0 {
        warn!("requested zero Dirichlet samples");
        return Tensor::zeros(shape, concentration.dtype(), concentration.device());
    }

    let alpha: Vec<f64> = concentration
        .to_dtype(DType::F64)?
        .flatten_all()?
        .to_vec1()?;

    let base_seed = seed.unwrap_or_else(|| rand::rng().random());
    debug!(
        "sampling {} Dirichlet draws over {:?} (seed {})",
        n,
        concentration.dims(),
        base_seed
    );

    let draws = (0..n)
        .into_par_iter()
        .map(|i| -> Result<Vec<f64>> {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i as u64));
            alpha
                .iter()
                .map(|&a| -> Result<f64> {
                    let gamma = Gamma::new(a, 1.0).map_err(|e| {
                        candle_core::Error::Msg(format!("invalid concentration {}: {}", a, e))
                    })?;
                    Ok(gamma.sample(&mut rng))
                })
                .collect()
        })
        .collect::<Result<Vec<_>>>()?;

    let gamma = Tensor::from_vec(
        draws.into_iter().flatten().collect::<Vec<f64>>(),
        shape,
        concentration.device(),
    )?;

    gamma
        .broadcast_div(&gamma.sum_keepdim(D::Minus1)?)?
        .to_dtype(concentration.dtype())
}
