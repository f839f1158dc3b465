use candle_core::{Result, Tensor};

/// Likelihood capability expected by a variational GP engine that integrates
/// the expected log-likelihood by Monte Carlo.
///
/// All tensors follow the batch-first convention: shape `(..., K)` with the
/// `K` output categories in the last dimension.
pub trait MonteCarloLikelihood {
    /// Evaluate log p(y | f) row-wise.
    ///
    /// # Arguments
    /// * `f` - Latent values, shape (..., K)
    /// * `y` - Observations, shape (..., K), broadcast against `f`
    ///
    /// # Returns
    /// One log-density per row, shape (...)
    fn log_prob(&self, f: &Tensor, y: &Tensor) -> Result<Tensor>;

    /// E[y | f], shape (..., K)
    fn conditional_mean(&self, f: &Tensor) -> Result<Tensor>;

    /// Var[y | f] (marginal, element-wise), shape (..., K)
    fn conditional_variance(&self, f: &Tensor) -> Result<Tensor>;

    /// Number of latent draws the engine should average over.
    fn num_monte_carlo_points(&self) -> usize;
}

/// Black-box likelihood trait.
/// The likelihood function is treated as a black box - no gradients flow through it.
pub trait BlackBoxLikelihood {
    /// Evaluate log p(y|η) - NO gradients through this
    ///
    /// # Arguments
    /// * `etas` - Slice of linear predictor tensors, each shape (S, n, k) for S samples
    ///
    /// # Returns
    /// Log-likelihood values, shape (S,) summed over observations
    fn log_likelihood(&self, etas: &[&Tensor]) -> Result<Tensor>;
}
