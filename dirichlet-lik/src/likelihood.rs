//! Dirichlet likelihood for compositional (simplex-valued) observations.

use candle_core::{bail, Result, Tensor, D};
use log::debug;

use crate::dirichlet::{dirichlet_log_prob, dirichlet_mean, dirichlet_variance, sample_dirichlet};
use crate::link::InverseLink;
use crate::traits::{BlackBoxLikelihood, MonteCarloLikelihood};

/// Configuration for the Dirichlet likelihood.
#[derive(Debug, Clone, Copy)]
pub struct DirichletConfig {
    /// Number of Monte Carlo draws the inference engine averages over
    pub num_monte_carlo_points: usize,
    /// Map from latent values to concentrations
    pub link: InverseLink,
}

impl Default for DirichletConfig {
    fn default() -> Self {
        Self {
            num_monte_carlo_points: 100,
            link: InverseLink::Exp,
        }
    }
}

impl DirichletConfig {
    pub fn new(num_monte_carlo_points: usize) -> Self {
        Self {
            num_monte_carlo_points,
            ..Self::default()
        }
    }

    pub fn with_link(mut self, link: InverseLink) -> Self {
        self.link = link;
        self
    }
}

/// Dirichlet likelihood: y ~ Dir(invlink(f))
///
/// # Model
/// ```text
/// α = invlink(f)
/// log p(y | f) = Σ_k (α_k - 1) log(y_k) - log B(α)
/// ```
///
/// The dimension of the variational expectation equals the number of
/// categories, so the expected log-likelihood is left to Monte Carlo rather
/// than quadrature; `num_monte_carlo_points` tells the engine how many draws
/// to use.
#[derive(Debug, Clone, Copy)]
pub struct DirichletLikelihood {
    link: InverseLink,
    num_monte_carlo_points: usize,
}

impl Default for DirichletLikelihood {
    fn default() -> Self {
        Self::from_config(DirichletConfig::default())
    }
}

impl DirichletLikelihood {
    pub fn new(link: InverseLink) -> Self {
        Self::from_config(DirichletConfig::default().with_link(link))
    }

    pub fn from_config(config: DirichletConfig) -> Self {
        debug!(
            "Dirichlet likelihood: link {:?}, {} Monte Carlo points",
            config.link, config.num_monte_carlo_points
        );
        Self {
            link: config.link,
            num_monte_carlo_points: config.num_monte_carlo_points,
        }
    }

    pub fn link(&self) -> InverseLink {
        self.link
    }

    /// α = invlink(f)
    pub fn concentration(&self, f: &Tensor) -> Result<Tensor> {
        self.link.apply(f)
    }

    /// Draw `n` observations from Dir(invlink(f)).
    ///
    /// # Returns
    /// Samples of shape (n, ..., K)
    pub fn sample_conditional(&self, f: &Tensor, n: usize, seed: Option<u64>) -> Result<Tensor> {
        sample_dirichlet(&self.concentration(f)?, n, seed)
    }

    /// Bind observed simplex rows to this likelihood.
    pub fn observe(self, y: Tensor) -> DirichletObservations {
        DirichletObservations::new(self, y)
    }
}

impl MonteCarloLikelihood for DirichletLikelihood {
    fn log_prob(&self, f: &Tensor, y: &Tensor) -> Result<Tensor> {
        dirichlet_log_prob(&self.concentration(f)?, y)
    }

    fn conditional_mean(&self, f: &Tensor) -> Result<Tensor> {
        dirichlet_mean(&self.concentration(f)?)
    }

    fn conditional_variance(&self, f: &Tensor) -> Result<Tensor> {
        dirichlet_variance(&self.concentration(f)?)
    }

    fn num_monte_carlo_points(&self) -> usize {
        self.num_monte_carlo_points
    }
}

/// Dirichlet likelihood bound to observations y of shape (n, K).
pub struct DirichletObservations {
    likelihood: DirichletLikelihood,
    y: Tensor,
}

impl DirichletObservations {
    pub fn new(likelihood: DirichletLikelihood, y: Tensor) -> Self {
        Self { likelihood, y }
    }

    pub fn likelihood(&self) -> &DirichletLikelihood {
        &self.likelihood
    }

    pub fn y(&self) -> &Tensor {
        &self.y
    }
}

impl BlackBoxLikelihood for DirichletObservations {
    fn log_likelihood(&self, etas: &[&Tensor]) -> Result<Tensor> {
        let Some(eta) = etas.first() else {
            bail!("DirichletObservations requires 1 eta (latent values)");
        };
        // (S, n, K) -> (S, n) -> (S,)
        self.likelihood.log_prob(eta, &self.y)?.sum(D::Minus1)
    }
}
