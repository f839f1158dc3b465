//! Dirichlet likelihood for Gaussian process variational inference.
//!
//! Latent GP values `f` are mapped through a positive inverse link to
//! Dirichlet concentrations `α`, and the likelihood supplies what a Monte
//! Carlo variational engine needs: the log-density, conditional moments, a
//! sample count, and a sampler.
//!
//! # Example
//!
//! ```ignore
//! use dirichlet_lik::{DirichletLikelihood, MonteCarloLikelihood};
//!
//! let likelihood = DirichletLikelihood::default(); // exp link, 100 MC points
//! let log_p = likelihood.log_prob(&f_nk, &y_nk)?; // (n,)
//! let mean = likelihood.conditional_mean(&f_nk)?; // (n, K)
//! ```

pub mod dirichlet;
pub mod likelihood;
pub mod link;
pub mod special_functions;
pub mod traits;

pub use dirichlet::{dirichlet_log_prob, dirichlet_mean, dirichlet_variance, sample_dirichlet};
pub use likelihood::{DirichletConfig, DirichletLikelihood, DirichletObservations};
pub use link::InverseLink;
pub use special_functions::{lgamma, log_beta, xlogy};
pub use traits::{BlackBoxLikelihood, MonteCarloLikelihood};

pub use candle_core;
