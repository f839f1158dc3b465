//! Inverse link functions mapping unconstrained latent values to positive
//! concentrations.

use std::fmt;

use candle_core::{Result, Tensor};

/// Inverse link: ℝ → ℝ⁺, applied element-wise.
///
/// With `Exp`, a zero-mean latent prior gives Dir(exp(0)) = Dir(1), i.e. a
/// flat prior over the simplex.
#[derive(Clone, Copy, Default)]
pub enum InverseLink {
    /// α = exp(f)
    #[default]
    Exp,
    /// α = log(1 + exp(f))
    Softplus,
    /// User supplied map. Must return strictly positive values; not checked.
    Custom(fn(&Tensor) -> Result<Tensor>),
}

impl InverseLink {
    pub fn apply(&self, f: &Tensor) -> Result<Tensor> {
        match self {
            Self::Exp => f.exp(),
            Self::Softplus => softplus(f),
            Self::Custom(func) => func(f),
        }
    }
}

impl fmt::Debug for InverseLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exp => write!(f, "Exp"),
            Self::Softplus => write!(f, "Softplus"),
            Self::Custom(_) => write!(f, "Custom"),
        }
    }
}

/// softplus(x) = relu(x) + log1p(exp(-|x|))
fn softplus(x: &Tensor) -> Result<Tensor> {
    let tail = log1p(&x.abs()?.neg()?.exp()?)?;
    x.relu()? + tail
}

/// log(1 + u) that stays accurate when 1 + u rounds to 1
///
/// ```text
/// log1p(u) = log(w) * u / (w - 1),  w = 1 + u
/// log1p(u) = u                      if w == 1
/// ```
fn log1p(u: &Tensor) -> Result<Tensor> {
    let w = (u + 1.0)?;
    let d = (&w - 1.0)?;
    let ratio = (w.log()? * u)?.div(&d)?;
    d.eq(0.0)?.where_cond(u, &ratio)
}
