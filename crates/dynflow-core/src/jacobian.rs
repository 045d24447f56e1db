//! Leaky-cascade Jacobian construction and stability validation.
//!
//! ## Model
//!
//! Each node's state decays towards rest at rate `1/τ` while receiving
//! weighted input from its neighbours:
//!
//! ```text
//! dx_i/dt = −x_i / τ  +  Σ_j  C_ji · x_j      →      J = C − I/τ
//! ```
//!
//! The leakage only enters the diagonal, so the coupling weights keep their
//! physical scale and `τ` controls how fast the transient response dies out.
//!
//! ## Stability
//!
//! The matrix exponential `e^{Jt}` stays bounded iff every eigenvalue of `J`
//! has negative real part (spectral abscissa < 0). For a non-negative
//! connectivity matrix this reduces to `λ_max(C) < 1/τ`: the leakage must
//! dominate the network's dominant eigenmode. The check is performed eagerly
//! so an unstable `(C, τ)` pair fails fast instead of producing a tensor
//! full of divergent or NaN entries.

use nalgebra::DMatrix;

use crate::error::DynFlowError;

/// Build the leaky-cascade Jacobian `J = C − I/τ`.
///
/// Fails with [`DynFlowError::NotSquare`] / [`DynFlowError::NonPositiveTau`] /
/// [`DynFlowError::NonFiniteEntry`] on invalid input, and with
/// [`DynFlowError::Unstable`] when the resulting system would diverge.
pub fn build_jacobian(net: &DMatrix<f64>, tau: f64) -> Result<DMatrix<f64>, DynFlowError> {
    if net.nrows() != net.ncols() {
        return Err(DynFlowError::NotSquare {
            rows: net.nrows(),
            cols: net.ncols(),
        });
    }
    if !tau.is_finite() || tau <= 0.0 {
        return Err(DynFlowError::NonPositiveTau(tau));
    }
    if net.iter().any(|v| !v.is_finite()) {
        return Err(DynFlowError::NonFiniteEntry);
    }

    let mut jac = net.clone();
    let leak = 1.0 / tau;
    for i in 0..jac.nrows() {
        jac[(i, i)] -= leak;
    }

    let abscissa = spectral_abscissa(&jac);
    if abscissa >= 0.0 {
        return Err(DynFlowError::Unstable { abscissa });
    }

    Ok(jac)
}

/// Largest real part over the eigenvalues of a square matrix.
///
/// Useful for probing how close a `(C, τ)` pair sits to the stability
/// threshold before committing to a long time grid.
pub fn spectral_abscissa(m: &DMatrix<f64>) -> f64 {
    debug_assert_eq!(m.nrows(), m.ncols());
    m.complex_eigenvalues()
        .iter()
        .map(|l| l.re)
        .fold(f64::NEG_INFINITY, f64::max)
}
