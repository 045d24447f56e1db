//! Dynamic flow: the network response to an arbitrary input covariance.
//!
//! Flow generalises communicability from an uncorrelated unit impulse to a
//! perturbation with covariance structure `Σ` (symmetric PSD). The injected
//! amplitude per node pair is the matrix square root `Σ^{1/2}`, acted on by
//! the baseline-subtracted propagator:
//!
//! ```text
//! F_k = (e^{J·t_k} − I) · Σ^{1/2}
//! ```
//!
//! With `Σ = I` the square root is the identity and the flow tensor equals
//! the communicability tensor exactly — communicability is the special case,
//! flow the strict generalisation.

use nalgebra::{DMatrix, SymmetricEigen};
use tracing::debug;

use crate::error::DynFlowError;
use crate::grid::TimeGrid;
use crate::jacobian::build_jacobian;
use crate::propagator::impulse_response;
use crate::tensor::DynTensor;

/// Tolerance for the `Σ = Σᵀ` check.
const SYMMETRY_TOL: f64 = 1e-9;

/// Eigenvalues below `−PSD_TOL` reject `Σ`; negatives above it are treated
/// as numerical noise and clamped to zero before the square root.
const PSD_TOL: f64 = 1e-9;

/// Generate the dynamic flow tensor of `net` under leakage `tau` for an
/// input covariance `sigma`.
///
/// `sigma` must be square, match `net`'s size, and be symmetric positive
/// semi-definite; violations fail before any matrix-exponential work.
pub fn flow_tensor(
    net: &DMatrix<f64>,
    tau: f64,
    grid: &TimeGrid,
    sigma: &DMatrix<f64>,
) -> Result<DynTensor, DynFlowError> {
    if sigma.nrows() != sigma.ncols() {
        return Err(DynFlowError::NotSquare {
            rows: sigma.nrows(),
            cols: sigma.ncols(),
        });
    }
    if sigma.nrows() != net.nrows() {
        return Err(DynFlowError::ShapeMismatch {
            expected: net.nrows(),
            got: sigma.nrows(),
        });
    }
    // NaN compares false, so the symmetry and PSD checks below cannot catch
    // a non-finite covariance on their own.
    if sigma.iter().any(|v| !v.is_finite()) {
        return Err(DynFlowError::NonFiniteEntry);
    }
    if (sigma - sigma.transpose()).amax() > SYMMETRY_TOL {
        return Err(DynFlowError::CovarianceNotSymmetric);
    }

    let jac = build_jacobian(net, tau)?;

    // Identity covariance collapses to plain communicability; skip the
    // eigendecomposition entirely.
    let sqrt_sigma = if sigma.is_identity(1e-12) {
        None
    } else {
        Some(psd_sqrt(sigma)?)
    };

    debug!(
        n = net.nrows(),
        tau,
        steps = grid.len(),
        correlated = sqrt_sigma.is_some(),
        "generating flow tensor"
    );

    let matrices = impulse_response(&jac, grid)
        .into_iter()
        .map(|m| match &sqrt_sigma {
            None => m,
            Some(s) => m * s,
        })
        .collect();

    Ok(DynTensor::new(grid.timestep(), matrices))
}

/// Symmetric PSD square root via eigendecomposition, rejecting genuinely
/// indefinite input and clamping round-off negatives to zero.
fn psd_sqrt(sigma: &DMatrix<f64>) -> Result<DMatrix<f64>, DynFlowError> {
    let eigen = SymmetricEigen::new(sigma.clone());
    let min_eigenvalue = eigen.eigenvalues.min();
    if min_eigenvalue < -PSD_TOL {
        return Err(DynFlowError::CovarianceNotPsd { min_eigenvalue });
    }
    let sqrt_vals = eigen.eigenvalues.map(|l| l.max(0.0).sqrt());
    Ok(&eigen.eigenvectors * DMatrix::from_diagonal(&sqrt_vals) * eigen.eigenvectors.transpose())
}
