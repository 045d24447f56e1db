use thiserror::Error;

/// Validation and stability failures raised before any matrix-exponential
/// work begins. There is no partial-tensor mode: every variant aborts the
/// whole generation call.
#[derive(Debug, Error)]
pub enum DynFlowError {
    #[error("connectivity matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix size mismatch: expected {expected} nodes, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("leakage time constant must be strictly positive, got {0}")]
    NonPositiveTau(f64),

    #[error("input matrix contains a non-finite entry")]
    NonFiniteEntry,

    #[error("invalid time grid: need 0 < timestep <= tmax, got tmax={tmax}, timestep={timestep}")]
    InvalidTimeGrid { tmax: f64, timestep: f64 },

    #[error("input covariance matrix is not symmetric")]
    CovarianceNotSymmetric,

    #[error("input covariance matrix is not positive semi-definite: smallest eigenvalue {min_eigenvalue:.6e}")]
    CovarianceNotPsd { min_eigenvalue: f64 },

    #[error(
        "Jacobian is not stable: spectral abscissa {abscissa:.6} >= 0; \
         the matrix exponential diverges over time — choose a smaller tau"
    )]
    Unstable { abscissa: f64 },
}
