//! `dynflow-metrics` — Network descriptors over dynamic communicability and
//! flow tensors.
//!
//! Every function here is a pure reduction over a [`DynTensor`] produced by
//! `dynflow-core`; the tensor is the only interface between the two crates.
//!
//! | Function             | Output                | Meaning                               |
//! |----------------------|-----------------------|---------------------------------------|
//! | [`total_evolution`]  | `Vec<f64>` (T)        | Sum of all pairwise interactions      |
//! | [`node_evolution`]   | [`NodeEvolution`]     | Per-node input/output strength series |
//! | [`diversity`]        | `Vec<f64>` (T)        | Coefficient of variation per step     |
//! | [`time_to_peak`]     | `DMatrix<f64>` (N×N)  | When each pairwise interaction peaks  |

pub mod error;
pub mod evolution;
pub mod peak;

pub use error::MetricsError;
pub use evolution::{diversity, node_evolution, total_evolution, NodeEvolution};
pub use peak::time_to_peak;

use dynflow_core::DynTensor;

/// Shared precondition: a non-empty tensor of square N×N slices, one shape
/// for the whole sequence. Returns `(T, N)`.
pub(crate) fn validate(tensor: &DynTensor) -> Result<(usize, usize), MetricsError> {
    let first = tensor.matrices.first().ok_or(MetricsError::EmptyTensor)?;
    if first.nrows() != first.ncols() {
        return Err(MetricsError::NotSquare {
            rows: first.nrows(),
            cols: first.ncols(),
        });
    }
    let n = first.nrows();
    for (step, m) in tensor.matrices.iter().enumerate().skip(1) {
        if m.shape() != (n, n) {
            return Err(MetricsError::RaggedTensor {
                step,
                rows: m.nrows(),
                cols: m.ncols(),
            });
        }
    }
    Ok((tensor.len(), n))
}
