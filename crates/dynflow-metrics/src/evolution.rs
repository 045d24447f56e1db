//! Scalar and per-node time series reduced from a tensor.

use dynflow_core::DynTensor;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::error::MetricsError;
use crate::validate;

/// Total communicability or flow over time: the sum of all pairwise
/// interactions at each time step. Entry 0 is 0 for any baseline-subtracted
/// tensor.
pub fn total_evolution(tensor: &DynTensor) -> Result<Vec<f64>, MetricsError> {
    validate(tensor)?;
    Ok(tensor.matrices.iter().map(|m| m.sum()).collect())
}

/// Temporal evolution of every node's input and output strength.
///
/// Rows of the connectivity matrix encode outputs, so at step `t` the input
/// to node `j` is the column sum `Σ_i M_t[i, j]` and the output of node `i`
/// is the row sum `Σ_j M_t[i, j]`. Both are returned as N×T matrices, one
/// row per node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeEvolution {
    /// `inputs[(j, t)]` — interaction flowing **into** node `j` at step `t`.
    pub inputs: DMatrix<f64>,
    /// `outputs[(i, t)]` — interaction flowing **out of** node `i` at step `t`.
    pub outputs: DMatrix<f64>,
}

pub fn node_evolution(tensor: &DynTensor) -> Result<NodeEvolution, MetricsError> {
    let (nt, n) = validate(tensor)?;

    let inputs = DMatrix::from_fn(n, nt, |j, t| tensor.matrices[t].column(j).sum());
    let outputs = DMatrix::from_fn(n, nt, |i, t| tensor.matrices[t].row(i).sum());

    Ok(NodeEvolution { inputs, outputs })
}

/// Temporal diversity: the coefficient of variation (population standard
/// deviation over mean) of the tensor entries at each time step.
///
/// A step whose mean is zero *relative to the slice's own magnitude*
/// reports 0.0 — in particular the baseline entry at `t = 0`, where every
/// interaction is zero and dispersion is meaningless. The guard scales with
/// the slice, so uniformly tiny but nonzero slices keep their true
/// coefficient of variation.
pub fn diversity(tensor: &DynTensor) -> Result<Vec<f64>, MetricsError> {
    validate(tensor)?;
    Ok(tensor
        .matrices
        .iter()
        .map(|m| {
            let mean = m.mean();
            let scale = m.amax();
            if scale == 0.0 || mean.abs() < 1e-15 * scale {
                0.0
            } else {
                m.variance().sqrt() / mean
            }
        })
        .collect())
}
