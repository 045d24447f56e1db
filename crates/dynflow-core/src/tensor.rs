//! The (T × N × N) output sequence shared by both generators.

use std::ops::Index;

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Temporal evolution of pairwise node interactions: one N×N matrix per grid
/// point, in strictly increasing time order, with the temporal resolution
/// attached so downstream metrics can convert steps back to time units.
///
/// Tensors are newly allocated per generator call and never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynTensor {
    /// Spacing of the time grid the tensor was sampled on.
    pub timestep: f64,
    /// `matrices[k]` is the network state at `t = k · timestep`.
    pub matrices: Vec<DMatrix<f64>>,
}

impl DynTensor {
    pub fn new(timestep: f64, matrices: Vec<DMatrix<f64>>) -> Self {
        Self { timestep, matrices }
    }

    /// Number of time points.
    #[inline]
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Number of nodes N (0 for an empty tensor).
    pub fn n_nodes(&self) -> usize {
        self.matrices.first().map_or(0, |m| m.nrows())
    }

    /// The time point each matrix was sampled at.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |k| k as f64 * self.timestep)
    }

    /// Matrix at step `k`, if in range.
    pub fn matrix(&self, k: usize) -> Option<&DMatrix<f64>> {
        self.matrices.get(k)
    }
}

impl Index<usize> for DynTensor {
    type Output = DMatrix<f64>;

    fn index(&self, k: usize) -> &Self::Output {
        &self.matrices[k]
    }
}
