//! Pairwise time-to-peak: when each interaction is at its strongest.

use dynflow_core::DynTensor;
use nalgebra::DMatrix;

use crate::error::MetricsError;
use crate::validate;

/// Time (in the tensor's time units) at which each pairwise interaction
/// reaches its maximum, an N×N matrix of `argmax_k · timestep`.
///
/// Ties resolve to the earliest step; interactions that only decay report
/// their peak at `t = 0`.
pub fn time_to_peak(tensor: &DynTensor) -> Result<DMatrix<f64>, MetricsError> {
    let (_, n) = validate(tensor)?;

    let ttp = DMatrix::from_fn(n, n, |i, j| {
        let mut best_step = 0usize;
        let mut best = tensor.matrices[0][(i, j)];
        for (k, m) in tensor.matrices.iter().enumerate().skip(1) {
            let v = m[(i, j)];
            if v > best {
                best = v;
                best_step = k;
            }
        }
        best_step as f64 * tensor.timestep
    });

    Ok(ttp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynflow_core::{communicability_tensor, Reference, TimeGrid};

    fn ring4() -> DMatrix<f64> {
        DMatrix::from_row_slice(
            4,
            4,
            &[
                0.0, 1.2, 0.0, 0.0, //
                0.0, 0.0, 1.1, 0.0, //
                0.0, 0.0, 0.0, 0.7, //
                1.0, 0.0, 0.0, 0.0,
            ],
        )
    }

    #[test]
    fn off_diagonal_interactions_peak_at_interior_times() {
        let grid = TimeGrid::new(15.0, 0.01).unwrap();
        let tensor = communicability_tensor(&ring4(), 0.8, &grid, &Reference::Absolute).unwrap();
        let ttp = time_to_peak(&tensor).unwrap();

        // The 0 → 1 interaction rises from zero then decays back: its peak
        // lies strictly inside the grid.
        assert!(ttp[(0, 1)] > 0.0);
        assert!(ttp[(0, 1)] < 15.0 - 0.01);
    }

    #[test]
    fn pure_decay_peaks_at_zero() {
        let grid = TimeGrid::new(5.0, 0.1).unwrap();
        // Empty network: diagonal entries e^{−t/τ} − 1 only decrease.
        let tensor =
            communicability_tensor(&DMatrix::zeros(2, 2), 1.0, &grid, &Reference::Absolute)
                .unwrap();
        let ttp = time_to_peak(&tensor).unwrap();
        assert_eq!(ttp[(0, 0)], 0.0);
        assert_eq!(ttp[(1, 1)], 0.0);
    }

    #[test]
    fn hand_built_peak_position() {
        let step = |v: f64| DMatrix::from_element(1, 1, v);
        let tensor = DynTensor::new(0.5, vec![step(0.0), step(0.3), step(0.9), step(0.4)]);
        let ttp = time_to_peak(&tensor).unwrap();
        assert_eq!(ttp[(0, 0)], 1.0); // step 2 × 0.5
    }

    #[test]
    fn ties_resolve_to_the_earliest_step() {
        let step = |v: f64| DMatrix::from_element(1, 1, v);
        let tensor = DynTensor::new(1.0, vec![step(0.0), step(0.7), step(0.7)]);
        let ttp = time_to_peak(&tensor).unwrap();
        assert_eq!(ttp[(0, 0)], 1.0);
    }

    #[test]
    fn empty_tensor_is_rejected() {
        let tensor = DynTensor::new(0.1, Vec::new());
        assert!(matches!(
            time_to_peak(&tensor),
            Err(MetricsError::EmptyTensor)
        ));
    }

    #[test]
    fn ragged_tensor_is_rejected() {
        let tensor = DynTensor::new(0.1, vec![DMatrix::zeros(3, 3), DMatrix::zeros(2, 2)]);
        assert!(matches!(
            time_to_peak(&tensor),
            Err(MetricsError::RaggedTensor {
                step: 1,
                rows: 2,
                cols: 2
            })
        ));
    }
}
