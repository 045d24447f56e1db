//! Matrix-exponential propagators `e^{J·t_k}` over a uniform time grid.
//!
//! The exponential itself is delegated to nalgebra's scaling-and-squaring
//! Padé implementation; this module only organises its evaluation across the
//! grid. Because the grid is uniform, the semigroup identity
//!
//! ```text
//! e^{J·(k·dt)} = (e^{J·dt})^k
//! ```
//!
//! lets us evaluate one exponential `e^{J·dt}` and advance through the grid
//! with a single N×N product per point, instead of T full matrix-exponential
//! evaluations. `E_0` is the exact identity by construction.
//!
//! Stability is the caller's precondition: for an unstable `J` the sequence
//! grows without bound, and nothing here clamps it.

use nalgebra::DMatrix;

use crate::grid::TimeGrid;

/// Evaluate `E_k = e^{J·t_k}` for every point of `grid`, in time order.
pub fn propagators(jac: &DMatrix<f64>, grid: &TimeGrid) -> Vec<DMatrix<f64>> {
    let n = jac.nrows();
    let nt = grid.len();

    let mut out = Vec::with_capacity(nt);
    out.push(DMatrix::identity(n, n));
    if nt == 1 {
        return out;
    }

    let step = (jac * grid.timestep()).exp();
    for k in 1..nt {
        let next = &out[k - 1] * &step;
        out.push(next);
    }
    out
}

/// Baseline-subtracted propagators `e^{J·t_k} − I`.
///
/// Entry 0 is the exact zero matrix: no time has passed, no flow yet.
pub(crate) fn impulse_response(jac: &DMatrix<f64>, grid: &TimeGrid) -> Vec<DMatrix<f64>> {
    let eye = DMatrix::identity(jac.nrows(), jac.ncols());
    propagators(jac, grid)
        .into_iter()
        .map(|e| e - &eye)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jacobian::build_jacobian;

    #[test]
    fn first_propagator_is_identity() {
        let jac = build_jacobian(&DMatrix::zeros(3, 3), 1.0).unwrap();
        let grid = TimeGrid::new(1.0, 0.1).unwrap();
        let props = propagators(&jac, &grid);
        assert_eq!(props.len(), 10);
        assert!(props[0].is_identity(0.0));
    }

    #[test]
    fn scalar_system_matches_closed_form() {
        // N = 1, no coupling: J = −1/τ, so E_k = e^{−t_k/τ} exactly.
        let tau = 0.5;
        let jac = build_jacobian(&DMatrix::zeros(1, 1), tau).unwrap();
        let grid = TimeGrid::new(2.0, 0.05).unwrap();
        let props = propagators(&jac, &grid);

        for (e, t) in props.iter().zip(grid.times()) {
            let expected = (-t / tau).exp();
            assert!(
                (e[(0, 0)] - expected).abs() < 1e-12,
                "t={t}: {} vs {expected}",
                e[(0, 0)]
            );
        }
    }

    #[test]
    fn semigroup_recurrence_matches_direct_exponential() {
        let net = DMatrix::from_row_slice(3, 3, &[0.0, 0.4, 0.0, 0.1, 0.0, 0.3, 0.2, 0.0, 0.0]);
        let jac = build_jacobian(&net, 1.0).unwrap();
        let grid = TimeGrid::new(1.0, 0.2).unwrap();
        let props = propagators(&jac, &grid);

        // Compare the recurrence against an independent e^{J·t_k} at the last point.
        let t_last = 0.8;
        let direct = (&jac * t_last).exp();
        let diff = (&props[4] - &direct).amax();
        assert!(diff < 1e-10, "recurrence drifted by {diff}");
    }

    #[test]
    fn stable_system_propagators_stay_finite() {
        let net = DMatrix::from_row_slice(2, 2, &[0.0, 0.6, 0.5, 0.0]);
        let jac = build_jacobian(&net, 1.0).unwrap();
        let grid = TimeGrid::new(50.0, 0.5).unwrap();
        for e in propagators(&jac, &grid) {
            assert!(e.iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn impulse_response_starts_at_zero() {
        let net = DMatrix::from_row_slice(2, 2, &[0.0, 0.6, 0.5, 0.0]);
        let jac = build_jacobian(&net, 1.0).unwrap();
        let grid = TimeGrid::new(1.0, 0.25).unwrap();
        let resp = impulse_response(&jac, &grid);
        assert!(resp[0].amax() == 0.0, "t=0 entry must be the zero matrix");
        assert!(resp[1].amax() > 0.0);
    }
}
