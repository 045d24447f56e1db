//! Property checks on randomly generated stable networks.

use dynflow_core::{
    communicability_tensor, flow_tensor, spectral_abscissa, Reference, TimeGrid,
};
use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random directed network with row sums below 0.8, so λ_max < 1/τ for
/// τ = 1.0 and the leaky cascade is guaranteed stable.
fn random_stable_net(n: usize, seed: u64) -> DMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let scale = 0.8 / n as f64;
    DMatrix::from_fn(n, n, |i, j| {
        if i == j {
            0.0
        } else {
            rng.gen::<f64>() * scale
        }
    })
}

#[test]
fn random_networks_produce_finite_tensors() {
    let grid = TimeGrid::new(10.0, 0.1).unwrap();
    for seed in 0..5 {
        let net = random_stable_net(8, seed);
        let tensor = communicability_tensor(&net, 1.0, &grid, &Reference::Absolute).unwrap();
        assert_eq!(tensor[0].amax(), 0.0);
        for m in &tensor.matrices {
            assert!(m.iter().all(|v| v.is_finite()), "seed {seed}");
        }
    }
}

#[test]
fn same_seed_gives_identical_tensors() {
    let grid = TimeGrid::new(5.0, 0.1).unwrap();
    let a = communicability_tensor(&random_stable_net(6, 7), 1.0, &grid, &Reference::Absolute)
        .unwrap();
    let b = communicability_tensor(&random_stable_net(6, 7), 1.0, &grid, &Reference::Absolute)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn flow_with_identity_matches_communicability_on_random_nets() {
    let grid = TimeGrid::new(5.0, 0.25).unwrap();
    let net = random_stable_net(5, 11);
    let com = communicability_tensor(&net, 1.0, &grid, &Reference::Absolute).unwrap();
    let flow = flow_tensor(&net, 1.0, &grid, &DMatrix::identity(5, 5)).unwrap();
    for (f, c) in flow.matrices.iter().zip(&com.matrices) {
        assert!((f - c).amax() < 1e-12);
    }
}

#[test]
fn jacobian_abscissa_is_negative_for_generated_nets() {
    for seed in 0..5 {
        let net = random_stable_net(8, seed);
        let jac = dynflow_core::build_jacobian(&net, 1.0).unwrap();
        assert!(spectral_abscissa(&jac) < 0.0);
    }
}
