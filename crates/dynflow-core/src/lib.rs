//! `dynflow-core` — Dynamic communicability and flow tensor engine.
//!
//! Computes the **temporal network response** of a weighted, directed network
//! governed by the leaky-cascade model `dx/dt = J·x`, where every node decays
//! towards rest at rate `1/τ` while receiving weighted input from its
//! neighbours. Because the model is linear and time-invariant, the response is
//! obtained in closed form through the matrix exponential `e^{Jt}` instead of
//! numerical ODE stepping.
//!
//! ## Crate structure
//!
//! | Module              | Responsibility                                         |
//! |---------------------|--------------------------------------------------------|
//! | [`jacobian`]        | Leaky-cascade Jacobian `J = C − I/τ` + stability check |
//! | [`propagator`]      | `e^{J·t_k}` over a uniform time grid                   |
//! | [`communicability`] | Impulse-response tensor, optional reference normalisation |
//! | [`flow`]            | Response to an arbitrary input covariance `Σ`          |
//! | [`grid`]            | [`TimeGrid`] — uniform discretisation of `[0, tmax)`   |
//! | [`tensor`]          | [`DynTensor`] — the (T × N × N) output sequence        |
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use dynflow_core::{communicability_tensor, Reference, TimeGrid};
//! use nalgebra::DMatrix;
//!
//! // Directed ring of 4 nodes; net[(i, j)] is the link i → j.
//! let net = DMatrix::from_row_slice(4, 4, &[
//!     0.0, 1.2, 0.0, 0.0,
//!     0.0, 0.0, 1.1, 0.0,
//!     0.0, 0.0, 0.0, 0.7,
//!     1.0, 0.0, 0.0, 0.0,
//! ]);
//!
//! let grid = TimeGrid::new(15.0, 0.01)?;
//! let dyncom = communicability_tensor(&net, 0.8, &grid, &Reference::Absolute)?;
//! assert_eq!(dyncom.len(), 1500);
//! ```
//!
//! ## Conventions
//!
//! - Rows of the connectivity matrix encode the **outputs** of a node:
//!   `net[(i, j)] = w` means node `i` projects over node `j` with weight `w`.
//! - Every tensor starts with the exact zero matrix at `t = 0` (the identity
//!   baseline is subtracted), so entries represent only the change induced by
//!   the network dynamics.
//! - All generators are pure: no state survives a call, each call allocates
//!   and returns its own tensor.

pub mod communicability;
pub mod error;
pub mod flow;
pub mod grid;
pub mod jacobian;
pub mod propagator;
pub mod tensor;

// ── Generators ────────────────────────────────
pub use communicability::{communicability_tensor, NormalizationPolicy, Reference};
pub use flow::flow_tensor;

// ── Building blocks ───────────────────────────
pub use grid::TimeGrid;
pub use jacobian::{build_jacobian, spectral_abscissa};
pub use propagator::propagators;
pub use tensor::DynTensor;

// ── Error ─────────────────────────────────────
pub use error::DynFlowError;
