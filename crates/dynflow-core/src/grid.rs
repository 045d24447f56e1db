//! Uniform time grid over which the network response is sampled.

use serde::{Deserialize, Serialize};

use crate::error::DynFlowError;

/// Uniform discretisation of `[0, tmax)` with spacing `timestep`.
///
/// The grid always starts at `t = 0` (the zero-elapsed-time baseline) and is
/// strictly increasing. `tmax = 15.0`, `timestep = 0.01` yields 1500 points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeGrid {
    tmax: f64,
    timestep: f64,
}

impl TimeGrid {
    /// Build a grid, rejecting non-finite or non-positive parameters and
    /// grids too short to contain a single point.
    pub fn new(tmax: f64, timestep: f64) -> Result<Self, DynFlowError> {
        if !tmax.is_finite() || !timestep.is_finite() || timestep <= 0.0 || tmax < timestep {
            return Err(DynFlowError::InvalidTimeGrid { tmax, timestep });
        }
        Ok(Self { tmax, timestep })
    }

    #[inline]
    pub fn tmax(&self) -> f64 {
        self.tmax
    }

    #[inline]
    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    /// Number of grid points, `ceil(tmax / timestep)` — every multiple of
    /// `timestep` below `tmax` is included, so non-divisible grids keep
    /// their last sub-`tmax` point.
    #[inline]
    pub fn len(&self) -> usize {
        (self.tmax / self.timestep).ceil() as usize
    }

    /// A valid grid always contains at least the `t = 0` point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The grid points `0, dt, 2·dt, …` in increasing order.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |k| k as f64 * self.timestep)
    }
}
