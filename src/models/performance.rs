use crate::constants::{SWEEP_MIN_VELOCITY, SWEEP_POINTS, SWEEP_STEP};
use crate::physics::environment::Environment;
use nalgebra as na;
use serde::Serialize;

/// Dependent quantities sampled over a fixed velocity grid.
#[derive(Debug, Clone, PartialEq)]
pub struct VelocitySweep {
    pub velocity: na::DVector<f64>,         // m/s
    pub lift_coefficient: na::DVector<f64>, // required for level flight
    pub drag_coefficient: na::DVector<f64>,
    pub drag: na::DVector<f64>,             // N
    pub thrust: na::DVector<f64>,           // N, available
}

/// One row of a [`VelocitySweep`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepSample {
    pub velocity: f64,
    pub lift_coefficient: f64,
    pub drag_coefficient: f64,
    pub drag: f64,
    pub thrust: f64,
}

impl VelocitySweep {
    /// The velocity grid: 20 to 100 m/s inclusive in 1 m/s steps.
    pub fn velocities() -> na::DVector<f64> {
        na::DVector::from_fn(SWEEP_POINTS, |i, _| {
            SWEEP_MIN_VELOCITY + i as f64 * SWEEP_STEP
        })
    }

    pub fn len(&self) -> usize {
        self.velocity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.velocity.is_empty()
    }

    pub fn sample(&self, i: usize) -> SweepSample {
        SweepSample {
            velocity: self.velocity[i],
            lift_coefficient: self.lift_coefficient[i],
            drag_coefficient: self.drag_coefficient[i],
            drag: self.drag[i],
            thrust: self.thrust[i],
        }
    }

    pub fn samples(&self) -> impl Iterator<Item = SweepSample> + '_ {
        (0..self.len()).map(move |i| self.sample(i))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceSummary {
    pub stall_speed: f64,      // m/s
    pub takeoff_speed: f64,    // m/s
    pub takeoff_distance: f64, // m, ground roll

    // Single-point takeoff roll terms
    pub average_speed: f64,  // m/s
    pub average_drag: f64,   // N
    pub average_thrust: f64, // N
    pub net_force: f64,      // N
    pub acceleration: f64,   // m/s²
}

/// Everything one calculation produces.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceReport {
    pub environment: Environment,
    pub sweep: VelocitySweep,
    pub summary: PerformanceSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_grid() {
        let v = VelocitySweep::velocities();
        assert_eq!(v.len(), 81);
        assert_eq!(v[0], 20.0);
        assert_eq!(v[40], 60.0);
        assert_eq!(v[80], 100.0);
    }
}
