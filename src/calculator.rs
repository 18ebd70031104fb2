use crate::config::AircraftConfig;
use crate::models::aircraft::AircraftProperties;
use crate::models::performance::{PerformanceReport, VelocitySweep};
use crate::physics::aerodynamics;
use crate::physics::environment::Environment;
use crate::physics::propulsion::available_thrust;
use crate::physics::takeoff::estimate_takeoff;
use log::{trace, warn};

/// Runs the whole performance calculation for one configuration.
///
/// Pure apart from logging. Nonphysical inputs produce infinite, NaN or negative
/// outputs instead of errors.
pub fn calculate(config: &AircraftConfig) -> PerformanceReport {
    let environment = Environment::at_altitude(config.altitude);
    let sweep = velocity_sweep(config, &environment);
    let summary = estimate_takeoff(config, &environment);

    trace!(
        "rho={:.4} V_stall={:.3} V_TO={:.3} S_TO={:.3}",
        environment.density,
        summary.stall_speed,
        summary.takeoff_speed,
        summary.takeoff_distance
    );
    if !summary.takeoff_distance.is_finite() || summary.takeoff_distance <= 0.0 {
        warn!(
            "Nonphysical takeoff distance {} m (net force {} N) for {:?}",
            summary.takeoff_distance, summary.net_force, config
        );
    }

    PerformanceReport {
        environment,
        sweep,
        summary,
    }
}

/// Lift coefficient, drag polar, drag and available thrust over the fixed velocity grid.
pub fn velocity_sweep<T: AircraftProperties>(
    aircraft: &T,
    environment: &Environment,
) -> VelocitySweep {
    let density = environment.density;
    let velocity = VelocitySweep::velocities();

    let lift_coefficient =
        velocity.map(|v| aerodynamics::required_lift_coefficient(aircraft, density, v));
    let drag_coefficient =
        lift_coefficient.map(|cl| aerodynamics::drag_coefficient(aircraft, cl));
    let drag = velocity.zip_map(&drag_coefficient, |v, cd| {
        aerodynamics::drag_force(aircraft, density, v, cd)
    });
    let thrust = velocity.map(|v| available_thrust(aircraft, v));

    VelocitySweep {
        velocity,
        lift_coefficient,
        drag_coefficient,
        drag,
        thrust,
    }
}
