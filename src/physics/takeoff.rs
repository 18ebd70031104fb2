use super::aerodynamics::{drag_force, stall_speed};
use super::environment::Environment;
use super::propulsion::available_thrust;
use crate::constants::{AVERAGE_SPEED_FACTOR, TAKEOFF_SPEED_FACTOR};
use crate::models::aircraft::AircraftProperties;
use crate::models::performance::PerformanceSummary;

pub fn takeoff_speed(stall_speed: f64) -> f64 {
    TAKEOFF_SPEED_FACTOR * stall_speed
}

/// Ground roll estimated from the net force at a single average speed, V_TO * 0.707.
///
/// Drag at the average speed uses CD0 alone; induced drag during the roll is ignored.
/// Non-finite or negative distances are returned unchanged when the net force is not
/// positive.
pub fn estimate_takeoff<T: AircraftProperties>(
    aircraft: &T,
    environment: &Environment,
) -> PerformanceSummary {
    let density = environment.density;
    let stall_speed = stall_speed(aircraft, density);
    let takeoff_speed = takeoff_speed(stall_speed);

    let average_speed = takeoff_speed * AVERAGE_SPEED_FACTOR;
    let average_drag = drag_force(
        aircraft,
        density,
        average_speed,
        aircraft.zero_lift_drag_coefficient(),
    );
    let average_thrust = available_thrust(aircraft, average_speed);
    let net_force = average_thrust - average_drag - aircraft.rolling_friction() * aircraft.weight();
    let acceleration = net_force / aircraft.mass();
    let takeoff_distance = (takeoff_speed * takeoff_speed) / (2.0 * acceleration);

    PerformanceSummary {
        stall_speed,
        takeoff_speed,
        takeoff_distance,
        average_speed,
        average_drag,
        average_thrust,
        net_force,
        acceleration,
    }
}
