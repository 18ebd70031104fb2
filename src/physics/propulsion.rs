use crate::models::aircraft::AircraftProperties;

/// Thrust available from a constant-power propeller: T = η * P / V
pub fn available_thrust<T: AircraftProperties>(aircraft: &T, velocity: f64) -> f64 {
    (aircraft.propulsive_efficiency() * aircraft.shaft_power()) / velocity
}
