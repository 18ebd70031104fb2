use crate::models::aircraft::AircraftProperties;

/// Lift coefficient needed for lift to equal weight at `velocity`.
pub fn required_lift_coefficient<T: AircraftProperties>(
    aircraft: &T,
    density: f64,
    velocity: f64,
) -> f64 {
    (2.0 * aircraft.weight()) / (density * velocity * velocity * aircraft.wing_area())
}

/// Quadratic drag polar: CD = CD0 + k * CL²
pub fn drag_coefficient<T: AircraftProperties>(aircraft: &T, lift_coefficient: f64) -> f64 {
    aircraft.zero_lift_drag_coefficient()
        + aircraft.induced_drag_factor() * lift_coefficient * lift_coefficient
}

/// Fd = 0.5 * ρ * V² * S * CD
pub fn drag_force<T: AircraftProperties>(
    aircraft: &T,
    density: f64,
    velocity: f64,
    drag_coefficient: f64,
) -> f64 {
    0.5 * density * velocity * velocity * aircraft.wing_area() * drag_coefficient
}

/// Minimum speed at which lift at CL_max still carries the weight.
pub fn stall_speed<T: AircraftProperties>(aircraft: &T, density: f64) -> f64 {
    ((2.0 * aircraft.weight()) / (density * aircraft.wing_area() * aircraft.cl_max())).sqrt()
}
