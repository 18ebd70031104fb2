use crate::constants::GRAVITY;

pub trait AircraftProperties {
    fn mass(&self) -> f64;
    fn wing_area(&self) -> f64;
    fn cl_max(&self) -> f64;
    fn zero_lift_drag_coefficient(&self) -> f64;
    fn induced_drag_factor(&self) -> f64;
    /// Engine output in watts.
    fn shaft_power(&self) -> f64;
    fn propulsive_efficiency(&self) -> f64;
    fn rolling_friction(&self) -> f64;

    fn weight(&self) -> f64 {
        self.mass() * GRAVITY
    }
}
