// Environmental constants
pub const GRAVITY: f64 = 9.81; // Gravitational acceleration (m/s²)
pub const RHO_0: f64 = 1.225; // Sea-level air density (kg/m³)
pub const SCALE_HEIGHT: f64 = 8500.0; // Exponential atmosphere scale height (m)

// Propulsion
pub const WATTS_PER_HP: f64 = 745.7; // Mechanical horsepower (W)

// Takeoff estimate
pub const TAKEOFF_SPEED_FACTOR: f64 = 1.2; // V_TO / V_stall
pub const AVERAGE_SPEED_FACTOR: f64 = 0.707; // V_avg / V_TO, ~1/sqrt(2)

// Velocity sweep (m/s)
pub const SWEEP_MIN_VELOCITY: f64 = 20.0;
pub const SWEEP_MAX_VELOCITY: f64 = 100.0;
pub const SWEEP_STEP: f64 = 1.0;
pub const SWEEP_POINTS: usize = 81;
