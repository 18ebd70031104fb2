pub mod aerodynamics;
pub mod environment;
pub mod propulsion;
pub mod takeoff;
