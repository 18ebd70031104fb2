pub mod aircraft;
pub mod performance;

pub use aircraft::AircraftProperties;
pub use performance::{PerformanceReport, PerformanceSummary, SweepSample, VelocitySweep};
