pub mod calculator;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod panel;
pub mod physics;
pub mod render;

pub use calculator::calculate;
pub use config::{AircraftConfig, Parameter};
pub use errors::PerfError;
pub use models::{PerformanceReport, PerformanceSummary, VelocitySweep};
pub use panel::ControlPanel;
pub use physics::environment::Environment;
