pub mod aircraft;
pub mod loader;
pub mod parameter;

pub use aircraft::AircraftConfig;
pub use parameter::{Parameter, Slider};
