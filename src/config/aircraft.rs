use super::parameter::Parameter;
use crate::constants::WATTS_PER_HP;
use crate::errors::PerfError;
use crate::models::aircraft::AircraftProperties;
use serde::{Deserialize, Serialize};

/// The nine inputs of a performance calculation.
///
/// A new value is built for every calculation; nothing mutates one in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftConfig {
    pub mass: f64,      // kg
    pub wing_area: f64, // m²
    pub cl_max: f64,
    pub cd0: f64,
    pub k: f64,        // induced-drag factor
    pub power_hp: f64, // hp
    pub eta: f64,      // propulsive efficiency
    pub mu: f64,       // rolling friction coefficient
    pub altitude: f64, // m
}

impl Default for AircraftConfig {
    /// Every control at the middle of its range.
    fn default() -> Self {
        let mut config = Self::trainer();
        for parameter in Parameter::ALL {
            config = config.with(parameter, parameter.slider().midpoint());
        }
        config
    }
}

impl AircraftConfig {
    /// Light single-engine trainer at sea level.
    pub fn trainer() -> Self {
        Self {
            mass: 1200.0,
            wing_area: 16.0,
            cl_max: 1.5,
            cd0: 0.025,
            k: 0.04,
            power_hp: 180.0,
            eta: 0.75,
            mu: 0.04,
            altitude: 0.0,
        }
    }

    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Mass => self.mass,
            Parameter::WingArea => self.wing_area,
            Parameter::ClMax => self.cl_max,
            Parameter::Cd0 => self.cd0,
            Parameter::InducedDragFactor => self.k,
            Parameter::PowerHp => self.power_hp,
            Parameter::PropulsiveEfficiency => self.eta,
            Parameter::RollingFriction => self.mu,
            Parameter::Altitude => self.altitude,
        }
    }

    /// Copy of this config with one field replaced.
    pub fn with(&self, parameter: Parameter, value: f64) -> Self {
        let mut config = *self;
        match parameter {
            Parameter::Mass => config.mass = value,
            Parameter::WingArea => config.wing_area = value,
            Parameter::ClMax => config.cl_max = value,
            Parameter::Cd0 => config.cd0 = value,
            Parameter::InducedDragFactor => config.k = value,
            Parameter::PowerHp => config.power_hp = value,
            Parameter::PropulsiveEfficiency => config.eta = value,
            Parameter::RollingFriction => config.mu = value,
            Parameter::Altitude => config.altitude = value,
        }
        config
    }

    /// Checks every field against its control range. The calculator does not call this.
    pub fn validate(&self) -> Result<(), PerfError> {
        for parameter in Parameter::ALL {
            let value = self.get(parameter);
            let slider = parameter.slider();
            if !slider.contains(value) {
                return Err(PerfError::OutOfRange {
                    parameter: parameter.to_string(),
                    value,
                    min: slider.min,
                    max: slider.max,
                });
            }
        }
        Ok(())
    }
}

impl AircraftProperties for AircraftConfig {
    fn mass(&self) -> f64 {
        self.mass
    }

    fn wing_area(&self) -> f64 {
        self.wing_area
    }

    fn cl_max(&self) -> f64 {
        self.cl_max
    }

    fn zero_lift_drag_coefficient(&self) -> f64 {
        self.cd0
    }

    fn induced_drag_factor(&self) -> f64 {
        self.k
    }

    fn shaft_power(&self) -> f64 {
        self.power_hp * WATTS_PER_HP
    }

    fn propulsive_efficiency(&self) -> f64 {
        self.eta
    }

    fn rolling_friction(&self) -> f64 {
        self.mu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trainer_is_within_ranges() {
        assert!(AircraftConfig::trainer().validate().is_ok());
        assert!(AircraftConfig::default().validate().is_ok());
    }

    #[test]
    fn test_with_replaces_one_field() {
        let base = AircraftConfig::trainer();
        let heavier = base.with(Parameter::Mass, 2400.0);
        assert_eq!(heavier.mass, 2400.0);
        assert_eq!(heavier.with(Parameter::Mass, base.mass), base);
        assert_eq!(base.mass, 1200.0);
    }

    #[test]
    fn test_validate_reports_first_bad_field() {
        let config = AircraftConfig {
            eta: 1.2,
            altitude: -10.0,
            ..AircraftConfig::trainer()
        };
        match config.validate() {
            Err(PerfError::OutOfRange { parameter, value, .. }) => {
                assert_eq!(parameter, "eta");
                assert_eq!(value, 1.2);
            }
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_nan() {
        let config = AircraftConfig {
            mass: f64::NAN,
            ..AircraftConfig::trainer()
        };
        assert!(config.validate().is_err());
    }
}
