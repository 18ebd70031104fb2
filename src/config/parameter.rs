use crate::errors::PerfError;
use std::fmt;
use std::str::FromStr;

/// One of the nine inputs the control panel exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Mass,
    WingArea,
    ClMax,
    Cd0,
    InducedDragFactor,
    PowerHp,
    PropulsiveEfficiency,
    RollingFriction,
    Altitude,
}

impl Parameter {
    /// Panel order.
    pub const ALL: [Parameter; 9] = [
        Parameter::Mass,
        Parameter::WingArea,
        Parameter::ClMax,
        Parameter::Cd0,
        Parameter::InducedDragFactor,
        Parameter::PowerHp,
        Parameter::PropulsiveEfficiency,
        Parameter::RollingFriction,
        Parameter::Altitude,
    ];

    /// Bounded, steppable range of the control for this parameter.
    pub fn slider(&self) -> Slider {
        match self {
            Parameter::Mass => Slider::new(500.0, 2500.0, 50.0),
            Parameter::WingArea => Slider::new(10.0, 30.0, 1.0),
            Parameter::ClMax => Slider::new(1.0, 2.0, 0.1),
            Parameter::Cd0 => Slider::new(0.01, 0.05, 0.005),
            Parameter::InducedDragFactor => Slider::new(0.02, 0.08, 0.005),
            Parameter::PowerHp => Slider::new(80.0, 400.0, 10.0),
            Parameter::PropulsiveEfficiency => Slider::new(0.5, 0.9, 0.05),
            Parameter::RollingFriction => Slider::new(0.02, 0.1, 0.01),
            Parameter::Altitude => Slider::new(0.0, 5000.0, 500.0),
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::Mass => "kg",
            Parameter::WingArea => "m²",
            Parameter::PowerHp => "hp",
            Parameter::Altitude => "m",
            _ => "-",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Parameter::Mass => write!(f, "mass"),
            Parameter::WingArea => write!(f, "wing_area"),
            Parameter::ClMax => write!(f, "cl_max"),
            Parameter::Cd0 => write!(f, "cd0"),
            Parameter::InducedDragFactor => write!(f, "k"),
            Parameter::PowerHp => write!(f, "power_hp"),
            Parameter::PropulsiveEfficiency => write!(f, "eta"),
            Parameter::RollingFriction => write!(f, "mu"),
            Parameter::Altitude => write!(f, "altitude"),
        }
    }
}

impl FromStr for Parameter {
    type Err = PerfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Short symbols from the aerodynamics notation are accepted as well
        match s.trim() {
            "mass" | "m" => Ok(Parameter::Mass),
            "wing_area" | "S" => Ok(Parameter::WingArea),
            "cl_max" | "CL_max" => Ok(Parameter::ClMax),
            "cd0" | "CD0" => Ok(Parameter::Cd0),
            "k" => Ok(Parameter::InducedDragFactor),
            "power_hp" | "power" => Ok(Parameter::PowerHp),
            "eta" => Ok(Parameter::PropulsiveEfficiency),
            "mu" => Ok(Parameter::RollingFriction),
            "altitude" | "h" => Ok(Parameter::Altitude),
            other => Err(PerfError::UnknownParameter(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Slider {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamps `value` into range and rounds it to the nearest step counted from `min`.
    /// NaN snaps to `min`.
    pub fn snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    /// Starting position of the control: the middle of the range, on a step.
    pub fn midpoint(&self) -> f64 {
        self.snap(0.5 * (self.min + self.max))
    }

    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test_case(Parameter::Mass, 1234.0, 1250.0; "mass rounds to 50 kg step")]
    #[test_case(Parameter::Mass, 10_000.0, 2500.0; "mass clamps to max")]
    #[test_case(Parameter::WingArea, -3.0, 10.0; "wing area clamps to min")]
    #[test_case(Parameter::Cd0, 0.0237, 0.025; "cd0 rounds to 0.005 step")]
    #[test_case(Parameter::Altitude, 1249.0, 1000.0; "altitude rounds down")]
    #[test_case(Parameter::Altitude, f64::NAN, 0.0; "nan snaps to min")]
    fn test_snap(parameter: Parameter, value: f64, expected: f64) {
        assert_abs_diff_eq!(parameter.slider().snap(value), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_midpoints_match_panel_defaults() {
        let expected = [1500.0, 20.0, 1.5, 0.03, 0.05, 240.0, 0.7, 0.06, 2500.0];
        for (parameter, value) in Parameter::ALL.iter().zip(expected) {
            assert_abs_diff_eq!(parameter.slider().midpoint(), value, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_name_round_trip() {
        for parameter in Parameter::ALL {
            assert_eq!(parameter.to_string().parse::<Parameter>().unwrap(), parameter);
        }
        assert_eq!("CL_max".parse::<Parameter>().unwrap(), Parameter::ClMax);
        assert!("thrust".parse::<Parameter>().is_err());
    }
}
