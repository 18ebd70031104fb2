use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub altitude: f64, // m
    pub density: f64,  // kg/m³
}

impl Environment {
    pub fn at_altitude(altitude: f64) -> Self {
        // Simple exponential atmospheric model
        let density = RHO_0 * (-altitude / SCALE_HEIGHT).exp();

        Environment { altitude, density }
    }

    pub fn sea_level() -> Self {
        Self::at_altitude(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test]
    fn test_sea_level_density_is_exact() {
        assert_eq!(Environment::sea_level().density, RHO_0);
    }

    #[test_case(8500.0, 0.450652; "one scale height")]
    #[test_case(2500.0, 0.912856; "2500 m")]
    #[test_case(5000.0, 0.680250; "top of the altitude range")]
    fn test_density(altitude: f64, expected: f64) {
        assert_abs_diff_eq!(
            Environment::at_altitude(altitude).density,
            expected,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_density_decreases_with_altitude() {
        let mut previous = Environment::sea_level().density;
        for altitude in (500..=5000).step_by(500) {
            let density = Environment::at_altitude(altitude as f64).density;
            assert!(density < previous);
            previous = density;
        }
    }
}
