use super::aircraft::AircraftConfig;
use crate::errors::PerfError;
use log::debug;
use std::fs;
use std::path::Path;

/// Parses a YAML aircraft description. Missing fields take their default panel value.
pub fn parse_aircraft_config(yaml: &str) -> Result<AircraftConfig, PerfError> {
    let config: AircraftConfig = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}

pub fn load_aircraft_config<P: AsRef<Path>>(path: P) -> Result<AircraftConfig, PerfError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let config = parse_aircraft_config(&contents)?;
    debug!("Loaded aircraft config from {}: {:?}", path.display(), config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = "
mass: 1200
wing_area: 16
cl_max: 1.5
cd0: 0.025
k: 0.04
power_hp: 180
eta: 0.75
mu: 0.04
altitude: 0
";
        let config = parse_aircraft_config(yaml).unwrap();
        assert_eq!(config, AircraftConfig::trainer());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = parse_aircraft_config("mass: 900\n").unwrap();
        assert_eq!(config.mass, 900.0);
        assert_eq!(config.altitude, AircraftConfig::default().altitude);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let err = parse_aircraft_config("power_hp: 1000\n").unwrap_err();
        assert!(matches!(err, PerfError::OutOfRange { .. }));
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let err = parse_aircraft_config("mass: [heavy").unwrap_err();
        assert!(matches!(err, PerfError::YamlError(_)));
    }
}
