use crate::models::performance::PerformanceReport;
use std::fmt;

/// Text panel: density to 3 decimals, speeds and distance to 2.
pub fn format_summary(report: &PerformanceReport) -> String {
    report.to_string()
}

impl fmt::Display for PerformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Density: {:.3} kg/m³", self.environment.density)?;
        writeln!(f, "Stall Speed: {:.2} m/s", self.summary.stall_speed)?;
        writeln!(f, "Takeoff Speed: {:.2} m/s", self.summary.takeoff_speed)?;
        writeln!(f)?;
        write!(f, "TAKEOFF DISTANCE: {:.2} m", self.summary.takeoff_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::calculate;
    use crate::config::AircraftConfig;

    #[test]
    fn test_trainer_summary() {
        let text = format_summary(&calculate(&AircraftConfig::trainer()));
        assert_eq!(
            text,
            "Density: 1.225 kg/m³\n\
             Stall Speed: 28.30 m/s\n\
             Takeoff Speed: 33.96 m/s\n\
             \n\
             TAKEOFF DISTANCE: 193.22 m"
        );
    }

    #[test]
    fn test_non_finite_distance_is_printed() {
        let report = calculate(&AircraftConfig {
            wing_area: 0.0,
            ..AircraftConfig::trainer()
        });
        assert!(format_summary(&report).ends_with("TAKEOFF DISTANCE: NaN m"));
    }
}
