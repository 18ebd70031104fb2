use crate::errors::PerfError;
use crate::models::performance::VelocitySweep;
use csv::Writer;
use log::debug;
use std::io;
use std::path::Path;

/// Writes one CSV row per velocity sample, with a header row.
pub fn write_sweep_csv<W: io::Write>(sweep: &VelocitySweep, out: W) -> Result<(), PerfError> {
    let mut writer = Writer::from_writer(out);
    for sample in sweep.samples() {
        writer.serialize(sample)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_sweep_csv<P: AsRef<Path>>(sweep: &VelocitySweep, path: P) -> Result<(), PerfError> {
    let path = path.as_ref();
    let mut writer = Writer::from_path(path)?;
    for sample in sweep.samples() {
        writer.serialize(sample)?;
    }
    writer.flush()?;
    debug!("Wrote {} sweep samples to {}", sweep.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::calculate;
    use crate::config::AircraftConfig;

    #[test]
    fn test_csv_layout() {
        let report = calculate(&AircraftConfig::trainer());
        let mut buffer = Vec::new();
        write_sweep_csv(&report.sweep, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 82);
        assert_eq!(
            lines[0],
            "velocity,lift_coefficient,drag_coefficient,drag,thrust"
        );
        assert!(lines[1].starts_with("20.0,"));
        assert!(lines[81].starts_with("100.0,"));
    }
}
