use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum PerfError {
    IoError(io::Error),
    YamlError(serde_yaml::Error),
    CsvError(csv::Error),
    RenderError(String),
    OutOfRange {
        parameter: String,
        value: f64,
        min: f64,
        max: f64,
    },
    UnknownParameter(String),
    InvalidValue(String),
}

impl fmt::Display for PerfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerfError::IoError(e) => write!(f, "I/O error: {}", e),
            PerfError::YamlError(e) => write!(f, "YAML parsing error: {}", e),
            PerfError::CsvError(e) => write!(f, "CSV writing error: {}", e),
            PerfError::RenderError(e) => write!(f, "Render error: {}", e),
            PerfError::OutOfRange {
                parameter,
                value,
                min,
                max,
            } => write!(
                f,
                "{} = {} is outside the allowed range [{}, {}]",
                parameter, value, min, max
            ),
            PerfError::UnknownParameter(name) => write!(f, "Unknown parameter '{}'", name),
            PerfError::InvalidValue(raw) => write!(f, "Invalid value '{}'", raw),
        }
    }
}

impl Error for PerfError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PerfError::IoError(e) => Some(e),
            PerfError::YamlError(e) => Some(e),
            PerfError::CsvError(e) => Some(e),
            _ => None,
        }
    }
}

// `From<T>` conversions so `?` maps library errors automatically
impl From<io::Error> for PerfError {
    fn from(err: io::Error) -> Self {
        PerfError::IoError(err)
    }
}

impl From<serde_yaml::Error> for PerfError {
    fn from(err: serde_yaml::Error) -> Self {
        PerfError::YamlError(err)
    }
}

impl From<csv::Error> for PerfError {
    fn from(err: csv::Error) -> Self {
        PerfError::CsvError(err)
    }
}
