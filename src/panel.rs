use crate::calculator::calculate;
use crate::config::{AircraftConfig, Parameter};
use crate::models::performance::PerformanceReport;
use log::debug;

type Listener = Box<dyn FnMut(&PerformanceReport)>;

/// Nine bounded sliders over an [`AircraftConfig`].
///
/// Every effective change recomputes the report once, on the calling thread, and hands it
/// to each listener in registration order.
pub struct ControlPanel {
    config: AircraftConfig,
    report: PerformanceReport,
    listeners: Vec<Listener>,
}

impl ControlPanel {
    /// Starts from `config` with each value snapped onto its slider.
    pub fn new(config: AircraftConfig) -> Self {
        let mut snapped = config;
        for parameter in Parameter::ALL {
            snapped = snapped.with(parameter, parameter.slider().snap(config.get(parameter)));
        }
        Self {
            config: snapped,
            report: calculate(&snapped),
            listeners: Vec::new(),
        }
    }

    pub fn config(&self) -> &AircraftConfig {
        &self.config
    }

    pub fn report(&self) -> &PerformanceReport {
        &self.report
    }

    pub fn get(&self, parameter: Parameter) -> f64 {
        self.config.get(parameter)
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&PerformanceReport) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Moves one slider. Returns the value actually set after snapping.
    ///
    /// Listeners only run when the snapped value differs from the current one.
    pub fn set(&mut self, parameter: Parameter, value: f64) -> f64 {
        let snapped = parameter.slider().snap(value);
        if snapped == self.config.get(parameter) {
            return snapped;
        }
        debug!("{} -> {}", parameter, snapped);
        self.config = self.config.with(parameter, snapped);
        self.refresh();
        snapped
    }

    /// Recomputes the report from the current config and notifies listeners.
    pub fn refresh(&mut self) {
        self.report = calculate(&self.config);
        for listener in self.listeners.iter_mut() {
            listener(&self.report);
        }
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new(AircraftConfig::default())
    }
}
