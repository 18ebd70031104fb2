pub mod chart;
pub mod export;
pub mod summary;

pub use chart::{render_chart, save_chart, ChartStyle};
pub use export::{save_sweep_csv, write_sweep_csv};
pub use summary::format_summary;
