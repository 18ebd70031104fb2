use crate::errors::PerfError;
use crate::models::performance::PerformanceReport;
use log::debug;
use nalgebra as na;
use std::path::Path;
use tiny_skia::{
    Color, LineCap, LineJoin, Paint, Path as SkPath, PathBuilder, Pixmap, Stroke, StrokeDash,
    Transform,
};

#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub margin: f32, // px around the plot area
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 900,
            height: 500,
            margin: 50.0,
        }
    }
}

/// Maps sweep coordinates (velocity, force) onto the canvas.
struct PlotArea {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    v_min: f64,
    v_max: f64,
    f_max: f64,
}

impl PlotArea {
    fn to_canvas(&self, velocity: f64, force: f64) -> (f32, f32) {
        let x =
            self.left + ((velocity - self.v_min) / (self.v_max - self.v_min)) as f32 * self.width;
        let y = self.top + self.height - (force / self.f_max) as f32 * self.height;
        (x, y)
    }

    fn bottom(&self) -> f32 {
        self.top + self.height
    }

    fn right(&self) -> f32 {
        self.left + self.width
    }
}

fn line_paint(r: u8, g: u8, b: u8, a: u8) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn segment(x0: f32, y0: f32, x1: f32, y1: f32) -> Option<SkPath> {
    let mut pb = PathBuilder::new();
    pb.move_to(x0, y0);
    pb.line_to(x1, y1);
    pb.finish()
}

/// Polyline through the finite samples; non-finite samples break the line.
fn curve_path(
    area: &PlotArea,
    velocity: &na::DVector<f64>,
    force: &na::DVector<f64>,
) -> Option<SkPath> {
    let mut pb = PathBuilder::new();
    let mut pen_down = false;
    for (&v, &f) in velocity.iter().zip(force.iter()) {
        if !f.is_finite() {
            pen_down = false;
            continue;
        }
        let (x, y) = area.to_canvas(v, f);
        if pen_down {
            pb.line_to(x, y);
        } else {
            pb.move_to(x, y);
            pen_down = true;
        }
    }
    pb.finish()
}

/// Drag and available thrust against velocity, with a dashed marker at the stall speed.
pub fn render_chart(report: &PerformanceReport, style: &ChartStyle) -> Result<Pixmap, PerfError> {
    let mut canvas = Pixmap::new(style.width, style.height).ok_or_else(|| {
        PerfError::RenderError(format!(
            "invalid chart size {}x{}",
            style.width, style.height
        ))
    })?;
    canvas.fill(Color::WHITE);

    let sweep = &report.sweep;
    let f_max = sweep
        .drag
        .iter()
        .chain(sweep.thrust.iter())
        .copied()
        .filter(|f| f.is_finite())
        .fold(0.0_f64, f64::max);
    let area = PlotArea {
        left: style.margin,
        top: style.margin,
        width: (style.width as f32 - 2.0 * style.margin).max(1.0),
        height: (style.height as f32 - 2.0 * style.margin).max(1.0),
        v_min: sweep.velocity.min(),
        v_max: sweep.velocity.max(),
        f_max: if f_max > 0.0 { f_max * 1.05 } else { 1.0 },
    };

    // Grid every 10 m/s and every fifth of the force axis
    let grid_paint = line_paint(0, 0, 0, 40);
    let mut grid_stroke = Stroke::default();
    grid_stroke.width = 1.0;
    let mut v = area.v_min;
    while v <= area.v_max {
        let (x, _) = area.to_canvas(v, 0.0);
        if let Some(path) = segment(x, area.top, x, area.bottom()) {
            canvas.stroke_path(&path, &grid_paint, &grid_stroke, Transform::identity(), None);
        }
        v += 10.0;
    }
    for i in 0..=5 {
        let (_, y) = area.to_canvas(area.v_min, area.f_max * i as f64 / 5.0);
        if let Some(path) = segment(area.left, y, area.right(), y) {
            canvas.stroke_path(&path, &grid_paint, &grid_stroke, Transform::identity(), None);
        }
    }

    // Axes
    let axis_paint = line_paint(0, 0, 0, 255);
    let mut axis_stroke = Stroke::default();
    axis_stroke.width = 1.5;
    let mut pb = PathBuilder::new();
    pb.move_to(area.left, area.top);
    pb.line_to(area.left, area.bottom());
    pb.line_to(area.right(), area.bottom());
    if let Some(path) = pb.finish() {
        canvas.stroke_path(&path, &axis_paint, &axis_stroke, Transform::identity(), None);
    }

    let mut curve_stroke = Stroke::default();
    curve_stroke.width = 2.0;
    curve_stroke.line_cap = LineCap::Round;
    curve_stroke.line_join = LineJoin::Round;
    if let Some(path) = curve_path(&area, &sweep.velocity, &sweep.drag) {
        canvas.stroke_path(
            &path,
            &line_paint(0, 0, 255, 255),
            &curve_stroke,
            Transform::identity(),
            None,
        );
    }
    if let Some(path) = curve_path(&area, &sweep.velocity, &sweep.thrust) {
        canvas.stroke_path(
            &path,
            &line_paint(255, 0, 0, 255),
            &curve_stroke,
            Transform::identity(),
            None,
        );
    }

    let v_stall = report.summary.stall_speed;
    if v_stall.is_finite() && v_stall >= area.v_min && v_stall <= area.v_max {
        let mut stall_stroke = Stroke::default();
        stall_stroke.width = 2.0;
        stall_stroke.dash = StrokeDash::new(vec![8.0, 6.0], 0.0);
        let (x, _) = area.to_canvas(v_stall, 0.0);
        if let Some(path) = segment(x, area.top, x, area.bottom()) {
            canvas.stroke_path(&path, &axis_paint, &stall_stroke, Transform::identity(), None);
        }
    }

    Ok(canvas)
}

pub fn save_chart<P: AsRef<Path>>(
    report: &PerformanceReport,
    style: &ChartStyle,
    path: P,
) -> Result<(), PerfError> {
    let path = path.as_ref();
    let canvas = render_chart(report, style)?;
    canvas
        .save_png(path)
        .map_err(|e| PerfError::RenderError(e.to_string()))?;
    debug!("Saved chart to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::calculate;
    use crate::config::AircraftConfig;

    fn is_white(canvas: &Pixmap, x: u32, y: u32) -> bool {
        let pixel = canvas.pixel(x, y).unwrap();
        pixel.red() == 255 && pixel.green() == 255 && pixel.blue() == 255
    }

    #[test]
    fn test_canvas_size() {
        let style = ChartStyle::default();
        let canvas = render_chart(&calculate(&AircraftConfig::trainer()), &style).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (900, 500));
        assert!(is_white(&canvas, 2, 2));
    }

    #[test]
    fn test_stall_marker_is_drawn() {
        let report = calculate(&AircraftConfig::trainer());
        let style = ChartStyle::default();
        let canvas = render_chart(&report, &style).unwrap();

        // 28.3 m/s sits inside the 20..100 sweep; first dash starts at the top edge
        let x = style.margin + (report.summary.stall_speed - 20.0) as f32 / 80.0 * 800.0;
        let pixel = canvas.pixel(x.round() as u32, style.margin as u32 + 3).unwrap();
        assert!(pixel.red() < 200);
    }

    #[test]
    fn test_zero_size_is_an_error() {
        let style = ChartStyle {
            width: 0,
            ..ChartStyle::default()
        };
        let result = render_chart(&calculate(&AircraftConfig::trainer()), &style);
        assert!(matches!(result, Err(PerfError::RenderError(_))));
    }

    #[test]
    fn test_non_finite_report_still_renders() {
        let report = calculate(&AircraftConfig {
            wing_area: 0.0,
            ..AircraftConfig::trainer()
        });
        assert!(render_chart(&report, &ChartStyle::default()).is_ok());
    }

    #[test]
    fn test_png_encoding() {
        let canvas = render_chart(&calculate(&AircraftConfig::default()), &ChartStyle::default())
            .unwrap();
        let png = canvas.encode_png().unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }
}
