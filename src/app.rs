//! Native window that renders the frequency-vs-impact trend chart.

use eframe::egui;
use egui_plot::{Line, MarkerShape, Plot, PlotBounds, PlotPoint, Points, Text};

use crate::analysis::aggregate::TrendPoint;
use crate::analysis::impact::ImpactLevel;
use crate::error::{AnalysisError, Result};

pub const CHART_TITLE: &str = "Trend of Mood Swing Frequency vs. Impact on Daily Tasks";
const X_LABEL: &str = "Mood Swing Frequency (1 - Rarely, 10 - Constantly)";
const Y_LABEL: &str = "Average Impact on Daily Tasks";

const LINE_COLOR: egui::Color32 = egui::Color32::BLUE;

/// The trend viewer application.
pub struct TrendApp {
    points: Vec<TrendPoint>,
}

impl TrendApp {
    pub fn new(points: Vec<TrendPoint>) -> Self {
        Self { points }
    }
}

/// Split the trend into runs of defined means, so a group whose answers all
/// failed to map draws as a gap in the line rather than a bogus segment.
fn finite_segments(points: &[TrendPoint]) -> Vec<Vec<[f64; 2]>> {
    let mut segments: Vec<Vec<[f64; 2]>> = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();
    for p in points {
        if p.mean_impact.is_finite() {
            current.push([p.frequency, p.mean_impact]);
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// X extent of the plotted frequencies, falling back to the full 1..10 scale
/// when nothing is plottable.
fn x_range(points: &[TrendPoint]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in points {
        min = min.min(p.frequency);
        max = max.max(p.frequency);
    }
    if min > max {
        (1.0, 10.0)
    } else {
        (min, max)
    }
}

impl eframe::App for TrendApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(CHART_TITLE);
            ui.add_space(4.0);

            let segments = finite_segments(&self.points);
            let markers: Vec<[f64; 2]> = segments.iter().flatten().copied().collect();
            let (x_min, x_max) = x_range(&self.points);

            Plot::new("mood_trend")
                .x_axis_label(X_LABEL)
                .y_axis_label(Y_LABEL)
                // Whole-number impact ticks only.
                .y_axis_formatter(|mark, _range| {
                    if mark.value.fract() == 0.0 {
                        format!("{:.0}", mark.value)
                    } else {
                        String::new()
                    }
                })
                .show_grid(true)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .show(ui, |plot_ui| {
                    // Static view: y clamped to the 0..4 impact scale, with
                    // margin on the left for the scale labels.
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                        [x_min - 1.2, 0.0],
                        [x_max + 0.5, 4.0],
                    ));

                    for segment in segments {
                        plot_ui.line(Line::new(segment).color(LINE_COLOR).width(2.0));
                    }
                    plot_ui.points(
                        Points::new(markers)
                            .shape(MarkerShape::Circle)
                            .radius(4.0)
                            .filled(true)
                            .color(LINE_COLOR),
                    );

                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(x_min - 0.3, 4.0),
                            ImpactLevel::Completely.label(),
                        )
                        .anchor(egui::Align2::RIGHT_CENTER),
                    );
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(x_min - 0.3, 0.0),
                            ImpactLevel::NotAtAll.label(),
                        )
                        .anchor(egui::Align2::RIGHT_CENTER),
                    );
                });
        });
    }
}

/// Open the native chart window and block until it is closed.
///
/// A launch failure (typically a headless session with no display backend)
/// surfaces as `AnalysisError::Render`; the text report has already been
/// printed by then.
pub fn run_viewer(points: Vec<TrendPoint>) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(CHART_TITLE)
            .with_inner_size([1000.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        CHART_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(TrendApp::new(points)))),
    )
    .map_err(|e| AnalysisError::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(frequency: f64, mean_impact: f64) -> TrendPoint {
        TrendPoint { frequency, mean_impact }
    }

    #[test]
    fn undefined_means_split_the_line_into_segments() {
        let points = vec![pt(1.0, 0.5), pt(2.0, 1.0), pt(3.0, f64::NAN), pt(4.0, 3.0)];
        let segments = finite_segments(&points);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], [[1.0, 0.5], [2.0, 1.0]]);
        assert_eq!(segments[1], [[4.0, 3.0]]);
    }

    #[test]
    fn fully_defined_trend_is_a_single_segment() {
        let points = vec![pt(1.0, 0.0), pt(5.0, 2.0), pt(10.0, 4.0)];
        assert_eq!(finite_segments(&points).len(), 1);
    }

    #[test]
    fn x_range_spans_the_observed_frequencies() {
        let points = vec![pt(2.0, 1.0), pt(9.0, 3.0)];
        assert_eq!(x_range(&points), (2.0, 9.0));
    }

    #[test]
    fn x_range_falls_back_to_the_full_scale_when_empty() {
        assert_eq!(x_range(&[]), (1.0, 10.0));
    }
}
