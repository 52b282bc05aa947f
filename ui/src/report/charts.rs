//! Chart layouts for the report: horizontal/vertical bar charts and a pie.
//!
//! Layouts are computed from plain rows into pixel geometry, then lowered to a
//! [`Scene`]. Nothing here renders; see `scene.rs` for that.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::scene::{Mark, Scene, TextAnchor};

pub const CHART_WIDTH: f64 = 720.0;
pub const CHART_HEIGHT: f64 = 380.0;

const GRID_STROKE: &str = "#d9dde5";
const AXIS_STROKE: &str = "#5b6272";
const BAR_FILL_RATIO: f64 = 0.7;
const AUTO_TICKS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Categories down the left edge, values grow to the right.
    Horizontal,
    /// Categories along the bottom, values grow upwards.
    Vertical,
}

/// How the value axis picks its range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueAxis {
    /// Zero up to a rounded bound above the largest value.
    Auto,
    /// Exact range; bars outside it are clamped to the plot area.
    Fixed { min: f64, max: f64, step: f64 },
}

impl ValueAxis {
    /// `(min, max, step)` for a chart whose largest value is `largest`.
    pub fn resolve(self, largest: f64) -> (f64, f64, f64) {
        match self {
            ValueAxis::Fixed { min, max, step } => (min, max, step),
            ValueAxis::Auto => {
                if !largest.is_finite() || largest <= 0.0 {
                    return (0.0, 1.0, 0.2);
                }
                let step = nice_step(largest / AUTO_TICKS);
                (0.0, (largest / step).ceil() * step, step)
            }
        }
    }
}

/// Round a raw step up to 1, 2, 2.5 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|f| *f >= normalized)
        .unwrap_or(10.0);
    factor * magnitude
}

/// One row going into a bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarEntry {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// Titles and formatting for a bar chart.
#[derive(Debug, Clone)]
pub struct BarChartSpec {
    pub title: String,
    pub value_axis_title: String,
    pub category_axis_title: Option<String>,
    pub orientation: Orientation,
    pub axis: ValueAxis,
    /// Called with `(value, step)` so labels can carry as many decimals as the step needs.
    pub tick_format: fn(f64, f64) -> String,
    pub value_format: fn(f64) -> String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub value_label: String,
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Pixel offset along the value axis (x for horizontal, y for vertical).
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub width: f64,
    pub height: f64,
    pub plot: PlotArea,
    pub orientation: Orientation,
    pub title: String,
    pub value_axis_title: String,
    pub category_axis_title: Option<String>,
    pub bars: Vec<Bar>,
    pub ticks: Vec<Tick>,
}

impl BarChart {
    /// Lay out `entries` in the given order (first entry on top / on the left).
    pub fn layout(spec: &BarChartSpec, entries: &[BarEntry]) -> Self {
        let plot = match spec.orientation {
            Orientation::Horizontal => PlotArea {
                left: 120.0,
                top: 56.0,
                width: CHART_WIDTH - 120.0 - 96.0,
                height: CHART_HEIGHT - 56.0 - 64.0,
            },
            Orientation::Vertical => PlotArea {
                left: 84.0,
                top: 56.0,
                width: CHART_WIDTH - 84.0 - 24.0,
                height: CHART_HEIGHT - 56.0 - 64.0,
            },
        };

        let largest = entries.iter().map(|e| e.value).fold(0.0, f64::max);
        let (min, max, step) = spec.axis.resolve(largest);
        let span = (max - min).max(f64::EPSILON);
        let fraction = |value: f64| ((value - min) / span).clamp(0.0, 1.0);

        let ticks = tick_values(min, max, step)
            .into_iter()
            .map(|value| Tick {
                value,
                position: match spec.orientation {
                    Orientation::Horizontal => plot.left + fraction(value) * plot.width,
                    Orientation::Vertical => plot.bottom() - fraction(value) * plot.height,
                },
                label: (spec.tick_format)(value, step),
            })
            .collect();

        let count = entries.len().max(1) as f64;
        let bars = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let share = fraction(entry.value);
                let (x, y, width, height) = match spec.orientation {
                    Orientation::Horizontal => {
                        let band = plot.height / count;
                        let thickness = band * BAR_FILL_RATIO;
                        (
                            plot.left,
                            plot.top + idx as f64 * band + (band - thickness) / 2.0,
                            share * plot.width,
                            thickness,
                        )
                    }
                    Orientation::Vertical => {
                        let band = plot.width / count;
                        let thickness = band * BAR_FILL_RATIO;
                        let length = share * plot.height;
                        (
                            plot.left + idx as f64 * band + (band - thickness) / 2.0,
                            plot.bottom() - length,
                            thickness,
                            length,
                        )
                    }
                };
                Bar {
                    label: entry.label.clone(),
                    value: entry.value,
                    value_label: (spec.value_format)(entry.value),
                    color: entry.color.clone(),
                    x,
                    y,
                    width,
                    height,
                }
            })
            .collect();

        Self {
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            plot,
            orientation: spec.orientation,
            title: spec.title.clone(),
            value_axis_title: spec.value_axis_title.clone(),
            category_axis_title: spec.category_axis_title.clone(),
            bars,
            ticks,
        }
    }

    pub fn scene(&self) -> Scene {
        let mut scene = Scene::new(self.width, self.height);
        let plot = self.plot;

        scene.push(Mark::title(self.width / 2.0, 30.0, self.title.as_str()));

        for tick in &self.ticks {
            match self.orientation {
                Orientation::Horizontal => {
                    scene.push(Mark::Line {
                        x1: tick.position,
                        y1: plot.top,
                        x2: tick.position,
                        y2: plot.bottom(),
                        stroke: GRID_STROKE,
                    });
                    scene.push(Mark::text(
                        tick.position,
                        plot.bottom() + 18.0,
                        tick.label.as_str(),
                        TextAnchor::Middle,
                        12.0,
                    ));
                }
                Orientation::Vertical => {
                    scene.push(Mark::Line {
                        x1: plot.left,
                        y1: tick.position,
                        x2: plot.right(),
                        y2: tick.position,
                        stroke: GRID_STROKE,
                    });
                    scene.push(Mark::text(
                        plot.left - 8.0,
                        tick.position + 4.0,
                        tick.label.as_str(),
                        TextAnchor::End,
                        12.0,
                    ));
                }
            }
        }

        for bar in &self.bars {
            scene.push(Mark::Rect {
                x: bar.x,
                y: bar.y,
                width: bar.width,
                height: bar.height,
                fill: bar.color.clone(),
            });
            match self.orientation {
                Orientation::Horizontal => {
                    scene.push(Mark::text(
                        plot.left - 10.0,
                        bar.y + bar.height / 2.0 + 5.0,
                        bar.label.as_str(),
                        TextAnchor::End,
                        13.0,
                    ));
                    scene.push(Mark::text(
                        bar.x + bar.width + 6.0,
                        bar.y + bar.height / 2.0 + 4.0,
                        bar.value_label.as_str(),
                        TextAnchor::Start,
                        12.0,
                    ));
                }
                Orientation::Vertical => {
                    scene.push(Mark::text(
                        bar.x + bar.width / 2.0,
                        plot.bottom() + 20.0,
                        bar.label.as_str(),
                        TextAnchor::Middle,
                        13.0,
                    ));
                    if bar.height > 0.0 {
                        scene.push(Mark::text(
                            bar.x + bar.width / 2.0,
                            bar.y - 6.0,
                            bar.value_label.as_str(),
                            TextAnchor::Middle,
                            12.0,
                        ));
                    }
                }
            }
        }

        // Axis lines on top of the bars.
        scene.push(Mark::Line {
            x1: plot.left,
            y1: plot.top,
            x2: plot.left,
            y2: plot.bottom(),
            stroke: AXIS_STROKE,
        });
        scene.push(Mark::Line {
            x1: plot.left,
            y1: plot.bottom(),
            x2: plot.right(),
            y2: plot.bottom(),
            stroke: AXIS_STROKE,
        });

        let (value_title_x, value_title_y, value_vertical) = match self.orientation {
            Orientation::Horizontal => (plot.left + plot.width / 2.0, self.height - 14.0, false),
            Orientation::Vertical => (22.0, plot.top + plot.height / 2.0, true),
        };
        scene.push(Mark::Text {
            x: value_title_x,
            y: value_title_y,
            text: self.value_axis_title.clone(),
            anchor: TextAnchor::Middle,
            size: 13.0,
            bold: false,
            vertical: value_vertical,
        });

        if let Some(category_title) = &self.category_axis_title {
            let (x, y, vertical) = match self.orientation {
                Orientation::Horizontal => (22.0, plot.top + plot.height / 2.0, true),
                Orientation::Vertical => (plot.left + plot.width / 2.0, self.height - 14.0, false),
            };
            scene.push(Mark::Text {
                x,
                y,
                text: category_title.clone(),
                anchor: TextAnchor::Middle,
                size: 13.0,
                bold: false,
                vertical,
            });
        }

        scene
    }
}

fn tick_values(min: f64, max: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || !step.is_finite() || max < min {
        return vec![min];
    }
    let count = ((max - min) / step).round() as usize;
    (0..=count).map(|i| min + i as f64 * step).collect()
}

/// One slice going into a pie.
#[derive(Debug, Clone, PartialEq)]
pub struct PieEntry {
    pub label: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub fraction: f64,
    pub percent_label: String,
    pub color: String,
    /// Radians, clockwise from twelve o'clock.
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieSlice {
    fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub width: f64,
    pub height: f64,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Slices in entry order. A pie whose values sum to zero has no slices.
    pub fn layout(title: impl Into<String>, entries: &[PieEntry]) -> Self {
        let total: f64 = entries.iter().map(|e| e.value.max(0.0)).sum();
        let mut slices = Vec::new();

        if total > 0.0 {
            let mut angle = 0.0;
            for entry in entries {
                let fraction = entry.value.max(0.0) / total;
                let sweep = fraction * TAU;
                slices.push(PieSlice {
                    label: entry.label.clone(),
                    value: entry.value,
                    fraction,
                    percent_label: format!("{:.1}%", fraction * 100.0),
                    color: entry.color.clone(),
                    start_angle: angle,
                    end_angle: angle + sweep,
                });
                angle += sweep;
            }
        }

        Self {
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            cx: CHART_WIDTH / 2.0,
            cy: CHART_HEIGHT / 2.0 + 16.0,
            radius: 130.0,
            title: title.into(),
            slices,
        }
    }

    fn point(&self, angle: f64, radius: f64) -> (f64, f64) {
        let theta = angle - FRAC_PI_2;
        (self.cx + radius * theta.cos(), self.cy + radius * theta.sin())
    }

    /// SVG path for one wedge.
    pub fn wedge_path(&self, slice: &PieSlice) -> String {
        let (x0, y0) = self.point(slice.start_angle, self.radius);
        let (x1, y1) = self.point(slice.end_angle, self.radius);
        let large_arc = u8::from(slice.end_angle - slice.start_angle > PI);
        format!(
            "M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z",
            cx = self.cx,
            cy = self.cy,
            r = self.radius,
        )
    }

    pub fn scene(&self) -> Scene {
        let mut scene = Scene::new(self.width, self.height);
        scene.push(Mark::title(self.width / 2.0, 30.0, self.title.as_str()));

        for slice in &self.slices {
            if slice.fraction >= 1.0 - 1e-9 {
                scene.push(Mark::Circle {
                    cx: self.cx,
                    cy: self.cy,
                    r: self.radius,
                    fill: slice.color.clone(),
                });
            } else if slice.fraction > 0.0 {
                scene.push(Mark::Path {
                    d: self.wedge_path(slice),
                    fill: slice.color.clone(),
                });
            }
        }

        for slice in &self.slices {
            let mid = slice.mid_angle();
            let (px, py) = self.point(mid, self.radius * 0.6);
            scene.push(Mark::text(
                px,
                py + 5.0,
                slice.percent_label.as_str(),
                TextAnchor::Middle,
                14.0,
            ));

            let (lx, ly) = self.point(mid, self.radius * 1.14);
            let anchor = if lx >= self.cx {
                TextAnchor::Start
            } else {
                TextAnchor::End
            };
            scene.push(Mark::text(lx, ly + 5.0, slice.label.as_str(), anchor, 14.0));
        }

        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(value: f64) -> String {
        format!("{value:.0}")
    }

    fn plain_tick(value: f64, _step: f64) -> String {
        plain(value)
    }

    fn spec(orientation: Orientation, axis: ValueAxis) -> BarChartSpec {
        BarChartSpec {
            title: "Title".into(),
            value_axis_title: "Value".into(),
            category_axis_title: None,
            orientation,
            axis,
            tick_format: plain_tick,
            value_format: plain,
        }
    }

    fn entry(label: &str, value: f64) -> BarEntry {
        BarEntry {
            label: label.into(),
            value,
            color: "#000000".into(),
        }
    }

    #[test]
    fn nice_steps_round_up() {
        for (raw, expected) in [(0.7, 1.0), (13.0, 20.0), (2_200.0, 2_500.0), (450_000.0, 500_000.0)] {
            let step = nice_step(raw);
            assert!((step - expected).abs() < expected * 1e-9, "{raw} -> {step}");
        }
    }

    #[test]
    fn auto_axis_covers_largest_value() {
        let chart = BarChart::layout(
            &spec(Orientation::Horizontal, ValueAxis::Auto),
            &[entry("a", 2_372_118.0), entry("b", 840_906.0)],
        );
        let last = chart.ticks.last().unwrap();
        assert!(last.value >= 2_372_118.0);
        assert_eq!(chart.ticks.first().unwrap().value, 0.0);
        assert!(chart.bars[0].width > chart.bars[1].width);
        assert!(chart.bars[0].width <= chart.plot.width);
    }

    #[test]
    fn horizontal_bars_stack_top_down_in_entry_order() {
        let chart = BarChart::layout(
            &spec(Orientation::Horizontal, ValueAxis::Auto),
            &[entry("first", 10.0), entry("second", 30.0)],
        );
        assert!(chart.bars[0].y < chart.bars[1].y);
        assert_eq!(chart.bars[0].x, chart.plot.left);
    }

    #[test]
    fn fixed_axis_clamps_bars() {
        let axis = ValueAxis::Fixed {
            min: 4000.0,
            max: 5000.0,
            step: 100.0,
        };
        let chart = BarChart::layout(
            &spec(Orientation::Vertical, axis),
            &[entry("low", 3500.0), entry("mid", 4500.0), entry("high", 6000.0)],
        );
        assert_eq!(chart.ticks.len(), 11);
        assert_eq!(chart.ticks[0].label, "4000");
        assert_eq!(chart.ticks[10].label, "5000");
        assert_eq!(chart.bars[0].height, 0.0);
        assert!((chart.bars[1].height - chart.plot.height / 2.0).abs() < 1e-9);
        assert_eq!(chart.bars[2].height, chart.plot.height);
        assert_eq!(chart.bars[2].y, chart.plot.top);
    }

    #[test]
    fn empty_chart_still_has_axis() {
        let chart = BarChart::layout(&spec(Orientation::Horizontal, ValueAxis::Auto), &[]);
        assert!(chart.bars.is_empty());
        assert!(!chart.ticks.is_empty());
        assert!(chart.scene().texts().contains(&"Title"));
    }

    #[test]
    fn scene_carries_labels() {
        let chart = BarChart::layout(
            &spec(Orientation::Vertical, ValueAxis::Auto),
            &[entry("Sunday", 40.0)],
        );
        let scene = chart.scene();
        let texts = scene.texts();
        assert!(texts.contains(&"Sunday"));
        assert!(texts.contains(&"40"));
        assert!(texts.contains(&"Value"));
    }

    fn pie_entry(label: &str, value: f64) -> PieEntry {
        PieEntry {
            label: label.into(),
            value,
            color: "#123456".into(),
        }
    }

    #[test]
    fn pie_percentages_have_one_decimal() {
        let pie = PieChart::layout(
            "Split",
            &[pie_entry("Working Day", 2.0), pie_entry("Holiday", 1.0)],
        );
        let labels: Vec<&str> = pie.slices.iter().map(|s| s.percent_label.as_str()).collect();
        assert_eq!(labels, vec!["66.7%", "33.3%"]);
        assert!((pie.slices[1].end_angle - TAU).abs() < 1e-9);
    }

    #[test]
    fn pie_with_zero_total_has_no_slices() {
        let pie = PieChart::layout("Split", &[pie_entry("a", 0.0), pie_entry("b", 0.0)]);
        assert!(pie.slices.is_empty());
    }

    #[test]
    fn full_slice_draws_a_circle() {
        let pie = PieChart::layout("Split", &[pie_entry("a", 5.0), pie_entry("b", 0.0)]);
        let scene = pie.scene();
        assert!(scene
            .marks
            .iter()
            .any(|m| matches!(m, Mark::Circle { .. })));
        assert!(!scene.marks.iter().any(|m| matches!(m, Mark::Path { .. })));
    }

    #[test]
    fn large_wedge_sets_arc_flag() {
        let pie = PieChart::layout("Split", &[pie_entry("a", 3.0), pie_entry("b", 1.0)]);
        assert!(pie.wedge_path(&pie.slices[0]).contains(" 0 1 1 "));
        assert!(pie.wedge_path(&pie.slices[1]).contains(" 0 0 1 "));
    }
}
