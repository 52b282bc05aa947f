//! The report's three charts, built from aggregates with localized labels.

use crate::core::{
    aggregate::{WeekdayMean, WorkingHolidaySplit},
    filter::WeatherBar,
    format::{format_count, format_millions, format_tick},
};
use crate::i18n::day_name;
use crate::t;

use super::charts::{BarChart, BarChartSpec, BarEntry, Orientation, PieChart, PieEntry, ValueAxis};

/// Weekday means are drawn against this fixed window.
pub const WEEKDAY_AXIS: ValueAxis = ValueAxis::Fixed {
    min: 4000.0,
    max: 5000.0,
    step: 100.0,
};
pub const WEEKDAY_BAR_COLOR: &str = "#4c72b0";
/// Working day, then holiday.
pub const SPLIT_COLORS: [&str; 2] = ["#1f77b4", "#ff7f0e"];

/// The weather axis switches to millions once its range reaches this.
const MILLIONS_THRESHOLD: f64 = 1_000_000.0;

/// Horizontal bars in the order given (already filtered, sorted and colored).
pub fn weather_chart(bars: &[WeatherBar]) -> BarChart {
    let largest = bars.iter().map(|bar| bar.cnt_sum).fold(0.0, f64::max);
    let (_, axis_max, _) = ValueAxis::Auto.resolve(largest);
    let (value_axis_title, tick_format) = if axis_max >= MILLIONS_THRESHOLD {
        (t!("weather-chart-x-label"), format_millions as fn(f64, f64) -> String)
    } else {
        (t!("weather-chart-x-label-count"), format_tick as fn(f64, f64) -> String)
    };

    let spec = BarChartSpec {
        title: t!("weather-chart-title"),
        value_axis_title,
        category_axis_title: Some(t!("weather-chart-y-label")),
        orientation: Orientation::Horizontal,
        axis: ValueAxis::Auto,
        tick_format,
        value_format: format_count,
    };
    let entries: Vec<BarEntry> = bars
        .iter()
        .map(|bar| BarEntry {
            label: bar.situation.code().to_string(),
            value: bar.cnt_sum,
            color: bar.color.to_string(),
        })
        .collect();

    BarChart::layout(&spec, &entries)
}

/// Vertical bars sorted by mean descending, each labeled with its day name.
pub fn weekday_chart(means: &[WeekdayMean]) -> BarChart {
    let mut sorted = means.to_vec();
    sorted.sort_by(|a, b| b.mean.total_cmp(&a.mean));

    let spec = BarChartSpec {
        title: t!("day-chart-title"),
        value_axis_title: t!("day-chart-y-label"),
        category_axis_title: None,
        orientation: Orientation::Vertical,
        axis: WEEKDAY_AXIS,
        tick_format: format_tick,
        value_format: format_count,
    };
    let entries: Vec<BarEntry> = sorted
        .iter()
        .map(|mean| BarEntry {
            label: day_name(mean.weekday),
            value: mean.mean,
            color: WEEKDAY_BAR_COLOR.to_string(),
        })
        .collect();

    BarChart::layout(&spec, &entries)
}

pub fn split_chart(split: &WorkingHolidaySplit) -> PieChart {
    PieChart::layout(
        t!("split-title"),
        &[
            PieEntry {
                label: t!("split-working-day"),
                value: split.working_day,
                color: SPLIT_COLORS[0].to_string(),
            },
            PieEntry {
                label: t!("split-holiday"),
                value: split.holiday,
                color: SPLIT_COLORS[1].to_string(),
            },
        ],
    )
}
