use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::{
    aggregate::{weekday_means, working_holiday_split},
    format::{format_count, format_percent},
};
use crate::i18n::use_language;
use crate::t;

use super::{figures, report_state, scene::ChartCanvas};

#[component]
pub fn WeekdayChartPanel() -> Element {
    use_language();
    let means = weekday_means(report_state().records());
    debug!(days = means.len(), "weekday chart render");

    let chart = figures::weekday_chart(&means);
    let label = chart.title.clone();
    let scene = chart.scene();

    rsx! {
        section { class: "report-card report-chart",
            if means.is_empty() {
                p { class: "report-card__placeholder", {t!("day-chart-empty")} }
            } else {
                ChartCanvas { scene, label }
            }
        }
    }
}

#[component]
pub fn WorkingHolidayPanel() -> Element {
    use_language();
    let split = working_holiday_split(report_state().records());
    let total = split.total();

    let pie = figures::split_chart(&split);
    let label = pie.title.clone();
    let scene = pie.scene();

    let share = |value: f64| {
        if total > 0.0 {
            format_percent(value / total)
        } else {
            "—".to_string()
        }
    };
    let working_share = share(split.working_day);
    let holiday_share = share(split.holiday);

    rsx! {
        section { class: "report-card report-chart",
            if pie.slices.is_empty() {
                p { class: "report-card__placeholder", {t!("split-empty")} }
            } else {
                ChartCanvas { scene, label }
                div { class: "report-highlights",
                    div { class: "report-highlight",
                        span { class: "report-highlight__label", {t!("split-working-day")} }
                        strong { class: "report-highlight__value", "{format_count(split.working_day)}" }
                        span { class: "report-highlight__meta", "{working_share}" }
                    }
                    div { class: "report-highlight",
                        span { class: "report-highlight__label", {t!("split-holiday")} }
                        strong { class: "report-highlight__value", "{format_count(split.holiday)}" }
                        span { class: "report-highlight__meta", "{holiday_share}" }
                    }
                }
            }
        }
    }
}
