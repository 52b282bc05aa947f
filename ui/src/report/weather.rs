use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::{aggregate::weather_totals, dataset::WeatherSituation, filter::WeatherFilter};
use crate::i18n::{use_language, weather_description};
use crate::t;

use super::{figures, report_state, scene::ChartCanvas};

#[component]
pub fn WeatherChartPanel(filter: WeatherFilter) -> Element {
    use_language();
    let totals = weather_totals(report_state().records());
    let bars = filter.apply(&totals);
    debug!(bars = bars.len(), "weather chart render");

    let chart = figures::weather_chart(&bars);
    let label = chart.title.clone();
    let scene = chart.scene();

    rsx! {
        section { class: "report-card report-chart",
            ChartCanvas { scene, label }
            if bars.is_empty() {
                p { class: "report-card__placeholder", {t!("weather-chart-empty")} }
            }
        }
    }
}

#[component]
pub fn WeatherLegend() -> Element {
    use_language();
    rsx! {
        section { class: "report-card report-legend",
            div { class: "report-card__header",
                h2 { {t!("weather-legend-title")} }
            }
            ol { class: "report-legend__items",
                for situation in WeatherSituation::ALL {
                    li { key: "{situation.code()}", class: "report-legend__item",
                        {weather_description(situation)}
                    }
                }
            }
        }
    }
}
