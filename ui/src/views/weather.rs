use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::i18n::use_language;
use crate::report::{
    report_state, DatasetMeta, ReportExportPanel, ReportLoadError, ReportShell,
    WeatherChartPanel, WeatherLegend,
};
use crate::t;

use super::use_weather_filter;

#[component]
pub fn ByWeather() -> Element {
    let lang = use_language();
    let filter = use_weather_filter();
    debug!(lang = %lang, "ByWeather render");

    let state = report_state();
    let selection = filter();

    rsx! {
        ReportShell { filter,
            section { class: "page page-weather",
                div { style: "display:none", "{lang}" }
                header { class: "report__header",
                    h1 { {t!("weather-header")} }
                    DatasetMeta {}
                }

                if let Some(message) = state.error.clone() {
                    ReportLoadError { message }
                } else {
                    WeatherChartPanel { filter: selection }
                }

                WeatherLegend {}
                ReportExportPanel { filter: selection }
            }
        }
    }
}
