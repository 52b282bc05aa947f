use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::i18n::use_language;
use crate::report::{
    report_state, DatasetMeta, ReportExportPanel, ReportLoadError, ReportShell,
    WeekdayChartPanel, WorkingHolidayPanel,
};
use crate::t;

use super::use_weather_filter;

/// Weekday means and the working-day/holiday split. Neither chart reacts to the
/// weather selection; only the export carries it.
#[component]
pub fn ByDay() -> Element {
    let lang = use_language();
    let filter = use_weather_filter();
    debug!(lang = %lang, "ByDay render");

    let state = report_state();

    rsx! {
        ReportShell { filter,
            section { class: "page page-day",
                div { style: "display:none", "{lang}" }
                header { class: "report__header",
                    h1 { {t!("day-header")} }
                    DatasetMeta {}
                }

                if let Some(message) = state.error.clone() {
                    ReportLoadError { message }
                } else {
                    div { class: "report__panels",
                        WeekdayChartPanel {}
                        WorkingHolidayPanel {}
                    }
                }

                ReportExportPanel { filter: filter() }
            }
        }
    }
}
