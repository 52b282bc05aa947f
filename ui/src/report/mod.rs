pub mod charts;
pub mod figures;
pub mod scene;

mod export;
pub use export::ReportExportPanel;

mod sidebar;
pub use sidebar::{ReportShell, WeatherFilterSidebar};

mod weather;
pub use weather::{WeatherChartPanel, WeatherLegend};

mod weekday;
pub use weekday::{WeekdayChartPanel, WorkingHolidayPanel};

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use once_cell::sync::{Lazy, OnceCell};
use serde::Serialize;

use crate::core::{
    aggregate::{
        weather_totals, weekday_means, working_holiday_split, WeatherTotal, WeekdayMean,
        WorkingHolidaySplit,
    },
    dataset::{Dataset, DatasetSource, RentalRecord, WeatherSituation},
    filter::WeatherFilter,
};
use crate::i18n::use_language;

/// The loaded base table, or the reason it could not be loaded.
#[derive(Debug, Clone, Default)]
pub struct ReportState {
    pub dataset: Dataset,
    pub source: DatasetSource,
    pub error: Option<String>,
}

impl ReportState {
    pub fn load(source: DatasetSource) -> Self {
        match Dataset::load(&source) {
            Ok(dataset) => {
                info!(
                    rows = dataset.len(),
                    source = %source.label(),
                    "rental dataset loaded"
                );
                Self {
                    dataset,
                    source,
                    error: None,
                }
            }
            Err(err) => {
                warn!(source = %source.label(), "rental dataset failed to load: {err}");
                Self {
                    dataset: Dataset::default(),
                    source,
                    error: Some(err.to_string()),
                }
            }
        }
    }

    pub fn records(&self) -> &[RentalRecord] {
        self.dataset.records()
    }
}

static SOURCE: OnceCell<DatasetSource> = OnceCell::new();

static REPORT: Lazy<ReportState> =
    Lazy::new(|| ReportState::load(SOURCE.get().cloned().unwrap_or_default()));

/// Pick the dataset source before the first render. Returns `false` if a source was
/// already set; the first one wins.
pub fn configure_source(source: DatasetSource) -> bool {
    SOURCE.set(source).is_ok()
}

/// Process-wide base table, loaded on first access and shared read-only by every
/// session.
pub fn report_state() -> &'static ReportState {
    &REPORT
}

/// Every aggregate for one filter selection, as exported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSnapshot {
    pub selected_weather: Vec<WeatherSituation>,
    pub weather: Vec<WeatherTotal>,
    pub weekday: Vec<WeekdayMean>,
    pub split: WorkingHolidaySplit,
}

impl ReportSnapshot {
    pub fn compute(records: &[RentalRecord], filter: &WeatherFilter) -> Self {
        Self {
            selected_weather: filter.selected(),
            weather: weather_totals(records),
            weekday: weekday_means(records),
            split: working_holiday_split(records),
        }
    }
}

#[component]
pub fn ReportLoadError(message: String) -> Element {
    use_language();
    rsx! {
        section { class: "report-card report-card--error",
            p { class: "report-card__placeholder", {crate::t!("report-load-error", error = message)} }
        }
    }
}

#[component]
pub fn DatasetMeta() -> Element {
    use_language();
    let state = report_state();
    let rows = state.dataset.len();
    let source = state.source.label();

    rsx! {
        span { class: "report-card__meta", {crate::t!("report-dataset-meta", rows = rows, source = source)} }
    }
}
