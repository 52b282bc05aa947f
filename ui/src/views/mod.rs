//! The two report tabs. Platform crates route to these.

use dioxus::prelude::*;

use crate::core::filter::WeatherFilter;

mod day;
mod weather;

pub use day::ByDay;
pub use weather::ByWeather;

/// The session's weather selection. Platforms provide one signal at the root so the
/// selection survives tab switches; without it each view keeps its own.
fn use_weather_filter() -> Signal<WeatherFilter> {
    let local = use_signal(WeatherFilter::default);
    try_use_context::<Signal<WeatherFilter>>().unwrap_or(local)
}
