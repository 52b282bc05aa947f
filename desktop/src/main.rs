#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::{dataset::DatasetSource, filter::WeatherFilter};
use ui::views::{ByDay, ByWeather};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    ByWeather {},
    #[route("/day")]
    ByDay {},
}

/// Points the report at a CSV on disk instead of the embedded sample.
const DATA_ENV: &str = "BIKESHARE_DATA";

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    configure_dataset();
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!(
                            "Bike Rental Report – v{}",
                            env!("CARGO_PKG_VERSION")
                        ))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    configure_dataset();
    LaunchBuilder::server().launch(App);
}

fn configure_dataset() {
    ui::report::configure_source(dataset_source(std::env::var_os(DATA_ENV)));
}

fn dataset_source(value: Option<std::ffi::OsString>) -> DatasetSource {
    match value {
        Some(path) if !path.is_empty() => DatasetSource::File(path.into()),
        _ => DatasetSource::Embedded,
    }
}

fn nav_weather(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", active_class: "active", to: Route::ByWeather {}, "{label}" })
}
fn nav_day(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", active_class: "active", to: Route::ByDay {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar (shared) updates this via context on language selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    // The weather selection outlives tab switches and language remounts.
    let filter = use_signal(WeatherFilter::default);
    use_context_provider(|| filter);

    register_nav(NavBuilder {
        weather: nav_weather,
        day: nav_day,
    });

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper forces a full remount on language change.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// A desktop-specific Router around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
