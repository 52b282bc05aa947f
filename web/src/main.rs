use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::filter::WeatherFilter;
use ui::views::{ByDay, ByWeather};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    ByWeather {},
    #[route("/day")]
    ByDay {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_weather(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "active",
        to: Route::ByWeather {},
        "{label}"
    })
}
fn nav_day(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "active",
        to: Route::ByDay {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        weather: nav_weather,
        day: nav_day,
    });

    // One weather selection per browser session, shared by both tabs.
    let filter = use_signal(WeatherFilter::default);
    use_context_provider(|| filter);
    // AppNavbar (shared) updates this via context on language selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper forces a full remount on language change.
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
