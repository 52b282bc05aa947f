use crate::i18n::{self};
use crate::t;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet (inlined as well for release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Tab links supplied by the platform crate, so `ui` never needs to know each
/// platform's `Route` enum.
///
/// Each closure receives the localized label and returns a `Link` that already
/// contains it:
/// ```ignore
/// use ui::components::app_navbar::{NavBuilder, register_nav};
/// register_nav(NavBuilder {
///     weather: |label| rsx!( Link { class: "navbar__link", to: Route::ByWeather {}, "{label}" } ),
///     day: |label| rsx!( Link { class: "navbar__link", to: Route::ByDay {}, "{label}" } ),
/// });
/// ```
///
/// Without a registered builder, `AppNavbar` renders whatever `children` it is given.
pub struct NavBuilder {
    pub weather: fn(label: &str) -> Element,
    pub day: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    // Start from whatever `init` negotiated, not a hard-coded fallback.
    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();
    debug!(lang = %lang_marker, "AppNavbar render");

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let internal_nav: Option<Element> = NAV_BUILDER.get().map(|b| {
        let weather = (b.weather)(&t!("nav-weather"));
        let day = (b.day)(&t!("nav-day"));

        rsx! {
            nav { class: "navbar__links", role: "tablist",
                {weather}
                {day}
            }
        }
    });

    let title = t!("app-title");
    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Keeps a reactive dependency on the global language signal.
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-mark", "{title}" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
