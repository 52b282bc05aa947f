use dioxus::prelude::*;

use crate::core::{dataset::WeatherSituation, filter::WeatherFilter};
use crate::i18n::use_language;
use crate::t;

/// Page frame shared by both tabs: weather-code sidebar on the left, page body on the right.
#[component]
pub fn ReportShell(filter: Signal<WeatherFilter>, children: Element) -> Element {
    rsx! {
        div { class: "report-layout",
            WeatherFilterSidebar { filter }
            div { class: "report-layout__main", {children} }
        }
    }
}

/// One checkbox per weather code. Each session owns its own filter signal.
#[component]
pub fn WeatherFilterSidebar(filter: Signal<WeatherFilter>) -> Element {
    use_language();
    let current = filter();

    rsx! {
        aside { class: "report-sidebar",
            h2 { class: "report-sidebar__title", {t!("weather-filter-header")} }
            ul { class: "report-sidebar__options",
                for situation in WeatherSituation::ALL {
                    {render_option(situation, current.is_enabled(situation), filter)}
                }
            }
        }
    }
}

fn render_option(
    situation: WeatherSituation,
    enabled: bool,
    mut filter: Signal<WeatherFilter>,
) -> Element {
    let code = situation.code();
    let input_id = format!("weather-filter-{code}");

    rsx! {
        li { key: "{code}", class: "report-sidebar__option",
            input {
                id: "{input_id}",
                r#type: "checkbox",
                checked: enabled,
                onchange: move |_| filter.with_mut(|f| f.toggle(situation)),
            }
            label { r#for: "{input_id}", {t!("weather-filter-option", code = code)} }
        }
    }
}
