//! Switching language at runtime must re-render every report panel, not just the
//! page heading. Kept in its own test binary because it flips the global loader.

use std::cell::Cell;

use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use ui::views::ByWeather;

thread_local! {
    static LANG: Cell<Option<Signal<String>>> = const { Cell::new(None) };
}

/// Provides the language signal the way the platform shells do.
#[component]
fn Shell() -> Element {
    let lang = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang);
    LANG.with(|slot| slot.set(Some(lang)));

    rsx! { ByWeather {} }
}

#[test]
fn weather_tab_follows_runtime_language_switch() {
    ui::i18n::init();
    ui::i18n::set_language("en-US").unwrap();

    let mut dom = VirtualDom::new(Shell);
    dom.rebuild_in_place();
    let before = dioxus::ssr::render(&dom);
    assert!(before.contains("Bike rentals by weather"));
    assert!(before.contains("Filter by weather code"));

    ui::i18n::set_language("id-ID").unwrap();
    dom.in_runtime(|| {
        let mut lang = LANG.with(Cell::get).expect("shell rendered");
        lang.set("id-ID".to_string());
    });
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    let after = dioxus::ssr::render(&dom);

    assert!(after.contains("Analisis Berdasarkan Cuaca"));
    for translated in [
        "Jumlah rental sepeda berdasarkan cuaca",
        "Filter Berdasarkan Kode Cuaca",
        "Kode Cuaca",
        "Ekspor CSV",
    ] {
        assert!(after.contains(translated), "missing `{translated}` after switch");
    }
    for stale in [
        "Bike rentals by weather",
        "Filter by weather code",
        "Weather codes",
        "Export CSV",
    ] {
        assert!(!after.contains(stale), "`{stale}` survived the switch");
    }
}
