//! The locale picker must open on the language `init` negotiated.

use dioxus::prelude::*;
use ui::components::AppNavbar;

#[test]
fn picker_starts_on_the_active_language() {
    ui::i18n::init();
    ui::i18n::set_language("id-ID").unwrap();
    assert_eq!(ui::i18n::current_language(), "id-ID");

    let mut dom = VirtualDom::new(|| rsx! { AppNavbar {} });
    dom.rebuild_in_place();
    let html = dioxus::ssr::render(&dom);

    let select_start = html.find(r#"id="locale-select""#).expect("picker rendered");
    let select_tag = &html[select_start..select_start + html[select_start..].find('>').unwrap()];
    assert!(
        select_tag.contains(r#"value="id-ID""#),
        "picker not on id-ID: {select_tag}"
    );
    assert!(html.contains("Rental harian berdasarkan cuaca dan hari"));
}
