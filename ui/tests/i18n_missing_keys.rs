use std::collections::{BTreeMap, BTreeSet};

/// Every locale must define the same messages as en-US, with the same placeables.
///
/// Adding a locale: create `ui/i18n/<locale>/bikeshare-ui.ftl` with every key from
/// `en-US/bikeshare-ui.ftl`, then register it in `LOCALES` below.
const FALLBACK: &str = include_str!("../i18n/en-US/bikeshare-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("id-ID", include_str!("../i18n/id-ID/bikeshare-ui.ftl"))];

/// Message id -> set of `{ $var }` placeables used in its value.
fn messages(src: &str, locale: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut out = BTreeMap::new();
    for raw in src.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        let Some((id, value)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if id.is_empty() || id.contains(char::is_whitespace) {
            continue;
        }
        let previous = out.insert(id.to_string(), placeables(value));
        assert!(previous.is_none(), "{locale}: duplicate key `{id}`");
    }
    out
}

fn placeables(value: &str) -> BTreeSet<String> {
    value
        .split('$')
        .skip(1)
        .filter_map(|rest| {
            let name: String = rest
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect();
            (!name.is_empty()).then_some(name)
        })
        .collect()
}

#[test]
fn all_locales_match_fallback() {
    let fallback = messages(FALLBACK, "en-US");
    assert!(!fallback.is_empty(), "en-US defines no messages");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let translated = messages(src, locale);
        for (id, vars) in &fallback {
            match translated.get(id) {
                None => failures.push(format!("{locale}: missing `{id}`")),
                Some(found) if found != vars => failures.push(format!(
                    "{locale}: `{id}` uses {found:?}, en-US uses {vars:?}"
                )),
                Some(_) => {}
            }
        }
        for id in translated.keys().filter(|id| !fallback.contains_key(*id)) {
            failures.push(format!("{locale}: `{id}` is not in en-US"));
        }
    }

    assert!(
        failures.is_empty(),
        "translation check failed:\n  {}",
        failures.join("\n  ")
    );
}

#[test]
fn every_day_and_weather_code_is_translated() {
    let fallback = messages(FALLBACK, "en-US");
    for day in [
        "sunday",
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
    ] {
        assert!(fallback.contains_key(&format!("day-{day}")), "day-{day}");
    }
    for code in 1..=4 {
        assert!(
            fallback.contains_key(&format!("weather-code-{code}")),
            "weather-code-{code}"
        );
    }
}
