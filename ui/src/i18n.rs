//! Internationalization (i18n) support for `bikeshare-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/bikeshare-ui.ftl   (fallback/reference)
//!   id-ID/bikeshare-ui.ftl   (Indonesian, the report's original wording)
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let tab_label = t!("nav-weather");
//! let option = t!("weather-filter-option", code = 2);
//! ```
//!
//! Public API surface:
//! - `init()` – load localization bundles (safe to call multiple times).
//! - `set_language(tag: &str)` – switch language at runtime.
//! - `available_languages()` – discover embedded language tags (for a picker).
//! - `current_language()` / `use_language()` – the active tag; the hook also subscribes
//!   a component to runtime switches.
//! - `day_name(code)` / `weather_description(situation)` – lookups keyed by data codes.
//! - `LOADER` – global `FluentLanguageLoader` consumed by helpers & `fl!` macro.
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::{try_use_context, Signal};
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::dataset::WeatherSituation;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-weather")
///     t!("weather-filter-option", code = 3)
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain": the fallback FTL filename and the `domain` key in `i18n.toml`.
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "bikeshare-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    // Chart labels end up in SVG text; bidi isolation marks would show as boxes there.
    loader.set_use_isolating(false);
    loader
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => debug!(?selected, "i18n languages selected"),
            Err(err) => warn!("failed selecting languages ({err}); continuing with fallback"),
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Tag of the language the loader currently resolves to, e.g. `id-ID`.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Subscribe the calling component to the platform's language signal, if one is
/// provided, so its `t!` lookups re-run after a switch. Returns the current tag.
pub fn use_language() -> String {
    try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_else(current_language)
}

/// Localized day name for a weekday code (0 = Sunday … 6 = Saturday).
pub fn day_name(code: u8) -> String {
    match code {
        0 => crate::t!("day-sunday"),
        1 => crate::t!("day-monday"),
        2 => crate::t!("day-tuesday"),
        3 => crate::t!("day-wednesday"),
        4 => crate::t!("day-thursday"),
        5 => crate::t!("day-friday"),
        6 => crate::t!("day-saturday"),
        other => other.to_string(),
    }
}

/// Localized description of a weather code, as shown in the legend.
pub fn weather_description(situation: WeatherSituation) -> String {
    match situation {
        WeatherSituation::Clear => crate::t!("weather-code-1"),
        WeatherSituation::Mist => crate::t!("weather-code-2"),
        WeatherSituation::LightPrecipitation => crate::t!("weather-code-3"),
        WeatherSituation::HeavyPrecipitation => crate::t!("weather-code-4"),
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
