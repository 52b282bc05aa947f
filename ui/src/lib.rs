//! Shared UI crate for the bike rental report. Data loading, aggregation, charts and
//! both report tabs live here; platform crates only add routing and launch config.

pub mod core;
pub mod i18n;
pub mod report;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
