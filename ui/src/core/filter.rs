//! Weather-code toggles and the bar list they produce.

use super::aggregate::WeatherTotal;
use super::dataset::WeatherSituation;

/// Bar colors for the weather chart, handed out in order.
pub const WEATHER_PALETTE: [&str; 4] = ["#76c7c0", "#ffcc00", "#ff6f61", "#c44d58"];

/// One toggle per weather code; all on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherFilter {
    enabled: [bool; 4],
}

impl Default for WeatherFilter {
    fn default() -> Self {
        Self { enabled: [true; 4] }
    }
}

impl WeatherFilter {
    pub fn none() -> Self {
        Self { enabled: [false; 4] }
    }

    pub fn is_enabled(&self, situation: WeatherSituation) -> bool {
        self.enabled[situation.index()]
    }

    pub fn set(&mut self, situation: WeatherSituation, enabled: bool) {
        self.enabled[situation.index()] = enabled;
    }

    pub fn toggle(&mut self, situation: WeatherSituation) {
        let slot = &mut self.enabled[situation.index()];
        *slot = !*slot;
    }

    /// Active codes, ascending.
    pub fn selected(&self) -> Vec<WeatherSituation> {
        WeatherSituation::ALL
            .into_iter()
            .filter(|situation| self.is_enabled(*situation))
            .collect()
    }

    /// Keep the selected codes, order by `cnt_sum` descending and color the result.
    ///
    /// Colors are positional: the i-th bar after sorting takes `WEATHER_PALETTE[i]`,
    /// so a code's color depends on the current selection. Ties keep ascending code
    /// order.
    pub fn apply(&self, totals: &[WeatherTotal]) -> Vec<WeatherBar> {
        let mut rows: Vec<WeatherTotal> = totals
            .iter()
            .filter(|total| self.is_enabled(total.situation))
            .copied()
            .collect();
        rows.sort_by(|a, b| b.cnt_sum.total_cmp(&a.cnt_sum));

        rows.into_iter()
            .zip(WEATHER_PALETTE)
            .map(|(total, color)| WeatherBar {
                situation: total.situation,
                cnt_sum: total.cnt_sum,
                color,
            })
            .collect()
    }
}

/// A filtered weather row ready for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherBar {
    pub situation: WeatherSituation,
    pub cnt_sum: f64,
    pub color: &'static str,
}
