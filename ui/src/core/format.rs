//! Formatting helpers for presenting rental figures.

/// Whole rentals with thousands separators, e.g. `2,372,118`.
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Share of a whole as a percentage with one decimal, e.g. `68.4%`.
pub fn format_percent(fraction: f64) -> String {
    if fraction.is_finite() {
        format!("{:.1}%", fraction * 100.0)
    } else {
        "—".to_string()
    }
}

/// Fraction digits needed to print every multiple of `step` exactly (capped at 9).
pub fn step_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let mut scaled = step;
    let mut decimals = 0;
    while decimals < 9 && (scaled - scaled.round()).abs() > 1e-6 * scaled.max(1.0) {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

/// Axis tick in plain units: grouped whole numbers, or as many decimals as `step` needs.
pub fn format_tick(value: f64, step: f64) -> String {
    match step_decimals(step) {
        0 => format_count(value),
        decimals => format!("{value:.decimals$}"),
    }
}

/// Axis tick in millions, at least one decimal and more when `step` is finer.
pub fn format_millions(value: f64, step: f64) -> String {
    let decimals = step_decimals(step / 1_000_000.0).max(1);
    format!("{:.decimals$}", value / 1_000_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_grouped() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(999.0), "999");
        assert_eq!(format_count(1000.0), "1,000");
        assert_eq!(format_count(2_372_118.4), "2,372,118");
        assert_eq!(format_count(-12_345.0), "-12,345");
        assert_eq!(format_count(f64::NAN), "—");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(0.684), "68.4%");
        assert_eq!(format_percent(1.0), "100.0%");
    }

    #[test]
    fn millions_axis_labels() {
        assert_eq!(format_millions(2_500_000.0, 500_000.0), "2.5");
        assert_eq!(format_millions(0.0, 500_000.0), "0.0");
        assert_eq!(format_millions(250_000.0, 250_000.0), "0.25");
    }

    #[test]
    fn step_decides_decimals() {
        assert_eq!(step_decimals(100.0), 0);
        assert_eq!(step_decimals(0.2), 1);
        assert_eq!(step_decimals(2.5), 1);
        assert_eq!(step_decimals(0.25), 2);
        assert_eq!(step_decimals(0.0), 0);
    }

    #[test]
    fn plain_ticks_follow_step() {
        assert_eq!(format_tick(5_000.0, 5_000.0), "5,000");
        assert_eq!(format_tick(0.4, 0.2), "0.4");
        assert_eq!(format_tick(1.0, 0.2), "1.0");
    }
}
