//! Turns a [`Dashboard`] into terminal cards and charts.
//!
//! Pure string building, so the layout can be asserted in tests. Charts are
//! horizontal bars, one row per point, scaled against the series range.

use std::fmt::Write;

use dashboard_core::Dashboard;
use dashboard_core::view::{HourlyTemperature, HourlyWind, PollutantLevel};

const BAR_WIDTH: usize = 30;

/// The whole page: header, current card, charts, daily summary.
pub fn render(dashboard: &Dashboard) -> String {
    [
        header(dashboard),
        current_card(dashboard),
        temperature_chart(&dashboard.temperature),
        humidity_card(dashboard),
        wind_chart(&dashboard.wind),
        air_quality_chart(dashboard),
        daily_summary(dashboard),
    ]
    .join("\n")
}

pub fn header(dashboard: &Dashboard) -> String {
    format!(
        "{}, {}\nLocal time: {}\n",
        dashboard.location.name, dashboard.location.country, dashboard.location.localtime
    )
}

pub fn current_card(dashboard: &Dashboard) -> String {
    let current = &dashboard.current;

    let mut out = String::from("== Current Weather ==\n");
    let _ = writeln!(out, "  {}°C (feels like {}°C)", current.temp_c, current.feelslike_c);
    let _ = writeln!(out, "  {}, cloud {}%", current.condition.text, current.cloud);
    let _ = writeln!(out, "  Wind {} km/h {}", current.wind_kph, current.wind_dir);
    out
}

pub fn temperature_chart(series: &[HourlyTemperature]) -> String {
    let mut out = String::from("== Temperature over 24 hours ==\n");

    if series.is_empty() {
        out.push_str("  (no hourly data)\n");
        return out;
    }

    let min = fold_min(series.iter().map(|p| p.temp_c));
    let max = fold_max(series.iter().map(|p| p.temp_c));

    for point in series {
        let _ = writeln!(
            out,
            "  {}  {:<width$}  {}°C (feels {}°C)",
            point.time,
            bar(point.temp_c, min, max),
            point.temp_c,
            point.feelslike_c,
            width = BAR_WIDTH,
        );
    }
    out
}

pub fn humidity_card(dashboard: &Dashboard) -> String {
    let current = &dashboard.current;

    let mut out = String::from("== Humidity & Comfort ==\n");
    let _ = writeln!(out, "  Relative humidity: {}%", current.humidity);
    let _ = writeln!(out, "  UV index: {}", current.uv);
    let _ = writeln!(out, "  Pressure: {} mb", current.pressure_mb);
    out
}

pub fn wind_chart(series: &[HourlyWind]) -> String {
    let mut out = String::from("== Wind over 24 hours ==\n");

    if series.is_empty() {
        out.push_str("  (no hourly data)\n");
        return out;
    }

    let max = fold_max(series.iter().map(|p| p.wind_kph));

    for point in series {
        let _ = writeln!(
            out,
            "  {}  {:<width$}  {} km/h {}",
            point.time,
            bar(point.wind_kph, 0.0, max),
            point.wind_kph,
            point.wind_dir,
            width = BAR_WIDTH,
        );
    }
    out
}

pub fn air_quality_chart(dashboard: &Dashboard) -> String {
    let mut out = String::from("== Air Quality ==\n");

    let max = fold_max(dashboard.air_quality.iter().map(|p| p.value));

    for PollutantLevel { name, value } in &dashboard.air_quality {
        let _ = writeln!(
            out,
            "  {:<5}  {:<width$}  {} µg/m³",
            name,
            bar(*value, 0.0, max),
            value,
            width = BAR_WIDTH,
        );
    }

    let aq = &dashboard.air_quality_indexes;
    let _ = writeln!(out, "  US EPA index: {}, GB DEFRA index: {}", aq.us_epa, aq.gb_defra);
    out
}

pub fn daily_summary(dashboard: &Dashboard) -> String {
    let daily = &dashboard.daily;

    let mut out = String::from("== Daily Summary ==\n");
    let _ = writeln!(out, "  Max temperature: {}°C", daily.maxtemp_c);
    let _ = writeln!(out, "  Min temperature: {}°C", daily.mintemp_c);
    let _ = writeln!(out, "  Chance of rain: {}%", daily.rain_chance_pct);
    out
}

fn bar(value: f64, min: f64, max: f64) -> String {
    let span = max - min;
    let fraction = if span > 0.0 { (value - min) / span } else { 1.0 };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let len = (fraction * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.min(BAR_WIDTH))
}

fn fold_min(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::INFINITY, f64::min)
}

fn fold_max(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::NEG_INFINITY, f64::max)
}
