//! Derives display-ready structures from a raw forecast response.
//!
//! Everything here is a pure function over the typed model: no I/O, no
//! mutation, safe to call any number of times.

use anyhow::{Result, anyhow};

use crate::model::{AirQuality, CurrentConditions, ForecastResponse, HourlySample, Location};

/// One point on the temperature chart.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyTemperature {
    /// Time of day, `"HH:MM"`.
    pub time: String,
    pub temp_c: f64,
    pub feelslike_c: f64,
}

/// One point on the wind chart.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyWind {
    pub time: String,
    pub wind_kph: f64,
    pub wind_dir: String,
}

/// One bar on the air-quality chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PollutantLevel {
    pub name: &'static str,
    /// Concentration in µg/m³.
    pub value: f64,
}

/// The two composite air-quality index scores.
#[derive(Debug, Clone, PartialEq)]
pub struct AirQualityIndexes {
    pub us_epa: u8,
    pub gb_defra: u8,
}

/// Daily aggregates for the summary card.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    pub rain_chance_pct: u8,
}

/// Everything the dashboard renders, derived from one forecast response.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub location: Location,
    pub current: CurrentConditions,
    pub daily: DailySummary,
    pub air_quality_indexes: AirQualityIndexes,
    pub temperature: Vec<HourlyTemperature>,
    pub wind: Vec<HourlyWind>,
    pub air_quality: Vec<PollutantLevel>,
}

impl Dashboard {
    /// Build the view-model for the first (and only requested) forecast day.
    ///
    /// Fails only when the response contains no forecast day at all; an
    /// absent hourly list yields empty chart series instead of an error.
    pub fn from_response(response: &ForecastResponse) -> Result<Self> {
        let day = response
            .forecast
            .forecastday
            .first()
            .ok_or_else(|| anyhow!("Forecast response contained no forecast days"))?;

        Ok(Self {
            location: response.location.clone(),
            current: response.current.clone(),
            daily: DailySummary {
                maxtemp_c: day.day.maxtemp_c,
                mintemp_c: day.day.mintemp_c,
                rain_chance_pct: day.day.daily_chance_of_rain,
            },
            air_quality_indexes: AirQualityIndexes {
                us_epa: day.day.air_quality.us_epa_index,
                gb_defra: day.day.air_quality.gb_defra_index,
            },
            temperature: temperature_series(&day.hour),
            wind: wind_series(&day.hour),
            air_quality: air_quality_series(&day.day.air_quality),
        })
    }
}

/// Hourly temperature points, in input order, one per sample.
pub fn temperature_series(hours: &[HourlySample]) -> Vec<HourlyTemperature> {
    hours
        .iter()
        .map(|hour| HourlyTemperature {
            time: time_of_day(&hour.time).to_string(),
            temp_c: hour.temp_c,
            feelslike_c: hour.feelslike_c,
        })
        .collect()
}

/// Hourly wind points, in input order. Empty input gives an empty series.
pub fn wind_series(hours: &[HourlySample]) -> Vec<HourlyWind> {
    hours
        .iter()
        .map(|hour| HourlyWind {
            time: time_of_day(&hour.time).to_string(),
            wind_kph: hour.wind_kph,
            wind_dir: hour.wind_dir.clone(),
        })
        .collect()
}

/// The six pollutants, always in this order, values copied verbatim.
pub fn air_quality_series(aq: &AirQuality) -> Vec<PollutantLevel> {
    vec![
        PollutantLevel { name: "CO", value: aq.co },
        PollutantLevel { name: "NO2", value: aq.no2 },
        PollutantLevel { name: "O3", value: aq.o3 },
        PollutantLevel { name: "SO2", value: aq.so2 },
        PollutantLevel { name: "PM2.5", value: aq.pm2_5 },
        PollutantLevel { name: "PM10", value: aq.pm10 },
    ]
}

/// Strip the date portion of a `"YYYY-MM-DD HH:MM"` timestamp.
///
/// A timestamp with no space is returned unchanged rather than rejected.
fn time_of_day(timestamp: &str) -> &str {
    match timestamp.split_once(' ') {
        Some((_, time)) => time,
        None => timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Condition, CurrentConditions, Day, Forecast, ForecastDay, ForecastResponse, Location,
    };

    fn sample_air_quality() -> AirQuality {
        AirQuality {
            co: 530.7,
            no2: 12.3,
            o3: 68.0,
            so2: 9.1,
            pm2_5: 35.2,
            pm10: 52.8,
            us_epa_index: 2,
            gb_defra_index: 4,
        }
    }

    fn sample_hour(hour: u32) -> HourlySample {
        HourlySample {
            time: format!("2024-01-01 {hour:02}:00"),
            temp_c: 15.0 + f64::from(hour) * 0.5,
            feelslike_c: 14.0 + f64::from(hour) * 0.5,
            wind_kph: 4.0 + f64::from(hour) * 0.1,
            wind_dir: "NW".to_string(),
        }
    }

    fn sample_response(hours: u32) -> ForecastResponse {
        ForecastResponse {
            location: Location {
                name: "Gandhinagar".to_string(),
                country: "India".to_string(),
                localtime: "2024-01-01 14:30".to_string(),
            },
            current: CurrentConditions {
                temp_c: 25.0,
                feelslike_c: 26.1,
                wind_kph: 9.0,
                wind_dir: "NW".to_string(),
                condition: Condition { text: "Sunny".to_string() },
                humidity: 40,
                cloud: 10,
                uv: 6.0,
                pressure_mb: 1013.0,
            },
            forecast: Forecast {
                forecastday: vec![ForecastDay {
                    day: Day {
                        maxtemp_c: 28.4,
                        mintemp_c: 14.2,
                        daily_chance_of_rain: 5,
                        air_quality: sample_air_quality(),
                    },
                    hour: (0..hours).map(sample_hour).collect(),
                }],
            },
        }
    }

    #[test]
    fn series_lengths_match_sample_count() {
        let response = sample_response(24);
        let day = &response.forecast.forecastday[0];

        assert_eq!(temperature_series(&day.hour).len(), 24);
        assert_eq!(wind_series(&day.hour).len(), 24);
    }

    #[test]
    fn series_preserve_input_order() {
        let response = sample_response(24);
        let day = &response.forecast.forecastday[0];

        let temps = temperature_series(&day.hour);
        assert_eq!(temps[0].time, "00:00");
        assert_eq!(temps[23].time, "23:00");

        let winds = wind_series(&day.hour);
        assert_eq!(winds[0].time, "00:00");
        assert_eq!(winds[23].time, "23:00");
    }

    #[test]
    fn time_of_day_strips_date() {
        assert_eq!(time_of_day("2024-01-01 14:00"), "14:00");
    }

    #[test]
    fn time_of_day_passes_dateless_input_through() {
        assert_eq!(time_of_day("14:00"), "14:00");
    }

    #[test]
    fn empty_hour_list_gives_empty_series() {
        assert!(wind_series(&[]).is_empty());
        assert!(temperature_series(&[]).is_empty());
    }

    #[test]
    fn air_quality_has_six_fixed_entries() {
        let series = air_quality_series(&sample_air_quality());

        let names: Vec<&str> = series.iter().map(|p| p.name).collect();
        assert_eq!(names, ["CO", "NO2", "O3", "SO2", "PM2.5", "PM10"]);

        assert_eq!(series[0].value, 530.7);
        assert_eq!(series[4].value, 35.2);
        assert_eq!(series[5].value, 52.8);
    }

    #[test]
    fn dashboard_passes_scalars_through() {
        let response = sample_response(24);
        let dashboard = Dashboard::from_response(&response).expect("one forecast day");

        assert_eq!(dashboard.location.name, "Gandhinagar");
        assert_eq!(dashboard.current.temp_c, 25.0);
        assert_eq!(dashboard.daily.maxtemp_c, 28.4);
        assert_eq!(dashboard.daily.mintemp_c, 14.2);
        assert_eq!(dashboard.daily.rain_chance_pct, 5);
        assert_eq!(dashboard.air_quality_indexes, AirQualityIndexes { us_epa: 2, gb_defra: 4 });
        assert_eq!(dashboard.temperature.len(), 24);
    }

    #[test]
    fn dashboard_is_idempotent() {
        let response = sample_response(24);

        let first = Dashboard::from_response(&response).expect("one forecast day");
        let second = Dashboard::from_response(&response).expect("one forecast day");

        assert_eq!(first, second);
    }

    #[test]
    fn dashboard_errors_without_forecast_days() {
        let mut response = sample_response(0);
        response.forecast.forecastday.clear();

        let err = Dashboard::from_response(&response).unwrap_err();
        assert!(err.to_string().contains("no forecast days"));
    }
}
