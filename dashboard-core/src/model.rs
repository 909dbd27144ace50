use serde::Deserialize;

/// Full forecast response from WeatherAPI.com, reduced to the fields the
/// dashboard renders. Deserializing into this shape is the validation
/// boundary: a response missing a required field fails here instead of
/// somewhere in the rendering code.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastResponse {
    pub location: Location,
    pub current: CurrentConditions,
    pub forecast: Forecast,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub localtime: String,
}

/// Snapshot of current weather. Field names follow the wire format.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub feelslike_c: f64,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub condition: Condition,
    pub humidity: u8,
    pub cloud: u8,
    pub uv: f64,
    pub pressure_mb: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Condition {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

/// One day of forecast data: daily aggregates plus hourly samples.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastDay {
    pub day: Day,
    /// Hourly samples, chronological. The API may omit the list entirely,
    /// which decodes as empty.
    #[serde(default)]
    pub hour: Vec<HourlySample>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Day {
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    pub daily_chance_of_rain: u8,
    pub air_quality: AirQuality,
}

/// Pollutant concentrations in µg/m³ plus the two composite indexes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AirQuality {
    pub co: f64,
    pub no2: f64,
    pub o3: f64,
    pub so2: f64,
    pub pm2_5: f64,
    pub pm10: f64,
    #[serde(rename = "us-epa-index")]
    pub us_epa_index: u8,
    #[serde(rename = "gb-defra-index")]
    pub gb_defra_index: u8,
}

/// One hour's reading within a forecast day.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HourlySample {
    /// Local timestamp, `"YYYY-MM-DD HH:MM"`.
    pub time: String,
    pub temp_c: f64,
    pub feelslike_c: f64,
    pub wind_kph: f64,
    pub wind_dir: String,
}
