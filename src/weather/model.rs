use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    #[serde(default)]
    pub city: Option<String>,
}

/// Geocoding response from open-meteo.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    /// First-level administrative area, e.g. the state.
    #[serde(default)]
    pub admin1: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// The subset of the open-meteo forecast payload the app serves.
#[derive(Debug, Serialize, Deserialize)]
pub struct Forecast {
    pub current: CurrentWeather,
    pub daily: DailyForecast,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub time: String,
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub weather_code: i64,
    pub wind_speed_10m: f64,
}

/// Daily series come back as parallel arrays indexed by day; entries can be
/// null when the model has no value for a day.
#[derive(Debug, Serialize, Deserialize)]
pub struct DailyForecast {
    pub time: Vec<String>,
    pub weather_code: Vec<Option<i64>>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
    pub precipitation_sum: Vec<Option<f64>>,
}

/// The place a forecast was resolved to.
#[derive(Debug, Serialize)]
pub struct ResolvedLocation {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize)]
pub struct WeatherReport {
    pub location: ResolvedLocation,
    pub current: CurrentWeather,
    pub daily: DailyForecast,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_payload_parses() {
        let raw = r#"{
            "current": {
                "time": "2026-08-22T10:00",
                "interval": 900,
                "temperature_2m": 31.4,
                "relative_humidity_2m": 58,
                "weather_code": 2,
                "wind_speed_10m": 12.3
            },
            "daily": {
                "time": ["2026-08-22", "2026-08-23", "2026-08-24", "2026-08-25", "2026-08-26", "2026-08-27"],
                "weather_code": [2, 3, 61, null, 0, 1],
                "temperature_2m_max": [33.1, 32.0, 29.8, 30.2, 31.0, 32.4],
                "temperature_2m_min": [24.0, 23.5, 22.9, 23.1, 23.8, 24.2],
                "precipitation_sum": [0.0, 0.2, 12.4, 3.1, 0.0, null]
            }
        }"#;

        let forecast: Forecast = serde_json::from_str(raw).unwrap();
        assert_eq!(forecast.current.temperature_2m, 31.4);
        assert_eq!(forecast.current.weather_code, 2);
        assert_eq!(forecast.daily.time.len(), 6);
        assert_eq!(forecast.daily.weather_code[3], None);
        assert_eq!(forecast.daily.precipitation_sum[2], Some(12.4));
    }

    #[test]
    fn geocode_results_default_to_empty() {
        let parsed: GeocodeResponse =
            serde_json::from_str(r#"{"generationtime_ms": 0.5}"#).unwrap();
        assert!(parsed.results.is_empty());
    }
}
