use crate::utils::error::ApiError;
use crate::weather::model::{
    Forecast, GeocodeResponse, GeocodeResult, ResolvedLocation, WeatherReport,
};

const GEOCODING_API_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const FORECAST_API_URL: &str = "https://api.open-meteo.com/v1/forecast";

pub struct WeatherService {
    client: reqwest::Client,
}

impl WeatherService {
    pub fn new() -> Self {
        WeatherService {
            client: reqwest::Client::new(),
        }
    }

    /// Resolve a free-text city name, then fetch current conditions plus a
    /// five-day outlook for it.
    pub async fn fetch(&self, city: &str) -> Result<WeatherReport, ApiError> {
        let location = self.geocode(city).await?;
        let forecast = self.forecast(&location).await?;

        Ok(WeatherReport {
            location: ResolvedLocation {
                name: location.name,
                region: location.admin1,
                country: location.country,
                latitude: location.latitude,
                longitude: location.longitude,
            },
            current: forecast.current,
            daily: forecast.daily,
        })
    }

    async fn geocode(&self, city: &str) -> Result<GeocodeResult, ApiError> {
        let response = self
            .client
            .get(GEOCODING_API_URL)
            .query(&[
                ("name", city),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| ApiError::upstream("Failed to fetch weather data", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::upstream(
                "Failed to fetch weather data",
                format!("geocoding endpoint returned {status}"),
            ));
        }

        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| ApiError::upstream("Failed to fetch weather data", e))?;

        body.results
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound("City not found. Please try again.".to_string()))
    }

    async fn forecast(&self, location: &GeocodeResult) -> Result<Forecast, ApiError> {
        let latitude = location.latitude.to_string();
        let longitude = location.longitude.to_string();

        let response = self
            .client
            .get(FORECAST_API_URL)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                (
                    "current",
                    "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m",
                ),
                (
                    "daily",
                    "weather_code,temperature_2m_max,temperature_2m_min,precipitation_sum",
                ),
                ("timezone", "auto"),
                // today plus the five days the forecast view shows
                ("forecast_days", "6"),
            ])
            .send()
            .await
            .map_err(|e| ApiError::upstream("Failed to fetch weather data", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::upstream(
                "Failed to fetch weather data",
                format!("forecast endpoint returned {status}"),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::upstream("Failed to fetch weather data", e))
    }
}
