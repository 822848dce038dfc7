use actix_web::{HttpResponse, web};

use crate::utils::error::ApiError;
use crate::weather::model::WeatherQuery;
use crate::weather::service::WeatherService;

const DEFAULT_CITY: &str = "New Delhi";

/// GET /api/weather
pub async fn get_weather(
    weather: web::Data<WeatherService>,
    query: web::Query<WeatherQuery>,
) -> Result<HttpResponse, ApiError> {
    let city = query
        .city
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(DEFAULT_CITY);

    let report = weather.fetch(city).await?;
    Ok(HttpResponse::Ok().json(report))
}
