use actix_web::{HttpResponse, web};

use crate::market::model::MarketQuery;
use crate::market::service::MarketService;
use crate::utils::error::ApiError;

const DEFAULT_STATE: &str = "Rajasthan";
const DEFAULT_COMMODITY: &str = "Wheat";

/// GET|POST /api/market, also served as GET /api/mandi
pub async fn get_market_prices(
    market: web::Data<MarketService>,
    query: web::Query<MarketQuery>,
) -> Result<HttpResponse, ApiError> {
    let state = query
        .state
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_STATE);
    let commodity = query
        .commodity
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(DEFAULT_COMMODITY);

    let report = market.fetch_prices(state, commodity).await?;
    Ok(HttpResponse::Ok().json(report))
}
