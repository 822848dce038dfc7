use serde_json::Value;

use crate::market::model::{
    MandiApiResponse, MandiRecord, MarketPrice, MarketQueryEcho, MarketReport,
};
use crate::utils::error::ApiError;

const MANDI_API_URL: &str =
    "https://api.data.gov.in/resource/9ef84268-d588-465a-a308-a864a43d0070";
const MANDI_SOURCE: &str = "data.gov.in (Agmarknet)";

pub struct MarketService {
    api_key: String,
    client: reqwest::Client,
}

impl MarketService {
    pub fn new(api_key: String) -> Self {
        MarketService {
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Live mandi prices for a state/commodity pair, cleaned and sorted
    /// best-rate-first.
    pub async fn fetch_prices(
        &self,
        state: &str,
        commodity: &str,
    ) -> Result<MarketReport, ApiError> {
        let response = self
            .client
            .get(MANDI_API_URL)
            .query(&[
                ("api-key", self.api_key.as_str()),
                ("format", "json"),
                ("offset", "0"),
                ("limit", "500"),
                ("filters[state]", state),
                ("filters[commodity]", commodity),
            ])
            .send()
            .await
            .map_err(|e| ApiError::upstream("Failed to fetch market data", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::upstream(
                "Failed to fetch market data",
                format!("External API error: {status}"),
            ));
        }

        let body: MandiApiResponse = response
            .json()
            .await
            .map_err(|e| ApiError::upstream("Failed to fetch market data", e))?;

        process_records(body.records, state, commodity)
    }
}

/// Turn raw records into the response shape: drop non-positive prices, sort
/// by price descending, and describe the best market in one line.
pub fn process_records(
    records: Vec<MandiRecord>,
    state: &str,
    commodity: &str,
) -> Result<MarketReport, ApiError> {
    if records.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No live prices found for {commodity} in {state}."
        )));
    }

    let mut prices: Vec<MarketPrice> = records
        .into_iter()
        .map(|record| MarketPrice {
            district: text_or_na(record.district),
            market_name: text_or_na(record.market),
            modal_price: parse_price(record.modal_price.as_ref()),
            arrival_date: text_or_na(record.arrival_date),
        })
        .filter(|price| price.modal_price > 0.0)
        .collect();

    if prices.is_empty() {
        return Err(ApiError::NotFound(format!(
            "Price data available but all zero for {commodity} in {state}."
        )));
    }

    prices.sort_by(|a, b| b.modal_price.total_cmp(&a.modal_price));

    let best = &prices[0];
    let summary = format!(
        "📈 Best rate for {commodity} in {state} today is ₹{}/quintal at {}.",
        best.modal_price, best.market_name
    );

    Ok(MarketReport {
        query: MarketQueryEcho {
            state: state.to_string(),
            commodity: commodity.to_string(),
            source: MANDI_SOURCE.to_string(),
        },
        summary,
        prices,
    })
}

fn text_or_na(value: Option<String>) -> String {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => "N/A".to_string(),
    }
}

/// Prices arrive as strings ("1850"), numbers, or garbage; whatever does not
/// parse counts as 0 and gets filtered out.
fn parse_price(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
