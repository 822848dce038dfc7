use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct MarketQuery {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub commodity: Option<String>,
}

/// One raw record from the Agmarknet resource on data.gov.in. Prices arrive
/// as strings more often than as numbers, and any field may be missing.
#[derive(Debug, Deserialize)]
pub struct MandiRecord {
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub modal_price: Option<Value>,
    #[serde(default)]
    pub arrival_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MandiApiResponse {
    #[serde(default)]
    pub records: Vec<MandiRecord>,
}

/// A cleaned, positive-priced market entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketPrice {
    pub district: String,
    pub market_name: String,
    pub modal_price: f64,
    pub arrival_date: String,
}

#[derive(Debug, Serialize)]
pub struct MarketReport {
    pub query: MarketQueryEcho,
    pub summary: String,
    pub prices: Vec<MarketPrice>,
}

#[derive(Debug, Serialize)]
pub struct MarketQueryEcho {
    pub state: String,
    pub commodity: String,
    pub source: String,
}
