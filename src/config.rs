use std::env;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_ML_SERVICE_URL: &str = "http://localhost:8000";

// data.gov.in publishes this key for public testing; real deployments
// should set DATA_GOV_API_KEY to their own.
const SAMPLE_DATA_GOV_API_KEY: &str =
    "579b464db66ec23bdd00000151bbb54b4d9e452c5523c3bce2ccc5f4";

/// Runtime configuration, read once at startup. A missing value degrades the
/// feature that needs it instead of stopping the server.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub mongodb_uri: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub ml_service_url: String,
    pub data_gov_api_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            port: parse_port(env::var("PORT").ok()),
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| DEFAULT_MONGODB_URI.to_string()),
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|key| !key.is_empty()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            ml_service_url: env::var("ML_SERVICE_URL")
                .unwrap_or_else(|_| DEFAULT_ML_SERVICE_URL.to_string()),
            data_gov_api_key: env::var("DATA_GOV_API_KEY")
                .unwrap_or_else(|_| SAMPLE_DATA_GOV_API_KEY.to_string()),
        }
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    match raw {
        None => DEFAULT_PORT,
        Some(raw) => match raw.parse() {
            Ok(port) => port,
            Err(_) => {
                log::warn!("PORT value {raw:?} is not a valid port, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        },
    }
}
