//! AgriMitra backend: an HTTP API for a farming assistant.
//!
//! The service proxies chat, crop-calendar and plant-diagnosis requests to a
//! generative model, live mandi prices to data.gov.in, weather lookups to
//! open-meteo, and keeps a MongoDB-backed community forum.

pub mod calendar;
pub mod chat;
pub mod config;
pub mod database;
pub mod diagnose;
pub mod forum;
pub mod market;
pub mod middleware;
pub mod router;
pub mod schemes;
pub mod status;
pub mod utils;
pub mod voice;
pub mod weather;

pub use config::Config;
pub use utils::error::ApiError;
