use serde::Deserialize;

/// Body of POST /api/calendar.
#[derive(Debug, Deserialize)]
pub struct CalendarRequest {
    pub crop: String,
    /// Sowing date, passed to the model exactly as the client sent it.
    pub date: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}
