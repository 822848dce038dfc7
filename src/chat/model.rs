use serde::Deserialize;

/// Body of POST /api/chat. History turns arrive oldest-first.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    #[serde(default)]
    pub language: Option<String>,
    /// Optional image, either a data URL or bare base64.
    #[serde(default)]
    pub image: Option<String>,
}

/// One prior turn of the conversation as the client kept it.
#[derive(Debug, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}
