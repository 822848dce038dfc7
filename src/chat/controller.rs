use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::chat::model::{ChatRequest, ChatTurn};
use crate::utils::error::ApiError;
use crate::utils::gemini::{Content, GeminiClient, Part};

/// POST /api/chat
pub async fn chat(
    gemini: web::Data<GeminiClient>,
    body: web::Json<ChatRequest>,
) -> Result<HttpResponse, ApiError> {
    let contents = build_contents(&body);

    let text = gemini
        .generate(contents)
        .await
        .map_err(|e| ApiError::upstream("Failed to process request", e))?;

    Ok(HttpResponse::Ok().json(json!({ "response": text })))
}

/// Fixed assistant persona and its acknowledgement, then the stored history,
/// then the new message (with the image inlined when one was sent).
fn build_contents(request: &ChatRequest) -> Vec<Content> {
    let language = language_name(request.language.as_deref());

    let persona = format!(
        "You are AgriMitra, a helpful AI farming assistant for Indian farmers.\n\
         The user is asking in {language}.\n\
         Reply in the SAME language as the user ({language}).\n\
         Keep answers concise, practical, and easy to understand.\n\
         Focus on Indian agriculture context (crops, seasons, government schemes like PM-KISAN).\n\
         If asked about prices, give approximate current market estimates for Karnataka/India but mention they vary.\n\
         If an image is provided, analyze it as an expert agronomist (identify crop, disease, or text)."
    );
    let acknowledgement = format!(
        "Understood. I am AgriMitra. I will answer in {language} and help with Indian farming."
    );

    let mut contents = Vec::with_capacity(request.history.len() + 3);
    contents.push(Content::user(vec![Part::text(persona)]));
    contents.push(Content::model(acknowledgement));
    for turn in &request.history {
        contents.push(map_turn(turn));
    }

    let mut parts = vec![Part::text(request.message.clone())];
    if let Some(image) = &request.image {
        parts.push(Part::inline_data("image/jpeg", strip_data_url(image)));
    }
    contents.push(Content::user(parts));

    contents
}

fn language_name(language: Option<&str>) -> &'static str {
    if language == Some("hi") { "Hindi" } else { "English" }
}

/// Anything that is not a user turn speaks for the model.
fn map_turn(turn: &ChatTurn) -> Content {
    if turn.role == "user" {
        Content::user(vec![Part::text(turn.content.clone())])
    } else {
        Content::model(turn.content.clone())
    }
}

/// Browsers send images as data URLs; the model wants the bare payload.
fn strip_data_url(image: &str) -> String {
    match image.split_once(',') {
        Some((_, data)) => data.to_string(),
        None => image.to_string(),
    }
}
