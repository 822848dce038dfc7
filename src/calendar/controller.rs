use actix_web::{HttpResponse, web};
use serde_json::Value;

use crate::calendar::model::CalendarRequest;
use crate::utils::error::ApiError;
use crate::utils::gemini::{Content, GeminiClient, Part, extract_json_array};

const CALENDAR_ERROR: &str = "Failed to generate calendar. Please try again.";

/// POST /api/calendar
pub async fn generate_calendar(
    gemini: web::Data<GeminiClient>,
    body: web::Json<CalendarRequest>,
) -> Result<HttpResponse, ApiError> {
    let prompt = build_prompt(&body);

    let reply = gemini
        .generate(vec![Content::user(vec![Part::text(prompt)])])
        .await
        .map_err(|e| {
            log::error!("Calendar generation error: {e}");
            ApiError::Internal(CALENDAR_ERROR.to_string())
        })?;

    let schedule = parse_schedule(&reply)?;
    Ok(HttpResponse::Ok().json(schedule))
}

fn build_prompt(request: &CalendarRequest) -> String {
    let region = request
        .region
        .as_deref()
        .filter(|r| !r.trim().is_empty())
        .unwrap_or("General India");
    let language = if request.language.as_deref() == Some("hi") {
        "Hindi"
    } else {
        "English"
    };

    format!(
        "Act as an expert agronomist for India. Generate a week-by-week farming calendar for:\n\
         Crop: {crop}\n\
         Sowing Date: {date}\n\
         Region: {region}\n\
         Language: {language}\n\n\
         Return strictly a valid JSON array of objects. NO markdown, NO backticks.\n\
         Structure:\n\
         [\n\
           {{\n\
             \"week\": 1,\n\
             \"stage\": \"Stage Name (e.g., Sowing/Germination)\",\n\
             \"activities\": [\"Activity 1\", \"Activity 2\"],\n\
             \"advisory\": \"Specific tip for this stage\"\n\
           }},\n\
           ...\n\
         ]\n\n\
         Cover the entire lifecycle from sowing to harvest (approx 12-20 weeks depending on crop).\n\
         If Language is Hindi, return ALL text in Hindi.",
        crop = request.crop,
        date = request.date,
    )
}

/// Pull the JSON array out of the free-text reply. Anything that does not
/// contain a parseable array is a failed generation; the route never returns
/// partial output.
fn parse_schedule(reply: &str) -> Result<Vec<Value>, ApiError> {
    let array = extract_json_array(reply).ok_or_else(|| {
        log::error!("Calendar generation error: no JSON array in model reply");
        ApiError::Internal(CALENDAR_ERROR.to_string())
    })?;

    serde_json::from_str(array).map_err(|e| {
        log::error!("Calendar generation error: {e}");
        ApiError::Internal(CALENDAR_ERROR.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(region: Option<&str>, language: Option<&str>) -> CalendarRequest {
        CalendarRequest {
            crop: "Wheat".to_string(),
            date: "2026-11-01".to_string(),
            region: region.map(str::to_string),
            language: language.map(str::to_string),
        }
    }

    #[test]
    fn prompt_names_crop_date_and_region() {
        let prompt = build_prompt(&request(Some("Punjab"), None));
        assert!(prompt.contains("Crop: Wheat"));
        assert!(prompt.contains("Sowing Date: 2026-11-01"));
        assert!(prompt.contains("Region: Punjab"));
        assert!(prompt.contains("Language: English"));
    }

    #[test]
    fn missing_region_defaults_to_general_india() {
        let prompt = build_prompt(&request(None, Some("hi")));
        assert!(prompt.contains("Region: General India"));
        assert!(prompt.contains("Language: Hindi"));
    }

    #[test]
    fn schedule_is_extracted_from_prose_and_fences() {
        let reply = "Here is your calendar:\n```json\n[{\"week\": 1, \"stage\": \"Sowing\", \"activities\": [\"Prepare beds\"], \"advisory\": \"Use certified seed\"}]\n```\nGood luck!";
        let schedule = parse_schedule(reply).unwrap();
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0]["week"], 1);
        assert_eq!(schedule[0]["stage"], "Sowing");
    }

    #[test]
    fn bracketless_replies_fail_with_the_fixed_message() {
        let err = parse_schedule("I cannot produce that calendar.").unwrap_err();
        assert!(matches!(err, ApiError::Internal(_)));
        assert_eq!(err.to_string(), "Failed to generate calendar. Please try again.");
    }

    #[test]
    fn unparseable_spans_fail_with_the_fixed_message() {
        let err = parse_schedule("[week one: sow the seeds]").unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate calendar. Please try again.");
    }
}
