use serde::{Deserialize, Serialize};

/// What every diagnosis provider must produce: a disease label, how sure the
/// classifier is, and what the farmer should do about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisReport {
    #[serde(rename = "class")]
    pub label: String,
    pub confidence: f64,
    pub recommendation: String,
}

impl DiagnosisReport {
    /// Best-effort report for replies that will not parse: the raw text
    /// becomes the recommendation so nothing the model said is lost.
    pub fn unknown(raw_text: String) -> Self {
        DiagnosisReport {
            label: "Unknown".to_string(),
            confidence: 0.0,
            recommendation: raw_text,
        }
    }
}

/// An uploaded image, held in memory for the duration of the request.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}
