use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::multipart::{Form, Part as FormPart};

use crate::diagnose::model::{DiagnosisReport, UploadedImage};
use crate::utils::error::ApiError;
use crate::utils::gemini::{Content, GeminiClient, Part, strip_code_fences};

/// One way of turning a plant image into a diagnosis. Providers are tried in
/// order; the first success wins.
#[async_trait]
pub trait DiagnosisProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn diagnose(&self, image: &UploadedImage) -> Result<DiagnosisReport, ApiError>;
}

/// The dedicated classification service, a separate deployment that takes
/// the raw image as a multipart upload.
pub struct MlServiceProvider {
    base_url: String,
    client: reqwest::Client,
}

impl MlServiceProvider {
    pub fn new(base_url: String) -> Self {
        MlServiceProvider {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DiagnosisProvider for MlServiceProvider {
    fn name(&self) -> &'static str {
        "ml-service"
    }

    async fn diagnose(&self, image: &UploadedImage) -> Result<DiagnosisReport, ApiError> {
        let file_part = FormPart::bytes(image.data.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)
            .map_err(|e| ApiError::upstream("ML service request failed", e))?;
        let form = Form::new().part("file", file_part);

        let response = self
            .client
            .post(format!("{}/predict", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::upstream("ML service request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::upstream(
                "ML service request failed",
                format!("{status}: {body}"),
            ));
        }

        response
            .json::<DiagnosisReport>()
            .await
            .map_err(|e| ApiError::upstream("ML service returned an unexpected payload", e))
    }
}

const DIAGNOSIS_PROMPT: &str = "Analyze this plant image for diseases.\n\
Return ONLY a valid JSON object (no markdown, no backticks) with this structure:\n\
{\n\
\"class\": \"Name of disease or 'Healthy'\",\n\
\"confidence\": 0.85,\n\
\"recommendation\": \"Brief description and treatment\"\n\
}";

/// Vision fallback through the generative model.
pub struct GeminiDiagnosisProvider {
    gemini: GeminiClient,
}

impl GeminiDiagnosisProvider {
    pub fn new(gemini: GeminiClient) -> Self {
        GeminiDiagnosisProvider { gemini }
    }
}

#[async_trait]
impl DiagnosisProvider for GeminiDiagnosisProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn diagnose(&self, image: &UploadedImage) -> Result<DiagnosisReport, ApiError> {
        let contents = vec![Content::user(vec![
            Part::text(DIAGNOSIS_PROMPT),
            Part::inline_data(image.mime_type.clone(), BASE64.encode(&image.data)),
        ])];

        let reply = self.gemini.generate(contents).await?;
        Ok(parse_report(&reply))
    }
}

/// Parse the model's JSON reply after fence-stripping. Replies that still do
/// not parse degrade to a best-effort report instead of failing the request.
pub fn parse_report(reply: &str) -> DiagnosisReport {
    let cleaned = strip_code_fences(reply);
    match serde_json::from_str::<DiagnosisReport>(&cleaned) {
        Ok(report) => report,
        Err(e) => {
            log::warn!("Diagnosis reply was not valid JSON ({e}), returning raw text");
            DiagnosisReport::unknown(cleaned)
        }
    }
}

/// Ordered fallback chain over the configured providers.
pub struct DiagnosisChain {
    providers: Vec<Box<dyn DiagnosisProvider>>,
}

impl DiagnosisChain {
    pub fn new(providers: Vec<Box<dyn DiagnosisProvider>>) -> Self {
        DiagnosisChain { providers }
    }

    /// Try each provider in turn; the first success short-circuits. When all
    /// of them fail, the last error is the one reported.
    pub async fn diagnose(&self, image: &UploadedImage) -> Result<DiagnosisReport, ApiError> {
        let mut last_error = ApiError::Internal("No diagnosis providers configured".to_string());

        for provider in &self.providers {
            match provider.diagnose(image).await {
                Ok(report) => return Ok(report),
                Err(e) => {
                    log::warn!("{} diagnosis failed, trying next provider: {e}", provider.name());
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_image() -> UploadedImage {
        UploadedImage {
            file_name: "leaf.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            data: vec![1, 2, 3],
        }
    }

    struct StaticProvider(DiagnosisReport);

    #[async_trait]
    impl DiagnosisProvider for StaticProvider {
        fn name(&self) -> &'static str {
            "static"
        }

        async fn diagnose(&self, _image: &UploadedImage) -> Result<DiagnosisReport, ApiError> {
            Ok(self.0.clone())
        }
    }

    struct FailingProvider(&'static str);

    #[async_trait]
    impl DiagnosisProvider for FailingProvider {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn diagnose(&self, _image: &UploadedImage) -> Result<DiagnosisReport, ApiError> {
            Err(ApiError::upstream("provider offline", self.0))
        }
    }

    #[test]
    fn fenced_replies_parse() {
        let reply = "```json\n{\"class\": \"Tomato Early Blight\", \"confidence\": 0.87, \"recommendation\": \"Apply Mancozeb\"}\n```";
        let report = parse_report(reply);
        assert_eq!(report.label, "Tomato Early Blight");
        assert_eq!(report.confidence, 0.87);
        assert_eq!(report.recommendation, "Apply Mancozeb");
    }

    #[test]
    fn unparseable_replies_degrade_to_unknown() {
        let report = parse_report("The leaf looks sick but I cannot say more.");
        assert_eq!(report.label, "Unknown");
        assert_eq!(report.confidence, 0.0);
        assert_eq!(report.recommendation, "The leaf looks sick but I cannot say more.");
    }

    #[actix_web::test]
    async fn chain_short_circuits_on_first_success() {
        let first = DiagnosisReport {
            label: "Healthy".to_string(),
            confidence: 0.99,
            recommendation: "Keep it up".to_string(),
        };
        let chain = DiagnosisChain::new(vec![
            Box::new(StaticProvider(first.clone())),
            Box::new(FailingProvider("never reached")),
        ]);

        let report = chain.diagnose(&leaf_image()).await.unwrap();
        assert_eq!(report, first);
    }

    #[actix_web::test]
    async fn chain_falls_through_to_later_providers() {
        let fallback = DiagnosisReport {
            label: "Late Blight".to_string(),
            confidence: 0.72,
            recommendation: "Apply fungicide".to_string(),
        };
        let chain = DiagnosisChain::new(vec![
            Box::new(FailingProvider("connection refused")),
            Box::new(StaticProvider(fallback.clone())),
        ]);

        let report = chain.diagnose(&leaf_image()).await.unwrap();
        assert_eq!(report, fallback);
    }

    #[actix_web::test]
    async fn chain_reports_the_last_error_when_all_fail() {
        let chain = DiagnosisChain::new(vec![
            Box::new(FailingProvider("first down")),
            Box::new(FailingProvider("second down")),
        ]);

        let err = chain.diagnose(&leaf_image()).await.unwrap_err();
        assert!(err.to_string().contains("second down"));
    }
}
