use actix_web::{App, test, web};
use async_trait::async_trait;
use serde_json::Value;

use agrimitra_backend::diagnose::index::diagnose_routes;
use agrimitra_backend::diagnose::model::{DiagnosisReport, UploadedImage};
use agrimitra_backend::diagnose::provider::{DiagnosisChain, DiagnosisProvider};
use agrimitra_backend::forum::index::forum_routes;
use agrimitra_backend::middleware::not_found::not_found;
use agrimitra_backend::schemes::index::schemes_routes;
use agrimitra_backend::schemes::service::SchemesService;
use agrimitra_backend::utils::error::ApiError;
use agrimitra_backend::voice::index::voice_routes;

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

const BOUNDARY: &str = "test-boundary-7d81a0b4";

fn multipart_request(uri: &str, body: String) -> test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(body)
}

fn image_form_body() -> String {
    format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"image\"; filename=\"leaf.jpg\"\r\n\
         Content-Type: image/jpeg\r\n\
         \r\n\
         not-really-a-jpeg\r\n\
         --{BOUNDARY}--\r\n"
    )
}

fn imageless_form_body() -> String {
    format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"note\"\r\n\
         \r\n\
         just text\r\n\
         --{BOUNDARY}--\r\n"
    )
}

#[actix_web::test]
async fn voice_endpoint_reports_coming_soon() {
    let app = test::init_service(App::new().service(web::scope("/api").configure(voice_routes)))
        .await;

    let req = test::TestRequest::post().uri("/api/voice").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Voice endpoint coming soon");
}

#[actix_web::test]
async fn unknown_routes_get_a_json_404() {
    let app = test::init_service(
        App::new()
            .service(web::scope("/api").configure(voice_routes))
            .default_service(web::route().to(not_found)),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Route not found");
}

#[actix_web::test]
async fn schemes_endpoint_filters_by_query() {
    let schemes = SchemesService::load().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(schemes))
            .service(web::scope("/api").configure(schemes_routes)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/schemes?q=insurance")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    let schemes = body["schemes"].as_array().unwrap();
    assert_eq!(body["count"], schemes.len());
    assert!(
        schemes
            .iter()
            .any(|s| s["name"].as_str().unwrap_or_default().contains("Fasal Bima"))
    );
}

#[actix_web::test]
async fn schemes_endpoint_merges_state_entries() {
    let schemes = SchemesService::load().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(schemes))
            .service(web::scope("/api").configure(schemes_routes)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/schemes?state=Gujarat")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;

    let types: Vec<&str> = body["schemes"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["type"].as_str())
        .collect();
    assert!(types.contains(&"National"));
    assert!(types.contains(&"State"));
}

#[actix_web::test]
async fn diagnose_uses_the_fallback_provider() {
    let report = DiagnosisReport {
        label: "Early Blight".to_string(),
        confidence: 0.91,
        recommendation: "Apply fungicides like Mancozeb.".to_string(),
    };
    let chain = DiagnosisChain::new(vec![
        Box::new(FailingProvider("connection refused")),
        Box::new(StaticProvider(report.clone())),
    ]);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(chain))
            .service(web::scope("/api").configure(diagnose_routes)),
    )
    .await;

    let req = multipart_request("/api/diagnose", image_form_body()).to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: DiagnosisReport = test::read_body_json(resp).await;
    assert_eq!(body, report);
}

#[actix_web::test]
async fn diagnose_without_an_image_is_rejected() {
    let chain = DiagnosisChain::new(vec![Box::new(FailingProvider("unused"))]);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(chain))
            .service(web::scope("/api").configure(diagnose_routes)),
    )
    .await;

    let req = multipart_request("/api/diagnose", imageless_form_body()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No image uploaded");
}

#[actix_web::test]
async fn diagnose_reports_a_500_when_every_provider_fails() {
    let chain = DiagnosisChain::new(vec![
        Box::new(FailingProvider("classifier down")),
        Box::new(FailingProvider("model down")),
    ]);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(chain))
            .service(web::scope("/api").configure(diagnose_routes)),
    )
    .await;

    let req = multipart_request("/api/diagnose", image_form_body()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Internal Server Error");
    assert!(body["details"].as_str().unwrap().contains("model down"));
}

#[actix_web::test]
async fn forum_routes_answer_500_when_the_store_is_unavailable() {
    // Degraded boot: no ForumService is registered when MongoDB is not
    // configured, so the extractor fails instead of the process.
    let app = test::init_service(App::new().service(web::scope("/api").configure(forum_routes)))
        .await;

    let req = test::TestRequest::get().uri("/api/forum").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);
}
