use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use futures_util::StreamExt;

use crate::diagnose::model::UploadedImage;
use crate::diagnose::provider::DiagnosisChain;
use crate::utils::error::ApiError;

/// POST /api/diagnose
pub async fn diagnose(
    chain: web::Data<DiagnosisChain>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let image = extract_image(payload)
        .await?
        .ok_or_else(|| ApiError::BadRequest("No image uploaded".to_string()))?;

    let report = chain
        .diagnose(&image)
        .await
        .map_err(|e| ApiError::upstream("Internal Server Error", e))?;

    Ok(HttpResponse::Ok().json(report))
}

/// Pull the first non-empty `image` file out of the multipart form. The
/// bytes stay in memory; nothing touches the filesystem.
async fn extract_image(mut payload: Multipart) -> Result<Option<UploadedImage>, ApiError> {
    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| ApiError::BadRequest(format!("Error reading multipart field: {e}")))?;

        let content_disposition = match field.content_disposition() {
            Some(cd) => cd,
            None => continue,
        };

        if content_disposition.get_name() != Some("image") {
            continue;
        }

        let file_name = content_disposition
            .get_filename()
            .unwrap_or("upload")
            .to_string();
        let mime_type = field
            .content_type()
            .map(|ct| ct.to_string())
            .unwrap_or_else(|| "image/jpeg".to_string());

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk
                .map_err(|e| ApiError::BadRequest(format!("Error reading file chunk: {e}")))?;
            data.extend_from_slice(&chunk);
        }

        if !data.is_empty() {
            return Ok(Some(UploadedImage {
                file_name,
                mime_type,
                data,
            }));
        }
    }

    Ok(None)
}
