use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

/// Error taxonomy for every route. The JSON body always carries an `error`
/// field; upstream failures also carry `details` so the client can show what
/// the external service said.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// An external dependency (model endpoint, market feed, weather API,
    /// classifier) failed or answered with garbage.
    #[error("{message}: {details}")]
    Upstream { message: String, details: String },

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn upstream(message: impl Into<String>, details: impl ToString) -> Self {
        ApiError::Upstream {
            message: message.into(),
            details: details.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::BadRequest(..) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(..) => StatusCode::NOT_FOUND,
            ApiError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("{self}");
        } else {
            log::warn!("{self}");
        }

        let body = match self {
            ApiError::Upstream { message, details } => json!({
                "error": message,
                "details": details,
            }),
            other => json!({ "error": other.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::Value;

    async fn body_of(error: ApiError) -> Value {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn status_codes_match_variants() {
        assert_eq!(
            ApiError::BadRequest("nope".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("gone".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::upstream("broke", "why").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn upstream_body_carries_details() {
        let body = body_of(ApiError::upstream("Failed to fetch market data", "timed out")).await;
        assert_eq!(body["error"], "Failed to fetch market data");
        assert_eq!(body["details"], "timed out");
    }

    #[actix_web::test]
    async fn simple_errors_expose_only_the_message() {
        let body = body_of(ApiError::NotFound("Post not found".into())).await;
        assert_eq!(body["error"], "Post not found");
        assert!(body.get("details").is_none());
    }
}
