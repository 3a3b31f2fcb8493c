use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use till_checkout::CheckoutError;

#[derive(Debug)]
pub enum AppError {
    ProductNotFound(i64),
    CatalogUnavailable(String),
    DiscountUnavailable(String),
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::ProductNotFound(id) => AppError::ProductNotFound(id),
            CheckoutError::Catalog(e) => AppError::CatalogUnavailable(e.to_string()),
            CheckoutError::Discount(e) => AppError::DiscountUnavailable(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ProductNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("product {} is not available in the catalog", id),
            ),
            AppError::CatalogUnavailable(msg) => {
                tracing::error!("catalog unavailable: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            AppError::DiscountUnavailable(msg) => {
                tracing::error!("discount service unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "discount service unavailable".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
