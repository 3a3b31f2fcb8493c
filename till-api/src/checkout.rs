use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use till_checkout::{CheckoutLine, CheckoutSummary, LineItemRequest};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub products: Vec<ProductItem>,
}

#[derive(Debug, Deserialize)]
pub struct ProductItem {
    pub id: i64,
    pub quantity: u32,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub total_amount: i64,
    pub total_amount_with_discount: i64,
    pub total_discount: i64,
    pub products: Vec<CheckoutProduct>,
}

#[derive(Debug, Serialize)]
pub struct CheckoutProduct {
    pub id: i64,
    pub quantity: u32,
    pub unit_amount: i64,
    pub total_amount: i64,
    pub discount: i64,
    pub is_gift: bool,
}

impl From<CheckoutSummary> for CheckoutResponse {
    fn from(summary: CheckoutSummary) -> Self {
        Self {
            total_amount: summary.total_amount,
            total_amount_with_discount: summary.total_amount_with_discount,
            total_discount: summary.total_discount,
            products: summary
                .lines
                .into_iter()
                .map(CheckoutProduct::from)
                .collect(),
        }
    }
}

impl From<CheckoutLine> for CheckoutProduct {
    fn from(line: CheckoutLine) -> Self {
        Self {
            id: line.product_id,
            quantity: line.quantity,
            unit_amount: line.unit_amount,
            total_amount: line.total_amount,
            discount: line.discount_amount,
            is_gift: line.is_gift,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new().route("/checkout", post(create_checkout))
}

/// POST /checkout
/// Price the requested line items and return the cart summary
async fn create_checkout(
    State(state): State<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, AppError> {
    let items: Vec<LineItemRequest> = req
        .products
        .iter()
        .map(|p| LineItemRequest {
            product_id: p.id,
            quantity: p.quantity,
        })
        .collect();

    let summary = state.checkout.checkout(&items).await?;

    Ok(Json(summary.into()))
}
