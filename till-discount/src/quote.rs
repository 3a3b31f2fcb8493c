use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Fractional discount applicable to a product, sourced externally.
/// The fraction is assumed to be within 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountQuote {
    pub percentage: f64,
}

/// Source of per-product discount quotes
#[async_trait]
pub trait DiscountSource: Send + Sync {
    async fn quote(&self, product_id: i64) -> Result<DiscountQuote, DiscountError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DiscountError {
    #[error("invalid discount endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("discount service unavailable: {0}")]
    Unavailable(String),
}
