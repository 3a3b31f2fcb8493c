use crate::models::{CheckoutLine, CheckoutSummary, LineItemRequest};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use till_catalog::{CatalogError, ProductCatalog, ProductRecord};
use till_discount::{DiscountError, DiscountSource};

/// What to do when the discount service cannot produce a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiscountFailurePolicy {
    /// Price the line with a zero discount and keep going
    #[default]
    ZeroDiscount,
    /// Fail the whole checkout
    Propagate,
}

/// Which amount the discount fraction applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiscountBase {
    /// The unit amount, applied once per line regardless of quantity.
    /// Matches the historical billing behavior.
    #[default]
    UnitAmount,
    /// The full line total (unit amount times quantity)
    LineTotal,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckoutOptions {
    pub on_discount_failure: DiscountFailurePolicy,
    pub discount_base: DiscountBase,
}

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("product {0} is not available in the catalog")]
    ProductNotFound(i64),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Discount(#[from] DiscountError),
}

/// Resolves requested line items against the catalog, applies per-product
/// discounts and reduces the result into a checkout summary.
pub struct CheckoutService {
    catalog: Arc<dyn ProductCatalog>,
    discounts: Arc<dyn DiscountSource>,
    options: CheckoutOptions,
}

impl CheckoutService {
    pub fn new(
        catalog: Arc<dyn ProductCatalog>,
        discounts: Arc<dyn DiscountSource>,
        options: CheckoutOptions,
    ) -> Self {
        Self {
            catalog,
            discounts,
            options,
        }
    }

    /// Process the items strictly in input order, one catalog lookup and
    /// one discount quote per line. A product id missing from the catalog
    /// aborts the whole request; there is no partial summary.
    pub async fn checkout(
        &self,
        items: &[LineItemRequest],
    ) -> Result<CheckoutSummary, CheckoutError> {
        let mut lines = Vec::with_capacity(items.len());

        for item in items {
            let record = self
                .catalog
                .product(item.product_id)
                .await?
                .ok_or(CheckoutError::ProductNotFound(item.product_id))?;

            let percentage = match self.discounts.quote(item.product_id).await {
                Ok(quote) => quote.percentage,
                Err(err) => match self.options.on_discount_failure {
                    DiscountFailurePolicy::ZeroDiscount => {
                        tracing::warn!(
                            "discount lookup failed for product {}: {}, pricing line without discount",
                            item.product_id,
                            err
                        );
                        0.0
                    }
                    DiscountFailurePolicy::Propagate => return Err(err.into()),
                },
            };

            lines.push(self.price_line(item, &record, percentage));
        }

        Ok(CheckoutSummary::from_lines(lines))
    }

    fn price_line(
        &self,
        item: &LineItemRequest,
        record: &ProductRecord,
        percentage: f64,
    ) -> CheckoutLine {
        let total_amount = i64::from(item.quantity) * record.amount;

        // A zero-quantity line buys nothing, so it discounts nothing either.
        let discount_amount = if item.quantity == 0 {
            0
        } else {
            let base = match self.options.discount_base {
                DiscountBase::UnitAmount => record.amount,
                DiscountBase::LineTotal => total_amount,
            };
            (percentage * base as f64).floor() as i64
        };

        CheckoutLine {
            product_id: item.product_id,
            quantity: item.quantity,
            unit_amount: record.amount,
            total_amount,
            discount_amount,
            is_gift: record.is_gift,
        }
    }
}
