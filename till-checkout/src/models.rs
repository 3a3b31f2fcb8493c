use serde::{Deserialize, Serialize};

/// One (product id, quantity) pair in a checkout request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineItemRequest {
    pub product_id: i64,
    pub quantity: u32,
}

/// A line item enriched with pricing and discount data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutLine {
    pub product_id: i64,
    pub quantity: u32,
    pub unit_amount: i64,
    pub total_amount: i64,
    pub discount_amount: i64,
    pub is_gift: bool,
}

/// Aggregate totals over the checkout lines, kept in input order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutSummary {
    pub total_amount: i64,
    pub total_amount_with_discount: i64,
    pub total_discount: i64,
    pub lines: Vec<CheckoutLine>,
}

impl CheckoutSummary {
    /// Reduce lines into aggregate totals. The with-discount total is
    /// accumulated as total minus discount per line, so the summary
    /// always satisfies `total_amount_with_discount ==
    /// total_amount - total_discount`.
    pub fn from_lines(lines: Vec<CheckoutLine>) -> Self {
        let mut total_amount = 0;
        let mut total_amount_with_discount = 0;
        let mut total_discount = 0;

        for line in &lines {
            total_amount += line.total_amount;
            total_amount_with_discount += line.total_amount - line.discount_amount;
            total_discount += line.discount_amount;
        }

        Self {
            total_amount,
            total_amount_with_discount,
            total_discount,
            lines,
        }
    }
}
