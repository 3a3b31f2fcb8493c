use serde::{Deserialize, Serialize};

/// Static reference data describing a purchasable product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Unit amount in the smallest currency denomination
    pub amount: i64,
    pub is_gift: bool,
}
