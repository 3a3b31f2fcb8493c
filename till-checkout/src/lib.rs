pub mod models;
pub mod service;

pub use models::{CheckoutLine, CheckoutSummary, LineItemRequest};
pub use service::{
    CheckoutError, CheckoutOptions, CheckoutService, DiscountBase, DiscountFailurePolicy,
};
