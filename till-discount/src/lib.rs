pub mod grpc;
pub mod quote;

pub use grpc::GrpcDiscountSource;
pub use quote::{DiscountError, DiscountQuote, DiscountSource};
