use crate::quote::{DiscountError, DiscountQuote, DiscountSource};
use async_trait::async_trait;
use std::time::Duration;
use tonic::transport::{Channel, Endpoint};

pub mod proto {
    tonic::include_proto!("discount");
}

use proto::discount_service_client::DiscountServiceClient;
use proto::DiscountRequest;

/// Discount source speaking one unary RPC per product to a fixed endpoint.
/// The channel connects lazily and carries a per-call timeout, so a dead
/// service fails the quote instead of hanging the request.
#[derive(Debug)]
pub struct GrpcDiscountSource {
    client: DiscountServiceClient<Channel>,
}

impl GrpcDiscountSource {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, DiscountError> {
        let channel = Endpoint::from_shared(endpoint.to_string())
            .map_err(|e| DiscountError::InvalidEndpoint(e.to_string()))?
            .timeout(timeout)
            .connect_lazy();

        Ok(Self {
            client: DiscountServiceClient::new(channel),
        })
    }
}

#[async_trait]
impl DiscountSource for GrpcDiscountSource {
    async fn quote(&self, product_id: i64) -> Result<DiscountQuote, DiscountError> {
        let mut client = self.client.clone();

        let request = tonic::Request::new(DiscountRequest {
            product_id: product_id as i32,
        });

        let response = client
            .apply_discount(request)
            .await
            .map_err(|status| DiscountError::Unavailable(status.to_string()))?;

        Ok(DiscountQuote {
            percentage: f64::from(response.into_inner().percentage),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let err = GrpcDiscountSource::new("not a uri", Duration::from_millis(100)).unwrap_err();
        assert!(matches!(err, DiscountError::InvalidEndpoint(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_unavailable() {
        // Nothing listens here; the lazy channel fails on first use.
        let source =
            GrpcDiscountSource::new("http://127.0.0.1:1", Duration::from_millis(200)).unwrap();
        let err = source.quote(1).await.unwrap_err();
        assert!(matches!(err, DiscountError::Unavailable(_)));
    }
}
