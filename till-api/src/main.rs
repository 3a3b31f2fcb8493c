use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use till_api::{app, app_config::Config, AppState};
use till_catalog::JsonCatalog;
use till_checkout::{CheckoutOptions, CheckoutService};
use till_discount::GrpcDiscountSource;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "till_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("failed to load config")?;

    let catalog = JsonCatalog::from_path(&config.catalog.path)
        .with_context(|| format!("failed to load catalog from {}", config.catalog.path))?;
    tracing::info!("catalog loaded with {} products", catalog.len());

    let discounts = GrpcDiscountSource::new(
        &config.discount.endpoint,
        Duration::from_millis(config.discount.timeout_ms),
    )
    .context("failed to set up discount client")?;

    let service = CheckoutService::new(
        Arc::new(catalog),
        Arc::new(discounts),
        CheckoutOptions {
            on_discount_failure: config.checkout.on_discount_failure,
            discount_base: config.checkout.discount_base,
        },
    );

    let state = AppState {
        checkout: Arc::new(service),
    };
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
