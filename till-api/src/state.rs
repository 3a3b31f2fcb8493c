use std::sync::Arc;
use till_checkout::CheckoutService;

#[derive(Clone)]
pub struct AppState {
    pub checkout: Arc<CheckoutService>,
}
