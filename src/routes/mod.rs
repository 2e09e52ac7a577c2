use axum::{
    Router,
    routing::{get, post},
};
use techfolks_inquiry::InquirySubmitter;

mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub submitter: InquirySubmitter,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/contact", post(contact::action))
        .route("/contact/options", get(contact::options))
        .with_state(app_state)
}
