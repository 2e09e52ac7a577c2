pub mod config;
pub mod delivery;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use routes::AppState;

/// Create app router for testing
///
/// Builds the Axum router around the given submitter, without binding a
/// listener.
pub fn create_app(submitter: techfolks_inquiry::InquirySubmitter) -> axum::Router {
    routes::router(AppState { submitter })
}
