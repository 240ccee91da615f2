use crate::api_state::ApiContext;
use crate::routes::process::handlers::process_screenshots;
use axum::{Router, routing::post};

pub fn process_public_router() -> Router<ApiContext> {
    Router::new().route("/process", post(process_screenshots))
}
