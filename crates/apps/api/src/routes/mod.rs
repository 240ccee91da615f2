mod api_doc;
pub mod process;
pub mod root;

use crate::api_state::ApiContext;
use crate::routes::api_doc::ApiDoc;
use crate::routes::process::router::process_public_router;
use crate::routes::root::router::root_public_router;
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// --- Router Construction ---
pub fn create_router(api_state: ApiContext) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .merge(public_routes())
        .with_state(api_state)
}

fn public_routes() -> Router<ApiContext> {
    Router::new()
        .merge(root_public_router())
        .merge(process_public_router())
}
