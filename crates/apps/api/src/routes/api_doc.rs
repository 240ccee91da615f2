use crate::routes::{process, root};
use common_services::api::process::interfaces::ProcessResponse;
use common_types::{ImageReport, PlayerAggregate, PlayerRow, Statistics};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::root,
        root::handlers::health_check,
        // Process handlers
        process::handlers::process_screenshots,
    ),
    components(
        schemas(
            ProcessResponse,
            ImageReport,
            PlayerAggregate,
            PlayerRow,
            Statistics,
        ),
    ),
    tags(
        (name = "Process", description = "Screenshot upload and leaderboard aggregation"),
        (name = "System", description = "Health check"),
    )
)]
pub struct ApiDoc;
