use crate::api_state::ApiContext;
use axum::Json;
use axum::extract::{Multipart, State};
use common_services::api::process::error::ProcessError;
use common_services::api::process::interfaces::{ImageUpload, ProcessResponse};
use common_services::api::process::service::process_images;
use tracing::instrument;

/// Upload leaderboard screenshots and get aggregated player statistics.
///
/// Screenshots are read from repeated `images` form fields and processed in
/// upload order. Images that fail OCR or decoding are reported individually;
/// they do not fail the batch.
#[utoipa::path(
    post,
    path = "/process",
    tag = "Process",
    request_body(
        content_type = "multipart/form-data",
        description = "One or more screenshots in repeated `images` fields"
    ),
    responses(
        (status = 200, description = "Aggregated leaderboard results", body = ProcessResponse),
        (status = 400, description = "No usable images were submitted."),
        (status = 500, description = "An unexpected internal error occurred."),
    )
)]
#[instrument(skip(context, multipart), err(Debug))]
pub async fn process_screenshots(
    State(context): State<ApiContext>,
    mut multipart: Multipart,
) -> Result<Json<ProcessResponse>, ProcessError> {
    let mut uploads = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("images") {
            continue;
        }
        let filename = field.file_name().unwrap_or("").to_string();
        let bytes = field.bytes().await?.to_vec();
        uploads.push(ImageUpload { filename, bytes });
    }

    let response = process_images(uploads, &context.ocr_client, &context.settings).await?;
    Ok(Json(response))
}
