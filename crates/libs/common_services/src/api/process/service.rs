use crate::api::process::error::ProcessError;
use crate::api::process::interfaces::{ImageUpload, ProcessResponse};
use crate::leaderboard::aggregate::PlayerAggregator;
use crate::leaderboard::extract::extract_table;
use app_state::AppSettings;
use common_types::PlayerRow;
use ocr_client::{ImagePrepError, OcrClient, OcrClientError, prepare_image};
use thiserror::Error;
use tracing::{debug, warn};

/// Failure of a single image. Stays inside the request: it becomes an error
/// entry in that image's report and the batch moves on.
#[derive(Debug, Error)]
enum ImagePipelineError {
    #[error("file type not allowed")]
    DisallowedExtension,

    #[error(transparent)]
    Prepare(#[from] ImagePrepError),

    #[error(transparent)]
    Ocr(#[from] OcrClientError),
}

/// Runs every uploaded screenshot through crop, OCR and table extraction,
/// folding the recognized rows into per-player aggregates in upload order.
pub async fn process_images(
    uploads: Vec<ImageUpload>,
    ocr_client: &OcrClient,
    settings: &AppSettings,
) -> Result<ProcessResponse, ProcessError> {
    if uploads.is_empty() {
        return Err(ProcessError::NoImagesProvided);
    }
    if uploads.iter().all(|upload| upload.filename.is_empty()) {
        return Err(ProcessError::NoImagesSelected);
    }

    let mut aggregator = PlayerAggregator::new();
    for upload in &uploads {
        if upload.filename.is_empty() {
            continue;
        }
        match process_single_image(upload, ocr_client, settings).await {
            Ok(rows) => {
                debug!("{}: {} players recognized", upload.filename, rows.len());
                aggregator.record(&upload.filename, rows);
            }
            Err(error) => {
                warn!("Could not process {}: {}", upload.filename, error);
                aggregator.record_failure(&upload.filename, error.to_string());
            }
        }
    }

    let data = aggregator.snapshot();
    let total_images = data.processed_images.len();
    let unique_players = data.players.len();
    Ok(ProcessResponse {
        success: true,
        processed_images: data.processed_images,
        aggregated_players: data.players,
        statistics: data.statistics,
        total_images,
        unique_players,
    })
}

async fn process_single_image(
    upload: &ImageUpload,
    ocr_client: &OcrClient,
    settings: &AppSettings,
) -> Result<Vec<PlayerRow>, ImagePipelineError> {
    if !settings.api.upload.is_allowed_file(&upload.filename) {
        return Err(ImagePipelineError::DisallowedExtension);
    }

    let jpeg = prepare_image(&upload.bytes, settings.ocr.crop)?;
    let fragments = ocr_client.recognize(&upload.filename, jpeg).await?;
    let extraction = extract_table(&fragments, &settings.extraction);
    Ok(extraction.rows)
}
