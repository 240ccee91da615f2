use app_state::OcrSettings;
use common_types::OcrFragment;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum OcrClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("OCR service returned status {status}: {text}")]
    UnexpectedStatus { status: StatusCode, text: String },

    #[error("Could not parse OCR response: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Client for the external OCR service that reads leaderboard screenshots.
#[derive(Clone)]
pub struct OcrClient {
    http_client: Client,
    base_url: String,
    lang: String,
}

impl OcrClient {
    /// Create the OCR client.
    ///
    /// # Panics
    /// if it can't create the underlying HTTP client.
    #[must_use]
    pub fn new(settings: &OcrSettings) -> Self {
        Self {
            http_client: Client::builder()
                .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
                .timeout(Duration::from_secs(settings.request_timeout_secs))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: settings.base_url.clone(),
            lang: settings.lang.clone(),
        }
    }

    /// Submit one prepared JPEG to the OCR service and return the recognized
    /// text fragments.
    ///
    /// # Errors
    /// * If the POST request can't be made.
    /// * If an unexpected status code is received.
    /// * If the response body is not the expected fragment list.
    pub async fn recognize(
        &self,
        filename: &str,
        jpeg_bytes: Vec<u8>,
    ) -> Result<Vec<OcrFragment>, OcrClientError> {
        let part = Part::bytes(jpeg_bytes)
            .file_name(filename.to_string())
            .mime_str("image/jpeg")?;
        let form = Form::new().part("file", part);

        let response = self
            .http_client
            .post(&self.base_url)
            .query(&[("lang", self.lang.as_str())])
            .header("accept", "application/json")
            .multipart(form)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let text = response.text().await?;
                let fragments: Vec<OcrFragment> = serde_json::from_str(&text)?;
                debug!("OCR found {} fragments in {filename}", fragments.len());
                Ok(fragments)
            }
            status => {
                let text = response.text().await?;
                Err(OcrClientError::UnexpectedStatus { status, text })
            }
        }
    }
}
