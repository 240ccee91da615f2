use app_state::AppSettings;
use axum::extract::FromRef;
use ocr_client::OcrClient;

#[derive(Clone)]
pub struct ApiContext {
    pub settings: AppSettings,
    pub ocr_client: OcrClient,
}

// These impls allow Axum to extract parts of the state directly, for
// handlers that only need the settings or the OCR client.
impl FromRef<ApiContext> for AppSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.clone()
    }
}

impl FromRef<ApiContext> for OcrClient {
    fn from_ref(state: &ApiContext) -> Self {
        state.ocr_client.clone()
    }
}
