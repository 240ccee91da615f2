use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub api: ApiSettings,
    pub ocr: OcrSettings,
    #[serde(default)]
    pub extraction: ExtractionSettings,
    pub logging: LoggingSettings,
}

/// Configuration for the API server.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u32,
    pub allowed_origins: Vec<String>,
    pub upload: UploadSettings,
}

/// Limits applied to multipart screenshot uploads.
#[derive(Debug, Deserialize, Clone)]
pub struct UploadSettings {
    pub max_upload_bytes: usize,
    /// Which file extensions are accepted as screenshots.
    pub allowed_extensions: Vec<String>,
}

impl UploadSettings {
    #[must_use]
    pub fn is_allowed_file(&self, filename: &str) -> bool {
        let Some((_, extension)) = filename.rsplit_once('.') else {
            return false;
        };
        self.allowed_extensions.contains(&extension.to_lowercase())
    }
}

/// Configuration for the external OCR service.
#[derive(Debug, Deserialize, Clone)]
pub struct OcrSettings {
    pub base_url: String,
    /// Recognition language, passed to the service as a query parameter.
    pub lang: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    /// Region holding the leaderboard table, cut out before recognition.
    /// When absent the full screenshot is sent.
    pub crop: Option<CropSettings>,
}

/// Pixel box, left/top inclusive, right/bottom exclusive.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct CropSettings {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

/// Tuning for the table reconstruction heuristics. The numbers fit one
/// specific game's leaderboard layout and font size; a layout change across
/// game versions should be a config change, not a rewrite.
#[derive(Debug, Deserialize, Clone)]
pub struct ExtractionSettings {
    /// Fragment centers are snapped to a grid this many pixels tall to form rows.
    #[serde(default = "default_row_bucket_px")]
    pub row_bucket_px: f64,
    /// Digit sequences longer than this read as EXP values.
    #[serde(default = "default_exp_digit_threshold")]
    pub exp_digit_threshold: usize,
    /// Digit sequences longer than this are TR and EXP fused into one token.
    #[serde(default = "default_merged_digit_threshold")]
    pub merged_digit_threshold: usize,
    #[serde(default = "default_max_nickname_chars")]
    pub max_nickname_chars: usize,
    /// Prefix for synthesized nicknames when a row has none ("runner1", ..).
    #[serde(default = "default_fallback_nickname_prefix")]
    pub fallback_nickname_prefix: String,
    /// Column headers and label texts that never belong to a player row.
    /// Matched case-insensitively against fragment text.
    #[serde(default = "default_stop_words")]
    pub stop_words: Vec<String>,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            row_bucket_px: default_row_bucket_px(),
            exp_digit_threshold: default_exp_digit_threshold(),
            merged_digit_threshold: default_merged_digit_threshold(),
            max_nickname_chars: default_max_nickname_chars(),
            fallback_nickname_prefix: default_fallback_nickname_prefix(),
            stop_words: default_stop_words(),
        }
    }
}

fn default_row_bucket_px() -> f64 {
    10.0
}

fn default_exp_digit_threshold() -> usize {
    5
}

fn default_merged_digit_threshold() -> usize {
    10
}

fn default_max_nickname_chars() -> usize {
    10
}

fn default_fallback_nickname_prefix() -> String {
    "runner".to_string()
}

fn default_stop_words() -> Vec<String> {
    ["rank", "nickname", "time", "tr", "exp", "points", "score", "bonus", "levelupt"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload_settings() -> UploadSettings {
        UploadSettings {
            max_upload_bytes: 16 * 1024 * 1024,
            allowed_extensions: ["png", "jpg", "jpeg", "gif", "bmp", "webp"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    #[test]
    fn accepts_known_extensions_case_insensitively() {
        let upload = upload_settings();
        assert!(upload.is_allowed_file("screenshot.png"));
        assert!(upload.is_allowed_file("SCREENSHOT.JPG"));
        assert!(upload.is_allowed_file("archive.tar.webp"));
    }

    #[test]
    fn rejects_unknown_or_missing_extensions() {
        let upload = upload_settings();
        assert!(!upload.is_allowed_file("notes.txt"));
        assert!(!upload.is_allowed_file("no_extension"));
        assert!(!upload.is_allowed_file(""));
    }
}
