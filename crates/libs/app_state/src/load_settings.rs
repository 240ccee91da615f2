use crate::AppSettings;
use color_eyre::eyre::Result;
use std::path::Path;

/// Loads settings from `config/settings.yaml` in the working directory.
/// Values can be overridden per key with `APP__`-prefixed environment
/// variables, e.g. `APP__API__PORT=8080`.
pub fn load_app_settings() -> Result<AppSettings> {
    // Load .env first so overrides from there are visible to the builder.
    dotenv::from_path(".env").ok();
    let config_path = Path::new("config/settings.yaml").canonicalize()?;
    load_settings_from_path(&config_path)
}

pub fn load_settings_from_path(config_path: &Path) -> Result<AppSettings> {
    let builder = config::Config::builder()
        .add_source(config::File::from(config_path))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

    let settings = builder.build()?.try_deserialize::<AppSettings>()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const MINIMAL_SETTINGS: &str = r"
api:
  host: 127.0.0.1
  port: 5000
  allowed_origins:
    - http://localhost:5173
  upload:
    max_upload_bytes: 16777216
    allowed_extensions: [png, jpg]
ocr:
  base_url: http://localhost:8866/ocr
  lang: en
  connect_timeout_secs: 5
  request_timeout_secs: 30
  crop:
    left: 700
    top: 530
    right: 1000
    bottom: 870
logging:
  level: info
";

    #[test]
    fn loads_settings_from_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        fs::write(&path, MINIMAL_SETTINGS).unwrap();

        let settings = load_settings_from_path(&path).unwrap();
        assert_eq!(settings.api.port, 5000);
        assert_eq!(settings.api.upload.allowed_extensions, vec!["png", "jpg"]);
        assert_eq!(settings.ocr.base_url, "http://localhost:8866/ocr");

        let crop = settings.ocr.crop.unwrap();
        assert_eq!((crop.left, crop.top, crop.right, crop.bottom), (700, 530, 1000, 870));
    }

    #[test]
    fn extraction_section_is_optional() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        fs::write(&path, MINIMAL_SETTINGS).unwrap();

        let settings = load_settings_from_path(&path).unwrap();
        let extraction = settings.extraction;
        assert!((extraction.row_bucket_px - 10.0).abs() < f64::EPSILON);
        assert_eq!(extraction.exp_digit_threshold, 5);
        assert_eq!(extraction.merged_digit_threshold, 10);
        assert_eq!(extraction.fallback_nickname_prefix, "runner");
        assert!(extraction.stop_words.contains(&"levelupt".to_string()));
    }

    #[test]
    fn crop_can_be_left_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        let without_crop = MINIMAL_SETTINGS
            .lines()
            .filter(|line| {
                !line.contains("crop:")
                    && !line.trim_start().starts_with("left:")
                    && !line.trim_start().starts_with("top:")
                    && !line.trim_start().starts_with("right:")
                    && !line.trim_start().starts_with("bottom:")
            })
            .collect::<Vec<_>>()
            .join("\n");
        fs::write(&path, without_crop).unwrap();

        let settings = load_settings_from_path(&path).unwrap();
        assert!(settings.ocr.crop.is_none());
    }
}
