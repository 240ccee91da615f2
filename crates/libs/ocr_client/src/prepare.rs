use app_state::CropSettings;
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImagePrepError {
    #[error("Could not decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Could not encode image: {0}")]
    Encode(#[source] image::ImageError),
}

/// Decodes an uploaded screenshot, cuts out the configured leaderboard
/// region, and re-encodes the result as JPEG for the OCR service.
pub fn prepare_image(bytes: &[u8], crop: Option<CropSettings>) -> Result<Vec<u8>, ImagePrepError> {
    let decoded = image::load_from_memory(bytes).map_err(ImagePrepError::Decode)?;
    let rgb = decoded.to_rgb8();
    let rgb = match crop {
        Some(region) => crop_to_region(&rgb, region),
        None => rgb,
    };

    let mut jpeg = Vec::new();
    rgb.write_with_encoder(JpegEncoder::new(&mut jpeg))
        .map_err(ImagePrepError::Encode)?;
    Ok(jpeg)
}

fn crop_to_region(rgb: &RgbImage, region: CropSettings) -> RgbImage {
    let left = region.left.min(rgb.width());
    let top = region.top.min(rgb.height());
    let right = region.right.min(rgb.width());
    let bottom = region.bottom.min(rgb.height());
    if right <= left || bottom <= top {
        // Region lies past the screenshot bounds. Send the whole frame.
        return rgb.clone();
    }
    image::imageops::crop_imm(rgb, left, top, right - left, bottom - top).to_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 0])
        });
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn dimensions_of(jpeg: &[u8]) -> (u32, u32) {
        let decoded = image::load_from_memory(jpeg).unwrap();
        (decoded.width(), decoded.height())
    }

    #[test]
    fn crops_to_configured_region() {
        let crop = CropSettings {
            left: 10,
            top: 20,
            right: 60,
            bottom: 50,
        };
        let jpeg = prepare_image(&png_bytes(100, 100), Some(crop)).unwrap();
        assert_eq!(dimensions_of(&jpeg), (50, 30));
    }

    #[test]
    fn clamps_region_to_image_bounds() {
        let crop = CropSettings {
            left: 700,
            top: 530,
            right: 1000,
            bottom: 870,
        };
        // Screenshot narrower than the configured region.
        let jpeg = prepare_image(&png_bytes(800, 600), Some(crop)).unwrap();
        assert_eq!(dimensions_of(&jpeg), (100, 70));
    }

    #[test]
    fn region_outside_image_falls_back_to_full_frame() {
        let crop = CropSettings {
            left: 700,
            top: 530,
            right: 1000,
            bottom: 870,
        };
        let jpeg = prepare_image(&png_bytes(320, 240), Some(crop)).unwrap();
        assert_eq!(dimensions_of(&jpeg), (320, 240));
    }

    #[test]
    fn without_crop_only_reencodes() {
        let jpeg = prepare_image(&png_bytes(64, 32), None).unwrap();
        assert_eq!(dimensions_of(&jpeg), (64, 32));
    }

    #[test]
    fn rejects_undecodable_bytes() {
        let result = prepare_image(b"definitely not an image", None);
        assert!(matches!(result, Err(ImagePrepError::Decode(_))));
    }
}
