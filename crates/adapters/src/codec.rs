use fotobox_application::ApplicationError;
use fotobox_domain::{Pixel, Raster};
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, RgbaImage};

/// Fixed lossy quality for all persisted content.
pub(crate) const JPEG_QUALITY: u8 = 80;

pub(crate) fn encode_jpeg(image: &Raster) -> Result<Vec<u8>, ApplicationError> {
    let rgba = raster_to_rgba(image)?;
    // JPEG has no alpha channel; flatten before encoding.
    let rgb = DynamicImage::ImageRgba8(rgba).to_rgb8();
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY)
        .encode(rgb.as_raw(), rgb.width(), rgb.height(), ColorType::Rgb8)
        .map_err(|error| ApplicationError::Encoding(error.to_string()))?;
    Ok(bytes)
}

pub(crate) fn decode_bytes(bytes: &[u8]) -> Result<Raster, ApplicationError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|error| ApplicationError::Decode(error.to_string()))?;
    rgba_to_raster(&decoded.to_rgba8())
}

pub(crate) fn raster_to_rgba(image: &Raster) -> Result<RgbaImage, ApplicationError> {
    let mut data = Vec::with_capacity(image.pixels().len() * 4);
    for pixel in image.pixels() {
        data.extend_from_slice(pixel);
    }
    RgbaImage::from_raw(image.width(), image.height(), data).ok_or_else(|| {
        ApplicationError::Encoding("raster dimensions do not match pixel data".to_string())
    })
}

pub(crate) fn rgba_to_raster(image: &RgbaImage) -> Result<Raster, ApplicationError> {
    let pixels: Vec<Pixel> = image
        .as_raw()
        .chunks_exact(4)
        .map(|chunk| [chunk[0], chunk[1], chunk[2], chunk[3]])
        .collect();
    Raster::new(image.width(), image.height(), pixels).map_err(ApplicationError::from)
}
