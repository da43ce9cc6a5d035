// Copyright @yucwang 2026

use crate::core::error::{ EvalError, Result };
use crate::math::bitmap::Bitmap;
use crate::math::constants::{ Float, Vector3f, ENCODED_MAX };

use exr::prelude::*;
use image::io::Reader as ImageReader;
use image::{ DynamicImage, GenericImageView };
use std::path::Path;

/// Load an image as an RGB bitmap. PNG and JPEG keep their encoded values
/// on the 0..255 scale, OpenEXR keeps linear values.
pub fn load_bitmap<P: AsRef<Path>>(path: P) -> Result<Bitmap> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(EvalError::MissingFile(path.to_path_buf()));
    }

    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let bitmap = match ext.as_str() {
        "exr" => load_exr(path)?,
        "png" | "jpg" | "jpeg" => load_encoded(path)?,
        _ => return Err(EvalError::UnsupportedFormat(ext)),
    };

    log::debug!("Loaded {} ({}x{}).", path.display(), bitmap.width(), bitmap.height());
    Ok(bitmap)
}

fn load_encoded(path: &Path) -> Result<Bitmap> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(bitmap_from_dynamic(&img))
}

/// 8-bit sources map to their exact byte values. Wider sources are
/// rescaled onto the same 0..255 range keeping the fraction
/// (`v / 65535 * 255` for 16-bit), rather than truncated to the high byte
/// the way an 8-bit color decode would.
pub fn bitmap_from_dynamic(img: &DynamicImage) -> Bitmap {
    let (width, height) = img.dimensions();
    let width = width as usize;
    let height = height as usize;
    let color = img.color();
    let bits_per_channel = color.bytes_per_pixel() as usize * 8 / color.channel_count() as usize;

    let data: Vec<Vector3f> = if bits_per_channel <= 8 {
        img.to_rgb8()
            .pixels()
            .map(|p| Vector3f::new(p[0] as Float, p[1] as Float, p[2] as Float))
            .collect()
    } else {
        img.to_rgb32f()
            .pixels()
            .map(|p| Vector3f::new(p[0] as Float, p[1] as Float, p[2] as Float) * ENCODED_MAX)
            .collect()
    };

    let mut bitmap = Bitmap::new(width, height);
    for (i, p) in data.into_iter().enumerate() {
        bitmap[(i % width, i / width)] = p;
    }
    bitmap
}

fn load_exr(path: &Path) -> Result<Bitmap> {
    let image = read()
        .no_deep_data()
        .largest_resolution_level()
        .rgba_channels(
            |resolution, _| Bitmap::new(resolution.width(), resolution.height()),
            |bitmap, position, (r, g, b, _a): (f32, f32, f32, f32)| {
                bitmap[(position.x(), position.y())] = Vector3f::new(r as Float, g as Float, b as Float);
            },
        )
        .first_valid_layer()
        .all_attributes()
        .from_file(path)?;

    Ok(image.layer_data.channel_data.pixels)
}
