/* Copyright 2020 @TwoCookingMice */

use crate::core::error::Result;
use crate::math::bitmap::Bitmap;

use exr::prelude::*;
use std::path::Path;

// Write a bitmap as an RGB OpenEXR image.
pub fn write_bitmap_exr<P: AsRef<Path>>(bitmap: &Bitmap, file_path: P) -> Result<()> {
    let file_path = file_path.as_ref();
    log::info!("Starting writing openexr image: {}.", file_path.display());

    write_rgb_file(file_path, bitmap.width(), bitmap.height(), |x, y| {
        let p = bitmap[(x, y)];
        (p[0] as f32, p[1] as f32, p[2] as f32)
    })?;

    log::info!("EXR written to: {}.", file_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::image_utils::load_bitmap;
    use crate::math::constants::Vector3f;

    #[test]
    fn written_exr_reads_back() {
        let path = std::env::temp_dir().join(format!("sampling_eval_exr_utils_{}.exr", std::process::id()));
        let mut bitmap = Bitmap::new(3, 2);
        bitmap[(2, 1)] = Vector3f::new(0.5, 4.0, 1.25);

        write_bitmap_exr(&bitmap, &path).unwrap();
        let loaded = load_bitmap(&path).unwrap();
        assert_eq!(loaded, bitmap);
        std::fs::remove_file(&path).ok();
    }
}
