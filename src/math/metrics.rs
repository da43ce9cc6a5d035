// Copyright @yucwang 2021

use super::bitmap::{ luminance, Bitmap };
use super::constants::{ Float, Vector3f };
use crate::core::error::{ EvalError, Result };

#[derive(Clone, Debug)]
pub struct DiffStats {
    pub rmse: Float,
    pub mean_abs: Vector3f,
    pub max_abs: Vector3f,
    pub mean_luminance_a: Float,
    pub mean_luminance_b: Float,
    pub mean_abs_luminance: Float,
}

impl DiffStats {
    /// Ratio of mean luminances, `None` when B is black.
    pub fn luminance_ratio(&self) -> Option<Float> {
        if self.mean_luminance_b == 0.0 {
            None
        } else {
            Some(self.mean_luminance_a / self.mean_luminance_b)
        }
    }
}

fn check_comparable(a: &Bitmap, b: &Bitmap) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(EvalError::ShapeMismatch { expected: a.shape(), found: b.shape() });
    }
    if a.is_empty() {
        return Err(EvalError::EmptyImage);
    }
    Ok(())
}

/// Mean of the squared difference over every channel of every pixel.
pub fn mse(a: &Bitmap, b: &Bitmap) -> Result<Float> {
    check_comparable(a, b)?;

    let sum: Float = a.pixels()
        .iter()
        .zip(b.pixels().iter())
        .map(|(pa, pb)| (pa - pb).norm_squared())
        .sum();
    let count = a.pixel_count() * a.shape().2;
    Ok(sum / count as Float)
}

pub fn rmse(a: &Bitmap, b: &Bitmap) -> Result<Float> {
    Ok(mse(a, b)?.sqrt())
}

pub fn abs_diff(a: &Bitmap, b: &Bitmap) -> Result<Bitmap> {
    check_comparable(a, b)?;

    let data = a.pixels()
        .iter()
        .zip(b.pixels().iter())
        .map(|(pa, pb)| (pa - pb).abs())
        .collect();
    Bitmap::from_pixels(a.width(), a.height(), data)
        .ok_or(EvalError::ShapeMismatch { expected: a.shape(), found: b.shape() })
}

pub fn diff_stats(a: &Bitmap, b: &Bitmap) -> Result<DiffStats> {
    check_comparable(a, b)?;

    let mut sum_abs = Vector3f::zeros();
    let mut max_abs = Vector3f::zeros();
    let mut sum_sq = 0.0;
    let mut sum_luma_abs = 0.0;

    for (pa, pb) in a.pixels().iter().zip(b.pixels().iter()) {
        let d = (pa - pb).abs();
        sum_abs += d;
        max_abs = max_abs.sup(&d);
        sum_sq += d.norm_squared();
        sum_luma_abs += (luminance(pa) - luminance(pb)).abs();
    }

    let n = a.pixel_count() as Float;
    Ok(DiffStats {
        rmse: (sum_sq / (n * a.shape().2 as Float)).sqrt(),
        mean_abs: sum_abs / n,
        max_abs,
        mean_luminance_a: a.mean_luminance(),
        mean_luminance_b: b.mean_luminance(),
        mean_abs_luminance: sum_luma_abs / n,
    })
}
