/* Copyright 2020 @Yuchen Wong */

use nalgebra::Vector3;

pub type Float = f64;

pub type Vector3f = Vector3<Float>;

/// Number of color channels every loaded image is expanded to.
pub const CHANNELS: usize = 3;

/// Scale of encoded 8-bit pixel values.
pub const ENCODED_MAX: Float = 255.0;

/// Rec. 709 luminance weights.
pub const LUMINANCE_WEIGHTS: [Float; 3] = [0.2126, 0.7152, 0.0722];
