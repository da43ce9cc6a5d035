// Copyright 2020 @TwoCookingMice

use super::constants::{ Float, Vector3f, CHANNELS, LUMINANCE_WEIGHTS };

use std::ops;
use std::vec::Vec;

/// RGB image stored row-major, `(x, y)` indexed.
#[derive(Clone, Debug, PartialEq)]
pub struct Bitmap {
    data: Vec<Vector3f>,
    height: usize,
    width: usize
}

impl ops::Index<(usize, usize)> for Bitmap {
    type Output = Vector3f;

    fn index(&self, index: (usize, usize)) -> &Vector3f {
        assert!(index.0 < self.width && index.1 < self.height,
                "pixel ({}, {}) out of bounds for {}x{}", index.0, index.1, self.width, self.height);
        &self.data[index.0 + self.width * index.1]
    }
}

impl ops::IndexMut<(usize, usize)> for Bitmap {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Vector3f {
        assert!(index.0 < self.width && index.1 < self.height,
                "pixel ({}, {}) out of bounds for {}x{}", index.0, index.1, self.width, self.height);
        &mut self.data[index.0 + self.width * index.1]
    }
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        let pixel_number = width * height;
        Self { data: vec!(Vector3f::new(0.0, 0.0, 0.0);
                          pixel_number),
               width,
               height }
    }

    pub fn filled(width: usize, height: usize, value: Vector3f) -> Self {
        Self { data: vec![value; width * height], width, height }
    }

    /// Build a bitmap from row-major pixels. Returns `None` when the pixel
    /// count does not match `width * height`.
    pub fn from_pixels(width: usize, height: usize, data: Vec<Vector3f>) -> Option<Self> {
        if data.len() != width * height {
            return None;
        }
        Some(Self { data, width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(height, width, channels)`, the same layout an image array has.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height, self.width, CHANNELS)
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn pixels(&self) -> &[Vector3f] {
        &self.data
    }

    pub fn map<F>(&self, f: F) -> Bitmap
    where
        F: Fn(&Vector3f) -> Vector3f,
    {
        Self { data: self.data.iter().map(f).collect(), width: self.width, height: self.height }
    }

    pub fn mean_luminance(&self) -> Float {
        if self.data.is_empty() {
            return 0.0;
        }
        let sum: Float = self.data.iter().map(luminance).sum();
        sum / self.data.len() as Float
    }
}

pub fn luminance(rgb: &Vector3f) -> Float {
    LUMINANCE_WEIGHTS[0] * rgb[0] + LUMINANCE_WEIGHTS[1] * rgb[1] + LUMINANCE_WEIGHTS[2] * rgb[2]
}

/* Test for Bitmap */
