// Copyright @yucwang 2021

use std::fmt;
use std::path::PathBuf;

use crate::core::config::ConfigLoadError;
use crate::core::sample_method::SampleMethod;

/// `(height, width, channels)`
pub type Shape = (usize, usize, usize);

#[derive(Debug)]
pub enum EvalError {
    Io(std::io::Error),
    Image(image::ImageError),
    Exr(exr::error::Error),
    Csv(csv::Error),
    Config(ConfigLoadError),
    Plot(String),
    UnsupportedFormat(String),
    MissingFile(PathBuf),
    ShapeMismatch { expected: Shape, found: Shape },
    EmptyImage,
    UnknownMethod(String),
    LookupMiss { method: SampleMethod, spp: u32 },
}

impl From<std::io::Error> for EvalError {
    fn from(err: std::io::Error) -> Self {
        EvalError::Io(err)
    }
}

impl From<image::ImageError> for EvalError {
    fn from(err: image::ImageError) -> Self {
        EvalError::Image(err)
    }
}

impl From<exr::error::Error> for EvalError {
    fn from(err: exr::error::Error) -> Self {
        EvalError::Exr(err)
    }
}

impl From<csv::Error> for EvalError {
    fn from(err: csv::Error) -> Self {
        EvalError::Csv(err)
    }
}

impl From<ConfigLoadError> for EvalError {
    fn from(err: ConfigLoadError) -> Self {
        EvalError::Config(err)
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Io(err) => write!(f, "io error: {}", err),
            EvalError::Image(err) => write!(f, "image error: {}", err),
            EvalError::Exr(err) => write!(f, "exr error: {}", err),
            EvalError::Csv(err) => write!(f, "csv error: {}", err),
            EvalError::Config(err) => write!(f, "config error: {}", err),
            EvalError::Plot(msg) => write!(f, "plot error: {}", msg),
            EvalError::UnsupportedFormat(ext) => write!(f, "unsupported image format: {}", ext),
            EvalError::MissingFile(path) => write!(f, "missing file: {}", path.display()),
            EvalError::ShapeMismatch { expected, found } => write!(
                f,
                "images should have the same shape: {:?} vs {:?}",
                expected, found
            ),
            EvalError::EmptyImage => write!(f, "cannot compare empty images"),
            EvalError::UnknownMethod(value) => write!(f, "unknown sample method: {}", value),
            EvalError::LookupMiss { method, spp } => {
                write!(f, "no RMSE value for method {} at {} spp", method, spp)
            }
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvalError::Io(err) => Some(err),
            EvalError::Image(err) => Some(err),
            EvalError::Exr(err) => Some(err),
            EvalError::Csv(err) => Some(err),
            EvalError::Config(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EvalError>;
