// Copyright @yucwang 2021

use std::path::{ Path, PathBuf };

use crate::core::data_points::DataPoints;
use crate::core::error::Result;

pub trait ChartRenderer {
    /// File name of the chart inside the output directory.
    fn file_name(&self) -> String;

    /// Draw the chart into `out_dir`, replacing any previous file, and
    /// return the written path.
    fn render(&self, points: &DataPoints, out_dir: &Path) -> Result<PathBuf>;
}
