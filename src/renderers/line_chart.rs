// Copyright @yucwang 2021

use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;

use crate::core::error::{ EvalError, Result };
use crate::math::constants::Float;

const CHART_SIZE: (u32, u32) = (1200, 700);

pub struct LineSeriesData {
    pub label: Option<String>,
    pub points: Vec<(Float, Float)>,
}

pub struct LineChart<'a> {
    pub title: &'a str,
    pub x_desc: &'a str,
    pub y_desc: &'a str,
    pub series: Vec<LineSeriesData>,
}

fn plot_error<E: std::fmt::Display>(err: E) -> EvalError {
    EvalError::Plot(err.to_string())
}

/// Range covering `values` with 5% padding. Degenerate or empty inputs
/// get a unit-wide range so the chart can still be built.
pub fn padded_range<I: IntoIterator<Item = Float>>(values: I) -> Range<Float> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((Float::INFINITY, Float::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    if (max - min).abs() < 1e-12 {
        return (min - 0.5)..(max + 0.5);
    }
    let pad = 0.05 * (max - min);
    (min - pad)..(max + pad)
}

impl<'a> LineChart<'a> {
    pub fn x_range(&self) -> Range<Float> {
        padded_range(self.series.iter().flat_map(|s| s.points.iter().map(|p| p.0)))
    }

    pub fn y_range(&self) -> Range<Float> {
        padded_range(self.series.iter().flat_map(|s| s.points.iter().map(|p| p.1)))
    }

    pub fn draw(&self, out_path: &Path) -> Result<()> {
        let root = BitMapBackend::new(out_path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(plot_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(self.title, ("sans-serif", 22))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(self.x_range(), self.y_range())
            .map_err(plot_error)?;

        chart
            .configure_mesh()
            .x_desc(self.x_desc)
            .y_desc(self.y_desc)
            .draw()
            .map_err(plot_error)?;

        let mut has_labels = false;
        for (i, series) in self.series.iter().enumerate() {
            if series.points.is_empty() {
                continue;
            }
            let color = Palette99::pick(i).mix(0.9);
            let drawn = chart
                .draw_series(LineSeries::new(series.points.iter().copied(), &color))
                .map_err(plot_error)?;
            if let Some(label) = &series.label {
                has_labels = true;
                drawn
                    .label(label.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
            }
        }

        if has_labels {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(plot_error)?;
        }

        root.present().map_err(plot_error)?;
        Ok(())
    }
}
