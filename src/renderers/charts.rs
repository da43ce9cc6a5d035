// Copyright @yucwang 2021

use std::path::{ Path, PathBuf };

use super::line_chart::{ LineChart, LineSeriesData };
use super::renderer::ChartRenderer;
use crate::core::data_points::{ DataPoints, MethodSeries };
use crate::core::error::Result;
use crate::core::sample_method::SampleMethod;
use crate::math::constants::Float;

fn labelled_series<F>(points: &DataPoints, select: F) -> Vec<LineSeriesData>
where
    F: Fn(&MethodSeries) -> Vec<(Float, Float)>,
{
    points
        .iter()
        .map(|(method, series)| LineSeriesData {
            label: Some(method.name().to_string()),
            points: select(series),
        })
        .collect()
}

fn draw_into(chart: &LineChart, out_dir: &Path, file_name: String) -> Result<PathBuf> {
    let out_path = out_dir.join(file_name);
    chart.draw(&out_path)?;
    log::info!("Chart written to: {}.", out_path.display());
    Ok(out_path)
}

/// One line per method, RMSE over sample count.
pub struct RmseVsSpp;

impl ChartRenderer for RmseVsSpp {
    fn file_name(&self) -> String {
        String::from("rmse_vs_spp.png")
    }

    fn render(&self, points: &DataPoints, out_dir: &Path) -> Result<PathBuf> {
        let chart = LineChart {
            title: "RMSE vs SPP for different methods",
            x_desc: "SPP",
            y_desc: "RMSE",
            series: labelled_series(points, MethodSeries::rmse_by_spp),
        };
        draw_into(&chart, out_dir, self.file_name())
    }
}

/// One line per method, RMSE over render time.
pub struct RmseVsTime;

impl ChartRenderer for RmseVsTime {
    fn file_name(&self) -> String {
        String::from("rmse_vs_time.png")
    }

    fn render(&self, points: &DataPoints, out_dir: &Path) -> Result<PathBuf> {
        let chart = LineChart {
            title: "RMSE vs Time for different methods",
            x_desc: "Time",
            y_desc: "RMSE",
            series: labelled_series(points, MethodSeries::rmse_by_time),
        };
        draw_into(&chart, out_dir, self.file_name())
    }
}

/// Render time over sample count for a single method.
pub struct TimeVsSpp {
    pub method: SampleMethod,
}

impl TimeVsSpp {
    pub fn new(method: SampleMethod) -> Self {
        Self { method }
    }
}

impl ChartRenderer for TimeVsSpp {
    fn file_name(&self) -> String {
        format!("{}_time_vs_spp.png", self.method.name().to_ascii_lowercase())
    }

    fn render(&self, points: &DataPoints, out_dir: &Path) -> Result<PathBuf> {
        let title = format!("Time vs SPP for {} algorithm", self.method);
        let series = points
            .get(self.method)
            .map(|s| vec![LineSeriesData { label: None, points: s.time_by_spp() }])
            .unwrap_or_default();
        if series.iter().all(|s| s.points.is_empty()) {
            log::warn!("No timing data for {}, drawing an empty chart.", self.method);
        }

        let chart = LineChart {
            title: &title,
            x_desc: "SPP",
            y_desc: "Time (s)",
            series,
        };
        draw_into(&chart, out_dir, self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rmse_table::RmseTable;

    #[test]
    fn file_names() {
        assert_eq!(RmseVsSpp.file_name(), "rmse_vs_spp.png");
        assert_eq!(RmseVsTime.file_name(), "rmse_vs_time.png");
        assert_eq!(TimeVsSpp::new(SampleMethod::MIS).file_name(), "mis_time_vs_spp.png");
        assert_eq!(TimeVsSpp::new(SampleMethod::NEE).file_name(), "nee_time_vs_spp.png");
    }

    #[test]
    fn series_are_labelled_by_method() {
        let mut rmse = RmseTable::new();
        rmse.insert(SampleMethod::MIS, 4, 0.1);
        rmse.insert(SampleMethod::BRDF, 4, 0.3);
        rmse.insert(SampleMethod::BRDF, 8, 0.2);

        let series = labelled_series(&DataPoints::from_rmse(&rmse), MethodSeries::rmse_by_spp);
        let labels: Vec<&str> = series.iter().map(|s| s.label.as_deref().unwrap()).collect();
        assert_eq!(labels, vec!["BRDF", "MIS"]);
        assert_eq!(series[0].points, vec![(4.0, 0.3), (8.0, 0.2)]);

        let timed = labelled_series(&DataPoints::from_rmse(&rmse), MethodSeries::rmse_by_time);
        assert!(timed.iter().all(|s| s.points.is_empty()));
    }
}
