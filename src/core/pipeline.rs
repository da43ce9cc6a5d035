// Copyright @yucwang 2021

use crate::core::aggregator::rmse_vs_spp;
use crate::core::config::EvalSettings;
use crate::core::data_points::DataPoints;
use crate::core::error::Result;
use crate::core::rmse_table::RmseTable;
use crate::core::timing::{ rmse_vs_time, TimingTable };
use crate::renderers::{ ChartRenderer, RmseVsSpp, RmseVsTime, TimeVsSpp };

fn build_rmse_table(settings: &EvalSettings) -> Result<RmseTable> {
    rmse_vs_spp(&settings.output_dir,
                &settings.reference,
                &settings.spps,
                &settings.methods,
                &settings.image_extension)
}

/// RMSE table plus the RMSE-vs-SPP chart.
pub fn run_spp_report(settings: &EvalSettings) -> Result<RmseTable> {
    log::info!("Starting SPP report in {}.", settings.output_dir.display());

    let rmse = build_rmse_table(settings)?;
    let points = DataPoints::from_rmse(&rmse);
    RmseVsSpp.render(&points, &settings.output_dir)?;

    Ok(rmse)
}

/// RMSE table, timing merge (rewrites the timing file), then the SPP,
/// time and highlighted-method charts.
pub fn run_timing_report(settings: &EvalSettings) -> Result<(RmseTable, TimingTable)> {
    log::info!("Starting timing report in {}.", settings.output_dir.display());

    let rmse = build_rmse_table(settings)?;
    let timing = rmse_vs_time(&settings.timing_path(), &rmse)?;
    let points = DataPoints::from_rmse(&rmse).with_timing(&timing);

    let renderers: Vec<Box<dyn ChartRenderer>> = vec![
        Box::new(RmseVsSpp),
        Box::new(RmseVsTime),
        Box::new(TimeVsSpp::new(settings.highlight)),
    ];
    for renderer in &renderers {
        renderer.render(&points, &settings.output_dir)?;
    }

    Ok((rmse, timing))
}
