// Copyright 2020 TwoCookingMice

use sampling_eval::core::config::{ settings_from_args, EvalSettings };
use sampling_eval::core::pipeline::run_timing_report;
use sampling_eval::core::rmse_table::RmseTable;

use console::style;
use std::env;

fn print_summary(rmse: &RmseTable) {
    println!("{}", style("RMSE by method and spp").bold());
    for (method, by_spp) in rmse.iter() {
        let values: Vec<String> = by_spp
            .iter()
            .map(|(spp, value)| format!("{}: {:.4}", spp, value))
            .collect();
        println!("  {:<8} {}", style(method).cyan(), values.join(", "));
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match settings_from_args(EvalSettings::timing_report(), env::args().skip(1)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Usage: {} [--config eval.xml] [--dir <output dir>]", env!("CARGO_PKG_NAME"));
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    match run_timing_report(&settings) {
        Ok((rmse, timing)) => {
            print_summary(&rmse);
            log::info!("Merged RMSE into {} timing rows.", timing.rows().len());
        }
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
