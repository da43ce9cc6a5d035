use sampling_eval::core::config::{ settings_from_args, EvalSettings };
use sampling_eval::core::pipeline::run_spp_report;

use console::style;
use std::env;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match settings_from_args(EvalSettings::spp_report(), env::args().skip(1)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Usage: spp_report [--config eval.xml] [--dir <output dir>]");
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let rmse = run_spp_report(&settings).unwrap_or_else(|e| {
        log::error!("{}", e);
        std::process::exit(1);
    });

    for (method, by_spp) in rmse.iter() {
        for (spp, value) in by_spp {
            println!("{:<8} {:>5} spp  RMSE {}", style(method).cyan(), spp, style(format!("{:.6}", value)).bold());
        }
    }
}
