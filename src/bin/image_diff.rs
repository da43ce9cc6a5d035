use sampling_eval::io::exr_utils::write_bitmap_exr;
use sampling_eval::io::image_utils::load_bitmap;
use sampling_eval::math::metrics::{ abs_diff, diff_stats };

use std::env;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <image_a> <image_b> [--heatmap diff.exr]", args[0]);
        std::process::exit(1);
    }

    let mut heatmap: Option<String> = None;
    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--heatmap" => {
                i += 1;
                heatmap = args.get(i).cloned();
            }
            _ => {}
        }
        i += 1;
    }

    let load = |path: &str| {
        load_bitmap(path).unwrap_or_else(|e| {
            log::error!("failed to read {}: {}", path, e);
            std::process::exit(1);
        })
    };
    let a = load(&args[1]);
    let b = load(&args[2]);

    let stats = match diff_stats(&a, &b) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    println!("Size: {}x{} ({} pixels)", a.width(), a.height(), a.pixel_count());
    println!("RMSE: {:.6}", stats.rmse);
    println!("Mean abs diff: R {:.6}, G {:.6}, B {:.6}",
        stats.mean_abs[0], stats.mean_abs[1], stats.mean_abs[2]);
    println!("Max abs diff:  R {:.6}, G {:.6}, B {:.6}",
        stats.max_abs[0], stats.max_abs[1], stats.max_abs[2]);
    match stats.luminance_ratio() {
        Some(ratio) => println!("Mean luminance: A {:.6}, B {:.6}, ratio {:.6}",
            stats.mean_luminance_a, stats.mean_luminance_b, ratio),
        None => println!("Mean luminance: A {:.6}, B {:.6}, ratio n/a",
            stats.mean_luminance_a, stats.mean_luminance_b),
    }
    println!("Mean abs luminance diff: {:.6}", stats.mean_abs_luminance);

    if let Some(path) = heatmap {
        let diff = match abs_diff(&a, &b) {
            Ok(diff) => diff,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(2);
            }
        };
        if let Err(e) = write_bitmap_exr(&diff, &path) {
            eprintln!("failed to write {}: {}", path, e);
            std::process::exit(3);
        }
    }
}
