// Copyright @yucwang 2021

use std::path::{ Path, PathBuf };

use indicatif::{ ProgressBar, ProgressStyle };

use crate::core::error::Result;
use crate::core::rmse_table::RmseTable;
use crate::core::sample_method::SampleMethod;
use crate::io::image_utils::load_bitmap;
use crate::math::bitmap::Bitmap;
use crate::math::metrics::rmse;

/// `{dir}/{method code}_{spp}.{ext}`
pub fn image_path(dir: &Path, method: SampleMethod, spp: u32, ext: &str) -> PathBuf {
    dir.join(format!("{}_{}.{}", method.code(), spp, ext))
}

/// Compare every `(method, spp)` image in `dir` against `reference`.
/// Images are visited method by method in the order given; the first
/// missing or mismatched image aborts the whole table.
pub fn compute_rmse_table(dir: &Path,
                          reference: &Bitmap,
                          spps: &[u32],
                          methods: &[SampleMethod],
                          ext: &str) -> Result<RmseTable> {
    let progress = ProgressBar::new((spps.len() * methods.len()) as u64);
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} images {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut table = RmseTable::new();
    for &method in methods {
        for &spp in spps {
            let path = image_path(dir, method, spp, ext);
            progress.set_message(format!("{} @ {} spp", method, spp));

            let image = match load_bitmap(&path) {
                Ok(image) => image,
                Err(e) => {
                    progress.abandon();
                    return Err(e);
                }
            };
            let value = match rmse(&image, reference) {
                Ok(value) => value,
                Err(e) => {
                    progress.abandon();
                    return Err(e);
                }
            };

            log::debug!("RMSE {} @ {} spp: {:.6}", method, spp, value);
            table.insert(method, spp, value);
            progress.inc(1);
        }
    }
    progress.finish_and_clear();

    Ok(table)
}

/// Load the reference once and build the RMSE table for all pairs.
pub fn rmse_vs_spp(dir: &Path,
                   reference_name: &str,
                   spps: &[u32],
                   methods: &[SampleMethod],
                   ext: &str) -> Result<RmseTable> {
    let reference_path = dir.join(reference_name);
    log::info!("Loading reference image: {}.", reference_path.display());
    let reference = load_bitmap(&reference_path)?;

    log::info!("Comparing {} methods x {} spp values against the reference.", methods.len(), spps.len());
    compute_rmse_table(dir, &reference, spps, methods, ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::EvalError;
    use image::{ ImageBuffer, Rgb };

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sampling_eval_aggregator_{}_{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_flat_png(path: &Path, width: u32, height: u32, value: u8) {
        ImageBuffer::from_pixel(width, height, Rgb([value, value, value])).save(path).unwrap();
    }

    // Image for (method, spp) is offset from the reference by code + spp.
    fn populate(dir: &Path, spps: &[u32], methods: &[SampleMethod]) {
        write_flat_png(&dir.join("default.png"), 4, 3, 100);
        for &method in methods {
            for &spp in spps {
                let value = 100 + method.code() as u8 + spp as u8;
                write_flat_png(&image_path(dir, method, spp, "png"), 4, 3, value);
            }
        }
    }

    #[test]
    fn image_path_uses_method_code() {
        let path = image_path(Path::new("out"), SampleMethod::NEE, 16, "png");
        assert_eq!(path, Path::new("out").join("3_16.png"));
    }

    #[test]
    fn builds_table_for_every_pair() {
        let dir = scratch_dir("pairs");
        let spps = [2, 4];
        let methods = [SampleMethod::BRDF, SampleMethod::MIS];
        populate(&dir, &spps, &methods);

        let table = rmse_vs_spp(&dir, "default.png", &spps, &methods, "png").unwrap();
        assert_eq!(table.len(), 4);
        assert!((table.get(SampleMethod::BRDF, 2).unwrap() - 2.0).abs() < 1e-9);
        assert!((table.get(SampleMethod::MIS, 4).unwrap() - 8.0).abs() < 1e-9);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn table_does_not_depend_on_list_order() {
        let dir = scratch_dir("order");
        let spps = [2, 4, 8];
        let methods = [SampleMethod::Light, SampleMethod::NEE, SampleMethod::MIS];
        populate(&dir, &spps, &methods);

        let forward = rmse_vs_spp(&dir, "default.png", &spps, &methods, "png").unwrap();
        let reversed = rmse_vs_spp(&dir, "default.png", &[8, 4, 2],
                                   &[SampleMethod::MIS, SampleMethod::NEE, SampleMethod::Light], "png").unwrap();
        assert_eq!(forward, reversed);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_image_fails() {
        let dir = scratch_dir("missing");
        populate(&dir, &[2], &[SampleMethod::BRDF]);

        let result = rmse_vs_spp(&dir, "default.png", &[2, 4], &[SampleMethod::BRDF], "png");
        match result {
            Err(EvalError::MissingFile(path)) => assert_eq!(path, dir.join("0_4.png")),
            other => panic!("expected missing file, got {:?}", other),
        }
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn mismatched_image_fails() {
        let dir = scratch_dir("shape");
        populate(&dir, &[2], &[SampleMethod::Mixture]);
        write_flat_png(&image_path(&dir, SampleMethod::Mixture, 2, "png"), 3, 3, 0);

        let result = rmse_vs_spp(&dir, "default.png", &[2], &[SampleMethod::Mixture], "png");
        assert!(matches!(result, Err(EvalError::ShapeMismatch { .. })));
        std::fs::remove_dir_all(&dir).ok();
    }
}
