// Copyright @yucwang 2021

use std::fs;
use std::path::Path;

use serde::{ Deserialize, Serialize };

use crate::core::error::{ EvalError, Result };
use crate::core::rmse_table::RmseTable;
use crate::core::sample_method::SampleMethod;
use crate::math::constants::Float;

#[derive(Debug, Deserialize, Serialize)]
struct TimingRecord {
    #[serde(rename = "SampleMethod")]
    sample_method: i64,
    #[serde(rename = "SPP")]
    spp: u32,
    #[serde(rename = "Time")]
    time: Float,
    #[serde(rename = "RMSE", default)]
    rmse: Option<Float>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimingRow {
    pub method: SampleMethod,
    pub spp: u32,
    pub time: Float,
    pub rmse: Option<Float>,
}

impl TimingRow {
    pub fn new(method: SampleMethod, spp: u32, time: Float) -> Self {
        Self { method, spp, time, rmse: None }
    }
}

/// Render times written by the renderer, in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimingTable {
    rows: Vec<TimingRow>,
}

impl TimingTable {
    pub fn new(rows: Vec<TimingRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[TimingRow] {
        &self.rows
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(EvalError::MissingFile(path.to_path_buf()));
        }
        let data = fs::read(path)?;
        Self::from_reader(data.as_slice())
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut rows = Vec::new();
        for record in reader.deserialize() {
            let record: TimingRecord = record?;
            rows.push(TimingRow {
                method: SampleMethod::from_code(record.sample_method)?,
                spp: record.spp,
                time: record.time,
                rmse: record.rmse,
            });
        }
        Ok(Self { rows })
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = csv::Writer::from_path(path)?;
        self.write_records(&mut writer)?;
        writer.flush()?;
        log::info!("Timing table written to: {}.", path.display());
        Ok(())
    }

    pub fn to_csv_string(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        self.write_records(&mut writer)?;
        let bytes = writer.into_inner().map_err(|e| EvalError::Io(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write_records<W: std::io::Write>(&self, writer: &mut csv::Writer<W>) -> Result<()> {
        for row in &self.rows {
            writer.serialize(TimingRecord {
                sample_method: row.method.code() as i64,
                spp: row.spp,
                time: row.time,
                rmse: row.rmse,
            })?;
        }
        Ok(())
    }

    /// Fill the RMSE column from `rmse`. Every row is resolved before any
    /// row is changed, so a miss leaves the table as it was.
    pub fn merge_rmse(&mut self, rmse: &RmseTable) -> Result<()> {
        let mut merged = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let value = rmse
                .get(row.method, row.spp)
                .ok_or(EvalError::LookupMiss { method: row.method, spp: row.spp })?;
            merged.push(value);
        }

        for (row, value) in self.rows.iter_mut().zip(merged) {
            row.rmse = Some(value);
        }
        Ok(())
    }

    /// First recorded time for `(method, spp)`.
    pub fn time_of(&self, method: SampleMethod, spp: u32) -> Option<Float> {
        self.rows
            .iter()
            .find(|row| row.method == method && row.spp == spp)
            .map(|row| row.time)
    }
}

/// Load the timing table at `path`, append the RMSE column and overwrite
/// the file with the result.
pub fn rmse_vs_time(path: &Path, rmse: &RmseTable) -> Result<TimingTable> {
    log::info!("Merging RMSE values into timing table: {}.", path.display());
    let mut table = TimingTable::load(path)?;
    table.merge_rmse(rmse)?;
    table.save(path)?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sampling_eval_timing_{}_{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("timing_results.csv");
        fs::write(&path, contents).unwrap();
        path
    }

    fn mis_rmse() -> RmseTable {
        let mut rmse = RmseTable::new();
        rmse.insert(SampleMethod::MIS, 4, 0.1);
        rmse.insert(SampleMethod::MIS, 8, 0.05);
        rmse
    }

    #[test]
    fn parses_renderer_output() {
        let table = TimingTable::from_reader("SampleMethod,SPP,Time\n4,4,1.5\n0,8,2.25\n".as_bytes()).unwrap();
        assert_eq!(table.rows(), &[
            TimingRow::new(SampleMethod::MIS, 4, 1.5),
            TimingRow::new(SampleMethod::BRDF, 8, 2.25),
        ]);
        assert_eq!(table.time_of(SampleMethod::BRDF, 8), Some(2.25));
        assert_eq!(table.time_of(SampleMethod::BRDF, 4), None);
    }

    #[test]
    fn unknown_method_code_fails() {
        let result = TimingTable::from_reader("SampleMethod,SPP,Time\n9,4,1.0\n".as_bytes());
        assert!(matches!(result, Err(EvalError::UnknownMethod(_))));
    }

    #[test]
    fn merge_keeps_row_order() {
        let mut table = TimingTable::new(vec![
            TimingRow::new(SampleMethod::MIS, 4, 1.0),
            TimingRow::new(SampleMethod::MIS, 8, 2.0),
        ]);
        table.merge_rmse(&mis_rmse()).unwrap();

        let column: Vec<Option<Float>> = table.rows().iter().map(|r| r.rmse).collect();
        assert_eq!(column, vec![Some(0.1), Some(0.05)]);
    }

    #[test]
    fn merge_miss_leaves_table_untouched() {
        let mut table = TimingTable::new(vec![
            TimingRow::new(SampleMethod::MIS, 4, 1.0),
            TimingRow::new(SampleMethod::NEE, 4, 2.0),
        ]);
        let before = table.clone();
        match table.merge_rmse(&mis_rmse()) {
            Err(EvalError::LookupMiss { method, spp }) => {
                assert_eq!(method, SampleMethod::NEE);
                assert_eq!(spp, 4);
            }
            other => panic!("expected lookup miss, got {:?}", other),
        }
        assert_eq!(table, before);
    }

    #[test]
    fn rmse_vs_time_rewrites_file() {
        let path = scratch_file("rewrite", "SampleMethod,SPP,Time\n4,4,1.0\n4,8,2.0\n");
        let merged = rmse_vs_time(&path, &mis_rmse()).unwrap();
        assert_eq!(merged.rows().len(), 2);

        let written = fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("SampleMethod,SPP,Time,RMSE"));
        assert_eq!(lines.next(), Some("4,4,1.0,0.1"));
        assert_eq!(lines.next(), Some("4,8,2.0,0.05"));

        // Running again over the augmented file replaces the column.
        let again = rmse_vs_time(&path, &mis_rmse()).unwrap();
        assert_eq!(again, merged);
        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn rmse_vs_time_does_not_write_on_miss() {
        let contents = "SampleMethod,SPP,Time\n4,16,1.0\n";
        let path = scratch_file("miss", contents);
        assert!(rmse_vs_time(&path, &mis_rmse()).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), contents);
        fs::remove_dir_all(path.parent().unwrap()).ok();
    }
}
