// Copyright @yucwang 2021

use std::collections::BTreeMap;

use crate::core::rmse_table::RmseTable;
use crate::core::sample_method::SampleMethod;
use crate::core::timing::TimingTable;
use crate::math::constants::Float;

/// Plot data for one method. The three vectors are index-aligned.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MethodSeries {
    pub spp: Vec<u32>,
    pub rmse: Vec<Float>,
    pub time: Vec<Option<Float>>,
}

impl MethodSeries {
    pub fn len(&self) -> usize {
        self.spp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spp.is_empty()
    }

    pub fn rmse_by_spp(&self) -> Vec<(Float, Float)> {
        self.spp.iter().zip(self.rmse.iter()).map(|(s, r)| (*s as Float, *r)).collect()
    }

    /// Points with a recorded time only.
    pub fn rmse_by_time(&self) -> Vec<(Float, Float)> {
        self.time
            .iter()
            .zip(self.rmse.iter())
            .filter_map(|(t, r)| t.map(|t| (t, *r)))
            .collect()
    }

    pub fn time_by_spp(&self) -> Vec<(Float, Float)> {
        self.spp
            .iter()
            .zip(self.time.iter())
            .filter_map(|(s, t)| t.map(|t| (*s as Float, t)))
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataPoints {
    series: BTreeMap<SampleMethod, MethodSeries>,
}

impl DataPoints {
    pub fn from_rmse(rmse: &RmseTable) -> Self {
        let series = rmse
            .iter()
            .map(|(method, by_spp)| {
                let series = MethodSeries {
                    spp: by_spp.keys().copied().collect(),
                    rmse: by_spp.values().copied().collect(),
                    time: vec![None; by_spp.len()],
                };
                (method, series)
            })
            .collect();
        Self { series }
    }

    /// Join render times by `(method, spp)`. Points without a timing row
    /// keep `None`.
    pub fn with_timing(mut self, timing: &TimingTable) -> Self {
        for (method, series) in self.series.iter_mut() {
            series.time = series.spp.iter().map(|spp| timing.time_of(*method, *spp)).collect();
        }
        self
    }

    pub fn get(&self, method: SampleMethod) -> Option<&MethodSeries> {
        self.series.get(&method)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SampleMethod, &MethodSeries)> {
        self.series.iter().map(|(m, s)| (*m, s))
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timing::TimingRow;

    #[test]
    fn series_follow_ascending_spp() {
        let mut rmse = RmseTable::new();
        rmse.insert(SampleMethod::NEE, 16, 0.2);
        rmse.insert(SampleMethod::NEE, 4, 0.8);
        rmse.insert(SampleMethod::NEE, 8, 0.4);

        let points = DataPoints::from_rmse(&rmse);
        let nee = points.get(SampleMethod::NEE).unwrap();
        assert_eq!(nee.spp, vec![4, 8, 16]);
        assert_eq!(nee.rmse, vec![0.8, 0.4, 0.2]);
        assert_eq!(nee.time, vec![None, None, None]);
        assert!(nee.rmse_by_time().is_empty());
    }

    #[test]
    fn timing_is_joined_by_method_and_spp() {
        let mut rmse = RmseTable::new();
        rmse.insert(SampleMethod::MIS, 4, 0.1);
        rmse.insert(SampleMethod::MIS, 8, 0.05);
        rmse.insert(SampleMethod::BRDF, 4, 0.3);
        let timing = TimingTable::new(vec![
            TimingRow::new(SampleMethod::MIS, 8, 2.0),
            TimingRow::new(SampleMethod::BRDF, 4, 0.7),
            TimingRow::new(SampleMethod::MIS, 4, 1.0),
        ]);

        let points = DataPoints::from_rmse(&rmse).with_timing(&timing);
        let mis = points.get(SampleMethod::MIS).unwrap();
        assert_eq!(mis.time, vec![Some(1.0), Some(2.0)]);
        assert_eq!(mis.rmse_by_time(), vec![(1.0, 0.1), (2.0, 0.05)]);
        assert_eq!(mis.time_by_spp(), vec![(4.0, 1.0), (8.0, 2.0)]);
        assert_eq!(points.get(SampleMethod::BRDF).unwrap().rmse_by_spp(), vec![(4.0, 0.3)]);
    }

    #[test]
    fn missing_timing_rows_are_skipped_in_time_series() {
        let mut rmse = RmseTable::new();
        rmse.insert(SampleMethod::Light, 2, 0.5);
        rmse.insert(SampleMethod::Light, 4, 0.25);
        let timing = TimingTable::new(vec![TimingRow::new(SampleMethod::Light, 4, 3.0)]);

        let light = DataPoints::from_rmse(&rmse).with_timing(&timing);
        let light = light.get(SampleMethod::Light).unwrap();
        assert_eq!(light.len(), 2);
        assert_eq!(light.rmse_by_time(), vec![(3.0, 0.25)]);
    }
}
