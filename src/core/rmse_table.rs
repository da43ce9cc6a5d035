// Copyright @yucwang 2021

use std::collections::BTreeMap;

use crate::core::sample_method::SampleMethod;
use crate::math::constants::Float;

/// RMSE per method and sample count. Both levels are ordered maps, so
/// iteration is by method code and then by ascending SPP regardless of
/// the order the method and SPP lists were given in. Charts built from
/// the table therefore always draw methods in code order and points in
/// ascending SPP, not in caller order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RmseTable {
    values: BTreeMap<SampleMethod, BTreeMap<u32, Float>>,
}

impl RmseTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, method: SampleMethod, spp: u32, rmse: Float) {
        self.values.entry(method).or_insert_with(BTreeMap::new).insert(spp, rmse);
    }

    pub fn get(&self, method: SampleMethod, spp: u32) -> Option<Float> {
        self.values.get(&method).and_then(|by_spp| by_spp.get(&spp)).copied()
    }

    pub fn method(&self, method: SampleMethod) -> Option<&BTreeMap<u32, Float>> {
        self.values.get(&method)
    }

    pub fn methods(&self) -> impl Iterator<Item = SampleMethod> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SampleMethod, &BTreeMap<u32, Float>)> {
        self.values.iter().map(|(m, v)| (*m, v))
    }

    pub fn len(&self) -> usize {
        self.values.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
