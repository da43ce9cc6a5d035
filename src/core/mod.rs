// Copyright @yucwang 2021

pub mod aggregator;
pub mod config;
pub mod data_points;
pub mod error;
pub mod pipeline;
pub mod rmse_table;
pub mod sample_method;
pub mod timing;
