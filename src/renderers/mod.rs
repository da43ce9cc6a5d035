// Copyright @yucwang 2021

pub mod charts;
pub mod line_chart;
pub mod renderer;

pub use self::charts::{ RmseVsSpp, RmseVsTime, TimeVsSpp };
pub use self::renderer::ChartRenderer;
