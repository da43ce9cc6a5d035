// Copyright @yucwang 2021

use std::fmt;
use std::str::FromStr;

use crate::core::error::EvalError;

/// Estimator strategy a comparison image was rendered with. The numeric
/// code appears in image file names and in the timing table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SampleMethod {
    BRDF,
    Light,
    Mixture,
    NEE,
    MIS,
}

impl SampleMethod {
    pub const ALL: [SampleMethod; 5] = [
        SampleMethod::BRDF,
        SampleMethod::Light,
        SampleMethod::Mixture,
        SampleMethod::NEE,
        SampleMethod::MIS,
    ];

    pub fn code(&self) -> u32 {
        match self {
            SampleMethod::BRDF => 0,
            SampleMethod::Light => 1,
            SampleMethod::Mixture => 2,
            SampleMethod::NEE => 3,
            SampleMethod::MIS => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SampleMethod::BRDF => "BRDF",
            SampleMethod::Light => "Light",
            SampleMethod::Mixture => "Mixture",
            SampleMethod::NEE => "NEE",
            SampleMethod::MIS => "MIS",
        }
    }

    pub fn from_code(code: i64) -> Result<Self, EvalError> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.code() as i64 == code)
            .ok_or_else(|| EvalError::UnknownMethod(code.to_string()))
    }
}

impl fmt::Display for SampleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Accepts either the method name (any case) or its numeric code.
impl FromStr for SampleMethod {
    type Err = EvalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::from_code(code);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EvalError::UnknownMethod(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        let codes: Vec<u32> = SampleMethod::ALL.iter().map(|m| m.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4]);
        assert_eq!(SampleMethod::from_code(4).unwrap(), SampleMethod::MIS);
        assert!(SampleMethod::from_code(5).is_err());
        assert!(SampleMethod::from_code(-1).is_err());
    }

    #[test]
    fn parse_by_name_or_code() {
        assert_eq!("nee".parse::<SampleMethod>().unwrap(), SampleMethod::NEE);
        assert_eq!(" Mixture ".parse::<SampleMethod>().unwrap(), SampleMethod::Mixture);
        assert_eq!("1".parse::<SampleMethod>().unwrap(), SampleMethod::Light);
        assert!(matches!("path".parse::<SampleMethod>(), Err(EvalError::UnknownMethod(_))));
    }

    #[test]
    fn ordering_follows_code() {
        let mut methods = vec![SampleMethod::MIS, SampleMethod::BRDF, SampleMethod::NEE];
        methods.sort();
        assert_eq!(methods, vec![SampleMethod::BRDF, SampleMethod::NEE, SampleMethod::MIS]);
    }
}
