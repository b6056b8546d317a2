/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::str::FromStr;

use crate::errors::ParameterErrors;

/// Smallest accepted threshold
pub const MIN_THRESHOLD: f64 = 1.0;
/// Largest accepted threshold
pub const MAX_THRESHOLD: f64 = 10.0;

/// How many times larger the screen channel must be than each
/// reference channel for a pixel to be keyed out.
///
/// Always within `[1.0, 10.0]`
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    /// Create a threshold, returning an error if `value` is NaN or
    /// outside `[1.0, 10.0]`
    pub fn new(value: f64) -> Result<Threshold, ParameterErrors> {
        if (MIN_THRESHOLD..=MAX_THRESHOLD).contains(&value) {
            Ok(Threshold(value))
        } else {
            Err(ParameterErrors::InvalidThreshold(value.to_string()))
        }
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

impl FromStr for Threshold {
    type Err = ParameterErrors;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let value = input
            .parse::<f64>()
            .map_err(|_| ParameterErrors::InvalidThreshold(input.to_string()))?;

        Threshold::new(value).map_err(|_| ParameterErrors::InvalidThreshold(input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{ParameterErrors, Threshold};

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(Threshold::new(1.0).map(Threshold::get), Ok(1.0));
        assert_eq!(Threshold::new(10.0).map(Threshold::get), Ok(10.0));
        assert!(Threshold::new(0.999).is_err());
        assert!(Threshold::new(10.001).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
        assert!(Threshold::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!("5".parse::<Threshold>().map(Threshold::get), Ok(5.0));
        assert_eq!("2.5".parse::<Threshold>().map(Threshold::get), Ok(2.5));
        assert_eq!(
            "five".parse::<Threshold>(),
            Err(ParameterErrors::InvalidThreshold("five".to_string()))
        );
        assert_eq!(
            "11".parse::<Threshold>(),
            Err(ParameterErrors::InvalidThreshold("11".to_string()))
        );
    }
}
