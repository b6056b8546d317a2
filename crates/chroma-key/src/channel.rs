/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::errors::ParameterErrors;

/// The color channel expected to dominate screen pixels
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ChannelSelector {
    Red,
    Green,
    Blue
}

impl ChannelSelector {
    /// Index of the screen channel inside an `R, G, B` pixel
    pub const fn screen_index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2
        }
    }

    /// Indices of the two reference channels, in `R, G, B` order
    pub const fn reference_indices(self) -> [usize; 2] {
        match self {
            Self::Red => [1, 2],
            Self::Green => [0, 2],
            Self::Blue => [0, 1]
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "r",
            Self::Green => "g",
            Self::Blue => "b"
        }
    }
}

impl FromStr for ChannelSelector {
    type Err = ParameterErrors;

    /// Parse one of `r`, `g` or `b`
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "r" => Ok(Self::Red),
            "g" => Ok(Self::Green),
            "b" => Ok(Self::Blue),
            _ => Err(ParameterErrors::InvalidChannel(input.to_string()))
        }
    }
}

impl Display for ChannelSelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::{ChannelSelector, ParameterErrors};

    #[test]
    fn test_parse_channels() {
        assert_eq!("r".parse::<ChannelSelector>(), Ok(ChannelSelector::Red));
        assert_eq!("g".parse::<ChannelSelector>(), Ok(ChannelSelector::Green));
        assert_eq!("b".parse::<ChannelSelector>(), Ok(ChannelSelector::Blue));
    }

    #[test]
    fn test_reject_channels() {
        for input in ["", "R", "rg", "x", " r"] {
            assert_eq!(
                input.parse::<ChannelSelector>(),
                Err(ParameterErrors::InvalidChannel(input.to_string()))
            );
        }
    }

    #[test]
    fn test_reference_channels_exclude_screen() {
        for channel in [
            ChannelSelector::Red,
            ChannelSelector::Green,
            ChannelSelector::Blue
        ] {
            let screen = channel.screen_index();
            let [a, b] = channel.reference_indices();

            assert!(a != screen && b != screen && a != b);
        }
    }
}
