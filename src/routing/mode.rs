// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Transport modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A transport mode tag on an edge or transport hint.
///
/// Unrecognized names are kept verbatim in `Other` so that cost lookups can
/// fall back to the default rate instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransportMode {
    /// Scheduled flight
    Flight,
    /// Rail
    Train,
    /// Road coach
    Bus,
    /// Private car or taxi
    Car,
    /// Any other mode, stored lowercased
    Other(String),
}

impl TransportMode {
    /// The modes with dedicated cost profiles.
    pub const KNOWN: [TransportMode; 4] = [
        TransportMode::Flight,
        TransportMode::Train,
        TransportMode::Bus,
        TransportMode::Car,
    ];

    /// Parses a mode name case-insensitively. Never fails.
    pub fn parse(name: &str) -> Self {
        let name = name.trim().to_lowercase();
        match name.as_str() {
            "flight" | "air" | "plane" => Self::Flight,
            "train" | "rail" => Self::Train,
            "bus" | "coach" => Self::Bus,
            "car" | "taxi" | "road" => Self::Car,
            _ => Self::Other(name),
        }
    }

    /// Lowercase name of the mode.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Flight => "flight",
            Self::Train => "train",
            Self::Bus => "bus",
            Self::Car => "car",
            Self::Other(name) => name,
        }
    }
}

impl FromStr for TransportMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for TransportMode {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<TransportMode> for String {
    fn from(value: TransportMode) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
