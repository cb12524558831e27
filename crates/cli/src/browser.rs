// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Simulated browser identities.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One of the browser targets the engine can impersonate
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize,
)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum BrowserIdentity {
    /// WebKit-Chromium variant
    #[default]
    Chrome,
    /// WebKit-Edge variant
    Edge,
    /// Current Firefox
    Ff,
    /// Extended-support Firefox
    FfEsr,
    /// Legacy Internet-Explorer-like target
    Ie,
}

/// Order in which per-browser entries are consulted during resolution
pub const PRECEDENCE: [BrowserIdentity; 5] = [
    BrowserIdentity::Ie,
    BrowserIdentity::Edge,
    BrowserIdentity::FfEsr,
    BrowserIdentity::Ff,
    BrowserIdentity::Chrome,
];

impl BrowserIdentity {
    /// Every identity, in declaration order
    pub const ALL: [BrowserIdentity; 5] = [
        BrowserIdentity::Chrome,
        BrowserIdentity::Edge,
        BrowserIdentity::Ff,
        BrowserIdentity::FfEsr,
        BrowserIdentity::Ie,
    ];

    /// Stable short name used in fixtures and report file names
    pub fn nickname(self) -> &'static str {
        match self {
            BrowserIdentity::Chrome => "CHROME",
            BrowserIdentity::Edge => "EDGE",
            BrowserIdentity::Ff => "FF",
            BrowserIdentity::FfEsr => "FF-ESR",
            BrowserIdentity::Ie => "IE",
        }
    }

    /// Fixture key for this browser's slot
    pub fn slot_key(self) -> &'static str {
        match self {
            BrowserIdentity::Chrome => "chrome",
            BrowserIdentity::Edge => "edge",
            BrowserIdentity::Ff => "ff",
            BrowserIdentity::FfEsr => "ff_esr",
            BrowserIdentity::Ie => "ie",
        }
    }

    /// Human-readable name
    pub fn display_name(self) -> &'static str {
        match self {
            BrowserIdentity::Chrome => "Chrome",
            BrowserIdentity::Edge => "Edge",
            BrowserIdentity::Ff => "Firefox",
            BrowserIdentity::FfEsr => "Firefox ESR",
            BrowserIdentity::Ie => "Internet Explorer",
        }
    }
}

impl std::fmt::Display for BrowserIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nickname())
    }
}

/// Error returned when a browser name is not recognized
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown browser '{0}': expected one of CHROME, EDGE, FF, FF-ESR, IE")]
pub struct BrowserParseError(pub String);

impl FromStr for BrowserIdentity {
    type Err = BrowserParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BrowserIdentity::ALL
            .into_iter()
            .find(|b| {
                b.nickname().eq_ignore_ascii_case(wanted) || b.slot_key().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| BrowserParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "browser_tests.rs"]
mod tests;
