// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-browser expectation sets and the cascading resolver.
//!
//! A real-browser [`ExpectationSet`] holds one optional property list per
//! browser plus an optional default. An [`NyiExpectationSet`] records the
//! engine's known deviations and has no default: when it says nothing for a
//! browser, the engine is assumed to match the real-browser baseline.
//!
//! Resolution walks [`PRECEDENCE`] and takes the first slot that is declared
//! and equals the current browser.

use serde::{Deserialize, Serialize};

use crate::browser::{BrowserIdentity, PRECEDENCE};

/// An ordered list of property names
///
/// Fixtures may write it as an array or as one comma-separated string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PropertyListRepr")]
pub struct PropertyList(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum PropertyListRepr {
    Joined(String),
    Items(Vec<String>),
}

impl From<PropertyListRepr> for PropertyList {
    fn from(repr: PropertyListRepr) -> Self {
        match repr {
            PropertyListRepr::Joined(text) => Self(hostprops_diff::parse_property_list(&text)),
            PropertyListRepr::Items(items) => Self(items),
        }
    }
}

impl PropertyList {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for PropertyList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Per-browser slot access shared by both kinds of expectation set
pub trait BrowserSlots {
    /// The raw slot for a browser
    fn slot(&self, browser: BrowserIdentity) -> Option<&PropertyList>;

    /// The slot's list when it is declared and non-empty
    fn declared(&self, browser: BrowserIdentity) -> Option<&[String]> {
        self.slot(browser)
            .filter(|list| !list.is_empty())
            .map(PropertyList::as_slice)
    }

    /// Every slot in resolution order
    fn in_precedence(&self) -> [(BrowserIdentity, Option<&[String]>); 5] {
        PRECEDENCE.map(|browser| (browser, self.declared(browser)))
    }

    /// First declared slot that equals `current`, walking the precedence list
    fn lookup(&self, current: BrowserIdentity) -> Option<(BrowserIdentity, &[String])> {
        self.in_precedence()
            .into_iter()
            .find_map(|(browser, list)| match list {
                Some(list) if browser == current => Some((browser, list)),
                _ => None,
            })
    }
}

macro_rules! browser_slot_fields {
    ($ty:ident) => {
        impl BrowserSlots for $ty {
            fn slot(&self, browser: BrowserIdentity) -> Option<&PropertyList> {
                match browser {
                    BrowserIdentity::Ie => self.ie.as_ref(),
                    BrowserIdentity::Edge => self.edge.as_ref(),
                    BrowserIdentity::FfEsr => self.ff_esr.as_ref(),
                    BrowserIdentity::Ff => self.ff.as_ref(),
                    BrowserIdentity::Chrome => self.chrome.as_ref(),
                }
            }
        }

        impl $ty {
            pub fn new() -> Self {
                Self::default()
            }

            /// Set one browser's list
            pub fn with<S: Into<String>>(
                mut self,
                browser: BrowserIdentity,
                names: impl IntoIterator<Item = S>,
            ) -> Self {
                let list = Some(names.into_iter().collect());
                match browser {
                    BrowserIdentity::Ie => self.ie = list,
                    BrowserIdentity::Edge => self.edge = list,
                    BrowserIdentity::FfEsr => self.ff_esr = list,
                    BrowserIdentity::Ff => self.ff = list,
                    BrowserIdentity::Chrome => self.chrome = list,
                }
                self
            }

            fn slot_names(&self) -> impl Iterator<Item = &String> {
                BrowserIdentity::ALL
                    .into_iter()
                    .filter_map(|b| self.slot(b))
                    .flat_map(PropertyList::iter)
            }
        }
    };
}

/// Real-browser expectations for one test case
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExpectationSet {
    /// Used when no browser-specific entry applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<PropertyList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ie: Option<PropertyList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge: Option<PropertyList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ff_esr: Option<PropertyList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ff: Option<PropertyList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chrome: Option<PropertyList>,
}

browser_slot_fields!(ExpectationSet);

impl ExpectationSet {
    /// Set the default list
    pub fn with_default<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.default = Some(names.into_iter().collect());
        self
    }

    /// Iterate over every property name in the set, default included
    pub fn all_names(&self) -> impl Iterator<Item = &String> {
        self.default
            .iter()
            .flat_map(PropertyList::iter)
            .chain(self.slot_names())
    }
}

/// Known deviations of the engine from the real-browser baseline
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NyiExpectationSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ie: Option<PropertyList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge: Option<PropertyList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ff_esr: Option<PropertyList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ff: Option<PropertyList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chrome: Option<PropertyList>,
}

browser_slot_fields!(NyiExpectationSet);

impl NyiExpectationSet {
    pub fn all_names(&self) -> impl Iterator<Item = &String> {
        self.slot_names()
    }
}

/// Where a resolved list came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "browser", rename_all = "snake_case")]
pub enum ResolutionSource {
    /// A browser-specific slot
    Browser(BrowserIdentity),
    /// The expectation set's default list
    Default,
    /// Nothing matched and no default was declared
    Empty,
    /// NYI fallback to the real-browser resolution
    Primary,
}

/// The single list chosen for the current browser
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedExpectation {
    pub names: Vec<String>,
    pub source: ResolutionSource,
}

impl ResolvedExpectation {
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Resolve the real-browser expectation for `current`
///
/// Falls back to the default list, then to an empty list.
pub fn resolve_primary(set: &ExpectationSet, current: BrowserIdentity) -> ResolvedExpectation {
    if let Some((browser, names)) = set.lookup(current) {
        return ResolvedExpectation {
            names: names.to_vec(),
            source: ResolutionSource::Browser(browser),
        };
    }
    match &set.default {
        Some(default) => ResolvedExpectation {
            names: default.as_slice().to_vec(),
            source: ResolutionSource::Default,
        },
        None => ResolvedExpectation {
            names: Vec::new(),
            source: ResolutionSource::Empty,
        },
    }
}

/// Resolve the engine's expectation for `current`
///
/// Falls back to `primary` verbatim when no deviation is recorded.
pub fn resolve_nyi(
    nyi: &NyiExpectationSet,
    current: BrowserIdentity,
    primary: &ResolvedExpectation,
) -> ResolvedExpectation {
    match nyi.lookup(current) {
        Some((browser, names)) => ResolvedExpectation {
            names: names.to_vec(),
            source: ResolutionSource::Browser(browser),
        },
        None => ResolvedExpectation {
            names: primary.names.clone(),
            source: ResolutionSource::Primary,
        },
    }
}

#[cfg(test)]
#[path = "expectation_tests.rs"]
mod tests;
