// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Property-list ordering and comparison utilities for hostprops.
//!
//! Expected and actual property lists are compared after sorting both with
//! the same deterministic rule, so that enumeration order differences between
//! engines never show up as mismatches.

mod ordering;
mod property_diff;

pub use ordering::{compare_property_names, sort_properties};
pub use property_diff::{diff_property_lists, parse_property_list, PropertyDiff};
