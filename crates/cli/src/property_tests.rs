// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    data = { "align", PropertyKind::Data },
    constant = { "ATTRIBUTE_NODE", PropertyKind::Data },
    method = { "constructor()", PropertyKind::Method },
    exception = { "exception", PropertyKind::Exception },
    exception_method_is_method = { "exception()", PropertyKind::Method },
)]
fn classifies_names(name: &str, expected: PropertyKind) {
    assert_eq!(PropertyKind::of(name), expected);
}

#[parameterized(
    plain = { "align", true },
    dollar = { "$0", true },
    underscore_digit = { "_x1", true },
    method = { "getContext()", true },
    sentinel = { "exception", true },
    leading_digit = { "1abc", false },
    space = { "no wrap", false },
    dangling_paren = { "item(", false },
    double_parens = { "item()()", false },
    empty = { "", false },
)]
fn validates_names(name: &str, valid: bool) {
    assert_eq!(is_valid_property_name(name), valid);
}
