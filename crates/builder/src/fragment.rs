//! The literal pieces of XPath text each builder operation contributes.
//!
//! Everything here is pure string assembly: names and values are inserted
//! verbatim, without quoting or escaping.

use crate::options::StartsWithStyle;

// --- Axis steps and node tests ---

pub const ALL_CHILD_ELEMENTS: &str = "/*";
pub const ALL_DESCENDANT_ELEMENTS: &str = "//*";
pub const ALL_COMMENTS: &str = "//comment()";
pub const INNER_TEXT: &str = "/text()";
pub const PARENT: &str = "/..";

// --- Combinators ---

pub const UNION: &str = "|";
pub const GROUP_OPEN: &str = "(";
pub const GROUP_CLOSE: &str = ")";

// --- Positional predicates ---

pub const FIRST: &str = "[1]";
pub const LAST: &str = "[last()]";

pub fn child(element: &str) -> String {
    format!("/{element}")
}

pub fn descendant(element: &str) -> String {
    format!("//{element}")
}

pub fn child_with_any_attribute(element: &str) -> String {
    format!("/{element}[@*]")
}

pub fn attribute(name: &str) -> String {
    format!("/@{name}")
}

pub fn has_attribute(name: &str) -> String {
    format!("[@{name}]")
}

pub fn attribute_equals(name: &str, value: &str) -> String {
    format!("[@{name}='{value}']")
}

pub fn attribute_starts_with(name: &str, value: &str, style: StartsWithStyle) -> String {
    match style {
        StartsWithStyle::Legacy => format!("[starts-with(@{name}='{value}')])"),
        StartsWithStyle::Function => format!("[starts-with(@{name},'{value}')]"),
    }
}

pub fn inner_text_equals(value: &str) -> String {
    format!("[@text()='{value}']")
}

pub fn inner_text_contains(value: &str) -> String {
    format!("[contains(text(), '{value}')]")
}

pub fn inner_text_not_contains(value: &str) -> String {
    format!("[not(contains(text(), '{value}'))]")
}

pub fn index(i: i64) -> String {
    format!("[{i}]")
}

/// `[position()<n+1]`. Widened so `i64::MAX` does not overflow.
pub fn first_n(n: i64) -> String {
    format!("[position()<{}]", i128::from(n) + 1)
}

pub fn last_minus(n: i64) -> String {
    format!("[last()-{n}]")
}

pub fn group(inner: &str) -> String {
    format!("{GROUP_OPEN}{inner}{GROUP_CLOSE}")
}
