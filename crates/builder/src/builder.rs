//! The fluent [`XPathBuilder`] itself.

use crate::error::{Result, XPathBuilderError};
use crate::fragment;
use crate::options::BuilderOptions;
use std::fmt;

/// Incrementally assembles an XPath query string.
///
/// Every operation appends one fragment to the end of an owned buffer and
/// hands back `&mut Self`, so calls chain. The positional operations
/// that take a count or index (`where_index`, `first_n`, `where_last_minus`)
/// validate it first and leave the buffer untouched when it is below 1.
///
/// ```
/// use fluent_xpath_builder::XPathBuilder;
///
/// let mut xpath = XPathBuilder::new();
/// xpath.all_child_elements().elements("div").where_class("button");
/// assert_eq!(xpath.as_str(), "/*/div[@class='button']");
/// ```
///
/// The builder only guarantees the shape of each fragment. Names and values
/// are inserted verbatim, so a value containing `'` or an unbalanced group
/// produces a malformed query without any error here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XPathBuilder {
    buffer: String,
    options: BuilderOptions,
}

impl XPathBuilder {
    /// Creates an empty builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with the given options.
    pub fn with_options(options: BuilderOptions) -> Self {
        Self {
            buffer: String::new(),
            options,
        }
    }

    /// Seeds a builder with hand-written XPath text.
    pub fn from_xpath(xpath: impl Into<String>) -> Self {
        Self {
            buffer: xpath.into(),
            options: BuilderOptions::default(),
        }
    }

    pub fn options(&self) -> BuilderOptions {
        self.options
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Returns the query assembled so far. The builder stays usable.
    pub fn build(&self) -> String {
        self.buffer.clone()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn push(&mut self, fragment: &str) -> &mut Self {
        log::trace!("xpath += {fragment:?}");
        self.buffer.push_str(fragment);
        self
    }

    fn require_positive(operation: &'static str, value: i64) -> Result<()> {
        if value < 1 {
            log::debug!("Rejected {operation}({value}): argument must be at least 1");
            return Err(XPathBuilderError::InvalidArgument { operation, value });
        }
        Ok(())
    }

    /// Appends `text` verbatim.
    pub fn raw(&mut self, text: &str) -> &mut Self {
        self.push(text)
    }

    // --- Navigation ---

    /// `/*`
    pub fn all_child_elements(&mut self) -> &mut Self {
        self.push(fragment::ALL_CHILD_ELEMENTS)
    }

    /// `//*`
    pub fn all_descendant_elements(&mut self) -> &mut Self {
        self.push(fragment::ALL_DESCENDANT_ELEMENTS)
    }

    /// `//comment()`
    pub fn all_comments(&mut self) -> &mut Self {
        self.push(fragment::ALL_COMMENTS)
    }

    /// Selects immediate children named `element`: `/element`.
    pub fn elements(&mut self, element: &str) -> &mut Self {
        self.push(&fragment::child(element))
    }

    /// Selects `element` at any depth below the current node: `//element`.
    pub fn elements_descend(&mut self, element: &str) -> &mut Self {
        self.push(&fragment::descendant(element))
    }

    /// Selects immediate children named `element` carrying at least one
    /// attribute: `/element[@*]`.
    pub fn elements_at_least_any_attribute(&mut self, element: &str) -> &mut Self {
        self.push(&fragment::child_with_any_attribute(element))
    }

    /// `/text()`
    pub fn inner_text(&mut self) -> &mut Self {
        self.push(fragment::INNER_TEXT)
    }

    /// `/..`
    pub fn parent(&mut self) -> &mut Self {
        self.push(fragment::PARENT)
    }

    // --- Attributes ---

    /// Selects the attribute named `name`: `/@name`.
    pub fn attributes(&mut self, name: &str) -> &mut Self {
        self.push(&fragment::attribute(name))
    }

    /// Same fragment as [`attributes`](Self::attributes).
    pub fn where_attribute_has_value(&mut self, name: &str) -> &mut Self {
        self.attributes(name)
    }

    /// Keeps nodes that carry the attribute `name`: `[@name]`.
    pub fn contains_attribute(&mut self, name: &str) -> &mut Self {
        self.push(&fragment::has_attribute(name))
    }

    /// `[@name='value']`
    pub fn where_attribute_equals(&mut self, name: &str, value: &str) -> &mut Self {
        self.push(&fragment::attribute_equals(name, value))
    }

    /// Keeps nodes whose attribute `name` starts with `value`.
    ///
    /// The rendered form depends on [`BuilderOptions::starts_with`]; the
    /// default reproduces the legacy `[starts-with(@name='value')])`.
    pub fn where_attribute_starts_with(&mut self, name: &str, value: &str) -> &mut Self {
        let style = self.options.starts_with;
        self.push(&fragment::attribute_starts_with(name, value, style))
    }

    /// Alias of [`where_attribute_starts_with`](Self::where_attribute_starts_with).
    pub fn where_start_with(&mut self, name: &str, value: &str) -> &mut Self {
        self.where_attribute_starts_with(name, value)
    }

    pub fn where_class(&mut self, class_name: &str) -> &mut Self {
        self.where_attribute_equals("class", class_name)
    }

    pub fn where_id(&mut self, id: &str) -> &mut Self {
        self.where_attribute_equals("id", id)
    }

    // --- Text ---

    /// `[@text()='value']`
    pub fn where_inner_text_equals(&mut self, value: &str) -> &mut Self {
        self.push(&fragment::inner_text_equals(value))
    }

    /// `[contains(text(), 'value')]`
    pub fn where_inner_text_contains(&mut self, value: &str) -> &mut Self {
        self.push(&fragment::inner_text_contains(value))
    }

    /// `[not(contains(text(), 'value'))]`
    pub fn where_not_inner_text_contains(&mut self, value: &str) -> &mut Self {
        self.push(&fragment::inner_text_not_contains(value))
    }

    // --- Position ---

    /// Appends `[i]` without checking `i`.
    pub fn index(&mut self, i: i64) -> &mut Self {
        self.push(&fragment::index(i))
    }

    /// Selects the element at 1-based position `i`.
    pub fn where_index(&mut self, i: i64) -> Result<&mut Self> {
        Self::require_positive("where_index", i)?;
        Ok(self.index(i))
    }

    /// `[1]`
    pub fn first(&mut self) -> &mut Self {
        self.push(fragment::FIRST)
    }

    /// Selects the first `n` elements: `[position()<n+1]`.
    pub fn first_n(&mut self, n: i64) -> Result<&mut Self> {
        Self::require_positive("first_n", n)?;
        Ok(self.push(&fragment::first_n(n)))
    }

    /// `[last()]`
    pub fn where_last(&mut self) -> &mut Self {
        self.push(fragment::LAST)
    }

    /// Selects the element `n` places before the last: `[last()-n]`.
    pub fn where_last_minus(&mut self, n: i64) -> Result<&mut Self> {
        Self::require_positive("where_last_minus", n)?;
        Ok(self.push(&fragment::last_minus(n)))
    }

    // --- Combinators ---

    /// Union of the path before and the path after: `|`.
    pub fn or(&mut self) -> &mut Self {
        self.push(fragment::UNION)
    }

    /// `(`. Balance is not tracked.
    pub fn start_group(&mut self) -> &mut Self {
        self.push(fragment::GROUP_OPEN)
    }

    /// `)`
    pub fn end_group(&mut self) -> &mut Self {
        self.push(fragment::GROUP_CLOSE)
    }

    /// Appends `inner` wrapped in parentheses. `inner` may be another
    /// builder or plain text.
    ///
    /// ```
    /// use fluent_xpath_builder::XPathBuilder;
    ///
    /// let mut xpath = XPathBuilder::new();
    /// xpath
    ///     .elements("a")
    ///     .or()
    ///     .group(XPathBuilder::new().elements("span").or().elements("div"));
    /// assert_eq!(xpath.as_str(), "/a|(/span|/div)");
    /// ```
    pub fn group(&mut self, inner: impl AsRef<str>) -> &mut Self {
        self.push(&fragment::group(inner.as_ref()))
    }

    /// Opens a group, lets `build` append to this builder, then closes it.
    pub fn group_with<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.start_group();
        build(self);
        self.end_group()
    }
}

impl fmt::Display for XPathBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

impl AsRef<str> for XPathBuilder {
    fn as_ref(&self) -> &str {
        &self.buffer
    }
}

impl PartialEq<str> for XPathBuilder {
    fn eq(&self, other: &str) -> bool {
        self.buffer == other
    }
}

impl PartialEq<&str> for XPathBuilder {
    fn eq(&self, other: &&str) -> bool {
        self.buffer == *other
    }
}

// Seeding and copying.

impl From<&str> for XPathBuilder {
    fn from(xpath: &str) -> Self {
        Self::from_xpath(xpath)
    }
}

impl From<String> for XPathBuilder {
    fn from(xpath: String) -> Self {
        Self::from_xpath(xpath)
    }
}

impl From<&XPathBuilder> for XPathBuilder {
    fn from(builder: &XPathBuilder) -> Self {
        builder.clone()
    }
}

// Reading the finished query.

impl From<XPathBuilder> for String {
    fn from(builder: XPathBuilder) -> Self {
        builder.buffer
    }
}

impl From<&XPathBuilder> for String {
    fn from(builder: &XPathBuilder) -> Self {
        builder.build()
    }
}

impl From<&mut XPathBuilder> for String {
    fn from(builder: &mut XPathBuilder) -> Self {
        builder.build()
    }
}
