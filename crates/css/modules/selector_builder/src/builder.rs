//! Fluent entry point for building selectors.

use crate::Selector;
use crate::combinator::{Combinator, CombinedSelector, combine};
use crate::compound::SimpleSelector;
use crate::error::SelectorResult;
use crate::serialize::stringify;

/// Stateless facade over selector construction.
///
/// Every chain starts from a fresh empty selector, so chains started from the
/// same builder never share state:
///
/// ```
/// use css_selector_builder::{Combinator, SelectorBuilder};
///
/// let builder = SelectorBuilder::new();
/// let list = builder.element("ul")?.class("menu")?;
/// let item = builder.element("li")?.pseudo_class("first-child")?;
/// let combined = builder.combine(list, Combinator::Child, item);
/// assert_eq!(builder.stringify(combined), "ul.menu > li:first-child");
/// # Ok::<(), css_selector_builder::SelectorError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectorBuilder;

#[allow(
    clippy::unused_self,
    reason = "The facade is stateless; methods take self so calls read as builder.element(..)"
)]
impl SelectorBuilder {
    /// Create the facade.
    pub const fn new() -> Self {
        Self
    }

    /// A fresh, empty selector.
    pub const fn selector(self) -> SimpleSelector {
        SimpleSelector::new()
    }

    /// Start a selector with a type selector.
    ///
    /// # Errors
    /// Never fails on an empty selector; the `Result` keeps chains uniform.
    pub fn element(self, value: impl Into<String>) -> SelectorResult<SimpleSelector> {
        self.selector().element(value)
    }

    /// Start a selector with an id.
    ///
    /// # Errors
    /// Never fails on an empty selector.
    pub fn id(self, value: impl Into<String>) -> SelectorResult<SimpleSelector> {
        self.selector().id(value)
    }

    /// Start a selector with a class.
    ///
    /// # Errors
    /// Never fails on an empty selector.
    pub fn class(self, value: impl Into<String>) -> SelectorResult<SimpleSelector> {
        self.selector().class(value)
    }

    /// Start a selector with an attribute selector.
    ///
    /// # Errors
    /// Never fails on an empty selector.
    pub fn attr(self, value: impl Into<String>) -> SelectorResult<SimpleSelector> {
        self.selector().attr(value)
    }

    /// Start a selector with a pseudo-class.
    ///
    /// # Errors
    /// Never fails on an empty selector.
    pub fn pseudo_class(self, value: impl Into<String>) -> SelectorResult<SimpleSelector> {
        self.selector().pseudo_class(value)
    }

    /// Start a selector with a pseudo-element.
    ///
    /// # Errors
    /// Never fails on an empty selector.
    pub fn pseudo_element(self, value: impl Into<String>) -> SelectorResult<SimpleSelector> {
        self.selector().pseudo_element(value)
    }

    /// Join two selectors. See [`combine`].
    pub fn combine(
        self,
        left: impl Into<Selector>,
        combinator: Combinator,
        right: impl Into<Selector>,
    ) -> CombinedSelector {
        combine(left, combinator, right)
    }

    /// Render a selector. See [`stringify`].
    pub fn stringify(self, selector: impl Into<Selector>) -> String {
        stringify(&selector.into())
    }
}
