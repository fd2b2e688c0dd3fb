//! Simple selectors: ordered runs of typed parts with no combinator.
//! Reference: <https://www.w3.org/TR/selectors-3/#selector-syntax>

use crate::error::SelectorResult;
use crate::part::{Category, Part};
use crate::validator::{highest_category, validate};
use log::{debug, trace};

/// A simple selector under construction.
///
/// Every append returns a new value and leaves the receiver untouched, so a
/// selector already handed to [`crate::combine`] can never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct SimpleSelector {
    /// Parts in append order.
    parts: Vec<Part>,
}

impl SimpleSelector {
    /// An empty selector. Stringifies to `""`.
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Parts in append order.
    #[inline]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Number of parts appended so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// True if nothing has been appended yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The highest category present; later appends may not go below it.
    pub fn max_category(&self) -> Option<Category> {
        highest_category(&self.parts)
    }

    /// Append a part of any category.
    ///
    /// # Errors
    /// Returns the validation failure if the part would break the ordering or
    /// singleton rules. `self` is unchanged either way.
    pub fn push(&self, category: Category, value: impl Into<String>) -> SelectorResult<Self> {
        let part = Part::new(category, value);
        if let Err(err) = validate(&self.parts, category) {
            debug!("rejected {} '{}': {err}", category.name(), part.text());
            return Err(err);
        }
        trace!("append {} '{}'", category.name(), part.text());
        let mut parts = Vec::with_capacity(self.parts.len().saturating_add(1));
        parts.extend_from_slice(&self.parts);
        parts.push(part);
        Ok(Self { parts })
    }

    /// Append a type selector, rendered as `value`.
    ///
    /// # Errors
    /// Fails if an element is already present or anything has been appended.
    pub fn element(&self, value: impl Into<String>) -> SelectorResult<Self> {
        self.push(Category::Element, value)
    }

    /// Append an id selector, rendered as `#value`.
    ///
    /// # Errors
    /// Fails on a second id or after a class, attribute or pseudo part.
    pub fn id(&self, value: impl Into<String>) -> SelectorResult<Self> {
        self.push(Category::Id, value)
    }

    /// Append a class selector, rendered as `.value`.
    ///
    /// # Errors
    /// Fails after an attribute or pseudo part.
    pub fn class(&self, value: impl Into<String>) -> SelectorResult<Self> {
        self.push(Category::Class, value)
    }

    /// Append an attribute selector, rendered as `[value]`.
    ///
    /// # Errors
    /// Fails after a pseudo-class or pseudo-element.
    pub fn attr(&self, value: impl Into<String>) -> SelectorResult<Self> {
        self.push(Category::Attribute, value)
    }

    /// Append a pseudo-class, rendered as `:value`.
    ///
    /// # Errors
    /// Fails after a pseudo-element.
    pub fn pseudo_class(&self, value: impl Into<String>) -> SelectorResult<Self> {
        self.push(Category::PseudoClass, value)
    }

    /// Append a pseudo-element, rendered as `::value`.
    ///
    /// # Errors
    /// Fails if a pseudo-element is already present.
    pub fn pseudo_element(&self, value: impl Into<String>) -> SelectorResult<Self> {
        self.push(Category::PseudoElement, value)
    }
}
