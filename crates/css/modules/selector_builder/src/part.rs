//! Typed fragments of a simple selector.
//! Reference: <https://www.w3.org/TR/selectors-3/#simple-selectors>

/// The kind of a selector part.
///
/// Variants are declared in canonical order, so the derived `Ord` is the
/// ordering a simple selector must respect:
/// element, id, class, attribute, pseudo-class, pseudo-element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Type selector, e.g. `div`.
    Element,
    /// ID selector, e.g. `#main`.
    Id,
    /// Class selector, e.g. `.container`.
    Class,
    /// Attribute selector, e.g. `[href]`.
    Attribute,
    /// Pseudo-class, e.g. `:focus`.
    PseudoClass,
    /// Pseudo-element, e.g. `::before`.
    PseudoElement,
}

impl Category {
    /// All categories in canonical order.
    pub const ORDER: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Zero-based position in the canonical order.
    #[inline]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Element => 0,
            Self::Id => 1,
            Self::Class => 2,
            Self::Attribute => 3,
            Self::PseudoClass => 4,
            Self::PseudoElement => 5,
        }
    }

    /// True for categories that may occur at most once per simple selector.
    #[inline]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Lowercase name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
        }
    }

    /// Text written before the value when rendering.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Text written after the value when rendering.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            Self::Element | Self::Id | Self::Class | Self::PseudoClass | Self::PseudoElement => "",
        }
    }
}

/// One typed fragment of a simple selector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Part {
    /// Which kind of fragment this is.
    category: Category,
    /// The caller-supplied value, stored without its prefix/suffix.
    text: String,
}

impl Part {
    /// Create a part from a category and its raw value.
    pub fn new(category: Category, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }

    /// The part's category.
    #[inline]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// The raw value, without rendering decorations.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if the declared order, `rank` and `ORDER` disagree.
    fn canonical_order_matches_rank() {
        for (index, category) in Category::ORDER.iter().enumerate() {
            assert_eq!(usize::from(category.rank()), index);
        }
        for pair in Category::ORDER.windows(2) {
            assert!(
                pair[0] < pair[1],
                "{:?} should sort before {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    /// # Panics
    /// Panics if the singleton set is not element, id and pseudo-element.
    fn singleton_categories() {
        let singletons: Vec<Category> = Category::ORDER
            .into_iter()
            .filter(|category| category.is_singleton())
            .collect();
        assert_eq!(
            singletons,
            vec![Category::Element, Category::Id, Category::PseudoElement]
        );
    }

    #[test]
    /// # Panics
    /// Panics if a part does not keep its raw text.
    fn part_keeps_raw_text() {
        let part = Part::new(Category::Attribute, "href$=\".png\"");
        assert_eq!(part.category(), Category::Attribute);
        assert_eq!(part.text(), "href$=\".png\"");
    }
}
