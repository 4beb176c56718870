//! Owned locator values.
//!
//! A [`Locator`] is an immutable (strategy, selector) pair identifying zero
//! or more DOM nodes. It owns its selector string so errors can carry it
//! after the query that produced them is gone, and converts to the borrowed
//! [`fantoccini::Locator`] at the call site.

use std::fmt;

/// Lookup strategy for a [`Locator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Css,
    XPath,
}

/// An immutable strategy + selector pair. Pure value, no lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    strategy: Strategy,
    selector: String,
}

impl Locator {
    pub fn css(selector: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::Css,
            selector: selector.into(),
        }
    }

    pub fn xpath(selector: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::XPath,
            selector: selector.into(),
        }
    }

    /// An `<input>` with the given `type` attribute, e.g. `email` or `date`.
    pub fn input_with_type(kind: &str) -> Self {
        Self::xpath(format!("//input[@type='{kind}']"))
    }

    /// An `<input>` labeled through its `placeholder` attribute.
    pub fn input_with_placeholder(placeholder: &str) -> Self {
        Self::xpath(format!("//input[@placeholder='{placeholder}']"))
    }

    /// An element of `tag` whose visible text contains `text`.
    pub fn text_contains(tag: &str, text: &str) -> Self {
        Self::xpath(format!("//{tag}[contains(text(), '{text}')]"))
    }

    /// A `<button>` whose visible text contains `text`.
    pub fn button_with_text(text: &str) -> Self {
        Self::text_contains("button", text)
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Borrowed form accepted by the WebDriver client.
    pub fn to_webdriver(&self) -> fantoccini::Locator<'_> {
        match self.strategy {
            Strategy::Css => fantoccini::Locator::Css(&self.selector),
            Strategy::XPath => fantoccini::Locator::XPath(&self.selector),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.strategy {
            Strategy::Css => write!(f, "css `{}`", self.selector),
            Strategy::XPath => write!(f, "xpath `{}`", self.selector),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_strategy() {
        assert_eq!(Locator::css("#login").to_string(), "css `#login`");
        assert_eq!(
            Locator::xpath("//p[contains(text(), 'Login')]").to_string(),
            "xpath `//p[contains(text(), 'Login')]`"
        );
    }

    #[test]
    fn input_helpers_build_attribute_queries() {
        assert_eq!(
            Locator::input_with_type("email").selector(),
            "//input[@type='email']"
        );
        assert_eq!(
            Locator::input_with_placeholder("Address").selector(),
            "//input[@placeholder='Address']"
        );
    }

    #[test]
    fn button_helper_matches_on_visible_text() {
        let locator = Locator::button_with_text("Create Account");
        assert_eq!(locator.strategy(), Strategy::XPath);
        assert_eq!(
            locator.selector(),
            "//button[contains(text(), 'Create Account')]"
        );
    }

    #[test]
    fn webdriver_conversion_keeps_the_strategy() {
        let css = Locator::css("select");
        assert!(matches!(css.to_webdriver(), fantoccini::Locator::Css(_)));

        let xpath = Locator::xpath("//select");
        assert!(matches!(xpath.to_webdriver(), fantoccini::Locator::XPath(_)));
    }
}
