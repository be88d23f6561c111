//! Minimal retained element model for server-rendered pages.
//!
//! The server renders the markup; page scripts only read and write
//! attributes on a handful of elements. This model keeps a flat table of
//! elements addressed by the selector strings the scripts use (`#id`,
//! `#id child`), each holding an attribute map.

use std::collections::HashMap;

/// One element: a bag of attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    attributes: HashMap<String, String>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style attribute setter for constructing test pages.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}

/// A flat document: elements addressed by selector.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: HashMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element under a selector (`#password`, `#show-password use`).
    pub fn insert(&mut self, selector: &str, element: Element) {
        self.elements.insert(key(selector).to_string(), element);
    }

    /// Look up an element by selector. Returns None when absent.
    pub fn query(&self, selector: &str) -> Option<&Element> {
        self.elements.get(key(selector))
    }

    /// Mutable lookup by selector.
    pub fn query_mut(&mut self, selector: &str) -> Option<&mut Element> {
        self.elements.get_mut(key(selector))
    }
}

/// Selector strings are id-rooted; the leading `#` is not part of the key.
fn key(selector: &str) -> &str {
    selector.strip_prefix('#').unwrap_or(selector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_by_selector() {
        let mut doc = Document::new();
        doc.insert("#password", Element::new().with_attr("type", "password"));

        assert_eq!(doc.query("#password").and_then(|e| e.attr("type")), Some("password"));
        assert!(doc.query("#missing").is_none());
    }

    #[test]
    fn test_descendant_selector() {
        let mut doc = Document::new();
        doc.insert("#show-password use", Element::new().with_attr("href", "#icon-hide"));

        let icon = doc.query("#show-password use").unwrap();
        assert_eq!(icon.attr("href"), Some("#icon-hide"));
    }

    #[test]
    fn test_set_attr_overwrites() {
        let mut element = Element::new().with_attr("type", "password");
        element.set_attr("type", "text");
        assert_eq!(element.attr("type"), Some("text"));
    }
}
