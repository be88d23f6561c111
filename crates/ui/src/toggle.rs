//! Password visibility toggle.
//!
//! Binds a click handler on the show-password control that flips the
//! password input between masked and plain text, swapping the optional icon
//! reference along with it. State lives entirely in the DOM attributes; the
//! handler re-reads them on every click.

use crate::dom::Document;
use crate::events::Page;

/// Selector of the toggle control.
pub const TOGGLE_SELECTOR: &str = "#show-password";
/// Selector of the optional icon inside the control.
pub const ICON_SELECTOR: &str = "#show-password use";
/// Selector of the password input.
pub const INPUT_SELECTOR: &str = "#password";

const SHOW_ICON_ATTR: &str = "data-show-icon";
const HIDE_ICON_ATTR: &str = "data-hide-icon";

/// The widget's two states, derived from the input's `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Input masked (`type="password"`). The initial state.
    Hidden,
    /// Input as plain text (`type="text"`).
    Visible,
}

impl Visibility {
    /// Read the current state off the document.
    pub fn of(doc: &Document) -> Visibility {
        match doc.query(INPUT_SELECTOR).and_then(|input| input.attr("type")) {
            Some("password") => Visibility::Hidden,
            _ => Visibility::Visible,
        }
    }
}

/// Wire the toggle once the document signals ready.
///
/// If the toggle control or the password input is missing the feature is
/// silently left unwired; a missing icon only skips the icon swap.
pub fn install(page: &mut Page) {
    page.on_ready(|page| {
        let doc = page.document();
        if doc.query(TOGGLE_SELECTOR).is_none() || doc.query(INPUT_SELECTOR).is_none() {
            tracing::debug!("password toggle elements missing; feature disabled");
            return;
        }
        page.add_click_listener(TOGGLE_SELECTOR, toggle_once);
    });
}

fn toggle_once(doc: &mut Document) {
    let (next_type, icon_attr) = match Visibility::of(doc) {
        Visibility::Hidden => ("text", SHOW_ICON_ATTR),
        Visibility::Visible => ("password", HIDE_ICON_ATTR),
    };

    if let Some(input) = doc.query_mut(INPUT_SELECTOR) {
        input.set_attr("type", next_type);
    }

    if let Some(icon) = doc.query_mut(ICON_SELECTOR) {
        if let Some(target) = icon.attr(icon_attr).map(str::to_owned) {
            icon.set_attr("href", &target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;

    fn login_page(with_icon: bool) -> Page {
        let mut doc = Document::new();
        doc.insert(TOGGLE_SELECTOR, Element::new());
        doc.insert(INPUT_SELECTOR, Element::new().with_attr("type", "password"));
        if with_icon {
            doc.insert(
                ICON_SELECTOR,
                Element::new()
                    .with_attr("href", "#icon-view-hide")
                    .with_attr("data-show-icon", "#icon-view-show")
                    .with_attr("data-hide-icon", "#icon-view-hide"),
            );
        }
        Page::new(doc)
    }

    fn input_type(page: &Page) -> Option<&str> {
        page.document().query(INPUT_SELECTOR).and_then(|e| e.attr("type"))
    }

    fn icon_href(page: &Page) -> Option<&str> {
        page.document().query(ICON_SELECTOR).and_then(|e| e.attr("href"))
    }

    #[test]
    fn test_single_click_reveals() {
        let mut page = login_page(true);
        install(&mut page);
        page.signal_ready();

        page.click(TOGGLE_SELECTOR);
        assert_eq!(input_type(&page), Some("text"));
        assert_eq!(icon_href(&page), Some("#icon-view-show"));
        assert_eq!(Visibility::of(page.document()), Visibility::Visible);
    }

    #[test]
    fn test_even_clicks_restore_original_state() {
        let mut page = login_page(true);
        install(&mut page);
        page.signal_ready();

        for _ in 0..4 {
            page.click(TOGGLE_SELECTOR);
        }
        assert_eq!(input_type(&page), Some("password"));
        assert_eq!(icon_href(&page), Some("#icon-view-hide"));
    }

    #[test]
    fn test_odd_clicks_flip_state() {
        let mut page = login_page(true);
        install(&mut page);
        page.signal_ready();

        for _ in 0..3 {
            page.click(TOGGLE_SELECTOR);
        }
        assert_eq!(input_type(&page), Some("text"));
        assert_eq!(icon_href(&page), Some("#icon-view-show"));
    }

    #[test]
    fn test_missing_input_disables_feature() {
        let mut doc = Document::new();
        doc.insert(TOGGLE_SELECTOR, Element::new());
        let mut page = Page::new(doc);

        install(&mut page);
        page.signal_ready();

        assert!(!page.has_click_listener(TOGGLE_SELECTOR));
        page.click(TOGGLE_SELECTOR);
    }

    #[test]
    fn test_missing_toggle_disables_feature() {
        let mut doc = Document::new();
        doc.insert(INPUT_SELECTOR, Element::new().with_attr("type", "password"));
        let mut page = Page::new(doc);

        install(&mut page);
        page.signal_ready();

        assert!(!page.has_click_listener(TOGGLE_SELECTOR));
        assert_eq!(input_type(&page), Some("password"));
    }

    #[test]
    fn test_icon_is_optional() {
        let mut page = login_page(false);
        install(&mut page);
        page.signal_ready();

        page.click(TOGGLE_SELECTOR);
        assert_eq!(input_type(&page), Some("text"));
        page.click(TOGGLE_SELECTOR);
        assert_eq!(input_type(&page), Some("password"));
    }

    #[test]
    fn test_not_wired_before_ready() {
        let mut page = login_page(true);
        install(&mut page);

        page.click(TOGGLE_SELECTOR);
        assert_eq!(input_type(&page), Some("password"));

        page.signal_ready();
        page.click(TOGGLE_SELECTOR);
        assert_eq!(input_type(&page), Some("text"));
    }
}
