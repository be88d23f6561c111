//! Single-threaded page event dispatch.
//!
//! A `Page` owns its document and dispatches two event sources the widgets
//! care about: the one-time document-ready signal and per-element clicks.
//! All handlers run sequentially on the caller's thread; no handler ever
//! runs concurrently with another.

use crate::dom::Document;
use std::collections::HashMap;

type ReadyHandler = Box<dyn FnOnce(&mut Page)>;
type ClickHandler = Box<dyn FnMut(&mut Document)>;

/// A page: document plus event wiring.
#[derive(Default)]
pub struct Page {
    doc: Document,
    ready: bool,
    ready_handlers: Vec<ReadyHandler>,
    click_handlers: HashMap<String, Vec<ClickHandler>>,
}

impl Page {
    pub fn new(doc: Document) -> Self {
        Self { doc, ready: false, ready_handlers: Vec::new(), click_handlers: HashMap::new() }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    /// Register a callback for the document-ready signal.
    ///
    /// If the page is already ready the callback runs immediately, matching
    /// listener-after-load behavior.
    pub fn on_ready(&mut self, handler: impl FnOnce(&mut Page) + 'static) {
        if self.ready {
            handler(self);
        } else {
            self.ready_handlers.push(Box::new(handler));
        }
    }

    /// Fire the one-time structural-ready signal.
    ///
    /// Queued callbacks run in registration order; repeated signals are
    /// ignored.
    pub fn signal_ready(&mut self) {
        if self.ready {
            return;
        }
        self.ready = true;
        let handlers = std::mem::take(&mut self.ready_handlers);
        for handler in handlers {
            handler(self);
        }
    }

    /// Attach a click listener to the element addressed by `selector`.
    pub fn add_click_listener(&mut self, selector: &str, handler: impl FnMut(&mut Document) + 'static) {
        self.click_handlers
            .entry(selector.to_string())
            .or_default()
            .push(Box::new(handler));
    }

    /// Whether any click listener is attached to `selector`.
    pub fn has_click_listener(&self, selector: &str) -> bool {
        self.click_handlers.get(selector).is_some_and(|h| !h.is_empty())
    }

    /// Dispatch a click on the element addressed by `selector`.
    ///
    /// Listeners run in attach order. A listener attached during dispatch
    /// takes effect from the next click.
    pub fn click(&mut self, selector: &str) {
        let Some(mut handlers) = self.click_handlers.remove(selector) else {
            return;
        };
        for handler in handlers.iter_mut() {
            handler(&mut self.doc);
        }
        if let Some(mut added) = self.click_handlers.remove(selector) {
            handlers.append(&mut added);
        }
        self.click_handlers.insert(selector.to_string(), handlers);
    }
}
