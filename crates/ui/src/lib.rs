//! Page-side UI layer for spashell.
//!
//! This crate provides the retained document model, the single-threaded page
//! event dispatch, and the password visibility toggle widget.

pub mod dom;
pub mod events;
pub mod toggle;

pub use dom::{Document, Element};
pub use events::Page;

/// Shared UI framework root object.
///
/// Constructed once at bootstrap and published through the application
/// context; it has no behavior beyond construction.
#[derive(Debug, Default)]
pub struct UiRoot {
    _private: (),
}

impl UiRoot {
    pub fn new() -> Self {
        Self::default()
    }
}
