//! Registry of open pages a worker can control.
//!
//! Claiming marks every currently open page as controlled, so a newly
//! activated worker starts intercepting without waiting for reloads.

use std::collections::HashMap;

/// Handle to an open page.
pub type PageId = u64;

/// Open pages and whether the active worker controls them.
#[derive(Debug, Default)]
pub struct ClientRegistry {
    pages: HashMap<PageId, bool>,
    next_id: PageId,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a newly opened page. Pages start uncontrolled.
    pub fn open_page(&mut self) -> PageId {
        let id = self.next_id;
        self.next_id += 1;
        self.pages.insert(id, false);
        id
    }

    pub fn close_page(&mut self, id: PageId) {
        self.pages.remove(&id);
    }

    /// Claim every open page for the active worker.
    ///
    /// Returns the number of pages now controlled.
    pub fn claim_all(&mut self) -> usize {
        for controlled in self.pages.values_mut() {
            *controlled = true;
        }
        self.pages.len()
    }

    pub fn is_controlled(&self, id: PageId) -> bool {
        self.pages.get(&id).copied().unwrap_or(false)
    }

    pub fn open_count(&self) -> usize {
        self.pages.len()
    }

    pub fn controlled_count(&self) -> usize {
        self.pages.values().filter(|&&controlled| controlled).count()
    }
}
