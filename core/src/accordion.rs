//! Single-open accordion state for the FAQ section.
//!
//! Toggling the open entry closes it; toggling another entry moves the
//! open marker there.

/// Open/closed state of the FAQ list. At most one entry is open; the first
/// one starts open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Default for Accordion {
    fn default() -> Self {
        Self { open: Some(0) }
    }
}

impl Accordion {
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}
