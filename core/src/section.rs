//! Fetch-then-fallback contract shared by every content section.
//!
//! # Design
//! A section starts in `Loading`, issues one fetch per mount and settles in
//! `Ready` with either the backend's list (filtered and sorted) or its
//! bundled fallback list. Failures never reach the view; they are logged
//! and absorbed. Results that arrive for an earlier mount are dropped.
//!
//! When the backend answers `success: true` with an empty list (or one whose
//! records are all hidden), the bundled list is shown. `NothingAvailable` is
//! rendered only if the bundled list is empty as well.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::backend::Backend;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::ContentItem;

/// Where the displayed list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Backend,
    Fallback,
}

/// Outcome of one fetch-then-fallback pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    Populated(Vec<T>),
    Fallback(Vec<T>),
    Empty,
}

impl<T> Resolution<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Resolution::Populated(items) | Resolution::Fallback(items) => items,
            Resolution::Empty => &[],
        }
    }

    pub fn source(&self) -> Option<Source> {
        match self {
            Resolution::Populated(_) => Some(Source::Backend),
            Resolution::Fallback(_) => Some(Source::Fallback),
            Resolution::Empty => None,
        }
    }
}

/// Fetch a list and fall back to `fallback` on failure or empty data.
///
/// A successful, non-empty list is filtered with `keep` and stably sorted
/// ascending by `order_key`, so equal keys keep arrival order. A list that
/// filters down to nothing is treated like an empty one.
pub fn fetch_with_fallback<T, F, K, O>(
    section: &str,
    fetch: F,
    keep: K,
    order_key: O,
    fallback: &[T],
) -> Resolution<T>
where
    T: Clone,
    F: FnOnce() -> Result<Envelope<Vec<T>>, ApiError>,
    K: Fn(&T) -> bool,
    O: Fn(&T) -> i64,
{
    match fetch() {
        Ok(envelope) => {
            let success = envelope.success;
            let mut items: Vec<T> = envelope
                .into_items()
                .unwrap_or_default()
                .into_iter()
                .filter(|item| keep(item))
                .collect();
            if items.is_empty() {
                debug!(section, success, "backend returned no displayable items, using fallback");
                return use_fallback(fallback);
            }
            items.sort_by_key(|item| order_key(item));
            debug!(section, count = items.len(), "loaded from backend");
            Resolution::Populated(items)
        }
        Err(err) => {
            warn!(section, error = %err, "fetch failed, using fallback");
            use_fallback(fallback)
        }
    }
}

fn use_fallback<T: Clone>(fallback: &[T]) -> Resolution<T> {
    if fallback.is_empty() {
        Resolution::Empty
    } else {
        Resolution::Fallback(fallback.to_vec())
    }
}

/// Proof of a particular mount; completing with a stale ticket is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountTicket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionState<T> {
    Unmounted,
    Loading,
    Ready(Resolution<T>),
}

/// What the host should draw for a section right now.
#[derive(Debug, PartialEq, Eq)]
pub enum SectionView<'a, T> {
    Spinner,
    Items { items: &'a [T], source: Source },
    NothingAvailable,
}

/// One content section's lifecycle.
#[derive(Debug, Clone)]
pub struct Section<T> {
    state: SectionState<T>,
    generation: u64,
    fallback: Vec<T>,
}

impl<T: ContentItem> Default for Section<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ContentItem> Section<T> {
    pub fn new() -> Self {
        Self::with_fallback(T::fallback())
    }

    pub fn with_fallback(fallback: Vec<T>) -> Self {
        Self {
            state: SectionState::Unmounted,
            generation: 0,
            fallback,
        }
    }

    pub fn state(&self) -> &SectionState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SectionState::Loading)
    }

    /// Enter `Loading` and hand out the ticket for this mount's fetch.
    pub fn mount(&mut self) -> MountTicket {
        self.generation += 1;
        self.state = SectionState::Loading;
        MountTicket {
            generation: self.generation,
        }
    }

    pub fn unmount(&mut self) {
        self.generation += 1;
        self.state = SectionState::Unmounted;
    }

    /// Apply a fetch outcome. Returns `false` if the ticket is stale.
    pub fn complete(
        &mut self,
        ticket: MountTicket,
        outcome: Result<Envelope<Vec<T>>, ApiError>,
    ) -> bool {
        if ticket.generation != self.generation || !self.is_loading() {
            debug!(section = T::SECTION, "discarding result for a previous mount");
            return false;
        }
        let resolution = fetch_with_fallback(
            T::SECTION,
            || outcome,
            |item: &T| item.is_visible(),
            |item: &T| item.order_index(),
            &self.fallback,
        );
        self.state = SectionState::Ready(resolution);
        true
    }

    /// Mount, fetch through `backend` and settle, in one step.
    pub fn load<X>(&mut self, backend: &Backend<X>)
    where
        X: Transport,
        T: DeserializeOwned,
    {
        let ticket = self.mount();
        let outcome = backend.list::<T>();
        self.complete(ticket, outcome);
    }

    pub fn view(&self) -> SectionView<'_, T> {
        match &self.state {
            SectionState::Unmounted | SectionState::Loading => SectionView::Spinner,
            SectionState::Ready(resolution) => match resolution.source() {
                Some(source) => SectionView::Items {
                    items: resolution.items(),
                    source,
                },
                None => SectionView::NothingAvailable,
            },
        }
    }
}
