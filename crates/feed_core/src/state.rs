use std::collections::BTreeSet;

use crate::view_model::FeedViewModel;
use crate::{ListingEndpoint, ObserverOptions, PageCursor, PageNumber, SentinelId};

/// Opaque listing record; the feed only ever appends these.
pub type Item = serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ObserverSlot {
    pub(crate) sentinel: Option<SentinelId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedState {
    endpoint: ListingEndpoint,
    options: ObserverOptions,
    cursor: PageCursor,
    items: Vec<Item>,
    in_flight: BTreeSet<PageNumber>,
    observer: Option<ObserverSlot>,
    dirty: bool,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(endpoint: ListingEndpoint) -> Self {
        Self {
            endpoint,
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: ObserverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn view(&self) -> FeedViewModel {
        FeedViewModel {
            items_len: self.items.len(),
            next_page: self.cursor.peek(),
            in_flight: self.in_flight.iter().copied().collect(),
            mounted: self.observer.is_some(),
            observing: self.is_observing(),
            dirty: self.dirty,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn endpoint(&self) -> &ListingEndpoint {
        &self.endpoint
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn options(&self) -> ObserverOptions {
        self.options
    }

    pub(crate) fn observer(&self) -> Option<ObserverSlot> {
        self.observer
    }

    pub(crate) fn is_observing(&self) -> bool {
        self.observer.is_some_and(|slot| slot.sentinel.is_some())
    }

    pub(crate) fn attach(&mut self, sentinel: Option<SentinelId>) {
        self.observer = Some(ObserverSlot { sentinel });
        self.dirty = true;
    }

    pub(crate) fn detach(&mut self) -> Option<ObserverSlot> {
        let slot = self.observer.take();
        if slot.is_some() {
            self.dirty = true;
        }
        slot
    }

    /// Advances the cursor and marks the issued page as in flight.
    pub(crate) fn issue_request(&mut self) -> (PageNumber, String) {
        let page = self.cursor.advance();
        self.in_flight.insert(page);
        self.dirty = true;
        (page, self.endpoint.page_url(page))
    }

    pub(crate) fn append_page(&mut self, page: PageNumber, items: Vec<Item>) {
        self.in_flight.remove(&page);
        self.items.extend(items);
        self.dirty = true;
    }

    pub(crate) fn settle_failed(&mut self, page: PageNumber) {
        if self.in_flight.remove(&page) {
            self.dirty = true;
        }
    }
}
