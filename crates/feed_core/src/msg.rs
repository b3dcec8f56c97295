use crate::{IntersectionEntry, Item, PageNumber, SentinelId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Hosting component attached; `sentinel` is absent when the marker was not rendered.
    Mounted { sentinel: Option<SentinelId> },
    /// Hosting component detached.
    Unmounted,
    /// Observer callback with the entries it reported.
    Intersection(Vec<IntersectionEntry>),
    /// Host asked for the next page directly.
    LoadMoreRequested,
    /// Engine completion for a page.
    PageLoaded { page: PageNumber, items: Vec<Item> },
    /// Engine failure for a page.
    PageFailed { page: PageNumber, reason: String },
    /// Fallback for placeholder wiring.
    NoOp,
}
