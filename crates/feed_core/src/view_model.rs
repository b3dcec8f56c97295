use crate::PageNumber;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedViewModel {
    pub items_len: usize,
    pub next_page: PageNumber,
    /// Pages requested but not yet answered, ascending.
    pub in_flight: Vec<PageNumber>,
    pub mounted: bool,
    pub observing: bool,
    pub dirty: bool,
}
