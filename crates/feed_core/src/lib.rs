//! Feed core: pure infinite-scroll state machine and viewport geometry.
mod cursor;
mod effect;
mod endpoint;
mod msg;
mod observer;
mod state;
mod update;
mod view_model;

pub use cursor::{PageCursor, PageNumber};
pub use effect::Effect;
pub use endpoint::{EndpointError, ListingEndpoint, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use msg::Msg;
pub use observer::{
    IntersectionEntry, IntersectionObserver, ObserverOptions, Rect, Root, SentinelId,
    DEFAULT_THRESHOLD,
};
pub use state::{FeedState, Item};
pub use update::update;
pub use view_model::FeedViewModel;
