//! Feed engine: listing fetches and effect execution off the UI thread.
mod engine;
mod fetch;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, PageFetcher, ReqwestFetcher};
pub use types::{
    EngineEvent, FailureKind, FetchError, Item, ListingInfo, ListingPage, PageNumber,
};
