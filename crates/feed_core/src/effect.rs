use crate::{ObserverOptions, PageNumber, SentinelId};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Observe {
        sentinel: SentinelId,
        options: ObserverOptions,
    },
    Unobserve {
        sentinel: SentinelId,
    },
    Disconnect,
    FetchPage {
        page: PageNumber,
        url: String,
    },
}
