use std::fmt;

use serde::Deserialize;

pub type PageNumber = u64;
pub type Item = serde_json::Value;

/// Listing payload: `{ "results": [...], "info": {...} }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListingPage {
    pub results: Vec<Item>,
    #[serde(default)]
    pub info: Option<ListingInfo>,
}

/// Paging metadata some listing APIs echo back alongside the results.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingInfo {
    #[serde(default)]
    pub seed: Option<String>,
    #[serde(default)]
    pub results: Option<u32>,
    #[serde(default)]
    pub page: Option<PageNumber>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    PageFetched {
        page: PageNumber,
        result: Result<ListingPage, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Network,
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedPayload,
    EngineStopped,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedPayload => write!(f, "malformed listing payload"),
            FailureKind::EngineStopped => write!(f, "fetch engine stopped"),
        }
    }
}
