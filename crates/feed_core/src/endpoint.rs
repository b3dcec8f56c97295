use thiserror::Error;
use url::Url;

use crate::PageNumber;

pub const DEFAULT_BASE_URL: &str = "https://randomuser.me/api/";
pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EndpointError {
    #[error("invalid listing base url {base:?}: {message}")]
    InvalidBase { base: String, message: String },
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// Remote listing API: `GET <base>?page=<n>&results=<page_size>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEndpoint {
    base: Url,
    page_size: u32,
}

impl Default for ListingEndpoint {
    fn default() -> Self {
        Self {
            base: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListingEndpoint {
    pub fn parse(base: &str, page_size: u32) -> Result<Self, EndpointError> {
        if page_size == 0 {
            return Err(EndpointError::ZeroPageSize);
        }
        let base = Url::parse(base.trim()).map_err(|err| EndpointError::InvalidBase {
            base: base.to_string(),
            message: err.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(EndpointError::InvalidBase {
                base: base.to_string(),
                message: "url cannot carry a query".to_string(),
            });
        }
        Ok(Self { base, page_size })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn page_url(&self, page: PageNumber) -> String {
        let mut url = self.base.clone();
        url.set_query(None);
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("results", &self.page_size.to_string());
        url.into()
    }
}
