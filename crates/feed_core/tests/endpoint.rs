use feed_core::{EndpointError, ListingEndpoint, DEFAULT_PAGE_SIZE};

#[test]
fn default_endpoint_pages_twenty_records() {
    let endpoint = ListingEndpoint::default();
    assert_eq!(endpoint.page_size(), DEFAULT_PAGE_SIZE);
    assert_eq!(
        endpoint.page_url(3),
        "https://randomuser.me/api/?page=3&results=20"
    );
}

#[test]
fn existing_query_is_replaced() {
    let endpoint = ListingEndpoint::parse("http://localhost:9000/users?page=9&x=1", 20).unwrap();
    assert_eq!(
        endpoint.page_url(1),
        "http://localhost:9000/users?page=1&results=20"
    );
}

#[test]
fn rejects_zero_page_size_and_bad_base() {
    assert_eq!(
        ListingEndpoint::parse("https://example.com/api/", 0),
        Err(EndpointError::ZeroPageSize)
    );
    assert!(matches!(
        ListingEndpoint::parse("not a url", 20),
        Err(EndpointError::InvalidBase { .. })
    ));
    assert!(matches!(
        ListingEndpoint::parse("mailto:someone@example.com", 20),
        Err(EndpointError::InvalidBase { .. })
    ));
}
