use feed_core::{Effect, IntersectionEntry, IntersectionObserver, Msg, Rect};
use feed_engine::{EngineEvent, EngineHandle};
use feed_logging::{feed_debug, feed_info, feed_warn};

/// Executes core effects: observer bookkeeping locally, fetches on the engine.
pub struct EffectRunner {
    engine: EngineHandle,
    observer: Option<IntersectionObserver>,
    // Failures detected while enqueueing, delivered with the next drain.
    pending: Vec<Msg>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self {
            engine,
            observer: None,
            pending: Vec::new(),
        }
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Observe { sentinel, options } => {
                    feed_debug!("Observe sentinel={:?} options={:?}", sentinel, options);
                    let observer = self
                        .observer
                        .get_or_insert_with(|| IntersectionObserver::new(options));
                    observer.observe(sentinel);
                }
                Effect::Unobserve { sentinel } => {
                    if let Some(observer) = self.observer.as_mut() {
                        observer.unobserve(sentinel);
                    }
                }
                Effect::Disconnect => {
                    if let Some(mut observer) = self.observer.take() {
                        observer.disconnect();
                    }
                }
                Effect::FetchPage { page, url } => {
                    feed_info!("FetchPage page={} url_len={}", page, url.len());
                    if let Err(err) = self.engine.fetch(page, url) {
                        feed_warn!("FetchPage page={} not queued: {}", page, err);
                        self.pending.push(Msg::PageFailed {
                            page,
                            reason: err.to_string(),
                        });
                    }
                }
            }
        }
    }

    pub fn sample(&mut self, root: Rect, sentinel: Rect) -> Vec<IntersectionEntry> {
        match self.observer.as_mut() {
            Some(observer) => observer.sample(root, sentinel),
            None => Vec::new(),
        }
    }

    pub fn drain_events(&mut self) -> Vec<Msg> {
        let mut inbox = std::mem::take(&mut self.pending);
        while let Some(event) = self.engine.try_recv() {
            inbox.push(event_to_msg(event));
        }
        inbox
    }
}

pub(crate) fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PageFetched { page, result } => match result {
            Ok(listing) => Msg::PageLoaded {
                page,
                items: listing.results,
            },
            Err(err) => Msg::PageFailed {
                page,
                reason: err.to_string(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_engine::{FailureKind, FetchError, ListingPage};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn fetched_listing_becomes_page_loaded() {
        let event = EngineEvent::PageFetched {
            page: 4,
            result: Ok(ListingPage {
                results: vec![json!({"name": "x"})],
                info: None,
            }),
        };
        assert_eq!(
            event_to_msg(event),
            Msg::PageLoaded {
                page: 4,
                items: vec![json!({"name": "x"})],
            }
        );
    }

    #[test]
    fn fetch_error_becomes_page_failed() {
        let event = EngineEvent::PageFetched {
            page: 2,
            result: Err(FetchError {
                kind: FailureKind::Timeout,
                message: "deadline elapsed".to_string(),
            }),
        };
        assert_eq!(
            event_to_msg(event),
            Msg::PageFailed {
                page: 2,
                reason: "timeout: deadline elapsed".to_string(),
            }
        );
    }
}
