use feed_logging::{feed_debug, feed_info, feed_warn};

use crate::{Effect, FeedState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FeedState, msg: Msg) -> (FeedState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted { sentinel } => {
            if state.observer().is_some() {
                feed_debug!("Mounted while already mounted; ignoring");
                return (state, Vec::new());
            }
            state.attach(sentinel);
            match sentinel {
                Some(sentinel) => vec![Effect::Observe {
                    sentinel,
                    options: state.options(),
                }],
                None => {
                    feed_debug!("Mounted without a sentinel; nothing to observe");
                    Vec::new()
                }
            }
        }
        Msg::Unmounted => match state.detach().and_then(|slot| slot.sentinel) {
            Some(sentinel) => vec![Effect::Unobserve { sentinel }, Effect::Disconnect],
            None => Vec::new(),
        },
        Msg::Intersection(entries) => {
            if !state.is_observing() {
                return (state, Vec::new());
            }
            // A single target is observed, so the first entry is authoritative.
            match entries.first() {
                Some(entry) if entry.is_intersecting => vec![load_next_page(&mut state)],
                _ => Vec::new(),
            }
        }
        Msg::LoadMoreRequested => vec![load_next_page(&mut state)],
        Msg::PageLoaded { page, items } => {
            feed_debug!("Page {} delivered {} items", page, items.len());
            state.append_page(page, items);
            Vec::new()
        }
        Msg::PageFailed { page, reason } => {
            feed_warn!("Page {} failed and will not be retried: {}", page, reason);
            state.settle_failed(page);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn load_next_page(state: &mut FeedState) -> Effect {
    let (page, url) = state.issue_request();
    feed_info!("FetchPage page={} url={}", page, url);
    Effect::FetchPage { page, url }
}
