use std::sync::Once;

use feed_core::{
    update, Effect, FeedState, IntersectionEntry, Msg, ObserverOptions, Root, SentinelId,
    DEFAULT_THRESHOLD,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(feed_logging::initialize_for_tests);
}

const SENTINEL: SentinelId = SentinelId(7);

fn visible() -> IntersectionEntry {
    IntersectionEntry {
        target: SENTINEL,
        is_intersecting: true,
        intersection_ratio: 1.0,
    }
}

fn hidden() -> IntersectionEntry {
    IntersectionEntry {
        target: SENTINEL,
        is_intersecting: false,
        intersection_ratio: 0.0,
    }
}

#[test]
fn mount_observes_sentinel_with_viewport_root_and_threshold() {
    init_logging();
    let (mut state, effects) = update(
        FeedState::new(),
        Msg::Mounted {
            sentinel: Some(SENTINEL),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::Observe {
            sentinel: SENTINEL,
            options: ObserverOptions {
                root: Root::Viewport,
                threshold: DEFAULT_THRESHOLD,
            },
        }]
    );
    assert!(state.view().mounted);
    assert!(state.view().observing);
    assert!(state.consume_dirty());
}

#[test]
fn mount_without_sentinel_observes_nothing() {
    init_logging();
    let (state, effects) = update(FeedState::new(), Msg::Mounted { sentinel: None });

    assert!(effects.is_empty());
    assert!(state.view().mounted);
    assert!(!state.view().observing);
}

#[test]
fn unmount_after_mount_unobserves_then_disconnects() {
    init_logging();
    let (state, _) = update(
        FeedState::new(),
        Msg::Mounted {
            sentinel: Some(SENTINEL),
        },
    );
    let (state, effects) = update(state, Msg::Unmounted);

    assert_eq!(
        effects,
        vec![
            Effect::Unobserve { sentinel: SENTINEL },
            Effect::Disconnect
        ]
    );
    assert!(!state.view().mounted);
    assert!(!state.view().observing);
}

#[test]
fn unmount_without_mount_is_noop() {
    init_logging();
    let state = FeedState::new();
    let (next, effects) = update(state.clone(), Msg::Unmounted);

    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn unmount_without_sentinel_emits_nothing() {
    init_logging();
    let (state, _) = update(FeedState::new(), Msg::Mounted { sentinel: None });
    let (state, effects) = update(state, Msg::Unmounted);

    assert!(effects.is_empty());
    assert!(!state.view().mounted);
}

#[test]
fn second_mount_is_ignored() {
    init_logging();
    let (state, _) = update(
        FeedState::new(),
        Msg::Mounted {
            sentinel: Some(SENTINEL),
        },
    );
    let (state, effects) = update(
        state,
        Msg::Mounted {
            sentinel: Some(SentinelId(99)),
        },
    );

    assert!(effects.is_empty());
    let (_, effects) = update(state, Msg::Unmounted);
    assert_eq!(effects[0], Effect::Unobserve { sentinel: SENTINEL });
}

#[test]
fn sentinel_never_visible_issues_no_requests() {
    init_logging();
    let (mut state, _) = update(
        FeedState::new(),
        Msg::Mounted {
            sentinel: Some(SENTINEL),
        },
    );
    for _ in 0..5 {
        let (next, effects) = update(state, Msg::Intersection(vec![hidden()]));
        assert!(effects.is_empty());
        state = next;
    }
    assert_eq!(state.view().next_page, 1);
    assert!(state.view().in_flight.is_empty());
}

#[test]
fn only_first_entry_is_consulted() {
    init_logging();
    let (state, _) = update(
        FeedState::new(),
        Msg::Mounted {
            sentinel: Some(SENTINEL),
        },
    );

    let (state, effects) = update(state, Msg::Intersection(vec![hidden(), visible()]));
    assert!(effects.is_empty());

    let (_, effects) = update(state, Msg::Intersection(vec![visible(), hidden()]));
    assert_eq!(effects.len(), 1);
}

#[test]
fn intersection_after_unmount_is_ignored() {
    init_logging();
    let (state, _) = update(
        FeedState::new(),
        Msg::Mounted {
            sentinel: Some(SENTINEL),
        },
    );
    let (state, _) = update(state, Msg::Unmounted);
    let (state, effects) = update(state, Msg::Intersection(vec![visible()]));

    assert!(effects.is_empty());
    assert_eq!(state.view().next_page, 1);
}

#[test]
fn intersection_before_mount_is_ignored() {
    init_logging();
    let (state, effects) = update(FeedState::new(), Msg::Intersection(vec![visible()]));

    assert!(effects.is_empty());
    assert_eq!(state.view().next_page, 1);
}

#[test]
fn custom_threshold_is_forwarded_to_observer() {
    init_logging();
    let options = ObserverOptions {
        root: Root::Viewport,
        threshold: 0.5,
    };
    let (_, effects) = update(
        FeedState::new().with_options(options),
        Msg::Mounted {
            sentinel: Some(SENTINEL),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::Observe {
            sentinel: SENTINEL,
            options,
        }]
    );
}
