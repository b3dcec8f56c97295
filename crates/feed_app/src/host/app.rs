use std::thread;
use std::time::{Duration, Instant};

use feed_core::{update, FeedState, FeedViewModel, ListingEndpoint, Msg, SentinelId};
use feed_engine::{EngineHandle, FetchSettings};
use feed_logging::{feed_debug, feed_info, LogDestination};
use log::LevelFilter;

use super::effects::EffectRunner;
use super::viewport::Document;

const SENTINEL: SentinelId = SentinelId(1);

#[derive(Debug, Clone)]
pub struct HostConfig {
    pub endpoint: ListingEndpoint,
    pub fetch: FetchSettings,
    pub frames: u32,
    pub frame_interval: Duration,
    pub scroll_step: f64,
    pub row_height: f64,
    pub sentinel_height: f64,
    pub viewport_height: f64,
    /// How long to keep draining completions after unmount.
    pub drain_grace: Duration,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            endpoint: ListingEndpoint::default(),
            fetch: FetchSettings::default(),
            frames: 600,
            frame_interval: Duration::from_millis(16),
            scroll_step: 24.0,
            row_height: 48.0,
            sentinel_height: 1.0,
            viewport_height: 720.0,
            drain_grace: Duration::from_secs(2),
            log_destination: LogDestination::Terminal,
            log_level: LevelFilter::Info,
        }
    }
}

pub fn run_app(config: HostConfig) -> anyhow::Result<()> {
    feed_logging::initialize(&config.log_destination, config.log_level);

    let engine = EngineHandle::new(config.fetch.clone())?;
    let mut host = Host::new(&config, EffectRunner::new(engine));

    host.dispatch(Msg::Mounted {
        sentinel: Some(SENTINEL),
    });

    for _ in 0..config.frames {
        host.frame(config.scroll_step);
        thread::sleep(config.frame_interval);
    }

    host.dispatch(Msg::Unmounted);

    // Completions that land after unmount are still appended.
    let deadline = Instant::now() + config.drain_grace;
    while !host.state.view().in_flight.is_empty() && Instant::now() < deadline {
        host.pump_engine();
        thread::sleep(config.frame_interval);
    }

    let view = host.state.view();
    feed_info!(
        "Feed finished: {} items, next page {}, {} still in flight",
        view.items_len,
        view.next_page,
        view.in_flight.len()
    );
    Ok(())
}

struct Host {
    state: FeedState,
    runner: EffectRunner,
    document: Document,
}

impl Host {
    fn new(config: &HostConfig, runner: EffectRunner) -> Self {
        Self {
            state: FeedState::with_endpoint(config.endpoint.clone()),
            runner,
            document: Document::new(
                config.row_height,
                config.sentinel_height,
                config.viewport_height,
            ),
        }
    }

    fn frame(&mut self, scroll_step: f64) {
        let rows = self.state.items().len();
        self.document.scroll_by(scroll_step, rows);

        let entries = self
            .runner
            .sample(self.document.viewport(), self.document.sentinel(rows));
        if !entries.is_empty() {
            self.dispatch(Msg::Intersection(entries));
        }

        self.pump_engine();
    }

    fn pump_engine(&mut self) {
        for msg in self.runner.drain_events() {
            self.dispatch(msg);
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            render(&state.view(), self.document.scroll_top());
        }
        self.state = state;
        self.runner.enqueue(effects);
    }
}

fn render(view: &FeedViewModel, scroll_top: f64) {
    feed_debug!(
        "render items={} next_page={} in_flight={:?} observing={} scroll_top={:.0}",
        view.items_len,
        view.next_page,
        view.in_flight,
        view.observing,
        scroll_top
    );
}
