//! Headless host: owns the scrolled document and drives the feed lifecycle.
mod app;
mod effects;
mod viewport;

pub use app::{run_app, HostConfig};
