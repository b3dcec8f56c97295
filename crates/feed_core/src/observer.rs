//! Headless model of a viewport intersection observer.
//!
//! Geometry is vertical-only and expressed in document coordinates: the root is
//! the scrolled viewport, the target is the sentinel row placed after the list.

/// Fraction of the sentinel that must be visible before a crossing is reported.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Non-owning handle to the sentinel element. The host owns the element itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SentinelId(pub u64);

/// Observation root. Only the document viewport is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Root {
    #[default]
    Viewport,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub root: Root,
    pub threshold: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            root: Root::Viewport,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Overlap with `other`, or `None` when the two do not even touch.
    fn overlap(&self, other: &Rect) -> Option<f64> {
        let top = self.top.max(other.top);
        let bottom = self.bottom().min(other.bottom());
        (bottom >= top).then_some(bottom - top)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: SentinelId,
    pub is_intersecting: bool,
    pub intersection_ratio: f64,
}

impl IntersectionEntry {
    pub fn measure(target: SentinelId, root: Rect, rect: Rect) -> Self {
        match root.overlap(&rect) {
            Some(visible) => {
                let ratio = if rect.height > 0.0 {
                    (visible / rect.height).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                Self {
                    target,
                    is_intersecting: true,
                    intersection_ratio: ratio,
                }
            }
            None => Self {
                target,
                is_intersecting: false,
                intersection_ratio: 0.0,
            },
        }
    }
}

/// Reports threshold crossings for a single observed sentinel.
#[derive(Debug, Clone)]
pub struct IntersectionObserver {
    options: ObserverOptions,
    target: Option<SentinelId>,
    // `None` until the first sample after `observe`, which always reports.
    above_threshold: Option<bool>,
    connected: bool,
}

impl IntersectionObserver {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            target: None,
            above_threshold: None,
            connected: true,
        }
    }

    pub fn observe(&mut self, target: SentinelId) {
        if !self.connected {
            return;
        }
        self.target = Some(target);
        self.above_threshold = None;
    }

    pub fn unobserve(&mut self, target: SentinelId) {
        if self.target == Some(target) {
            self.target = None;
            self.above_threshold = None;
        }
    }

    pub fn disconnect(&mut self) {
        self.target = None;
        self.above_threshold = None;
        self.connected = false;
    }

    pub fn is_observing(&self) -> bool {
        self.target.is_some()
    }

    pub fn sample(&mut self, root: Rect, rect: Rect) -> Vec<IntersectionEntry> {
        let Some(target) = self.target else {
            return Vec::new();
        };
        let entry = IntersectionEntry::measure(target, root, rect);
        let above = entry.is_intersecting && entry.intersection_ratio >= self.options.threshold;
        if self.above_threshold == Some(above) {
            return Vec::new();
        }
        self.above_threshold = Some(above);
        vec![entry]
    }
}
