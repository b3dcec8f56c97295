use feed_core::Rect;

/// Simulated document: fixed-height rows followed by the sentinel row.
#[derive(Debug, Clone)]
pub struct Document {
    row_height: f64,
    sentinel_height: f64,
    viewport_height: f64,
    scroll_top: f64,
}

impl Document {
    pub fn new(row_height: f64, sentinel_height: f64, viewport_height: f64) -> Self {
        Self {
            row_height,
            sentinel_height,
            viewport_height,
            scroll_top: 0.0,
        }
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    pub fn viewport(&self) -> Rect {
        Rect::new(self.scroll_top, self.viewport_height)
    }

    pub fn sentinel(&self, rows: usize) -> Rect {
        Rect::new(rows as f64 * self.row_height, self.sentinel_height)
    }

    /// Scrolls down by `delta`, clamped to the end of the current document.
    pub fn scroll_by(&mut self, delta: f64, rows: usize) {
        let content = self.sentinel(rows).bottom();
        let max_top = (content - self.viewport_height).max(0.0);
        self.scroll_top = (self.scroll_top + delta).clamp(0.0, max_top);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_follows_the_last_row() {
        let doc = Document::new(50.0, 1.0, 600.0);
        assert_eq!(doc.sentinel(0), Rect::new(0.0, 1.0));
        assert_eq!(doc.sentinel(20), Rect::new(1000.0, 1.0));
    }

    #[test]
    fn scrolling_stops_at_document_end() {
        let mut doc = Document::new(50.0, 1.0, 600.0);
        doc.scroll_by(100.0, 0);
        assert_eq!(doc.scroll_top(), 0.0);

        doc.scroll_by(300.0, 20);
        assert_eq!(doc.scroll_top(), 300.0);

        doc.scroll_by(1000.0, 20);
        assert_eq!(doc.scroll_top(), 401.0);
        assert_eq!(doc.viewport().bottom(), doc.sentinel(20).bottom());
    }
}
