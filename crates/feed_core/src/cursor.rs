pub type PageNumber = u64;

/// Monotonic page index used to build listing requests. Starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    next: PageNumber,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl PageCursor {
    /// Page the next load will request.
    pub fn peek(&self) -> PageNumber {
        self.next
    }

    /// Hands out the current page and moves the cursor forward by one.
    pub fn advance(&mut self) -> PageNumber {
        let page = self.next;
        self.next += 1;
        page
    }
}
