/// Rows from the end of the list at which the next page is requested.
pub const PREFETCH_MARGIN: usize = 2;

/// Inputs for one infinite-scroll check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTrigger {
    /// Bumped on every submitted search.
    pub generation: u64,
    pub page: u32,
    pub near_end: bool,
    pub has_more: bool,
    /// A first page or next page is in flight.
    pub busy: bool,
}

impl ScrollTrigger {
    pub fn near_end(selected: usize, len: usize) -> bool {
        len > 0 && selected + PREFETCH_MARGIN >= len
    }
}

/// Fires at most once per (generation, page), so a failed page is not
/// retried until the user asks for it.
#[derive(Debug, Default)]
pub struct InfiniteScroll {
    last_fired: Option<(u64, u32)>,
}

impl InfiniteScroll {
    pub fn poll(&mut self, trigger: ScrollTrigger) -> bool {
        if !trigger.near_end || !trigger.has_more || trigger.busy {
            return false;
        }
        let key = (trigger.generation, trigger.page);
        if self.last_fired == Some(key) {
            return false;
        }
        self.last_fired = Some(key);
        true
    }
}
