use super::BLOCK_COUNT;
use std::ops::RangeInclusive;

/// Block interval holding writes the host has not seen yet. Widened by
/// every write, reset only by a redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirtyRange {
    min: usize,
    max: usize,
    has_dirt: bool,
}

impl Default for DirtyRange {
    fn default() -> Self {
        DirtyRange::new()
    }
}

impl DirtyRange {
    pub fn new() -> DirtyRange {
        DirtyRange {
            min: BLOCK_COUNT,
            max: 0,
            has_dirt: false,
        }
    }

    pub fn full() -> DirtyRange {
        DirtyRange {
            min: 0,
            max: BLOCK_COUNT - 1,
            has_dirt: true,
        }
    }

    pub fn widen(&mut self, block: usize) {
        self.min = self.min.min(block);
        self.max = self.max.max(block);
        self.has_dirt = true;
    }

    pub fn has_dirt(&self) -> bool {
        self.has_dirt
    }

    pub fn range(&self) -> Option<RangeInclusive<usize>> {
        if self.min > self.max {
            None
        } else {
            Some(self.min..=self.max)
        }
    }

    pub fn contains(&self, block: usize) -> bool {
        self.min <= block && block <= self.max
    }

    pub fn reset(&mut self) {
        *self = DirtyRange::new();
    }
}
