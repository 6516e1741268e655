//! Two-up project carousel.

use std::ops::Range;

/// Items shown at once.
pub const PAGE_SIZE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

/// Offset into the project list. Always within `[0, max(0, total - 2)]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
}

impl Carousel {
    pub fn index(&self) -> usize {
        self.index
    }

    fn max_index(total: usize) -> usize {
        total.saturating_sub(PAGE_SIZE)
    }

    /// Move one step, clamped. Returns whether the index changed.
    pub fn advance(&mut self, direction: Direction, total: usize) -> bool {
        let next = match direction {
            Direction::Back => self.index.saturating_sub(1),
            Direction::Forward => self.index + 1,
        }
        .min(Self::max_index(total));
        let changed = next != self.index;
        self.index = next;
        changed
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self, total: usize) -> bool {
        self.index < Self::max_index(total)
    }

    /// Slice range of the projects on screen.
    pub fn visible_range(&self, total: usize) -> Range<usize> {
        let start = self.index.min(total);
        start..(start + PAGE_SIZE).min(total)
    }

    /// Number of progress dots, `ceil(total / 2)`.
    pub fn page_count(total: usize) -> usize {
        total.div_ceil(PAGE_SIZE)
    }

    /// Highlighted progress dot, `floor(index / 2)`.
    pub fn active_page(&self) -> usize {
        self.index / PAGE_SIZE
    }
}
