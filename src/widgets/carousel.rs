/// Where a card sits relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Active,
    Prev,
    Next,
    Hidden,
}

impl Slot {
    pub fn transform(&self) -> &'static str {
        match self {
            Slot::Active => "translateX(0) translateZ(0) rotateY(0deg) scale(1.1)",
            Slot::Prev => "translateX(-120%) translateZ(-200px) rotateY(35deg) scale(0.85)",
            Slot::Next => "translateX(120%) translateZ(-200px) rotateY(-35deg) scale(0.85)",
            Slot::Hidden => "translateX(0) translateZ(-200px) rotateY(0deg) scale(0.85)",
        }
    }

    pub fn opacity(&self) -> f64 {
        match self {
            Slot::Active => 1.0,
            Slot::Prev | Slot::Next => 0.6,
            Slot::Hidden => 0.0,
        }
    }

    pub fn z_index(&self) -> u8 {
        match self {
            Slot::Active => 10,
            Slot::Prev | Slot::Next => 5,
            Slot::Hidden => 0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: {}; opacity: {}; z-index: {}; transition-timing-function: cubic-bezier(0.16, 1, 0.3, 1)",
            self.transform(),
            self.opacity(),
            self.z_index()
        )
    }
}

/// Index cycling for a fixed number of cards. Moving past either end wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Arrows and dots are only worth showing with more than one card.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.active = (self.active + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.active = index;
            true
        } else {
            false
        }
    }

    pub fn slot(&self, index: usize) -> Slot {
        if self.len == 0 || index >= self.len {
            return Slot::Hidden;
        }
        if index == self.active {
            Slot::Active
        } else if index == (self.active + self.len - 1) % self.len {
            Slot::Prev
        } else if index == (self.active + 1) % self.len {
            Slot::Next
        } else {
            Slot::Hidden
        }
    }
}
