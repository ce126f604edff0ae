/// Hover-flip state for a row of cards; at most one card shows its back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipDeck {
    flipped: Option<usize>,
}

impl FlipDeck {
    pub fn flipped(&self) -> Option<usize> {
        self.flipped
    }

    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped == Some(index)
    }

    /// Pointer entered card `index`; any other flipped card turns back.
    pub fn enter(&mut self, index: usize) {
        self.flipped = Some(index);
    }

    /// Pointer left card `index`. A late leave from a card that is no
    /// longer flipped leaves the current one alone.
    pub fn leave(&mut self, index: usize) {
        if self.flipped == Some(index) {
            self.flipped = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_leave() {
        let mut deck = FlipDeck::default();
        assert_eq!(deck.flipped(), None);

        deck.enter(2);
        assert!(deck.is_flipped(2));
        assert!(!deck.is_flipped(1));

        deck.leave(2);
        assert_eq!(deck.flipped(), None);
    }

    #[test]
    fn test_moving_between_cards() {
        let mut deck = FlipDeck::default();
        deck.enter(0);
        // enter of the neighbour can arrive before the leave of the first
        deck.enter(1);
        assert!(deck.is_flipped(1));
        deck.leave(0);
        assert!(deck.is_flipped(1));
        assert!(!deck.is_flipped(0));
    }
}
