/// Scroll offset after which the navigation bar turns opaque.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Anchor ids of the page sections in render order, with their nav labels.
pub const SECTIONS: [(&str, &str); 7] = [
    ("hero", "Home"),
    ("about", "About"),
    ("education", "Education"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("certifications", "Certifications"),
    ("contact", "Contact"),
];

/// Fixed top navigation: background state, active link and mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
    active: usize,
    menu_open: bool,
}

impl NavState {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active(&self) -> &'static str {
        SECTIONS[self.active].0
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A link was followed; the mobile menu closes.
    pub fn follow(&mut self, id: &str) {
        if let Some(i) = SECTIONS.iter().position(|(s, _)| *s == id) {
            self.active = i;
        }
        self.menu_open = false;
    }

    /// Update from the scroll offset and the document top of each section
    /// (in [`SECTIONS`] order, `None` when not rendered). The active section
    /// is the last one whose top is above the probe line a third of the way
    /// down the viewport.
    pub fn observe(&mut self, scroll: f64, viewport_height: f64, tops: &[Option<f64>]) {
        self.scrolled = scroll > SCROLLED_THRESHOLD;
        let probe = scroll + viewport_height / 3.0;
        self.active = tops
            .iter()
            .take(SECTIONS.len())
            .enumerate()
            .filter_map(|(i, top)| top.filter(|t| *t <= probe).map(|_| i))
            .last()
            .unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tops() -> Vec<Option<f64>> {
        vec![
            Some(0.0),
            Some(900.0),
            Some(1800.0),
            Some(2700.0),
            None,
            Some(3600.0),
            Some(4500.0),
        ]
    }

    #[test]
    fn test_scrolled_flag() {
        let mut nav = NavState::default();
        nav.observe(10.0, 900.0, &tops());
        assert!(!nav.is_scrolled());
        nav.observe(51.0, 900.0, &tops());
        assert!(nav.is_scrolled());
    }

    #[test]
    fn test_active_section() {
        let mut nav = NavState::default();
        nav.observe(0.0, 900.0, &tops());
        assert_eq!(nav.active(), "hero");

        // probe at 700 + 300 = 1000 is past the about section's top
        nav.observe(700.0, 900.0, &tops());
        assert_eq!(nav.active(), "about");

        // missing sections are skipped
        nav.observe(3400.0, 900.0, &tops());
        assert_eq!(nav.active(), "certifications");
    }

    #[test]
    fn test_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.follow("skills");
        assert!(!nav.is_menu_open());
        assert_eq!(nav.active(), "skills");

        // unknown ids keep the current link
        nav.follow("blog");
        assert_eq!(nav.active(), "skills");
    }
}
