use super::{band::Layout, props::VisualProps};

/// Role name that addresses the section element itself.
pub const ROOT_ROLE: &str = "section";

/// An element within a section, addressed by its `data-motion` role and its
/// position among elements sharing that role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Target {
    pub role: &'static str,
    pub index: usize,
}

impl Target {
    pub fn new(role: &'static str, index: usize) -> Self {
        Self { role, index }
    }

    pub fn first(role: &'static str) -> Self {
        Self { role, index: 0 }
    }
}

/// The element tree a section animates.
///
/// The browser implementation measures and styles real elements; tests use
/// an in-memory one.
pub trait Stage {
    /// Current document scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Number of rendered elements carrying `role`.
    fn count(&self, role: &str) -> usize;

    /// Document-relative geometry of `target` as rendered, including any
    /// transform the engine wrote. `None` when it isn't rendered.
    fn layout(&self, target: Target) -> Option<Layout>;

    /// Write the full merged property set of `target` to its inline style.
    fn write(&mut self, target: Target, props: &VisualProps);

    /// Put back whatever inline style `target` had before the first write.
    fn restore(&mut self, target: Target);
}

#[cfg(test)]
pub(crate) mod memory {
    use std::collections::BTreeMap;

    use super::*;

    #[derive(Debug, Default)]
    struct Element {
        top: f64,
        height: f64,
        shift: f64,
        baseline: BTreeMap<&'static str, String>,
        style: BTreeMap<&'static str, String>,
    }

    /// Flat list of elements with a movable scroll offset. Like a bounding
    /// rect, reported geometry follows the written `y` offset.
    #[derive(Debug)]
    pub struct MemoryStage {
        pub scroll: f64,
        pub viewport_height: f64,
        pub writes: usize,
        elements: BTreeMap<Target, Element>,
    }

    impl MemoryStage {
        pub fn new(viewport_height: f64) -> Self {
            Self {
                scroll: 0.0,
                viewport_height,
                writes: 0,
                elements: BTreeMap::new(),
            }
        }

        pub fn with(mut self, role: &'static str, top: f64, height: f64) -> Self {
            let index = self.count(role);
            self.elements.insert(
                Target::new(role, index),
                Element {
                    top,
                    height,
                    ..Default::default()
                },
            );
            self
        }

        pub fn with_baseline(mut self, target: Target, prop: &'static str, value: &str) -> Self {
            if let Some(el) = self.elements.get_mut(&target) {
                el.baseline.insert(prop, value.to_string());
                el.style.insert(prop, value.to_string());
            }
            self
        }

        pub fn style(&self, target: Target, prop: &str) -> Option<String> {
            self.elements.get(&target)?.style.get(prop).cloned()
        }

        pub fn opacity(&self, target: Target) -> Option<f64> {
            self.style(target, "opacity")?.parse().ok()
        }

        /// True when every element's style equals its baseline.
        pub fn is_pristine(&self) -> bool {
            self.elements.values().all(|el| el.style == el.baseline)
        }
    }

    impl Stage for MemoryStage {
        fn scroll_offset(&self) -> f64 {
            self.scroll
        }

        fn count(&self, role: &str) -> usize {
            self.elements.keys().filter(|t| t.role == role).count()
        }

        fn layout(&self, target: Target) -> Option<Layout> {
            self.elements.get(&target).map(|el| Layout {
                element_top: el.top + el.shift,
                element_height: el.height,
                viewport_height: self.viewport_height,
            })
        }

        fn write(&mut self, target: Target, props: &VisualProps) {
            if let Some(el) = self.elements.get_mut(&target) {
                self.writes += 1;
                el.shift = props.y.unwrap_or(0.0);
                for (prop, value) in props.css() {
                    el.style.insert(prop, value);
                }
            }
        }

        fn restore(&mut self, target: Target) {
            if let Some(el) = self.elements.get_mut(&target) {
                el.style = el.baseline.clone();
                el.shift = 0.0;
            }
        }
    }
}
