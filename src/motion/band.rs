use std::str::FromStr;

use super::MotionError;

/// A point along either the trigger element or the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    Top,
    Center,
    Bottom,
    Percent(f64),
    Pixels(f64),
}

impl Anchor {
    /// Offset from the leading edge of a box of the given extent.
    pub fn resolve(&self, extent: f64) -> f64 {
        match self {
            Anchor::Top => 0.0,
            Anchor::Center => extent / 2.0,
            Anchor::Bottom => extent,
            Anchor::Percent(p) => extent * p / 100.0,
            Anchor::Pixels(px) => *px,
        }
    }
}

impl FromStr for Anchor {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Anchor::Top),
            "center" => Ok(Anchor::Center),
            "bottom" => Ok(Anchor::Bottom),
            x if x.ends_with('%') => x[..x.len() - 1]
                .parse::<f64>()
                .map(Anchor::Percent)
                .map_err(|_| MotionError::InvalidPosition(s.to_string())),
            x if x.ends_with("px") => x[..x.len() - 2]
                .parse::<f64>()
                .map(Anchor::Pixels)
                .map_err(|_| MotionError::InvalidPosition(s.to_string())),
            _ => Err(MotionError::InvalidPosition(s.to_string())),
        }
    }
}

/// Where the trigger element sits relative to the viewport, written as
/// `"<element anchor> <viewport anchor>"`.
///
/// `"top 80%"` is satisfied once the element's top edge reaches 80% of the
/// way down the viewport; `"bottom top"` once its bottom edge reaches the
/// top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl Position {
    pub fn new(element: Anchor, viewport: Anchor) -> Self {
        Self { element, viewport }
    }

    /// The document scroll offset at which this position is reached.
    pub fn scroll_offset(&self, layout: &Layout) -> f64 {
        layout.element_top + self.element.resolve(layout.element_height)
            - self.viewport.resolve(layout.viewport_height)
    }
}

impl FromStr for Position {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(element), Some(viewport), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(MotionError::InvalidPosition(s.to_string()));
        };
        Ok(Self {
            element: element.parse()?,
            viewport: viewport.parse()?,
        })
    }
}

/// Geometry of a trigger element in document coordinates, measured at
/// sample time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub element_top: f64,
    pub element_height: f64,
    pub viewport_height: f64,
}

/// A start/end pair resolved to document scroll offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationBand {
    pub start: f64,
    pub end: f64,
}

impl ActivationBand {
    pub fn resolve(start: &Position, end: &Position, layout: &Layout) -> Self {
        Self {
            start: start.scroll_offset(layout),
            end: end.scroll_offset(layout),
        }
    }

    pub fn contains(&self, scroll: f64) -> bool {
        self.start <= scroll && scroll <= self.end
    }

    /// Normalized position of `scroll` within the band, clamped to [0, 1].
    pub fn progress(&self, scroll: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if scroll >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / span).clamp(0.0, 1.0)
    }
}
