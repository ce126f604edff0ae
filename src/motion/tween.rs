use super::{ease::Ease, props::VisualProps};

/// A fire-once interpolation between two property sets.
///
/// Times are in seconds. Child `i` of a multi-element target starts at
/// `delay + i * stagger`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub from: VisualProps,
    pub to: VisualProps,
    pub duration: f64,
    pub delay: f64,
    pub stagger: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: VisualProps, to: VisualProps, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration,
            delay: 0.0,
            stagger: 0.0,
            ease,
        }
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    fn child_start(&self, child: usize) -> f64 {
        self.delay + child as f64 * self.stagger
    }

    /// Properties for `child` at `elapsed` seconds after firing.
    ///
    /// Before a child's start time it holds the `from` values.
    pub fn sample(&self, elapsed: f64, child: usize) -> VisualProps {
        let local = elapsed - self.child_start(child);
        let t = if self.duration <= 0.0 {
            if local >= 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            (local / self.duration).clamp(0.0, 1.0)
        };
        VisualProps::lerp(&self.from, &self.to, self.ease.apply(t))
    }

    /// Seconds from firing until every one of `children` has finished.
    pub fn total_duration(&self, children: usize) -> f64 {
        self.child_start(children.saturating_sub(1)) + self.duration.max(0.0)
    }

    pub fn is_complete(&self, elapsed: f64, children: usize) -> bool {
        elapsed >= self.total_duration(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade_up() -> Tween {
        Tween::new(
            VisualProps::new().opacity(0.0).y(30.0),
            VisualProps::new().opacity(1.0).y(0.0),
            0.5,
            Ease::Linear,
        )
    }

    #[test]
    fn test_sample_progression() {
        let tween = fade_up();
        assert_eq!(tween.sample(0.0, 0).opacity, Some(0.0));
        assert_eq!(tween.sample(0.25, 0).opacity, Some(0.5));
        assert_eq!(tween.sample(0.5, 0).opacity, Some(1.0));
        assert_eq!(tween.sample(9.0, 0).y, Some(0.0));
    }

    #[test]
    fn test_delay_and_stagger() {
        let tween = fade_up().delay(0.2).stagger(0.1);

        // nothing moves before the delay
        assert_eq!(tween.sample(0.1, 0).opacity, Some(0.0));
        // child 2 starts at 0.4
        assert_eq!(tween.sample(0.4, 2).opacity, Some(0.0));
        assert!((tween.sample(0.65, 2).opacity.unwrap() - 0.5).abs() < 1e-9);

        assert!((tween.total_duration(3) - 0.9).abs() < 1e-9);
        assert!(!tween.is_complete(0.85, 3));
        assert!(tween.is_complete(0.91, 3));
    }

    #[test]
    fn test_zero_duration_jumps() {
        let tween = Tween::new(
            VisualProps::new().scale(0.0),
            VisualProps::new().scale(1.0),
            0.0,
            Ease::ExpoOut,
        );
        assert_eq!(tween.sample(0.0, 0).scale, Some(1.0));
        assert!(tween.is_complete(0.0, 1));
    }
}
