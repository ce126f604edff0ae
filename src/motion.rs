//! Scroll-driven section animation.
//!
//! Each section declares a [`SectionSpec`]; on mount it becomes a
//! [`SectionMotion`] that registers one-shot reveals and continuous
//! (parallax) callbacks against the section's elements, and on unmount it is
//! torn down and every touched element is restored.

pub mod band;
pub mod controller;
pub mod ease;
pub mod props;
pub mod runtime;
pub mod spec;
pub mod stage;
pub mod tween;

use thiserror::Error;

pub use band::{ActivationBand, Anchor, Layout, Position};
pub use controller::{Frame, Phase, SectionMotion};
pub use ease::Ease;
pub use props::VisualProps;
pub use runtime::{MotionRuntime, ObserverLease};
pub use spec::{SectionSpec, Track};
pub use stage::{Stage, Target, ROOT_ROLE};
pub use tween::Tween;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("invalid trigger position: {0}")]
    InvalidPosition(String),
    #[error("unknown easing curve: {0}")]
    UnknownEase(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionConfig {
    /// Play reveals as an instant jump to their end state and skip parallax.
    pub reduced_motion: bool,
}

/// Shorthand for building a tween from an easing name.
pub fn tween(
    from: VisualProps,
    to: VisualProps,
    duration: f64,
    ease: &str,
) -> Result<Tween, MotionError> {
    Ok(Tween::new(from, to, duration, ease.parse()?))
}
