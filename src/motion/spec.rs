//! Declarative animation specs.
//!
//! A section describes what each of its element roles does, and the
//! controller turns that description into live registrations at mount.

use std::fmt;
use std::rc::Rc;

use super::{
    band::Position,
    controller::Frame,
    stage::{Target, ROOT_ROLE},
    tween::Tween,
    MotionError,
};

/// Continuous callback. Receives normalized band progress and sets
/// properties through the frame.
pub type ScrubFn = Rc<dyn Fn(f64, &mut Frame<'_>)>;

/// Builds the tween for the element at a given index of an `each` role.
pub type EachFn = Rc<dyn Fn(usize) -> Tween>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activation {
    /// Fires as soon as the section mounts.
    Mount,
    /// Fires once, the first time the scroll offset reaches the position.
    Enter(Position),
    /// Tracks progress between two positions for as long as mounted.
    Scrub { start: Position, end: Position },
}

/// Which elements a tween drives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selector {
    /// Every element with the role, staggered in document order.
    All(&'static str),
    One(Target),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub selector: Selector,
    pub tween: Tween,
}

impl Track {
    pub fn all(role: &'static str, tween: Tween) -> Self {
        Self {
            selector: Selector::All(role),
            tween,
        }
    }

    pub fn one(target: Target, tween: Tween) -> Self {
        Self {
            selector: Selector::One(target),
            tween,
        }
    }
}

#[derive(Clone)]
pub enum Action {
    Reveal(Vec<Track>),
    Scrub(ScrubFn),
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Reveal(tracks) => f.debug_tuple("Reveal").field(tracks).finish(),
            Action::Scrub(_) => f.write_str("Scrub(..)"),
        }
    }
}

/// One registration-to-be.
#[derive(Debug, Clone)]
pub struct MotionSpec {
    pub effect: &'static str,
    pub trigger: Target,
    pub activation: Activation,
    pub action: Action,
}

/// A per-element reveal, expanded into one registration per element of
/// `role` when the section mounts.
#[derive(Clone)]
pub struct EachSpec {
    pub role: &'static str,
    pub start: Position,
    pub tween: EachFn,
}

impl fmt::Debug for EachSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EachSpec")
            .field("role", &self.role)
            .field("start", &self.start)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub enum Entry {
    Single(MotionSpec),
    Each(EachSpec),
}

/// Everything one section animates, in declared order.
#[derive(Debug, Clone)]
pub struct SectionSpec {
    pub name: &'static str,
    pub entries: Vec<Entry>,
}

impl SectionSpec {
    pub fn builder(name: &'static str) -> SectionSpecBuilder {
        SectionSpecBuilder {
            spec: SectionSpec {
                name,
                entries: Vec::new(),
            },
            error: None,
        }
    }
}

/// Collects entries and keeps the first parse error, reported by `build`.
pub struct SectionSpecBuilder {
    spec: SectionSpec,
    error: Option<MotionError>,
}

impl SectionSpecBuilder {
    fn position(&mut self, s: &str) -> Option<Position> {
        match s.parse::<Position>() {
            Ok(p) => Some(p),
            Err(e) => {
                self.error.get_or_insert(e);
                None
            }
        }
    }

    /// Tween plays when the section mounts.
    pub fn intro(mut self, role: &'static str, tween: Tween) -> Self {
        self.spec.entries.push(Entry::Single(MotionSpec {
            effect: role,
            trigger: Target::first(ROOT_ROLE),
            activation: Activation::Mount,
            action: Action::Reveal(vec![Track::all(role, tween)]),
        }));
        self
    }

    /// Every element with `role` plays `tween` once the first of them
    /// reaches `start`.
    pub fn reveal(self, role: &'static str, start: &str, tween: Tween) -> Self {
        self.reveal_tracks(role, start, vec![Track::all(role, tween)])
    }

    /// Several tracks share one trigger element.
    pub fn reveal_tracks(mut self, trigger: &'static str, start: &str, tracks: Vec<Track>) -> Self {
        let Some(start) = self.position(start) else {
            return self;
        };
        let effect = match tracks.first().map(|t| t.selector) {
            Some(Selector::All(role)) => role,
            Some(Selector::One(target)) => target.role,
            None => trigger,
        };
        self.spec.entries.push(Entry::Single(MotionSpec {
            effect,
            trigger: Target::first(trigger),
            activation: Activation::Enter(start),
            action: Action::Reveal(tracks),
        }));
        self
    }

    /// Each element with `role` is its own trigger and plays the tween built
    /// for its index.
    pub fn each<F>(mut self, role: &'static str, start: &str, tween: F) -> Self
    where
        F: Fn(usize) -> Tween + 'static,
    {
        let Some(start) = self.position(start) else {
            return self;
        };
        self.spec.entries.push(Entry::Each(EachSpec {
            role,
            start,
            tween: Rc::new(tween),
        }));
        self
    }

    /// Continuous callback over the band between `start` and `end` of the
    /// `trigger` element.
    pub fn scrub<F>(mut self, effect: &'static str, trigger: &'static str, start: &str, end: &str, update: F) -> Self
    where
        F: Fn(f64, &mut Frame<'_>) + 'static,
    {
        let (Some(start), Some(end)) = (self.position(start), self.position(end)) else {
            return self;
        };
        self.spec.entries.push(Entry::Single(MotionSpec {
            effect,
            trigger: Target::first(trigger),
            activation: Activation::Scrub { start, end },
            action: Action::Scrub(Rc::new(update)),
        }));
        self
    }

    pub fn build(self) -> Result<SectionSpec, MotionError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.spec),
        }
    }
}
