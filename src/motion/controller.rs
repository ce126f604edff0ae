use std::collections::BTreeMap;

use super::{
    band::{ActivationBand, Layout},
    props::VisualProps,
    spec::{Action, Activation, Entry, MotionSpec, SectionSpec, Selector, Track},
    stage::{Stage, Target},
    MotionConfig,
};

/// Lifecycle of a single registration.
///
/// One-shot: `Registered -> Fired -> Deregistered`.
/// Continuous: `Registered -> Active <-> Idle -> Deregistered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Registered,
    Fired,
    Active,
    Idle,
    Deregistered,
}

/// Handle passed to continuous callbacks for writing properties.
pub struct Frame<'a> {
    stage: &'a mut dyn Stage,
    cache: &'a mut BTreeMap<Target, VisualProps>,
}

impl Frame<'_> {
    pub fn count(&self, role: &str) -> usize {
        self.stage.count(role)
    }

    /// Apply `props` to every element with `role`.
    pub fn set(&mut self, role: &'static str, props: VisualProps) {
        self.set_each(role, |_| props);
    }

    pub fn set_each<F>(&mut self, role: &'static str, props: F)
    where
        F: Fn(usize) -> VisualProps,
    {
        for index in 0..self.stage.count(role) {
            apply(self.stage, self.cache, Target::new(role, index), &props(index));
        }
    }
}

fn apply(
    stage: &mut dyn Stage,
    cache: &mut BTreeMap<Target, VisualProps>,
    target: Target,
    props: &VisualProps,
) {
    let merged = cache.entry(target).or_default();
    merged.merge(props);
    stage.write(target, merged);
}

/// Geometry of `target` with the engine's own vertical offset taken out, so
/// thresholds don't move with the elements they animate.
fn resting_layout(
    stage: &dyn Stage,
    cache: &BTreeMap<Target, VisualProps>,
    target: Target,
) -> Option<Layout> {
    let mut layout = stage.layout(target)?;
    if let Some(y) = cache.get(&target).and_then(|p| p.y) {
        layout.element_top -= y;
    }
    Some(layout)
}

/// A reveal track resolved to concrete elements at fire time.
#[derive(Debug)]
struct Bound {
    track: Track,
    targets: Vec<Target>,
}

#[derive(Debug)]
struct Registration {
    effect: &'static str,
    trigger: Target,
    activation: Activation,
    action: Action,
    phase: Phase,
    fired_at: Option<f64>,
    bound: Vec<Bound>,
    /// Last progress handed to a scrub callback. Targets start at their
    /// baseline, which is progress 0.
    progress: f64,
}

impl Registration {
    fn key(&self) -> (Target, &'static str) {
        (self.trigger, self.effect)
    }

    fn is_live(&self) -> bool {
        self.phase != Phase::Deregistered
    }
}

fn bind(stage: &dyn Stage, tracks: &[Track]) -> Vec<Bound> {
    tracks
        .iter()
        .filter_map(|track| {
            let targets = match track.selector {
                Selector::All(role) => (0..stage.count(role))
                    .map(|i| Target::new(role, i))
                    .collect::<Vec<_>>(),
                Selector::One(target) => stage
                    .layout(target)
                    .map(|_| vec![target])
                    .unwrap_or_default(),
            };
            if targets.is_empty() {
                None
            } else {
                Some(Bound {
                    track: track.clone(),
                    targets,
                })
            }
        })
        .collect()
}

/// The live animation state of one mounted section.
///
/// Created at mount from a [`SectionSpec`], fed scroll samples and animation
/// frames while mounted, and torn down exactly once at unmount.
#[derive(Debug)]
pub struct SectionMotion {
    name: &'static str,
    config: MotionConfig,
    registrations: Vec<Registration>,
    cache: BTreeMap<Target, VisualProps>,
}

impl SectionMotion {
    /// Register every entry of `spec` against `stage`.
    ///
    /// Entries whose trigger or targets aren't rendered are skipped. Mount
    /// intros fire immediately and the initial scroll position is sampled,
    /// so reveals already in view fire right away.
    pub fn mount(spec: &SectionSpec, config: MotionConfig, stage: &mut dyn Stage, now: f64) -> Self {
        let mut motion = Self {
            name: spec.name,
            config,
            registrations: Vec::new(),
            cache: BTreeMap::new(),
        };
        for entry in &spec.entries {
            match entry {
                Entry::Single(m) => motion.register(m.clone(), stage, now),
                Entry::Each(each) => {
                    for index in 0..stage.count(each.role) {
                        let target = Target::new(each.role, index);
                        motion.register(
                            MotionSpec {
                                effect: each.role,
                                trigger: target,
                                activation: Activation::Enter(each.start),
                                action: Action::Reveal(vec![Track::one(target, (each.tween)(index))]),
                            },
                            stage,
                            now,
                        );
                    }
                }
            }
        }
        log::debug!(
            "{}: mounted with {} registrations",
            motion.name,
            motion.live_registrations()
        );
        motion.sample(stage, now);
        // reveals write last so their starting frame wins over a scrub that
        // touches the same element
        motion.tick(stage, now);
        motion
    }

    /// Add one registration, cancelling any live one with the same
    /// trigger and effect first.
    pub fn register(&mut self, spec: MotionSpec, stage: &mut dyn Stage, now: f64) {
        if stage.layout(spec.trigger).is_none() {
            log::debug!(
                "{}: skipping {} (trigger {}[{}] not rendered)",
                self.name,
                spec.effect,
                spec.trigger.role,
                spec.trigger.index
            );
            return;
        }
        let bound = match &spec.action {
            Action::Reveal(tracks) => {
                let bound = bind(stage, tracks);
                if bound.is_empty() {
                    log::debug!("{}: skipping {} (no targets rendered)", self.name, spec.effect);
                    return;
                }
                bound
            }
            Action::Scrub(_) if self.config.reduced_motion => return,
            Action::Scrub(_) => Vec::new(),
        };

        let key = (spec.trigger, spec.effect);
        for reg in self.registrations.iter_mut() {
            if reg.is_live() && reg.key() == key {
                reg.phase = Phase::Deregistered;
            }
        }
        self.registrations.retain(Registration::is_live);

        let mount_now = spec.activation == Activation::Mount;
        self.registrations.push(Registration {
            effect: spec.effect,
            trigger: spec.trigger,
            activation: spec.activation,
            action: spec.action,
            phase: Phase::Registered,
            fired_at: None,
            bound,
            progress: 0.0,
        });
        if mount_now {
            let idx = self.registrations.len() - 1;
            self.fire(idx, stage, now);
        }
    }

    fn fire(&mut self, idx: usize, stage: &mut dyn Stage, now: f64) {
        let reg = &mut self.registrations[idx];
        reg.phase = Phase::Fired;
        reg.fired_at = Some(now);
        log::debug!("{}: fired {}", self.name, reg.effect);
        if self.config.reduced_motion {
            for bound in &reg.bound {
                let end = bound.track.tween.total_duration(bound.targets.len());
                for (child, target) in bound.targets.iter().enumerate() {
                    let props = bound.track.tween.sample(end, child);
                    apply(stage, &mut self.cache, *target, &props);
                }
            }
            reg.phase = Phase::Deregistered;
            return;
        }
        Self::render(reg, &mut self.cache, stage, now);
    }

    /// Write the current frame of a fired reveal; returns false once done.
    fn render(
        reg: &mut Registration,
        cache: &mut BTreeMap<Target, VisualProps>,
        stage: &mut dyn Stage,
        now: f64,
    ) -> bool {
        let Some(fired_at) = reg.fired_at else {
            return false;
        };
        let elapsed = ((now - fired_at) / 1000.0).max(0.0);
        let mut playing = false;
        for bound in &reg.bound {
            for (child, target) in bound.targets.iter().enumerate() {
                apply(stage, cache, *target, &bound.track.tween.sample(elapsed, child));
            }
            playing |= !bound.track.tween.is_complete(elapsed, bound.targets.len());
        }
        if !playing {
            reg.phase = Phase::Deregistered;
        }
        playing
    }

    /// Re-evaluate every registration against the current scroll offset.
    ///
    /// Returns true when at least one reveal is playing and needs frames.
    pub fn sample(&mut self, stage: &mut dyn Stage, now: f64) -> bool {
        let scroll = stage.scroll_offset();
        let mut to_fire = Vec::new();
        for (idx, reg) in self.registrations.iter_mut().enumerate() {
            match (reg.activation, reg.phase) {
                (Activation::Enter(start), Phase::Registered) => {
                    let Some(layout) = resting_layout(stage, &self.cache, reg.trigger) else {
                        continue;
                    };
                    if scroll >= start.scroll_offset(&layout) {
                        to_fire.push(idx);
                    }
                }
                (
                    Activation::Scrub { start, end },
                    Phase::Registered | Phase::Active | Phase::Idle,
                ) => {
                    let Some(layout) = resting_layout(stage, &self.cache, reg.trigger) else {
                        continue;
                    };
                    let Action::Scrub(update) = &reg.action else {
                        continue;
                    };
                    let band = ActivationBand::resolve(&start, &end, &layout);
                    let progress = band.progress(scroll);
                    let mut frame = Frame {
                        stage: &mut *stage,
                        cache: &mut self.cache,
                    };
                    if band.contains(scroll) {
                        reg.phase = Phase::Active;
                        update(progress, &mut frame);
                        reg.progress = progress;
                    } else {
                        // settle on the edge the scroll is past, even when no
                        // sample landed inside the band
                        if progress != reg.progress {
                            update(progress, &mut frame);
                            reg.progress = progress;
                        }
                        reg.phase = Phase::Idle;
                    }
                }
                _ => {}
            }
        }
        for idx in to_fire {
            self.fire(idx, stage, now);
        }
        self.is_animating()
    }

    /// Advance fired reveals to `now`. Returns true while any still plays.
    pub fn tick(&mut self, stage: &mut dyn Stage, now: f64) -> bool {
        let mut playing = false;
        for reg in self
            .registrations
            .iter_mut()
            .filter(|r| r.phase == Phase::Fired)
        {
            playing |= Self::render(reg, &mut self.cache, stage, now);
        }
        playing
    }

    pub fn is_animating(&self) -> bool {
        self.registrations.iter().any(|r| r.phase == Phase::Fired)
    }

    /// Registrations that can still fire or update.
    pub fn live_registrations(&self) -> usize {
        self.registrations.iter().filter(|r| r.is_live()).count()
    }

    /// Phase of the registration for `effect` on `trigger`, if any.
    pub fn phase(&self, trigger: Target, effect: &str) -> Option<Phase> {
        self.registrations
            .iter()
            .rev()
            .find(|r| r.trigger == trigger && r.effect == effect)
            .map(|r| r.phase)
    }

    /// Number of elements currently carrying engine-written styles.
    pub fn touched(&self) -> usize {
        self.cache.len()
    }

    /// Cancel every registration and restore every touched element.
    pub fn teardown(&mut self, stage: &mut dyn Stage) {
        let touched = self.cache.len();
        for target in self.cache.keys() {
            stage.restore(*target);
        }
        self.cache.clear();
        for reg in self.registrations.iter_mut() {
            reg.phase = Phase::Deregistered;
        }
        self.registrations.clear();
        log::debug!("{}: torn down, restored {touched} elements", self.name);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::motion::{
        ease::Ease,
        spec::SectionSpec,
        stage::{memory::MemoryStage, ROOT_ROLE},
        tween::Tween,
    };

    fn fade(duration: f64) -> Tween {
        Tween::new(
            VisualProps::new().opacity(0.0).y(40.0),
            VisualProps::new().opacity(1.0).y(0.0),
            duration,
            Ease::Linear,
        )
    }

    // viewport 800 tall; title at 1000, so "top 80%" is reached at scroll 360
    fn stage() -> MemoryStage {
        MemoryStage::new(800.0)
            .with(ROOT_ROLE, 900.0, 1200.0)
            .with("title", 1000.0, 60.0)
            .with("card", 1200.0, 200.0)
            .with("card", 1500.0, 200.0)
    }

    fn config() -> MotionConfig {
        MotionConfig::default()
    }

    #[test]
    fn test_one_shot_fires_once() {
        let spec = SectionSpec::builder("demo")
            .reveal("title", "top 80%", fade(0.5))
            .build()
            .unwrap();
        let mut stage = stage();
        let mut motion = SectionMotion::mount(&spec, config(), &mut stage, 0.0);
        let title = Target::first("title");
        assert_eq!(motion.phase(title, "title"), Some(Phase::Registered));
        assert_eq!(stage.writes, 0);

        // scroll past the threshold
        stage.scroll = 400.0;
        assert!(motion.sample(&mut stage, 100.0));
        assert_eq!(motion.phase(title, "title"), Some(Phase::Fired));
        assert_eq!(stage.opacity(title), Some(0.0));

        // finish the tween
        assert!(!motion.tick(&mut stage, 700.0));
        assert_eq!(motion.phase(title, "title"), Some(Phase::Deregistered));
        assert_eq!(stage.opacity(title), Some(1.0));
        let writes = stage.writes;

        // back up and down again: nothing more happens
        for scroll in [0.0, 400.0, 0.0, 2000.0] {
            stage.scroll = scroll;
            assert!(!motion.sample(&mut stage, 800.0));
            motion.tick(&mut stage, 900.0);
        }
        assert_eq!(stage.writes, writes);
        assert_eq!(motion.live_registrations(), 0);
    }

    #[test]
    fn test_already_past_fires_at_mount() {
        let spec = SectionSpec::builder("demo")
            .reveal("title", "top 80%", fade(0.5))
            .build()
            .unwrap();
        let mut stage = stage();
        stage.scroll = 5000.0;
        let motion = SectionMotion::mount(&spec, config(), &mut stage, 0.0);
        assert_eq!(motion.phase(Target::first("title"), "title"), Some(Phase::Fired));
    }

    #[test]
    fn test_scrub_progress_and_settle() {
        let seen = Rc::new(RefCell::new(Vec::<f64>::new()));
        let spec = {
            let seen = seen.clone();
            SectionSpec::builder("demo")
                .scrub("drift", ROOT_ROLE, "top bottom", "bottom top", move |p, frame| {
                    seen.borrow_mut().push(p);
                    frame.set("title", VisualProps::new().y(-50.0 * p));
                })
                .build()
                .unwrap()
        };
        // band: 900 - 800 = 100 .. 900 + 1200 = 2100
        let mut stage = stage();
        let mut motion = SectionMotion::mount(&spec, config(), &mut stage, 0.0);
        let root = Target::first(ROOT_ROLE);
        // scroll 0 is before the band
        assert_eq!(motion.phase(root, "drift"), Some(Phase::Idle));
        assert!(seen.borrow().is_empty());

        for scroll in [100.0, 400.0, 1100.0, 2100.0] {
            stage.scroll = scroll;
            motion.sample(&mut stage, 0.0);
        }
        assert_eq!(motion.phase(root, "drift"), Some(Phase::Active));
        {
            let seen = seen.borrow();
            assert_eq!(seen.first(), Some(&0.0));
            assert_eq!(seen.last(), Some(&1.0));
            assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        }
        assert_eq!(
            stage.style(Target::first("title"), "transform").unwrap(),
            "translate3d(0px, -50px, 0px)"
        );

        // jump far past the end: one settling call, then idle
        stage.scroll = 9000.0;
        motion.sample(&mut stage, 0.0);
        assert_eq!(motion.phase(root, "drift"), Some(Phase::Idle));
        let calls = seen.borrow().len();
        stage.scroll = 9500.0;
        motion.sample(&mut stage, 0.0);
        assert_eq!(seen.borrow().len(), calls);
        assert_eq!(*seen.borrow().last().unwrap(), 1.0);

        // re-entering the band reactivates it
        stage.scroll = 1100.0;
        motion.sample(&mut stage, 0.0);
        assert_eq!(motion.phase(root, "drift"), Some(Phase::Active));
    }

    fn drift(seen: &Rc<RefCell<Vec<f64>>>) -> SectionSpec {
        let seen = seen.clone();
        SectionSpec::builder("demo")
            .scrub("drift", ROOT_ROLE, "top bottom", "bottom top", move |p, frame| {
                seen.borrow_mut().push(p);
                frame.set("title", VisualProps::new().y(-50.0 * p));
            })
            .build()
            .unwrap()
    }

    #[test]
    fn test_scrub_settles_when_band_is_skipped() {
        // band 100..2100, never sampled inside it
        let seen = Rc::new(RefCell::new(Vec::<f64>::new()));
        let mut stage = stage();
        let mut motion = SectionMotion::mount(&drift(&seen), config(), &mut stage, 0.0);
        assert!(seen.borrow().is_empty());

        stage.scroll = 9000.0;
        motion.sample(&mut stage, 0.0);
        assert_eq!(*seen.borrow(), vec![1.0]);
        assert_eq!(
            stage.style(Target::first("title"), "transform").unwrap(),
            "translate3d(0px, -50px, 0px)"
        );

        // and back to the start edge in one jump
        stage.scroll = 0.0;
        motion.sample(&mut stage, 0.0);
        assert_eq!(*seen.borrow(), vec![1.0, 0.0]);
        assert_eq!(
            motion.phase(Target::first(ROOT_ROLE), "drift"),
            Some(Phase::Idle)
        );
    }

    #[test]
    fn test_scrub_mounted_past_band_settles() {
        let seen = Rc::new(RefCell::new(Vec::<f64>::new()));
        let mut stage = stage();
        stage.scroll = 5000.0;
        let mut motion = SectionMotion::mount(&drift(&seen), config(), &mut stage, 0.0);
        assert_eq!(*seen.borrow(), vec![1.0]);

        // staying past the band doesn't repeat the call
        stage.scroll = 6000.0;
        motion.sample(&mut stage, 0.0);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_thresholds_ignore_engine_offsets() {
        // the scrub drags the title up by 1000px over its band
        let spec = SectionSpec::builder("demo")
            .scrub("drift", ROOT_ROLE, "top bottom", "bottom top", |p, frame| {
                frame.set("title", VisualProps::new().y(-1000.0 * p));
            })
            .reveal("title", "top 80%", fade(0.5))
            .build()
            .unwrap();
        let mut stage = stage();
        let mut motion = SectionMotion::mount(&spec, config(), &mut stage, 0.0);
        let title = Target::first("title");

        // rendered top is 900 here, which alone would put the threshold at 260
        stage.scroll = 300.0;
        motion.sample(&mut stage, 0.0);
        assert_eq!(stage.layout(title).unwrap().element_top, 900.0);
        assert_eq!(motion.phase(title, "title"), Some(Phase::Registered));

        stage.scroll = 360.0;
        motion.sample(&mut stage, 0.0);
        assert_eq!(motion.phase(title, "title"), Some(Phase::Fired));
    }

    #[test]
    fn test_each_expands_per_element() {
        let spec = SectionSpec::builder("demo")
            .each("card", "top 85%", |i| fade(0.4).delay(0.2 + i as f64 * 0.1))
            .build()
            .unwrap();
        let mut stage = stage();
        let mut motion = SectionMotion::mount(&spec, config(), &mut stage, 0.0);
        assert_eq!(motion.live_registrations(), 2);

        // first card triggers at 1200 - 680 = 520, second at 820
        stage.scroll = 600.0;
        motion.sample(&mut stage, 0.0);
        assert_eq!(motion.phase(Target::new("card", 0), "card"), Some(Phase::Fired));
        assert_eq!(
            motion.phase(Target::new("card", 1), "card"),
            Some(Phase::Registered)
        );
        assert_eq!(stage.opacity(Target::new("card", 1)), None);
    }

    #[test]
    fn test_missing_targets_are_skipped() {
        let spec = SectionSpec::builder("demo")
            .reveal("ghost", "top 80%", fade(0.5))
            .reveal_tracks(
                "title",
                "top 80%",
                vec![Track::all("phantom", fade(0.5))],
            )
            .each("nothing", "top 85%", |_| fade(0.5))
            .scrub("drift", "absent", "top bottom", "bottom top", |_, _| {})
            .reveal("title", "top 80%", fade(0.5))
            .build()
            .unwrap();
        let mut stage = stage();
        let motion = SectionMotion::mount(&spec, config(), &mut stage, 0.0);
        assert_eq!(motion.live_registrations(), 1);
        assert!(motion.phase(Target::first("ghost"), "ghost").is_none());
    }

    #[test]
    fn test_same_key_replaces() {
        let spec = SectionSpec::builder("demo")
            .reveal("title", "top 80%", fade(0.5))
            .reveal("title", "top 20%", fade(0.9))
            .build()
            .unwrap();
        let mut stage = stage();
        let mut motion = SectionMotion::mount(&spec, config(), &mut stage, 0.0);
        assert_eq!(motion.live_registrations(), 1);

        // only the "top 20%" registration (scroll 840) remains
        stage.scroll = 400.0;
        motion.sample(&mut stage, 0.0);
        assert_eq!(
            motion.phase(Target::first("title"), "title"),
            Some(Phase::Registered)
        );
        stage.scroll = 850.0;
        motion.sample(&mut stage, 0.0);
        assert_eq!(motion.phase(Target::first("title"), "title"), Some(Phase::Fired));
    }

    #[test]
    fn test_mount_then_unmount_restores_baseline() {
        let spec = SectionSpec::builder("demo")
            .intro("title", fade(0.5))
            .each("card", "top 85%", |_| fade(0.4))
            .scrub("drift", ROOT_ROLE, "top bottom", "bottom top", |p, frame| {
                frame.set("card", VisualProps::new().y(-40.0 * p));
            })
            .build()
            .unwrap();
        let mut stage = stage().with_baseline(Target::new("card", 1), "opacity", "0.9");
        stage.scroll = 700.0;
        let mut motion = SectionMotion::mount(&spec, config(), &mut stage, 0.0);
        motion.tick(&mut stage, 200.0);
        assert!(!stage.is_pristine());
        assert!(motion.touched() > 0);

        motion.teardown(&mut stage);
        assert!(stage.is_pristine());
        assert_eq!(stage.style(Target::new("card", 1), "opacity").unwrap(), "0.9");
        assert_eq!(motion.live_registrations(), 0);
        assert_eq!(motion.touched(), 0);

        // nothing fires after teardown
        let writes = stage.writes;
        stage.scroll = 3000.0;
        motion.sample(&mut stage, 300.0);
        motion.tick(&mut stage, 400.0);
        assert_eq!(stage.writes, writes);
    }

    #[test]
    fn test_stagger_across_role() {
        let spec = SectionSpec::builder("demo")
            .intro("card", fade(0.5).stagger(0.25))
            .build()
            .unwrap();
        let mut stage = stage();
        let mut motion = SectionMotion::mount(&spec, config(), &mut stage, 0.0);
        motion.tick(&mut stage, 500.0);
        assert_eq!(stage.opacity(Target::new("card", 0)), Some(1.0));
        assert_eq!(stage.opacity(Target::new("card", 1)), Some(0.5));
        assert!(!motion.tick(&mut stage, 750.0));
        assert_eq!(stage.opacity(Target::new("card", 1)), Some(1.0));
    }

    #[test]
    fn test_reduced_motion_jumps_to_end() {
        let spec = SectionSpec::builder("demo")
            .intro("title", fade(0.5).delay(1.0))
            .scrub("drift", ROOT_ROLE, "top bottom", "bottom top", |_, _| {
                panic!("scrubs are not registered under reduced motion")
            })
            .build()
            .unwrap();
        let mut stage = stage();
        stage.scroll = 1000.0;
        let motion = SectionMotion::mount(
            &spec,
            MotionConfig {
                reduced_motion: true,
            },
            &mut stage,
            0.0,
        );
        assert_eq!(stage.opacity(Target::first("title")), Some(1.0));
        assert!(!motion.is_animating());
        assert_eq!(motion.live_registrations(), 0);
    }
}
