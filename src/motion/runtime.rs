use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use super::MotionConfig;

/// Page-wide motion setup, created once by the page shell before any
/// section mounts and handed to sections through context.
///
/// It carries the shared [`MotionConfig`] and counts the scroll observers
/// sections currently hold, so leaked listeners show up as a non-zero count
/// after everything unmounts.
#[derive(Debug, Clone)]
pub struct MotionRuntime {
    config: MotionConfig,
    observers: Arc<AtomicUsize>,
}

impl MotionRuntime {
    pub fn new(config: MotionConfig) -> Self {
        log::debug!("motion runtime initialized: {config:?}");
        Self {
            config,
            observers: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn config(&self) -> MotionConfig {
        self.config
    }

    /// Record a section attaching its scroll observers. The lease releases
    /// them when dropped.
    pub fn lease(&self, section: &'static str) -> ObserverLease {
        let live = self.observers.fetch_add(1, Ordering::Relaxed) + 1;
        log::debug!("{section}: observing scroll ({live} sections live)");
        ObserverLease {
            section,
            observers: self.observers.clone(),
        }
    }

    pub fn live_observers(&self) -> usize {
        self.observers.load(Ordering::Relaxed)
    }
}

#[derive(Debug)]
pub struct ObserverLease {
    section: &'static str,
    observers: Arc<AtomicUsize>,
}

impl ObserverLease {
    pub fn section(&self) -> &'static str {
        self.section
    }
}

impl Drop for ObserverLease {
    fn drop(&mut self) {
        let live = self.observers.fetch_sub(1, Ordering::Relaxed) - 1;
        log::debug!("{}: released scroll observers ({live} sections live)", self.section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leases_balance() {
        let runtime = MotionRuntime::new(MotionConfig::default());
        assert_eq!(runtime.live_observers(), 0);

        let hero = runtime.lease("hero");
        let about = runtime.clone().lease("about");
        assert_eq!(runtime.live_observers(), 2);
        assert_eq!(hero.section(), "hero");

        drop(about);
        assert_eq!(runtime.live_observers(), 1);
        drop(hero);
        assert_eq!(runtime.live_observers(), 0);
    }

    #[test]
    fn test_repeated_mounts_do_not_leak() {
        let runtime = MotionRuntime::new(MotionConfig::default());
        for _ in 0..10 {
            let _lease = runtime.lease("skills");
        }
        assert_eq!(runtime.live_observers(), 0);
    }
}
