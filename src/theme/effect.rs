//! Run-once effect

use std::sync::atomic::{AtomicBool, Ordering};

/// An effect that runs at most once, no matter how often it is triggered
#[derive(Debug, Default)]
pub struct OnceEffect {
    done: AtomicBool,
}

impl OnceEffect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` if this effect has not run yet. Returns whether it ran.
    pub fn run<F: FnOnce()>(&self, f: F) -> bool {
        if self
            .done
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            f();
            true
        } else {
            false
        }
    }

    pub fn has_run(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_once() {
        let effect = OnceEffect::new();
        let mut count = 0;
        assert!(effect.run(|| count += 1));
        assert!(!effect.run(|| count += 1));
        assert!(!effect.run(|| count += 1));
        assert_eq!(count, 1);
        assert!(effect.has_run());
    }
}
