//! Navigation generations.
//!
//! Every route change starts a new generation. Async work captures the
//! token current at its start and drops its result when a newer navigation
//! has happened in the meantime, so a slow response never renders over the
//! page the user moved to.

/// Snapshot of the generation an async task belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavToken(u64);

/// Monotonic navigation counter.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavGeneration {
    current: u64,
}

impl NavGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, invalidating all earlier tokens.
    pub fn begin(&mut self) -> NavToken {
        self.current += 1;
        NavToken(self.current)
    }

    /// Token of the running generation.
    pub fn token(&self) -> NavToken {
        NavToken(self.current)
    }

    pub fn is_current(&self, token: NavToken) -> bool {
        token.0 == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_generation_invalidates() {
        let mut generation = NavGeneration::new();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
        assert_eq!(generation.token(), second);
    }
}
