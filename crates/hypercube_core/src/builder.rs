//! Puzzle construction
//!
//! Fills in everything not given explicitly: rules from the rule seed,
//! a per-instance random source from the instance seed (or entropy), and
//! stage rotations drawn from that source.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::puzzle::Puzzle;
use crate::rules::{RuleSet, StageRotations};
use crate::timing::PuzzleTiming;
use crate::PuzzleError;

/// Rule seed used when none is given
pub const DEFAULT_RULE_SEED: u64 = 1;

#[derive(Clone, Debug, Default)]
pub struct PuzzleBuilder {
    instance_id: Option<u32>,
    rule_seed: Option<u64>,
    rules: Option<RuleSet>,
    rotations: Option<StageRotations>,
    rng_seed: Option<u64>,
    timing: PuzzleTiming,
}

impl PuzzleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id shown in log lines, distinguishing simultaneous puzzles
    pub fn with_instance_id(mut self, id: u32) -> Self {
        self.instance_id = Some(id);
        self
    }

    pub fn with_rule_seed(mut self, seed: u64) -> Self {
        self.rule_seed = Some(seed);
        self
    }

    /// Use explicit rule tables instead of generating them
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Use a fixed rotation sequence instead of drawing one
    pub fn with_rotations(mut self, rotations: StageRotations) -> Self {
        self.rotations = Some(rotations);
        self
    }

    /// Seed the per-instance random source; without one it comes from entropy
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_timing(mut self, timing: PuzzleTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn build(self) -> Result<Puzzle, PuzzleError> {
        let id = self.instance_id.unwrap_or(1);

        let rules = match self.rules {
            Some(rules) => {
                log::info!("[Hypercube #{}] Using explicit rule tables", id);
                rules
            }
            None => {
                let seed = self.rule_seed.unwrap_or(DEFAULT_RULE_SEED);
                log::info!("[Hypercube #{}] Using rule seed: {}", id, seed);
                RuleSet::from_seed(seed)
            }
        };
        log::debug!("[Hypercube #{}] Rules:\n{}", id, rules);

        let mut rng = match self.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let rotations = match self.rotations {
            Some(rotations) => rotations,
            None => StageRotations::draw(&mut rng),
        };

        Puzzle::new(id, rules, rotations, self.timing, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Phase;
    use hypercube_math::RotationAxisPair::*;

    #[test]
    fn test_defaults_build() {
        let puzzle = PuzzleBuilder::new().with_rng_seed(4).build().unwrap();
        assert_eq!(puzzle.id(), 1);
        assert_eq!(puzzle.phase(), Phase::Rotating);
        assert_eq!(*puzzle.rules(), RuleSet::from_seed(DEFAULT_RULE_SEED));
    }

    #[test]
    fn test_rng_seed_fixes_rotations() {
        let a = PuzzleBuilder::new().with_rng_seed(12).build().unwrap();
        let b = PuzzleBuilder::new().with_rng_seed(12).build().unwrap();
        assert_eq!(a.rotations(), b.rotations());
    }

    #[test]
    fn test_explicit_parts_are_used() {
        let rules = RuleSet::from_seed(77);
        let rotations = StageRotations::new([WZ, ZW, XY, YX, XZ]);
        let puzzle = PuzzleBuilder::new()
            .with_instance_id(3)
            .with_rules(rules.clone())
            .with_rotations(rotations)
            .build()
            .unwrap();
        assert_eq!(puzzle.id(), 3);
        assert_eq!(*puzzle.rules(), rules);
        assert_eq!(*puzzle.rotations(), rotations);
    }

    #[test]
    fn test_rule_seed_is_independent_of_rng_seed() {
        let a = PuzzleBuilder::new().with_rule_seed(5).with_rng_seed(1).build().unwrap();
        let b = PuzzleBuilder::new().with_rule_seed(5).with_rng_seed(2).build().unwrap();
        assert_eq!(a.rules(), b.rules());
    }

    #[test]
    fn test_bad_timing_fails() {
        let timing = PuzzleTiming { rotation_pause: [1.0, 0.5], ..Default::default() };
        assert!(PuzzleBuilder::new().with_timing(timing).build().is_err());
    }
}
