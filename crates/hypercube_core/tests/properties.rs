//! Property tests over arbitrary seeds

use hypercube_core::{
    assign_colors, Color, RuleSet, StageRotations, RULE_COUNT, STAGE_COUNT, VERTEX_COUNT,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

proptest! {
    #[test]
    fn test_rules_are_deterministic(seed in any::<u64>()) {
        prop_assert_eq!(RuleSet::from_seed(seed), RuleSet::from_seed(seed));

        let a = StageRotations::draw(&mut ChaCha8Rng::seed_from_u64(seed));
        let b = StageRotations::draw(&mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_face_table_is_valid(seed in any::<u64>()) {
        let rules = RuleSet::from_seed(seed);
        let faces = rules.faces();
        prop_assert_eq!(faces.len(), RULE_COUNT);
        for (i, face) in faces.iter().enumerate() {
            prop_assert_eq!(face.fixed_count(), 2);
            for other in &faces[..i] {
                prop_assert_ne!(face, other);
            }
        }
    }

    #[test]
    fn test_coloring_guarantees_hold(rule_seed in any::<u64>(), rng_seed in any::<u64>()) {
        let rules = RuleSet::from_seed(rule_seed);
        let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
        let rotations = StageRotations::draw(&mut rng);

        for stage in 0..STAGE_COUNT {
            let goal = rules.goal(&rotations, stage).unwrap();
            let coloring = assign_colors(&goal.face, goal.color, &mut rng).unwrap();

            // Every vertex is colored
            prop_assert_eq!(coloring.colors().len(), VERTEX_COUNT);

            // The target face shows four distinct colors
            let members = goal.face.members();
            let mut on_face: Vec<Color> = members.iter().map(|&v| coloring.colors()[v]).collect();
            on_face.sort();
            prop_assert_eq!(on_face, Color::ALL.to_vec());

            // Exactly one member has the target color, and it is the target
            let holders: Vec<usize> = members
                .into_iter()
                .filter(|&v| coloring.colors()[v] == goal.color)
                .collect();
            prop_assert_eq!(holders, vec![coloring.target_vertex()]);
        }
    }
}
