// tests/movement_props.rs
//
// Property tests for the movement engine: alphabet validation, the rotation
// cycle, forward/backward cancellation and repeatability.
use proptest::prelude::*;
use space_rover::{CommandAlphabet, Grid, Heading, Pose, RoverConfig, RoverInterpreter};

fn heading() -> impl Strategy<Value = Heading> {
    prop::sample::select(Heading::ALL.to_vec())
}

/// Large grid with the rover well inside it, so short sequences never leave.
fn roomy(start: Pose) -> RoverInterpreter {
    let config = RoverConfig {
        start,
        ..Default::default()
    };
    RoverInterpreter::new(config, Grid::new(100.0, 100.0))
}

proptest! {
    #[test]
    fn alphabet_strings_are_valid(line in "[FBLR]{1,40}") {
        prop_assert!(CommandAlphabet::default().is_valid(&line));
    }

    #[test]
    fn foreign_character_invalidates(
        prefix in "[FBLR]{0,10}",
        suffix in "[FBLR]{0,10}",
        foreign in any::<char>().prop_filter("outside alphabet", |c| !"FBLR".contains(*c)),
    ) {
        let line = format!("{prefix}{foreign}{suffix}");
        prop_assert!(!CommandAlphabet::default().is_valid(&line));
    }

    #[test]
    fn four_turns_restore_pose(h in heading(), turn in prop::sample::select(vec!["LLLL", "RRRR"])) {
        let start = Pose::new(50.0, 50.0, h);
        let pose = roomy(start).run(turn).unwrap();
        prop_assert_eq!(pose, start);
    }

    #[test]
    fn forward_then_backward_cancels(h in heading(), line in prop::sample::select(vec!["FB", "BF"])) {
        let start = Pose::new(50.0, 50.0, h);
        let pose = roomy(start).run(line).unwrap();
        prop_assert_eq!(pose, start);
    }

    #[test]
    fn execution_is_repeatable(line in "[FBLRX]{1,30}", h in heading()) {
        let interpreter = roomy(Pose::new(50.0, 50.0, h));
        prop_assert_eq!(interpreter.execute(&line), interpreter.execute(&line));
    }
}
