use rand::Rng;

use crate::core::{Direction, MoveKind, MoveOutcome};
use crate::test::test_util::{LevelTestState, assert_invariants};

// Partially unwalled on purpose so the walks also exercise the grid-edge
// safety net.
const WALK_LEVEL: &str = r#"
 ### ###
#   #  .#
#   # . #
##$     #
 # $.* #
  # $##
   #@#
    #
"#;

#[test]
fn random_walks_preserve_invariants() {
    let mut rng = rand::rng();

    for _ in 0..20 {
        let mut game = LevelTestState::new(WALK_LEVEL);
        assert_invariants(&game.level);

        for _ in 0..200 {
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            let before = game.level_to_string();
            let total_before = game.level.total_moves();

            let outcome = game.try_move(direction);

            assert_invariants(&game.level);
            match outcome {
                MoveOutcome::Blocked => {
                    // A blocked attempt is a true no-op.
                    assert_eq!(game.level_to_string(), before);
                    assert_eq!(game.level.total_moves(), total_before);
                }
                MoveOutcome::Moved(_) => {
                    assert_eq!(game.level.total_moves(), total_before + 1);
                }
            }
        }
    }
}

#[test]
fn plain_moves_never_touch_boxes() {
    let mut rng = rand::rng();
    let mut game = LevelTestState::new(WALK_LEVEL);

    for _ in 0..200 {
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        let boxes_before: Vec<_> = game.level.boxes().iter().map(|b| b.pos).collect();
        let filled_before = game.level.number_of_filled_holes();

        let outcome = game.try_move(direction);

        if !matches!(outcome, MoveOutcome::Moved(MoveKind::PlayerAndBoxMove)) {
            let boxes_after: Vec<_> = game.level.boxes().iter().map(|b| b.pos).collect();
            assert_eq!(boxes_after, boxes_before);
            assert_eq!(game.level.number_of_filled_holes(), filled_before);
        }
    }
}
