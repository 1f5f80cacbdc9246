pub use dissimilar::diff as __diff;

use crate::core::{Direction, Level, MoveOutcome, Terrain, step};
use crate::text_format::{parse_level, render_to_string};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

pub struct LevelTestState {
    pub level: Level,
}

impl LevelTestState {
    pub fn new(text: &str) -> Self {
        Self {
            level: parse_level(text),
        }
    }

    pub fn level_to_string(&self) -> String {
        render_to_string(&self.level).trim_matches('\n').into()
    }

    pub fn assert_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = step(&mut self.level, direction);
        assert_ne!(
            outcome,
            MoveOutcome::Blocked,
            "Expected {:?} to complete, in map\n{}",
            direction,
            self.level_to_string()
        );
        outcome
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &direction in directions {
            self.assert_move(direction);
        }
    }

    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        step(&mut self.level, direction)
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.level_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }
}

/// The occupancy/fill invariants every directional operation must preserve.
pub fn assert_invariants(level: &Level) {
    assert_eq!(
        level.total_moves(),
        level.correct_moves() + level.incorrect_moves(),
        "move counters out of balance"
    );

    let overlap = level
        .holes()
        .iter()
        .filter(|hole| level.boxes().iter().any(|b| b.pos == hole.pos))
        .count();
    assert_eq!(
        level.number_of_filled_holes(),
        overlap,
        "filled-hole count disagrees with box/hole overlap"
    );
    assert_eq!(
        level.is_solved(),
        overlap == level.number_of_holes(),
        "solved flag disagrees with filled-hole count"
    );

    let player = level.player().pos;
    assert_eq!(
        level.layout().terrain(&player),
        Terrain::Floor,
        "player standing on a wall at {:?}",
        player
    );
    for (index, piece) in level.boxes().iter().enumerate() {
        assert_eq!(
            level.layout().terrain(&piece.pos),
            Terrain::Floor,
            "box standing on a wall at {:?}",
            piece.pos
        );
        assert_ne!(piece.pos, player, "box and player share {:?}", piece.pos);
        assert!(
            !level.boxes()[..index].iter().any(|other| other.pos == piece.pos),
            "two boxes share {:?}",
            piece.pos
        );
    }
}
