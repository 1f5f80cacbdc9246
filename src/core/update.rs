use crate::core::models::{Direction, Level, MoveKind, MoveOutcome};

impl Level {
    pub fn go_up(&mut self) {
        step(self, Direction::Up);
    }

    pub fn go_down(&mut self) {
        step(self, Direction::Down);
    }

    pub fn go_left(&mut self) {
        step(self, Direction::Left);
    }

    pub fn go_right(&mut self) {
        step(self, Direction::Right);
    }
}

/// Resolve one directional input against the current level state.
///
/// A completed move counts as correct when it nets an increase in filled
/// holes; every other completed move is incorrect. Blocked attempts leave
/// the level and all counters untouched.
pub fn step(level: &mut Level, direction: Direction) -> MoveOutcome {
    let target = level.player.pos.shifted(direction);
    if !level.layout.contains(&target) {
        // A well-formed level is fully walled in, so this only trips on
        // hand-built or corrupt layouts.
        log::warn!("move {:?} from {:?} leaves the grid", direction, level.player.pos);
        return MoveOutcome::Blocked;
    }
    if !level.layout.is_open(&target) {
        return MoveOutcome::Blocked;
    }

    let kind = match level.box_index_at(&target) {
        Some(box_index) => {
            let beyond = target.shifted(direction);
            if !level.layout.is_open(&beyond) || level.has_box_at(&beyond) {
                return MoveOutcome::Blocked;
            }
            let filled_before = level.number_of_filled_holes();
            level.boxes[box_index].pos = beyond;
            level.player.pos = target;
            level.record_move(level.number_of_filled_holes() > filled_before);
            MoveKind::PlayerAndBoxMove
        }
        None => {
            // Plain moves never change fill state, so they always land in
            // the incorrect column.
            level.player.pos = target;
            level.record_move(false);
            MoveKind::PlayerMove
        }
    };

    MoveOutcome::Moved(kind)
}
