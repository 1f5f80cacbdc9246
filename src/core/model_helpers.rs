use crate::core::layout::Layout;
use crate::core::models::{Entity, Level, Vec2};

impl Level {
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn boxes(&self) -> &[Entity] {
        &self.boxes
    }

    pub fn holes(&self) -> &[Entity] {
        &self.holes
    }

    pub fn number_of_holes(&self) -> usize {
        self.holes.len()
    }

    pub fn number_of_filled_holes(&self) -> usize {
        self.holes
            .iter()
            .filter(|hole| self.has_box_at(&hole.pos))
            .count()
    }

    pub fn is_solved(&self) -> bool {
        self.number_of_filled_holes() == self.holes.len()
    }

    pub fn has_box_at(&self, pos: &Vec2) -> bool {
        self.boxes.iter().any(|b| b.pos == *pos)
    }

    pub(crate) fn box_index_at(&self, pos: &Vec2) -> Option<usize> {
        self.boxes.iter().position(|b| b.pos == *pos)
    }

    pub fn has_hole_at(&self, pos: &Vec2) -> bool {
        self.holes.iter().any(|h| h.pos == *pos)
    }

    /// Fill state is derived from box occupancy, never stored, so it cannot
    /// drift from the box list.
    pub fn is_hole_filled(&self, hole: &Entity) -> bool {
        self.has_box_at(&hole.pos)
    }

    pub fn correct_moves(&self) -> u32 {
        self.correct_moves
    }

    pub fn incorrect_moves(&self) -> u32 {
        self.incorrect_moves
    }

    pub fn total_moves(&self) -> u32 {
        self.total_moves
    }

    pub(crate) fn record_move(&mut self, correct: bool) {
        self.total_moves += 1;
        if correct {
            self.correct_moves += 1;
        } else {
            self.incorrect_moves += 1;
        }
    }
}
