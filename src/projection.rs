//! Read-only projection of level state into the layered texture grids a
//! display collaborator consumes. Three `height x width` matrices of texture
//! indices, rebuilt from scratch on every call so they can never go stale.

use crate::core::{Level, TEXTURE_NONE, marked_texture};

/// Terrain textures per cell: walls, floor, decorative tiles.
pub fn background_layer(level: &Level) -> Vec<Vec<i32>> {
    let mut layer = empty_layer(level);
    for cell in level.layout().iter() {
        layer[cell.pos.y as usize][cell.pos.x as usize] = cell.texture;
    }
    layer
}

/// Hole textures at hole positions, `TEXTURE_NONE` elsewhere.
pub fn static_overlay(level: &Level) -> Vec<Vec<i32>> {
    let mut layer = empty_layer(level);
    for hole in level.holes() {
        layer[hole.pos.y as usize][hole.pos.x as usize] = hole.texture;
    }
    layer
}

/// Player and box textures at occupant positions, `TEXTURE_NONE` elsewhere.
/// A box resting on a hole renders its marked texture variant.
pub fn dynamic_overlay(level: &Level) -> Vec<Vec<i32>> {
    let mut layer = empty_layer(level);

    let player = level.player();
    layer[player.pos.y as usize][player.pos.x as usize] = player.texture;

    for piece in level.boxes() {
        let texture = if level.has_hole_at(&piece.pos) {
            marked_texture(piece.texture)
        } else {
            piece.texture
        };
        layer[piece.pos.y as usize][piece.pos.x as usize] = texture;
    }

    layer
}

fn empty_layer(level: &Level) -> Vec<Vec<i32>> {
    let bounds = level.layout().bounds();
    vec![vec![TEXTURE_NONE; bounds.width() as usize]; bounds.height() as usize]
}

/// Scalar readouts for the host's status bars. Elapsed time is owned by the
/// host session and deliberately absent here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Readout {
    pub holes: usize,
    pub filled_holes: usize,
    pub correct_moves: u32,
    pub incorrect_moves: u32,
    pub total_moves: u32,
    pub solved: bool,
}

pub fn readout(level: &Level) -> Readout {
    Readout {
        holes: level.number_of_holes(),
        filled_holes: level.number_of_filled_holes(),
        correct_moves: level.correct_moves(),
        incorrect_moves: level.incorrect_moves(),
        total_moves: level.total_moves(),
        solved: level.is_solved(),
    }
}
