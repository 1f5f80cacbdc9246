use serde::{Deserialize, Serialize};

use crate::core::consts::{TEXTURE_FLOOR, TEXTURE_PLAYER, TEXTURE_WALL, TEXTURE_WATER};
use crate::core::layout::Layout;

/// Grid coordinates of one cell. `x` is the column, `y` is the row, both
/// 0-indexed with the origin in the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub fn new(x: i32, y: i32) -> Vec2 {
        Vec2 { x, y }
    }

    pub fn shifted(self, direction: Direction) -> Vec2 {
        let d = direction.offset();
        Vec2 {
            x: self.x + d.x,
            y: self.y + d.y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset in screen orientation: `Up` decreases `y`.
    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { x: 0, y: -1 },
            Direction::Down => Vec2 { x: 0, y: 1 },
            Direction::Left => Vec2 { x: -1, y: 0 },
            Direction::Right => Vec2 { x: 1, y: 0 },
        }
    }
}

/// Per-cell walkability classification, fixed at level-load time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terrain {
    Wall,
    Floor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Box,
    Wall,
    Floor,
    Hole,
    Decorative,
}

/// One occupant or terrain cell: a kind, a position, and an index into the
/// host's texture table. Terrain positions never change; player and box
/// positions do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Entity {
    pub kind: EntityKind,
    pub pos: Vec2,
    pub texture: i32,
}

impl Entity {
    pub fn new(kind: EntityKind, pos: Vec2, texture: i32) -> Entity {
        Entity { kind, pos, texture }
    }

    pub fn player(pos: Vec2) -> Entity {
        Entity::new(EntityKind::Player, pos, TEXTURE_PLAYER)
    }

    pub fn wall(pos: Vec2) -> Entity {
        Entity::new(EntityKind::Wall, pos, TEXTURE_WALL)
    }

    pub fn floor(pos: Vec2) -> Entity {
        Entity::new(EntityKind::Floor, pos, TEXTURE_FLOOR)
    }

    pub fn water(pos: Vec2) -> Entity {
        Entity::new(EntityKind::Decorative, pos, TEXTURE_WATER)
    }

    pub fn box_at(pos: Vec2, texture: i32) -> Entity {
        Entity::new(EntityKind::Box, pos, texture)
    }

    pub fn hole_at(pos: Vec2, texture: i32) -> Entity {
        Entity::new(EntityKind::Hole, pos, texture)
    }

    /// Decorative tiles are walkable; only walls block.
    pub fn terrain(&self) -> Terrain {
        match self.kind {
            EntityKind::Wall => Terrain::Wall,
            _ => Terrain::Floor,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    PlayerMove,
    PlayerAndBoxMove,
}

/// Every directional input resolves to one of these. A blocked attempt is a
/// normal outcome, not an error: the level is left untouched and no counter
/// changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    Moved(MoveKind),
    Blocked,
}

/// A playable level: static terrain plus the player, boxes, holes, and move
/// counters. Mutated exclusively through the four directional operations;
/// everything else on it is a read-only query.
#[derive(Clone, Debug)]
pub struct Level {
    pub(crate) layout: Layout,
    pub(crate) player: Entity,
    pub(crate) boxes: Vec<Entity>,
    pub(crate) holes: Vec<Entity>,
    pub(crate) correct_moves: u32,
    pub(crate) incorrect_moves: u32,
    pub(crate) total_moves: u32,
}

impl Level {
    pub fn new(layout: Layout, player: Entity, boxes: Vec<Entity>, holes: Vec<Entity>) -> Level {
        Level {
            layout,
            player,
            boxes,
            holes,
            correct_moves: 0,
            incorrect_moves: 0,
            total_moves: 0,
        }
    }
}
