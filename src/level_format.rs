//! Persisted level format.
//!
//! One explicit, versioned schema ([`LevelSnapshot`]) with two total
//! encodings: a binary one (magic + version byte + bincode body) used as the
//! on-disk `.lvl` payload, and a pretty JSON one for inspecting level files
//! by hand. Decode is all-or-nothing.

use serde::{Deserialize, Serialize};

use crate::core::{Entity, EntityKind, GridBounds, Layout, Level, Vec2};
use crate::errors::DecodeError;

pub const LEVEL_MAGIC: [u8; 4] = *b"SKBL";
pub const FORMAT_VERSION: u8 = 1;

const HEADER_LEN: usize = LEVEL_MAGIC.len() + 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum TerrainCell {
    Wall,
    Floor,
    Water,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PlacedPiece {
    pub(crate) pos: Vec2,
    pub(crate) texture: i32,
}

/// Everything a level file holds: grid dimensions, one terrain cell per
/// position (row-major), hole and box placements, and the player position.
/// Move counters are not persisted; a loaded level starts at zero moves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct LevelSnapshot {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) terrain: Vec<TerrainCell>,
    pub(crate) holes: Vec<PlacedPiece>,
    pub(crate) boxes: Vec<PlacedPiece>,
    pub(crate) player: Vec2,
}

pub fn encode(level: &Level) -> Vec<u8> {
    let bytes = encode_snapshot(&snapshot_of(level));
    log::trace!("encoded level into {} bytes", bytes.len());
    bytes
}

pub(crate) fn encode_snapshot(snapshot: &LevelSnapshot) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&LEVEL_MAGIC);
    bytes.push(FORMAT_VERSION);
    bytes.extend(bincode::serialize(snapshot).unwrap());
    bytes
}

pub fn decode(bytes: &[u8]) -> Result<Level, DecodeError> {
    if bytes.len() < LEVEL_MAGIC.len() {
        return Err(DecodeError::Truncated);
    }
    if bytes[..LEVEL_MAGIC.len()] != LEVEL_MAGIC {
        return Err(DecodeError::Malformed("bad magic".into()));
    }
    if bytes.len() < HEADER_LEN {
        return Err(DecodeError::Truncated);
    }
    let version = bytes[LEVEL_MAGIC.len()];
    if version != FORMAT_VERSION {
        return Err(DecodeError::Malformed(format!(
            "unsupported format version {version}"
        )));
    }

    let snapshot: LevelSnapshot =
        bincode::deserialize(&bytes[HEADER_LEN..]).map_err(decode_error_of)?;
    let level = level_of(snapshot)?;
    log::trace!(
        "decoded {}x{} level with {} boxes and {} holes",
        level.layout().bounds().width(),
        level.layout().bounds().height(),
        level.boxes().len(),
        level.holes().len(),
    );
    Ok(level)
}

fn decode_error_of(err: bincode::Error) -> DecodeError {
    match *err {
        bincode::ErrorKind::Io(ref io) if io.kind() == std::io::ErrorKind::UnexpectedEof => {
            DecodeError::Truncated
        }
        ref other => DecodeError::Malformed(other.to_string()),
    }
}

/// The same snapshot as pretty JSON, for inspecting level files by hand.
pub fn to_json(level: &Level) -> String {
    serde_json::to_string_pretty(&snapshot_of(level)).unwrap()
}

pub fn from_json(text: &str) -> Result<Level, DecodeError> {
    let snapshot: LevelSnapshot = serde_json::from_str(text).map_err(|err| {
        if err.is_eof() {
            DecodeError::Truncated
        } else {
            DecodeError::Malformed(err.to_string())
        }
    })?;
    level_of(snapshot)
}

fn snapshot_of(level: &Level) -> LevelSnapshot {
    let bounds = level.layout().bounds();
    let terrain = level
        .layout()
        .iter()
        .map(|cell| match cell.kind {
            EntityKind::Wall => TerrainCell::Wall,
            EntityKind::Decorative => TerrainCell::Water,
            _ => TerrainCell::Floor,
        })
        .collect();

    LevelSnapshot {
        width: bounds.width(),
        height: bounds.height(),
        terrain,
        holes: level.holes().iter().map(piece_of).collect(),
        boxes: level.boxes().iter().map(piece_of).collect(),
        player: level.player().pos,
    }
}

fn piece_of(entity: &Entity) -> PlacedPiece {
    PlacedPiece {
        pos: entity.pos,
        texture: entity.texture,
    }
}

/// Shape validation happens here; game-logic legality (say, a box parked on
/// a wall) is left to move resolution, which treats such cells as blocked.
pub(crate) fn level_of(snapshot: LevelSnapshot) -> Result<Level, DecodeError> {
    if snapshot.width <= 0 || snapshot.height <= 0 {
        return Err(DecodeError::Malformed(format!(
            "grid dimensions {}x{}",
            snapshot.width, snapshot.height
        )));
    }
    let bounds = GridBounds::new(snapshot.width, snapshot.height);
    if snapshot.terrain.len() != bounds.area() as usize {
        return Err(DecodeError::Malformed(format!(
            "terrain holds {} cells for a {}x{} grid",
            snapshot.terrain.len(),
            snapshot.width,
            snapshot.height
        )));
    }
    if !bounds.contains(&snapshot.player) {
        return Err(DecodeError::Malformed(format!(
            "player at {:?} is outside the grid",
            snapshot.player
        )));
    }
    check_pieces(&bounds, &snapshot.holes, "hole")?;
    check_pieces(&bounds, &snapshot.boxes, "box")?;

    let layout = Layout::from_fn(bounds, |pos| {
        let cell = snapshot.terrain[(pos.y * snapshot.width + pos.x) as usize];
        match cell {
            TerrainCell::Wall => Entity::wall(pos),
            TerrainCell::Floor => Entity::floor(pos),
            TerrainCell::Water => Entity::water(pos),
        }
    });
    let holes = snapshot
        .holes
        .iter()
        .map(|piece| Entity::hole_at(piece.pos, piece.texture))
        .collect();
    let boxes = snapshot
        .boxes
        .iter()
        .map(|piece| Entity::box_at(piece.pos, piece.texture))
        .collect();

    Ok(Level::new(
        layout,
        Entity::player(snapshot.player),
        boxes,
        holes,
    ))
}

fn check_pieces(
    bounds: &GridBounds,
    pieces: &[PlacedPiece],
    what: &str,
) -> Result<(), DecodeError> {
    for (index, piece) in pieces.iter().enumerate() {
        if !bounds.contains(&piece.pos) {
            return Err(DecodeError::Malformed(format!(
                "{what} at {:?} is outside the grid",
                piece.pos
            )));
        }
        if pieces[..index].iter().any(|other| other.pos == piece.pos) {
            return Err(DecodeError::Malformed(format!(
                "duplicate {what} at {:?}",
                piece.pos
            )));
        }
    }
    Ok(())
}
