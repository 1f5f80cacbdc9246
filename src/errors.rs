use thiserror::Error;

use crate::core::{GridBounds, Vec2};

/// Decode failures from `level_format`. Decode is all-or-nothing: a failed
/// decode never hands back a partially-populated level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Structurally invalid input: wrong magic, unsupported version, or a
    /// shape violation in the snapshot body.
    #[error("malformed level data: {0}")]
    Malformed(String),

    /// The stream ended before the snapshot was complete.
    #[error("truncated level data")]
    Truncated,
}

/// Defensive error for positional queries outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("position {pos:?} is outside the grid bounds {bounds:?}")]
pub struct OutOfRangeQuery {
    pub pos: Vec2,
    pub bounds: GridBounds,
}
