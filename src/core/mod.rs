mod bounds;
mod consts;
mod layout;
mod model_helpers;
mod models;
mod update;

pub use bounds::GridBounds;
pub use consts::*;
pub use layout::Layout;
pub use models::{Direction, Entity, EntityKind, Level, MoveKind, MoveOutcome, Terrain, Vec2};
pub use update::step;
