// Sokoban puzzle engine: level model, move resolution, and render projection.
// The windowing/input shell lives in the host; it drives this crate through
// the four directional operations and reads the projection layers back.
// Tiles: '#' wall, '@' player, '$' box, '.' hole, '*' box on hole,
// '+' player on hole, '~' water, ' ' floor.

pub mod core;
pub mod errors;
pub mod level_format;
pub mod projection;
pub mod text_format;

#[cfg(test)]
mod test;
