//! ASCII level notation, used for authoring demo levels and by the test
//! harness. Tiles: '#' wall, '~' water, '@' player, '$' box, '.' hole,
//! '*' box on hole, '+' player on hole, ' ' floor.

use crate::core::{
    Entity, EntityKind, GridBounds, Layout, Level, TEXTURE_SQUARE, TEXTURE_SQUARE_HOLE, Terrain,
    Vec2,
};

pub fn parse_level(s: &str) -> Level {
    let max_width = s.lines().map(|line| line.chars().count()).max().unwrap_or(0);

    let mut cells: Vec<Entity> = Vec::new();
    let mut player = Vec2::new(0, 0);
    let mut boxes: Vec<Entity> = Vec::new();
    let mut holes: Vec<Entity> = Vec::new();

    let mut y = 0;
    for line in s.lines() {
        if line.is_empty() {
            continue;
        }

        let mut width = 0;
        for (x, ch) in line.chars().enumerate() {
            let pos = Vec2::new(x as i32, y);
            let cell = match ch {
                '#' => Entity::wall(pos),
                '~' => Entity::water(pos),
                '.' => {
                    holes.push(Entity::hole_at(pos, TEXTURE_SQUARE_HOLE));
                    Entity::floor(pos)
                }
                '$' => {
                    boxes.push(Entity::box_at(pos, TEXTURE_SQUARE));
                    Entity::floor(pos)
                }
                '*' => {
                    boxes.push(Entity::box_at(pos, TEXTURE_SQUARE));
                    holes.push(Entity::hole_at(pos, TEXTURE_SQUARE_HOLE));
                    Entity::floor(pos)
                }
                '@' => {
                    player = pos;
                    Entity::floor(pos)
                }
                '+' => {
                    player = pos;
                    holes.push(Entity::hole_at(pos, TEXTURE_SQUARE_HOLE));
                    Entity::floor(pos)
                }
                _ => Entity::floor(pos),
            };
            cells.push(cell);
            width += 1;
        }
        // Pad short rows to the widest line with floor
        for x in width..max_width {
            cells.push(Entity::floor(Vec2::new(x as i32, y)));
        }
        y += 1;
    }

    let bounds = GridBounds::new(max_width as i32, y);
    Level::new(
        Layout::new(bounds, cells),
        Entity::player(player),
        boxes,
        holes,
    )
}

pub fn render_to_string(level: &Level) -> String {
    let bounds = level.layout().bounds();
    let mut result = String::new();
    for y in 0..bounds.height() {
        for x in 0..bounds.width() {
            let pos = Vec2::new(x, y);
            let has_hole = level.has_hole_at(&pos);
            let ch = if level.layout().terrain(&pos) == Terrain::Wall {
                '#'
            } else if level.player().pos == pos {
                if has_hole { '+' } else { '@' }
            } else if level.has_box_at(&pos) {
                if has_hole { '*' } else { '$' }
            } else if has_hole {
                '.'
            } else if level.layout()[&pos].kind == EntityKind::Decorative {
                '~'
            } else {
                ' '
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}
