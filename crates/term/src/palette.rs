//! Display colors for tile color ids.

use crate::fb::Rgb;
use crate::types::{ColorId, MAX_COLORS};

const TILE_COLORS: [Rgb; MAX_COLORS as usize] = [
    Rgb::new(220, 80, 80),   // red
    Rgb::new(80, 120, 220),  // blue
    Rgb::new(100, 200, 110), // green
    Rgb::new(240, 210, 80),  // yellow
    Rgb::new(190, 110, 220), // purple
    Rgb::new(80, 210, 210),  // cyan
    Rgb::new(250, 150, 60),  // orange
    Rgb::new(200, 200, 200), // grey
];

/// Display color for a tile. Ids past the palette wrap around.
pub fn tile_color(color: ColorId) -> Rgb {
    TILE_COLORS[color.index() % TILE_COLORS.len()]
}
