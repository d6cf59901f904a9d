use super::actor::Vec2;

/// Tiles drawn beyond each edge of the viewport. Renderers must cover this
/// padding or sub-tile scrolling exposes gaps at the screen border.
pub const VIEWPORT_PADDING_TILES: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileExtent {
    pub width: u32,
    pub height: u32,
}

impl TileExtent {
    /// Whole tiles fitting in a logical screen.
    pub fn fitting(
        screen_width: u32,
        screen_height: u32,
        tile_width: u32,
        tile_height: u32,
    ) -> Self {
        Self {
            width: screen_width / tile_width.max(1),
            height: screen_height / tile_height.max(1),
        }
    }
}

/// Visible window into the tile grid, recomputed every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraViewport {
    /// Top-left visible tile coordinate, possibly fractional.
    pub offset: Vec2,
    pub extent: TileExtent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleTile {
    /// Column and row relative to the viewport, `-1` for the leading padding.
    pub screen_x: i32,
    pub screen_y: i32,
    pub grid_x: i32,
    pub grid_y: i32,
}

impl CameraViewport {
    /// Centers on `focus`, clamped so the window never leaves the grid.
    /// Grids smaller than the extent pin to the top-left corner.
    pub fn follow(focus: Vec2, grid_width: u32, grid_height: u32, extent: TileExtent) -> Self {
        Self {
            offset: Vec2 {
                x: clamp_axis(focus.x, grid_width, extent.width),
                y: clamp_axis(focus.y, grid_height, extent.height),
            },
            extent,
        }
    }

    /// Fractional part of the offset in pixels, for smooth scrolling.
    pub fn sub_tile_offset_px(&self, tile_width: u32, tile_height: u32) -> (f64, f64) {
        (
            (self.offset.x - self.offset.x.floor()) * f64::from(tile_width),
            (self.offset.y - self.offset.y.floor()) * f64::from(tile_height),
        )
    }

    /// Screen position in pixels of a world position given in tiles.
    pub fn world_to_screen_px(&self, world: Vec2, tile_width: u32, tile_height: u32) -> (f64, f64) {
        (
            (world.x - self.offset.x) * f64::from(tile_width),
            (world.y - self.offset.y) * f64::from(tile_height),
        )
    }

    /// Every tile to draw, padding included, row by row.
    pub fn visible_tiles(&self) -> impl Iterator<Item = VisibleTile> {
        let base_x = self.offset.x.floor() as i32;
        let base_y = self.offset.y.floor() as i32;
        let columns = -VIEWPORT_PADDING_TILES..self.extent.width as i32 + VIEWPORT_PADDING_TILES;
        let rows = -VIEWPORT_PADDING_TILES..self.extent.height as i32 + VIEWPORT_PADDING_TILES;
        rows.flat_map(move |screen_y| {
            columns.clone().map(move |screen_x| VisibleTile {
                screen_x,
                screen_y,
                grid_x: base_x + screen_x,
                grid_y: base_y + screen_y,
            })
        })
    }
}

fn clamp_axis(focus: f64, grid_tiles: u32, visible_tiles: u32) -> f64 {
    let max_offset = (f64::from(grid_tiles) - f64::from(visible_tiles)).max(0.0);
    let centered = focus - f64::from(visible_tiles) / 2.0;
    if centered.is_nan() {
        return 0.0;
    }
    centered.clamp(0.0, max_offset)
}
