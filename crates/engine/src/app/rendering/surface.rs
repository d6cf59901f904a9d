use crate::assets::Texture;

/// Region of a texture in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SourceRect {
    /// Cell `(column, row)` of a sheet laid out in a uniform grid.
    pub fn cell(column: u32, row: u32, cell_width: u32, cell_height: u32) -> Self {
        Self {
            x: column.saturating_mul(cell_width),
            y: row.saturating_mul(cell_height),
            width: cell_width,
            height: cell_height,
        }
    }

    pub fn whole(texture: &Texture) -> Self {
        Self {
            x: 0,
            y: 0,
            width: texture.width(),
            height: texture.height(),
        }
    }
}

/// Placement of a blit in logical pixels. Fractional positions round to the
/// nearest pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DestTransform {
    pub x: f64,
    pub y: f64,
}

impl DestTransform {
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub trait RenderSurface {
    fn fill(&mut self, color: [u8; 4]);
    fn draw(&mut self, texture: &Texture, source: SourceRect, dest: DestTransform);
}

/// `RenderSurface` over a borrowed RGBA8 frame.
pub struct FrameSurface<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> FrameSurface<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let bytes = self.frame.get(offset..offset + 4)?;
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}

impl RenderSurface for FrameSurface<'_> {
    fn fill(&mut self, color: [u8; 4]) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&color);
        }
    }

    fn draw(&mut self, texture: &Texture, source: SourceRect, dest: DestTransform) {
        if self.width == 0 || self.height == 0 || !dest.x.is_finite() || !dest.y.is_finite() {
            return;
        }
        let left = dest.x.round() as i64;
        let top = dest.y.round() as i64;

        for row in 0..source.height {
            let out_y = top + i64::from(row);
            if out_y < 0 || out_y >= i64::from(self.height) {
                continue;
            }
            for column in 0..source.width {
                let out_x = left + i64::from(column);
                if out_x < 0 || out_x >= i64::from(self.width) {
                    continue;
                }
                let Some(color) = texture.pixel(
                    source.x.saturating_add(column),
                    source.y.saturating_add(row),
                ) else {
                    continue;
                };
                if color[3] == 0 {
                    continue;
                }
                write_pixel_rgba_clipped(
                    self.frame,
                    self.width as usize,
                    out_x as i32,
                    out_y as i32,
                    color,
                );
            }
        }
    }
}

fn write_pixel_rgba_clipped(frame: &mut [u8], width: usize, x: i32, y: i32, color: [u8; 4]) {
    if x < 0 || y < 0 {
        return;
    }
    let Some(pixel_offset) = (y as usize)
        .checked_mul(width)
        .and_then(|row| row.checked_add(x as usize))
    else {
        return;
    };
    let Some(byte_offset) = pixel_offset.checked_mul(4) else {
        return;
    };
    if let Some(pixel) = frame.get_mut(byte_offset..byte_offset + 4) {
        pixel.copy_from_slice(&color);
    }
}
