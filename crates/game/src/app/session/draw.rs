impl Session {
    /// Tiles over the viewport plus one tile of padding on every side, shifted
    /// by the camera's sub-tile offset.
    fn draw_tiles(&mut self, surface: &mut dyn RenderSurface, assets: &AssetStore) {
        let Some(tileset) = lookup_texture(
            assets,
            &self.render.tileset_texture,
            &mut self.missing_textures,
        ) else {
            return;
        };
        let tile_width = self.render.tile_width;
        let tile_height = self.render.tile_height;
        let (offset_x, offset_y) = self.camera.sub_tile_offset_px(tile_width, tile_height);

        for tile in self.camera.visible_tiles() {
            let cell = self
                .render
                .tile_cell(self.grid.get_index(tile.grid_x, tile.grid_y));
            surface.draw(
                tileset,
                SourceRect::cell(cell.column, cell.row, tile_width, tile_height),
                DestTransform::at(
                    f64::from(tile.screen_x) * f64::from(tile_width) - offset_x,
                    f64::from(tile.screen_y) * f64::from(tile_height) - offset_y,
                ),
            );
        }
    }

    fn draw_actors(&mut self, surface: &mut dyn RenderSurface, assets: &AssetStore) {
        let tile_width = self.render.tile_width;
        let tile_height = self.render.tile_height;
        for actor in self.actors.iter() {
            let Some(sheet) = lookup_texture(assets, &actor.sprite, &mut self.missing_textures)
            else {
                continue;
            };
            let cell = actor
                .creature()
                .map(|creature| creature.animator.sprite_cell())
                .unwrap_or(SpriteCell { column: 0, row: 0 });
            let (x, y) = self
                .camera
                .world_to_screen_px(actor.body.position, tile_width, tile_height);
            surface.draw(
                sheet,
                SourceRect::cell(cell.column, cell.row, tile_width, tile_height),
                DestTransform::at(x, y),
            );
        }
    }
}

/// Resolves a texture for drawing. A missing texture is reported once per name
/// and then skipped silently on later frames.
fn lookup_texture<'a>(
    assets: &'a AssetStore,
    name: &str,
    missing: &mut HashSet<String>,
) -> Option<&'a Texture> {
    match assets.get_asset(name) {
        Ok(texture) => Some(texture),
        Err(error) => {
            if missing.insert(name.to_string()) {
                warn!(error = %error, "draw_texture_missing");
            }
            None
        }
    }
}

/// Font sheet cell for a byte, or `None` outside printable ASCII.
fn glyph_cell(byte: u8) -> Option<SpriteCell> {
    if !(FONT_FIRST_CHAR..=FONT_LAST_CHAR).contains(&byte) {
        return None;
    }
    let glyph = u32::from(byte - FONT_FIRST_CHAR);
    Some(SpriteCell {
        column: glyph % FONT_GLYPHS_PER_ROW,
        row: glyph / FONT_GLYPHS_PER_ROW,
    })
}

/// Draws `text` left to right on one line with the fixed-width bitmap font.
/// Characters without a glyph still advance the cursor.
fn draw_text(surface: &mut dyn RenderSurface, font: &Texture, text: &str, x: f64, y: f64) {
    for (position, byte) in text.bytes().enumerate() {
        let Some(cell) = glyph_cell(byte) else {
            continue;
        };
        let advance = position as f64 * f64::from(FONT_GLYPH_WIDTH);
        surface.draw(
            font,
            SourceRect::cell(cell.column, cell.row, FONT_GLYPH_WIDTH, FONT_GLYPH_HEIGHT),
            DestTransform::at(x + advance, y),
        );
    }
}
