impl Scene for Session {
    fn load(&mut self, _assets: &AssetStore) {
        info!(
            level = %self.level_name,
            grid_width = self.grid.width(),
            grid_height = self.grid.height(),
            actor_count = self.actors.len(),
            "session_started"
        );
    }

    fn update(&mut self, input: &InputSnapshot) -> SceneCommand {
        if input.quit_requested() {
            return SceneCommand::Quit;
        }
        self.step(input.move_intent());
        SceneCommand::None
    }

    fn draw(&mut self, surface: &mut dyn RenderSurface, assets: &AssetStore) {
        surface.fill(SKY_COLOR);
        self.draw_tiles(surface, assets);
        self.draw_actors(surface, assets);
        let hud_origin = self.render.hud_origin;
        if let Some(font) = lookup_texture(
            assets,
            &self.render.font_texture,
            &mut self.missing_textures,
        ) {
            draw_text(surface, font, &self.level_name, hud_origin.x, hud_origin.y);
        }
    }

    fn layout(&self, _outer_width: u32, _outer_height: u32) -> (u32, u32) {
        (self.render.logical_width, self.render.logical_height)
    }

    fn unload(&mut self) {
        info!(level = %self.level_name, ticks = self.ticks, "session_ended");
    }

    fn debug_title(&self) -> Option<String> {
        let position = self.player_position();
        Some(format!(
            "{} | {} | tile ({}, {})",
            self.window_title,
            self.level_name,
            position.x.floor() as i64,
            position.y.floor() as i64
        ))
    }

    fn actor_count(&self) -> usize {
        self.actors.len()
    }
}
