/// Sizes and texture names the session draws with.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RenderSettings {
    logical_width: u32,
    logical_height: u32,
    tile_width: u32,
    tile_height: u32,
    tileset_columns: u32,
    tileset_texture: String,
    font_texture: String,
    hud_origin: Vec2,
}

impl RenderSettings {
    fn from_config(config: &GameConfig) -> Self {
        Self {
            logical_width: config.logical_width.max(1),
            logical_height: config.logical_height.max(1),
            tile_width: config.tile_width.max(1),
            tile_height: config.tile_height.max(1),
            tileset_columns: config.tileset_columns.max(1),
            tileset_texture: config.tileset_texture.clone(),
            font_texture: config.font_texture.clone(),
            hud_origin: config.hud_origin.into(),
        }
    }

    fn tile_extent(&self) -> TileExtent {
        TileExtent::fitting(
            self.logical_width,
            self.logical_height,
            self.tile_width,
            self.tile_height,
        )
    }

    /// Tileset cell for a tile index, laid out row-major.
    fn tile_cell(&self, index: u32) -> SpriteCell {
        SpriteCell {
            column: index % self.tileset_columns,
            row: index / self.tileset_columns,
        }
    }
}

/// One running level: the map, its actors and the camera following the player.
pub(crate) struct Session {
    grid: TileGrid,
    level_name: String,
    window_title: String,
    actors: ActorSet,
    player_id: ActorId,
    camera: CameraViewport,
    motion: MotionConfig,
    render: RenderSettings,
    ticks: u64,
    missing_textures: HashSet<String>,
}

impl Session {
    pub(crate) fn new(config: &GameConfig, grid: TileGrid) -> Self {
        let render = RenderSettings::from_config(config);
        let mut actors = ActorSet::default();
        let player_id = actors.spawn(
            Body::new(PLAYER_NAME).at(config.player_spawn.into()),
            ActorKind::Creature(Creature::default()),
            config.character_texture.clone(),
        );
        for (index, spawn) in config.npc_spawns.iter().enumerate() {
            actors.spawn(
                Body::new(format!("npc_{index}")).at((*spawn).into()),
                ActorKind::Creature(Creature::default()),
                config.character_texture.clone(),
            );
        }

        let camera = CameraViewport::follow(
            config.player_spawn.into(),
            grid.width(),
            grid.height(),
            render.tile_extent(),
        );

        Self {
            grid,
            level_name: config.level_name.clone(),
            window_title: config.window.title.clone(),
            actors,
            player_id,
            camera,
            motion: config.motion,
            render,
            ticks: 0,
            missing_textures: HashSet::new(),
        }
    }

    fn player_position(&self) -> Vec2 {
        self.actors
            .get(self.player_id)
            .map(|player| player.body.position)
            .unwrap_or(Vec2::ZERO)
    }

    /// One fixed tick. The player follows `intent`; every other actor coasts.
    fn step(&mut self, intent: MoveIntent) {
        for actor in self.actors.iter_mut() {
            let actor_intent = if actor.id == self.player_id {
                intent
            } else {
                MoveIntent::IDLE
            };
            let contact = integrate(&mut actor.body, actor_intent, &self.grid, &self.motion);
            if contact.x || contact.y {
                trace!(
                    actor = actor.body.name(),
                    contact_x = contact.x,
                    contact_y = contact.y,
                    "map_contact"
                );
            }

            let velocity = actor.body.velocity;
            if let Some(creature) = actor.creature_mut() {
                let health = creature.health();
                creature.animator.update(velocity, health);
            }
        }

        self.camera = CameraViewport::follow(
            self.player_position(),
            self.grid.width(),
            self.grid.height(),
            self.render.tile_extent(),
        );
        self.ticks = self.ticks.saturating_add(1);
    }
}
