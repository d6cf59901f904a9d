use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tilewalk_engine::{MotionConfig, Vec2};

pub(crate) const CONFIG_FILE_NAME: &str = "game.json";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config '{path}' at {field}: {source}")]
    Parse {
        path: PathBuf,
        field: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct WindowSettings {
    pub(crate) title: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Tilewalk".to_string(),
            width: 2 * 640,
            height: 2 * 480,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Point {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl Default for Point {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl From<Point> for Vec2 {
    fn from(point: Point) -> Self {
        Vec2::new(point.x, point.y)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct GameConfig {
    pub(crate) window: WindowSettings,
    pub(crate) logical_width: u32,
    pub(crate) logical_height: u32,
    pub(crate) tile_width: u32,
    pub(crate) tile_height: u32,
    pub(crate) tileset_columns: u32,
    pub(crate) level_file: String,
    pub(crate) level_name: String,
    pub(crate) tileset_texture: String,
    pub(crate) character_texture: String,
    pub(crate) font_texture: String,
    /// Top-left pixel of the HUD line, in logical pixels.
    pub(crate) hud_origin: Point,
    pub(crate) player_spawn: Point,
    /// Idle creatures placed alongside the player.
    pub(crate) npc_spawns: Vec<Point>,
    pub(crate) motion: MotionConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            logical_width: 256,
            logical_height: 200,
            tile_width: 16,
            tile_height: 16,
            tileset_columns: 7,
            level_file: "test1.lvl".to_string(),
            level_name: "Coders Town".to_string(),
            tileset_texture: "zoria_msx".to_string(),
            character_texture: "pheasant".to_string(),
            font_texture: "font".to_string(),
            hud_origin: Point { x: 30.0, y: 30.0 },
            player_spawn: Point { x: 3.0, y: 3.0 },
            npc_spawns: Vec::new(),
            motion: MotionConfig::default(),
        }
    }
}

impl GameConfig {
    pub(crate) fn texture_names(&self) -> [&str; 3] {
        [
            self.tileset_texture.as_str(),
            self.character_texture.as_str(),
            self.font_texture.as_str(),
        ]
    }
}

/// Reads `<config_dir>/game.json`, falling back to defaults when the file is
/// absent. A file that exists but fails to parse is an error.
pub(crate) fn load_game_config(config_dir: &Path) -> Result<GameConfig, ConfigError> {
    let path = config_dir.join(CONFIG_FILE_NAME);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Ok(GameConfig::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };
    parse_game_config(&raw).map_err(|(field, source)| ConfigError::Parse {
        path,
        field,
        source,
    })
}

fn parse_game_config(raw: &str) -> Result<GameConfig, (String, serde_json::Error)> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    serde_path_to_error::deserialize::<_, GameConfig>(&mut deserializer).map_err(|error| {
        let field = error.path().to_string();
        (field, error.into_inner())
    })
}
