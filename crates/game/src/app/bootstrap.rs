use thiserror::Error;
use tilewalk_engine::{
    load_tile_grid, resolve_app_paths, AppPaths, AssetLoadError, AssetStore, LoopConfig,
    MapLoadError, Scene, StartupError,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::config::{load_game_config, ConfigError, GameConfig};
use super::session::Session;

#[derive(Debug, Error)]
pub(crate) enum BootstrapError {
    #[error(transparent)]
    Startup(#[from] StartupError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Map(#[from] MapLoadError),
    #[error(transparent)]
    Assets(#[from] AssetLoadError),
}

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene: Box<dyn Scene>,
    pub(crate) assets: AssetStore,
}

pub(crate) fn build_app() -> Result<AppWiring, BootstrapError> {
    init_tracing();
    info!("=== Tilewalk Startup ===");

    let paths = resolve_app_paths()?;
    info!(root = %paths.root.display(), "project_root_resolved");
    wire_from_paths(&paths)
}

/// Loads configuration, the level map and every texture the session draws.
/// Any failure is fatal; nothing is substituted.
fn wire_from_paths(paths: &AppPaths) -> Result<AppWiring, BootstrapError> {
    let game_config = load_game_config(&paths.config_dir)?;
    info!(
        config_dir = %paths.config_dir.display(),
        level = %game_config.level_name,
        "game_config_loaded"
    );

    let grid = load_tile_grid(&paths.levels_dir.join(&game_config.level_file))?;
    let assets = AssetStore::load(&paths.textures_dir, game_config.texture_names())?;
    let config = loop_config(&game_config);
    let scene: Box<dyn Scene> = Box::new(Session::new(&game_config, grid));

    Ok(AppWiring {
        config,
        scene,
        assets,
    })
}

fn loop_config(game_config: &GameConfig) -> LoopConfig {
    LoopConfig {
        window_title: game_config.window.title.clone(),
        window_width: game_config.window.width,
        window_height: game_config.window.height,
        ..LoopConfig::default()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    // 1x1 opaque white RGBA PNG
    const TINY_PNG: &[u8] = &[
        0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
        0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0b, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0xf8,
        0x0f, 0x04, 0x00, 0x09, 0xfb, 0x03, 0xfd, 0xfb, 0x5e, 0x6b, 0x2b, 0x00, 0x00, 0x00, 0x00,
        0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
    ];

    fn project(with_textures: bool) -> (tempfile::TempDir, AppPaths) {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = AppPaths::from_root(dir.path().to_path_buf());
        fs::create_dir_all(&paths.levels_dir).expect("levels dir");
        fs::create_dir_all(&paths.textures_dir).expect("textures dir");
        fs::write(paths.levels_dir.join("test1.lvl"), "2 1\n0 0 1 1\n").expect("level");
        if with_textures {
            for name in GameConfig::default().texture_names() {
                fs::write(paths.textures_dir.join(format!("{name}.png")), TINY_PNG)
                    .expect("write png");
            }
        }
        (dir, paths)
    }

    #[test]
    fn wires_session_from_project_layout() {
        let (_dir, paths) = project(true);
        let wiring = wire_from_paths(&paths).expect("wiring");

        assert_eq!(wiring.assets.len(), 3);
        assert_eq!(wiring.scene.actor_count(), 1);
        assert_eq!(wiring.scene.layout(640, 480), (256, 200));
        assert_eq!(wiring.config.window_width, 1280);
        assert_eq!(wiring.config.target_tps, 60);
    }

    #[test]
    fn missing_level_is_fatal() {
        let (_dir, paths) = project(true);
        fs::remove_file(paths.levels_dir.join("test1.lvl")).expect("remove level");

        let error = wire_from_paths(&paths).err().expect("missing level");
        assert!(matches!(error, BootstrapError::Map(MapLoadError::Read { .. })));
    }

    #[test]
    fn missing_texture_is_fatal() {
        let (_dir, paths) = project(false);

        let error = wire_from_paths(&paths).err().expect("missing textures");
        assert!(matches!(error, BootstrapError::Assets(_)));
    }
}
