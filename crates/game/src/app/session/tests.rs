use super::*;
use crate::app::config::Point;
use tilewalk_engine::{Facing, FrameSurface, GraphicState, InputAction};

const RED: [u8; 4] = [0xff, 0x00, 0x00, 0xff];
const GREEN: [u8; 4] = [0x00, 0xff, 0x00, 0xff];
const BLUE: [u8; 4] = [0x00, 0x00, 0xff, 0xff];
const WHITE: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

fn open_grid(width: u32, height: u32) -> TileGrid {
    let count = (width * height) as usize;
    TileGrid::new(width, height, vec![0; count], vec![false; count]).expect("open grid")
}

fn config_with_spawn(x: f64, y: f64) -> GameConfig {
    GameConfig {
        player_spawn: Point { x, y },
        ..GameConfig::default()
    }
}

fn holding(actions: &[InputAction]) -> InputSnapshot {
    let mut snapshot = InputSnapshot::empty();
    for action in actions {
        snapshot = snapshot.with_action_down(*action, true);
    }
    snapshot
}

fn solid_texture(width: u32, height: u32, color: [u8; 4]) -> Texture {
    let rgba = color.repeat((width * height) as usize);
    Texture::from_rgba(width, height, rgba).expect("solid texture")
}

/// 7x2 tileset where cell 0 is red and every other cell green.
fn two_color_tileset() -> Texture {
    let (width, height) = (7 * 16, 2 * 16);
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let color = if x < 16 && y < 16 { RED } else { GREEN };
            rgba.extend_from_slice(&color);
        }
    }
    Texture::from_rgba(width, height, rgba).expect("tileset")
}

fn render(session: &mut Session, assets: &AssetStore) -> Vec<u8> {
    let (width, height) = session.layout(1280, 960);
    let mut frame = vec![0u8; (width * height * 4) as usize];
    let mut surface = FrameSurface::new(&mut frame, width, height);
    session.draw(&mut surface, assets);
    frame
}

fn pixel_at(frame: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let offset = ((y * width + x) * 4) as usize;
    [
        frame[offset],
        frame[offset + 1],
        frame[offset + 2],
        frame[offset + 3],
    ]
}

#[test]
fn layout_ignores_window_size() {
    let session = Session::new(&GameConfig::default(), open_grid(4, 4));
    assert_eq!(session.layout(1280, 960), (256, 200));
    assert_eq!(session.layout(1, 1), (256, 200));
}

#[test]
fn quit_action_stops_without_stepping() {
    let mut session = Session::new(&config_with_spawn(2.0, 2.0), open_grid(8, 8));
    let command = session.update(&holding(&[InputAction::Quit, InputAction::MoveRight]));

    assert_eq!(command, SceneCommand::Quit);
    assert_eq!(session.ticks, 0);
    assert_eq!(session.player_position(), Vec2::new(2.0, 2.0));
}

#[test]
fn held_up_walks_north() {
    let mut session = Session::new(&config_with_spawn(1.0, 30.0), open_grid(4, 40));
    for _ in 0..20 {
        assert_eq!(
            session.update(&holding(&[InputAction::MoveUp])),
            SceneCommand::None
        );
    }

    let player = session.actors.get(session.player_id).expect("player");
    assert!(player.body.position.y < 30.0);
    assert!(player.body.velocity.y < -0.1);
    let creature = player.creature().expect("creature");
    assert_eq!(creature.animator.facing(), Facing::North);
    assert_eq!(creature.animator.state(), GraphicState::Walking);
}

#[test]
fn player_never_enters_solid_tiles() {
    let wall = TileGrid::parse("3 1\n0 0 0 0 0 1").expect("grid");
    let mut session = Session::new(&config_with_spawn(0.0, 0.0), wall);
    for _ in 0..120 {
        session.update(&holding(&[InputAction::MoveRight]));
        assert!(session.player_position().x <= 1.0);
    }
    let player = session.actors.get(session.player_id).expect("player");
    assert_eq!(player.body.position.x, 1.0);
    assert_eq!(player.body.velocity.x, 0.0);
}

#[test]
fn camera_centers_on_player_and_clamps() {
    let mut session = Session::new(&config_with_spawn(30.0, 30.0), open_grid(64, 64));
    assert_eq!(session.camera.offset, Vec2::new(22.0, 24.0));
    assert_eq!(session.camera.extent, TileExtent { width: 16, height: 12 });

    let mut corner = Session::new(&config_with_spawn(1.0, 1.0), open_grid(64, 64));
    corner.update(&InputSnapshot::empty());
    assert_eq!(corner.camera.offset, Vec2::ZERO);

    session.update(&InputSnapshot::empty());
    assert_eq!(session.camera.offset, Vec2::new(22.0, 24.0));
}

#[test]
fn npcs_coast_while_player_moves() {
    let config = GameConfig {
        npc_spawns: vec![Point { x: 5.0, y: 5.0 }],
        ..config_with_spawn(1.0, 1.0)
    };
    let mut session = Session::new(&config, open_grid(8, 8));
    assert_eq!(session.actor_count(), 2);

    for _ in 0..10 {
        session.update(&holding(&[InputAction::MoveDown]));
    }
    let npc = session
        .actors
        .iter()
        .find(|actor| actor.id != session.player_id)
        .expect("npc");
    assert_eq!(npc.body.position, Vec2::new(5.0, 5.0));
    assert_eq!(
        npc.creature().expect("creature").animator.state(),
        GraphicState::Standing
    );
    assert!(session.player_position().y > 1.0);
}

#[test]
fn tile_cells_wrap_by_tileset_columns() {
    let render = RenderSettings::from_config(&GameConfig::default());
    assert_eq!(render.tile_cell(0), SpriteCell { column: 0, row: 0 });
    assert_eq!(render.tile_cell(6), SpriteCell { column: 6, row: 0 });
    assert_eq!(render.tile_cell(8), SpriteCell { column: 1, row: 1 });
}

#[test]
fn missing_textures_draw_sky_and_warn_once() {
    let mut session = Session::new(&GameConfig::default(), open_grid(20, 15));
    let assets = AssetStore::default();

    let frame = render(&mut session, &assets);
    assert!(frame.chunks_exact(4).all(|pixel| pixel == SKY_COLOR));
    assert_eq!(session.missing_textures.len(), 3);

    render(&mut session, &assets);
    assert_eq!(session.missing_textures.len(), 3);
}

#[test]
fn draws_tiles_then_actors_then_hud() {
    let config = config_with_spawn(2.0, 3.0);
    let mut grid_text = String::from("20 15\n");
    for y in 0..15 {
        for x in 0..20 {
            let index = if x == 0 && y == 0 { 0 } else { 1 };
            grid_text.push_str(&format!("{index} 0 "));
        }
        grid_text.push('\n');
    }
    let mut session = Session::new(&config, TileGrid::parse(&grid_text).expect("grid"));

    let mut assets = AssetStore::default();
    assets
        .insert(config.tileset_texture.clone(), two_color_tileset())
        .expect("tileset");
    assets
        .insert(config.character_texture.clone(), solid_texture(80, 32, BLUE))
        .expect("sheet");
    assets
        .insert(config.font_texture.clone(), solid_texture(18 * 7, 6 * 9, WHITE))
        .expect("font");

    let frame = render(&mut session, &assets);
    assert_eq!(pixel_at(&frame, 256, 0, 0), RED);
    assert_eq!(pixel_at(&frame, 256, 16, 0), GREEN);
    assert_eq!(pixel_at(&frame, 256, 32, 48), BLUE);
    assert_eq!(pixel_at(&frame, 256, 47, 63), BLUE);
    assert_eq!(pixel_at(&frame, 256, 48, 64), GREEN);

    // "Coders Town" is 11 glyphs of 7x9 starting at (30, 30)
    assert_eq!(pixel_at(&frame, 256, 30, 30), WHITE);
    assert_eq!(pixel_at(&frame, 256, 30 + 11 * 7 - 1, 38), WHITE);
    assert_eq!(pixel_at(&frame, 256, 30 + 11 * 7, 30), GREEN);
    assert!(session.missing_textures.is_empty());
}

#[test]
fn glyphs_cover_printable_ascii_only() {
    assert_eq!(glyph_cell(b' '), Some(SpriteCell { column: 0, row: 0 }));
    assert_eq!(glyph_cell(b'A'), Some(SpriteCell { column: 15, row: 1 }));
    assert_eq!(glyph_cell(b'~'), Some(SpriteCell { column: 4, row: 5 }));
    assert_eq!(glyph_cell(b'\n'), None);
    assert_eq!(glyph_cell(0x7f), None);
}

#[test]
fn debug_title_names_level_and_player_tile() {
    let session = Session::new(&config_with_spawn(3.5, 2.25), open_grid(8, 8));
    let title = session.debug_title().expect("title");
    assert!(title.contains("Coders Town"));
    assert!(title.ends_with("tile (3, 2)"));
}
