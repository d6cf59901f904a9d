use std::collections::HashSet;

use tilewalk_engine::{
    integrate, ActorId, ActorKind, ActorSet, AssetStore, Body, CameraViewport, Creature,
    DestTransform, InputSnapshot, MotionConfig, MoveIntent, RenderSurface, Scene, SceneCommand,
    SourceRect, SpriteCell, Texture, TileExtent, TileGrid, Vec2,
};
use tracing::{info, trace, warn};

use super::config::GameConfig;

const SKY_COLOR: [u8; 4] = [0x00, 0xff, 0xff, 0xff];
const FONT_GLYPH_WIDTH: u32 = 7;
const FONT_GLYPH_HEIGHT: u32 = 9;
const FONT_GLYPHS_PER_ROW: u32 = 18;
const FONT_FIRST_CHAR: u8 = b' ';
const FONT_LAST_CHAR: u8 = b'~';
const PLAYER_NAME: &str = "player";

include!("state.rs");
include!("scene_impl.rs");
include!("draw.rs");
