mod actor;
mod animation;
mod camera;
mod collision;
mod motion;
mod tile_grid;

pub use actor::{
    Actor, ActorId, ActorKind, ActorSet, Body, Creature, Vec2, DEFAULT_CREATURE_HEALTH,
};
pub use animation::{
    sprite_cell, Animator, Facing, GraphicState, SpriteCell, FACING_DEADZONE, WALK_FRAME_TICKS,
};
pub use camera::{CameraViewport, TileExtent, VisibleTile, VIEWPORT_PADDING_TILES};
pub use collision::{resolve as resolve_collision, Contact, Resolution, EDGE_SAMPLE_SPAN};
pub use motion::{integrate, MotionConfig, MoveIntent};
pub use tile_grid::{MalformedMapError, TileGrid};
