use serde::Deserialize;

use super::actor::{Body, Vec2};
use super::collision::{self, Contact};
use super::tile_grid::TileGrid;

/// Movement tuning, in tiles per tick.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    pub move_acceleration: f64,
    /// Fraction of the current velocity removed every tick.
    pub drag_coefficient: f64,
    /// Speeds below this snap to zero after drag.
    pub clamp_velocity_epsilon: f64,
    pub max_horizontal_velocity: f64,
    pub max_vertical_velocity: f64,
    /// Added to the vertical velocity every tick. Zero keeps the world top-down.
    pub gravity: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        let move_acceleration = 0.011;
        Self {
            move_acceleration,
            drag_coefficient: move_acceleration * 4.0,
            clamp_velocity_epsilon: 0.01,
            max_horizontal_velocity: 0.1,
            max_vertical_velocity: 1.0,
            gravity: 0.0,
        }
    }
}

/// Directional impulses for one tick. Each held direction adds independently,
/// so opposites cancel and diagonals are not normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    pub const IDLE: MoveIntent = MoveIntent {
        up: false,
        down: false,
        left: false,
        right: false,
    };
}

/// Advances `body` by one tick: impulses, drag, collision, clamping, commit.
pub fn integrate(
    body: &mut Body,
    intent: MoveIntent,
    grid: &TileGrid,
    config: &MotionConfig,
) -> Contact {
    let mut velocity = body.velocity;
    if intent.up {
        velocity.y -= config.move_acceleration;
    }
    if intent.down {
        velocity.y += config.move_acceleration;
    }
    if intent.left {
        velocity.x -= config.move_acceleration;
    }
    if intent.right {
        velocity.x += config.move_acceleration;
    }
    velocity.y += config.gravity;

    velocity.x = apply_drag(velocity.x, config);
    velocity.y = apply_drag(velocity.y, config);

    let proposed = Vec2 {
        x: body.position.x + velocity.x,
        y: body.position.y + velocity.y,
    };

    let (position, mut velocity, contact) = if body.solid_vs_map() {
        let resolution = collision::resolve(grid, body.position, proposed, velocity);
        (resolution.position, resolution.velocity, resolution.contact)
    } else {
        (proposed, velocity, Contact::default())
    };

    velocity.x = clamp_magnitude(velocity.x, config.max_horizontal_velocity);
    velocity.y = clamp_magnitude(velocity.y, config.max_vertical_velocity);

    body.position = position;
    body.velocity = velocity;
    contact
}

fn apply_drag(velocity: f64, config: &MotionConfig) -> f64 {
    let dragged = velocity - config.drag_coefficient * velocity;
    if dragged.abs() < config.clamp_velocity_epsilon {
        0.0
    } else {
        dragged
    }
}

fn clamp_magnitude(value: f64, max: f64) -> f64 {
    let max = max.abs();
    value.clamp(-max, max)
}
