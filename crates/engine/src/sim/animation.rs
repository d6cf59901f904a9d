use super::actor::Vec2;

/// Velocity magnitude a component must exceed before the facing changes.
pub const FACING_DEADZONE: f64 = 0.1;
/// Ticks per walk-cycle phase.
pub const WALK_FRAME_TICKS: u32 = 10;
const WALK_PHASES: u32 = 2;
const DEAD_CELL: SpriteCell = SpriteCell { column: 4, row: 1 };

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Facing {
    North,
    East,
    #[default]
    South,
    West,
}

impl Facing {
    /// Sprite sheet column for this facing.
    pub const fn index(self) -> u32 {
        match self {
            Facing::North => 0,
            Facing::East => 1,
            Facing::South => 2,
            Facing::West => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GraphicState {
    #[default]
    Standing,
    Walking,
    /// Has no trigger yet; drawn with the first sheet cell.
    Celebrating,
    Dead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteCell {
    pub column: u32,
    pub row: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Animator {
    facing: Facing,
    state: GraphicState,
    frame_timer: u32,
    walk_phase: u32,
}

impl Animator {
    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn state(&self) -> GraphicState {
        self.state
    }

    pub fn walk_phase(&self) -> u32 {
        self.walk_phase
    }

    /// Advances one tick. Rules apply in order, later ones override earlier ones.
    pub fn update(&mut self, velocity: Vec2, health: u32) {
        self.frame_timer += 1;
        if self.frame_timer > WALK_FRAME_TICKS {
            self.frame_timer -= WALK_FRAME_TICKS;
            self.walk_phase = (self.walk_phase + 1) % WALK_PHASES;
        }

        self.state = if velocity.x.abs() > 0.0 || velocity.y.abs() > 0.0 {
            GraphicState::Walking
        } else {
            GraphicState::Standing
        };

        if velocity.x < -FACING_DEADZONE {
            self.facing = Facing::West;
        }
        if velocity.x > FACING_DEADZONE {
            self.facing = Facing::East;
        }
        if velocity.y < -FACING_DEADZONE {
            self.facing = Facing::North;
        }
        if velocity.y > FACING_DEADZONE {
            self.facing = Facing::South;
        }

        if health == 0 {
            self.state = GraphicState::Dead;
        }
    }

    pub fn sprite_cell(&self) -> SpriteCell {
        sprite_cell(self.facing, self.state, self.walk_phase)
    }
}

pub fn sprite_cell(facing: Facing, state: GraphicState, walk_phase: u32) -> SpriteCell {
    match state {
        GraphicState::Standing => SpriteCell {
            column: facing.index(),
            row: 0,
        },
        GraphicState::Walking => SpriteCell {
            column: facing.index(),
            row: walk_phase,
        },
        GraphicState::Dead => DEAD_CELL,
        GraphicState::Celebrating => SpriteCell { column: 0, row: 0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn velocity(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }

    #[test]
    fn walk_phase_advances_every_ten_ticks() {
        let mut animator = Animator::default();
        let mut phases = Vec::new();
        for _ in 0..33 {
            animator.update(velocity(0.05, 0.0), 10);
            phases.push(animator.walk_phase());
        }

        assert!(phases[..10].iter().all(|phase| *phase == 0));
        assert_eq!(phases[10], 1);
        assert!(phases[10..20].iter().all(|phase| *phase == 1));
        assert_eq!(phases[20], 0);
        assert_eq!(phases[30], 1);
    }

    #[test]
    fn any_motion_walks_and_rest_stands() {
        let mut animator = Animator::default();
        animator.update(velocity(0.0, -0.001), 10);
        assert_eq!(animator.state(), GraphicState::Walking);

        animator.update(Vec2::ZERO, 10);
        assert_eq!(animator.state(), GraphicState::Standing);
    }

    #[test]
    fn facing_ignores_velocity_inside_deadzone() {
        let mut animator = Animator::default();
        animator.update(velocity(-0.1, 0.09), 10);

        assert_eq!(animator.facing(), Facing::South);
        assert_eq!(animator.state(), GraphicState::Walking);

        animator.update(velocity(-0.11, 0.0), 10);
        assert_eq!(animator.facing(), Facing::West);
        animator.update(velocity(0.0, 0.0), 10);
        assert_eq!(animator.facing(), Facing::West);
    }

    #[test]
    fn vertical_facing_wins_on_diagonals() {
        let mut animator = Animator::default();
        animator.update(velocity(0.5, -0.5), 10);
        assert_eq!(animator.facing(), Facing::North);

        animator.update(velocity(-0.5, 0.5), 10);
        assert_eq!(animator.facing(), Facing::South);

        animator.update(velocity(0.5, 0.05), 10);
        assert_eq!(animator.facing(), Facing::East);
    }

    #[test]
    fn zero_health_forces_dead_despite_motion() {
        let mut animator = Animator::default();
        animator.update(velocity(0.3, 0.0), 1);
        assert_eq!(animator.state(), GraphicState::Walking);

        animator.update(velocity(0.3, 0.0), 0);
        assert_eq!(animator.state(), GraphicState::Dead);
        assert_eq!(animator.sprite_cell(), SpriteCell { column: 4, row: 1 });

        animator.update(Vec2::ZERO, 0);
        assert_eq!(animator.state(), GraphicState::Dead);
    }

    #[test]
    fn sprite_cells_follow_facing_and_phase() {
        assert_eq!(
            sprite_cell(Facing::West, GraphicState::Standing, 1),
            SpriteCell { column: 3, row: 0 }
        );
        assert_eq!(
            sprite_cell(Facing::East, GraphicState::Walking, 1),
            SpriteCell { column: 1, row: 1 }
        );
        assert_eq!(
            sprite_cell(Facing::North, GraphicState::Walking, 0),
            SpriteCell { column: 0, row: 0 }
        );
        assert_eq!(
            sprite_cell(Facing::South, GraphicState::Dead, 0),
            SpriteCell { column: 4, row: 1 }
        );
        assert_eq!(
            sprite_cell(Facing::South, GraphicState::Celebrating, 1),
            SpriteCell { column: 0, row: 0 }
        );
    }
}
