use super::animation::Animator;

/// Position and velocity are expressed in tile units; one tile is `1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u64);

/// Movement record shared by every actor kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    solid_vs_map: bool,
    solid_vs_dynamic: bool,
    friendly: bool,
    name: String,
}

impl Body {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_flags(name, true, true, true)
    }

    pub fn with_flags(
        name: impl Into<String>,
        solid_vs_map: bool,
        solid_vs_dynamic: bool,
        friendly: bool,
    ) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            solid_vs_map,
            solid_vs_dynamic,
            friendly,
            name: name.into(),
        }
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn solid_vs_map(&self) -> bool {
        self.solid_vs_map
    }

    pub fn solid_vs_dynamic(&self) -> bool {
        self.solid_vs_dynamic
    }

    pub fn friendly(&self) -> bool {
        self.friendly
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

pub const DEFAULT_CREATURE_HEALTH: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    health: u32,
    health_max: u32,
    pub animator: Animator,
}

impl Default for Creature {
    fn default() -> Self {
        Self::new(DEFAULT_CREATURE_HEALTH)
    }
}

impl Creature {
    pub fn new(health_max: u32) -> Self {
        Self {
            health: health_max,
            health_max,
            animator: Animator::default(),
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn health_max(&self) -> u32 {
        self.health_max
    }

    pub fn set_health(&mut self, health: u32) {
        self.health = health.min(self.health_max);
    }

    pub fn apply_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActorKind {
    /// Moves and collides but has no animation state.
    Prop,
    Creature(Creature),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: ActorId,
    pub body: Body,
    pub kind: ActorKind,
    /// Texture name of the sprite sheet used to draw this actor.
    pub sprite: String,
}

impl Actor {
    pub fn creature(&self) -> Option<&Creature> {
        match &self.kind {
            ActorKind::Creature(creature) => Some(creature),
            ActorKind::Prop => None,
        }
    }

    pub fn creature_mut(&mut self) -> Option<&mut Creature> {
        match &mut self.kind {
            ActorKind::Creature(creature) => Some(creature),
            ActorKind::Prop => None,
        }
    }
}

#[derive(Debug, Default)]
struct ActorIdAllocator {
    next: u64,
}

impl ActorIdAllocator {
    fn allocate(&mut self) -> ActorId {
        let id = ActorId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

/// Actors owned by a session, kept in spawn order.
#[derive(Debug, Default)]
pub struct ActorSet {
    allocator: ActorIdAllocator,
    actors: Vec<Actor>,
}

impl ActorSet {
    pub fn spawn(&mut self, body: Body, kind: ActorKind, sprite: impl Into<String>) -> ActorId {
        let id = self.allocator.allocate();
        self.actors.push(Actor {
            id,
            body,
            kind,
            sprite: sprite.into(),
        });
        id
    }

    pub fn despawn(&mut self, id: ActorId) -> Option<Actor> {
        let index = self.actors.iter().position(|actor| actor.id == id)?;
        Some(self.actors.remove(index))
    }

    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|actor| actor.id == id)
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|actor| actor.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Actor> {
        self.actors.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
