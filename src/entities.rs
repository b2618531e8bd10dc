/// All game entity types plus their per-frame movement rules.

use rand::Rng;

/// A pending horizontal move read from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    /// Starts at 3; each hit subtracts 1. The game ends at ≤ 0 — a transient
    /// negative value is the end-of-game signal, not an error.
    pub health: i32,
    /// Columns moved per directional key press.
    pub speed: i32,
}

impl Player {
    /// Apply one frame of input: move ±`speed` along x if a key was pending,
    /// then clamp into `[0, width-1]`. No pending input is a no-op.
    pub fn update(&mut self, input: Option<Direction>, width: u16) {
        if let Some(dir) = input {
            match dir {
                Direction::Left => self.x -= self.speed,
                Direction::Right => self.x += self.speed,
            }
            self.x = self.x.clamp(0, (width as i32 - 1).max(0));
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    /// Always 1 — enemies are never damaged, only despawned.
    pub health: i32,
    /// Rows fallen per frame.
    pub speed: i32,
}

impl Enemy {
    /// Fall `speed` rows and drift −1, 0, or +1 columns, clamped into
    /// `[0, width-3]` so the 3-character glyph stays on screen.
    pub fn update(&mut self, width: u16, rng: &mut impl Rng) {
        self.y += self.speed;
        self.x += rng.gen_range(-1..=1);
        self.x = self.x.clamp(0, (width as i32 - 3).max(0));
    }
}

// ── Closed entity set ─────────────────────────────────────────────────────────

/// Everything that updates and renders each frame. Closed on purpose:
/// collision and rendering match over it exhaustively.
#[derive(Clone, Debug, PartialEq)]
pub enum GameObject {
    Player(Player),
    Enemy(Enemy),
}

impl GameObject {
    pub fn update(&mut self, input: Option<Direction>, width: u16, rng: &mut impl Rng) {
        match self {
            GameObject::Player(p) => p.update(input, width),
            GameObject::Enemy(e) => e.update(width, rng),
        }
    }

    pub fn is_enemy(&self) -> bool {
        matches!(self, GameObject::Enemy(_))
    }
}

// ── Spawner ───────────────────────────────────────────────────────────────────

/// Frame-counting spawn gate. `frame_count` resets to 0 on every spawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Spawner {
    pub frame_count: u32,
    /// Frames between spawn attempts.
    pub enemy_interval: u32,
    /// Hard cap on concurrent enemies.
    pub max_enemies: usize,
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// Player first (inserted at creation), then enemies in spawn order.
    pub objects: Vec<GameObject>,
    /// Monotonically non-decreasing.
    pub score: u32,
    /// One-way transition false → true.
    pub game_over: bool,
    pub spawner: Spawner,
}

impl GameState {
    pub fn player(&self) -> &Player {
        match self.objects.first() {
            Some(GameObject::Player(p)) => p,
            _ => unreachable!("the player is always the first game object"),
        }
    }

    pub fn player_mut(&mut self) -> &mut Player {
        match self.objects.first_mut() {
            Some(GameObject::Player(p)) => p,
            _ => unreachable!("the player is always the first game object"),
        }
    }

    pub fn enemy_count(&self) -> usize {
        self.objects.iter().filter(|o| o.is_enemy()).count()
    }
}
