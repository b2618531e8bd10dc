/// Per-frame game logic.
///
/// Every public function here mutates the `GameState` the orchestrator owns;
/// terminal bounds are passed in fresh each frame rather than cached, and all
/// randomness comes through an injected `Rng` handle so tests can use a
/// seeded generator.

use rand::Rng;

use crate::entities::{Direction, Enemy, GameObject, GameState, Player, Spawner};

/// Frames between spawn attempts.
pub const ENEMY_INTERVAL: u32 = 20;
/// Maximum concurrent enemies.
pub const MAX_ENEMIES: usize = 5;
/// Half-width of the horizontal hit band around the player.
pub const HIT_BAND: i32 = 3;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state for the given terminal dimensions: one
/// player, centered horizontally on the bottom row, and no enemies.
pub fn init_state(width: u16, height: u16) -> GameState {
    GameState {
        objects: vec![GameObject::Player(Player {
            x: (width / 2) as i32,
            y: height as i32 - 1,
            health: 3,
            speed: 1,
        })],
        score: 0,
        game_over: false,
        spawner: Spawner {
            frame_count: 0,
            enemy_interval: ENEMY_INTERVAL,
            max_enemies: MAX_ENEMIES,
        },
    }
}

// ── Frame passes, in loop order ──────────────────────────────────────────────

/// Pass 1: update every object. The player (always first) consumes this
/// frame's pending input; each enemy falls and jitters independently.
pub fn update_objects(
    state: &mut GameState,
    input: Option<Direction>,
    width: u16,
    rng: &mut impl Rng,
) {
    for obj in state.objects.iter_mut() {
        obj.update(input, width, rng);
    }
}

/// Pass 2: collision and scoring, then despawn.
///
/// For every enemy, in spawn order:
/// * a hit is an exact row match plus an x within ±HIT_BAND of the player —
///   each hit costs 1 health, with no debounce, so an enemy lingering on the
///   player's row keeps draining health every frame;
/// * an enemy at `height-1` or deeper scores 1 point, whether or not it also
///   hit this frame.
///
/// Enemies at `height` or deeper are then removed. The scoring threshold is
/// one row shallower than the despawn threshold, so an enemy can score on the
/// bottom row and survive into the next frame.
pub fn check_collisions(state: &mut GameState, height: u16) {
    let bottom = height as i32;
    let (px, py) = {
        let p = state.player();
        (p.x, p.y)
    };

    let mut hits: i32 = 0;
    let mut passed: u32 = 0;
    for obj in &state.objects {
        if let GameObject::Enemy(e) = obj {
            if e.y == py && (e.x - px).abs() <= HIT_BAND {
                hits += 1;
            }
            if e.y >= bottom - 1 {
                passed += 1;
            }
        }
    }

    state.score += passed;
    state.player_mut().health -= hits;

    state
        .objects
        .retain(|obj| !matches!(obj, GameObject::Enemy(e) if e.y >= bottom));
}

/// Pass 4 (after render): latch the terminal state once health runs out.
pub fn resolve_game_over(state: &mut GameState) {
    if state.player().health <= 0 {
        state.game_over = true;
    }
}

/// Pass 5: time-gated spawn. Counts frames; once `enemy_interval` frames have
/// elapsed and the enemy cap has room, pushes one enemy at a random column on
/// the top row and resets the counter. A full roster does not reset the
/// counter, so a spawn fires as soon as a slot frees up.
pub fn maybe_spawn(state: &mut GameState, width: u16, rng: &mut impl Rng) {
    state.spawner.frame_count += 1;
    if state.spawner.frame_count >= state.spawner.enemy_interval
        && state.enemy_count() < state.spawner.max_enemies
    {
        let x = rng.gen_range(0..width.max(1) as i32);
        state.objects.push(GameObject::Enemy(Enemy {
            x,
            y: 0,
            health: 1,
            speed: 1,
        }));
        state.spawner.frame_count = 0;
    }
}
