use dodge_game::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn sample_state() -> GameState {
    GameState {
        objects: vec![GameObject::Player(Player { x: 20, y: 19, health: 3, speed: 1 })],
        score: 0,
        game_over: false,
        spawner: Spawner { frame_count: 0, enemy_interval: 20, max_enemies: 5 },
    }
}

#[test]
fn direction_is_comparable() {
    assert_eq!(Direction::Left, Direction::Left);
    assert_ne!(Direction::Left, Direction::Right);
}

#[test]
fn game_object_dispatches_update_per_variant() {
    let mut rng = StdRng::seed_from_u64(7);

    // Player variant: consumes the directional input, stays on its row
    let mut p = GameObject::Player(Player { x: 10, y: 19, health: 3, speed: 1 });
    p.update(Some(Direction::Right), 40, &mut rng);
    match &p {
        GameObject::Player(inner) => {
            assert_eq!(inner.x, 11);
            assert_eq!(inner.y, 19);
        }
        _ => panic!("player variant changed"),
    }

    // Enemy variant: falls regardless of input
    let mut e = GameObject::Enemy(Enemy { x: 10, y: 0, health: 1, speed: 1 });
    e.update(None, 40, &mut rng);
    match &e {
        GameObject::Enemy(inner) => assert_eq!(inner.y, 1),
        _ => panic!("enemy variant changed"),
    }
}

#[test]
fn player_accessors_find_first_object() {
    let mut s = sample_state();
    s.objects.push(GameObject::Enemy(Enemy { x: 5, y: 5, health: 1, speed: 1 }));

    assert_eq!(s.player().x, 20);
    s.player_mut().health -= 1;
    assert_eq!(s.player().health, 2);
}

#[test]
fn enemy_count_ignores_the_player() {
    let mut s = sample_state();
    assert_eq!(s.enemy_count(), 0);
    s.objects.push(GameObject::Enemy(Enemy { x: 5, y: 5, health: 1, speed: 1 }));
    s.objects.push(GameObject::Enemy(Enemy { x: 6, y: 7, health: 1, speed: 1 }));
    assert_eq!(s.enemy_count(), 2);
}

#[test]
fn game_state_clone_is_independent() {
    let original = sample_state();
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player_mut().x = 99;
    cloned.score = 999;
    cloned.objects.push(GameObject::Enemy(Enemy { x: 5, y: 5, health: 1, speed: 1 }));

    assert_eq!(original.player().x, 20);
    assert_eq!(original.score, 0);
    assert_eq!(original.enemy_count(), 0);
}
