//! Simulation integration tests for chase, combat, player lifecycle, and
//! bomb behavior, run against head-less worlds.

use bevy_ecs::prelude::*;
use raylib::prelude::{Camera2D, Vector2};

use wildwood::components::animation::Animation;
use wildwood::components::enemy::Enemy;
use wildwood::components::fuse::Fuse;
use wildwood::components::mapposition::MapPosition;
use wildwood::components::player::{Player, PlayerState};
use wildwood::components::sprite::Sprite;
use wildwood::components::zindex::{Z_ENEMIES, Z_PLAYER, ZIndex};
use wildwood::game::{ENEMY_SPEED, bomb_bundle};
use wildwood::resources::animationstore::{AnimationResource, AnimationStore};
use wildwood::resources::camera2d::Camera2DRes;
use wildwood::resources::gamestate::{GameState, GameStates};
use wildwood::resources::input::InputState;
use wildwood::resources::session::Session;
use wildwood::resources::worldtime::WorldTime;
use wildwood::systems::animation::animation;
use wildwood::systems::bomb::{bomb_control, fuse_system};
use wildwood::systems::combat::resolve_combat;
use wildwood::systems::enemy::enemy_chase;
use wildwood::systems::player::player_control;
use wildwood::systems::time::update_world_time;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn strip(tex_key: &str, frames: usize, fps: f32, looped: bool) -> AnimationResource {
    AnimationResource {
        tex_key: tex_key.to_string(),
        position: Vector2 { x: 0.0, y: 0.0 },
        frame_width: 48.0,
        frame_height: 48.0,
        frame_count: frames,
        fps,
        looped,
    }
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
    });
    world.insert_resource(InputState::default());
    world.insert_resource(Session::default());

    let mut state = GameState::new();
    state.set(GameStates::Running);
    world.insert_resource(state);

    let mut animations = AnimationStore::new();
    animations.insert("player/idle", strip("player", 6, 8.0, true));
    animations.insert("player/walk", strip("player", 6, 8.0, true));
    // 4 frames at 8 fps, so the attack window is 0.5 seconds.
    animations.insert("player/attack", strip("player", 4, 8.0, false));
    animations.insert("enemy/walk", strip("enemy", 6, 8.0, true));
    animations.insert("bomb/explode", strip("bomb", 13, 6.2, false));
    world.insert_resource(animations);

    world.insert_resource(Camera2DRes(Camera2D {
        target: Vector2 { x: 100.0, y: 100.0 },
        offset: Vector2 { x: 400.0, y: 300.0 },
        rotation: 0.0,
        zoom: 1.0,
    }));
    world
}

fn spawn_player(world: &mut World, x: f32, y: f32, lives: u32) -> Entity {
    world
        .spawn((
            Player::new(Vector2 { x: 100.0, y: 100.0 }, lives),
            MapPosition::new(x, y),
            ZIndex(Z_PLAYER),
            Sprite::centered("player", 48.0, 48.0),
            Animation::new("player/idle"),
        ))
        .id()
}

fn spawn_enemy(world: &mut World, x: f32, y: f32) -> Entity {
    world
        .spawn((
            Enemy::new(ENEMY_SPEED),
            MapPosition::new(x, y),
            ZIndex(Z_ENEMIES),
            Sprite::centered("enemy", 48.0, 48.0),
            Animation::new("enemy/walk"),
        ))
        .id()
}

fn tick_enemy_chase(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(enemy_chase);
    schedule.run(world);
}

fn tick_combat(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(resolve_combat);
    schedule.run(world);
}

fn tick_player(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(player_control);
    schedule.run(world);
}

fn tick_bomb_control(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(bomb_control);
    schedule.run(world);
}

fn tick_fuse(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(fuse_system);
    schedule.run(world);
}

fn tick_animation(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(animation);
    schedule.run(world);
}

fn distance(world: &mut World, a: Entity, b: Entity) -> f32 {
    let pa = world.get::<MapPosition>(a).unwrap().pos;
    let pb = world.get::<MapPosition>(b).unwrap().pos;
    ((pa.x - pb.x).powi(2) + (pa.y - pb.y).powi(2)).sqrt()
}

// --- Enemy chase ---

#[test]
fn enemy_idles_beyond_aggro_range() {
    let mut world = make_world(0.1);
    spawn_player(&mut world, 0.0, 0.0, 5);
    let enemy = spawn_enemy(&mut world, 400.0, 0.0);

    tick_enemy_chase(&mut world);

    let pos = world.get::<MapPosition>(enemy).unwrap();
    assert!(approx_eq(pos.pos.x, 400.0));
    assert!(approx_eq(pos.pos.y, 0.0));
}

#[test]
fn enemy_approach_is_monotonic() {
    let mut world = make_world(0.1);
    let player = spawn_player(&mut world, 0.0, 0.0, 5);
    let enemy = spawn_enemy(&mut world, 200.0, 100.0);

    let mut last = distance(&mut world, player, enemy);
    for _ in 0..20 {
        tick_enemy_chase(&mut world);
        let now = distance(&mut world, player, enemy);
        assert!(now < last);
        assert!(now >= 0.0);
        last = now;
    }
}

#[test]
fn enemy_step_is_clamped_to_the_remaining_distance() {
    let mut world = make_world(1.0);
    spawn_player(&mut world, 0.0, 0.0, 5);
    // Closer than one full step (100 units at delta 1.0).
    let enemy = spawn_enemy(&mut world, 5.0, 0.0);

    tick_enemy_chase(&mut world);
    let pos = world.get::<MapPosition>(enemy).unwrap().pos;
    assert!(approx_eq(pos.x, 0.0));
    assert!(approx_eq(pos.y, 0.0));

    // At zero distance the direction is undefined; the enemy must stay put.
    tick_enemy_chase(&mut world);
    let pos = world.get::<MapPosition>(enemy).unwrap().pos;
    assert!(pos.x.is_finite() && pos.y.is_finite());
    assert!(approx_eq(pos.x, 0.0));
    assert!(approx_eq(pos.y, 0.0));
}

#[test]
fn dead_enemies_do_not_move() {
    let mut world = make_world(0.1);
    spawn_player(&mut world, 0.0, 0.0, 5);
    let enemy = spawn_enemy(&mut world, 50.0, 0.0);
    world.get_mut::<Enemy>(enemy).unwrap().kill();

    tick_enemy_chase(&mut world);

    let pos = world.get::<MapPosition>(enemy).unwrap();
    assert!(approx_eq(pos.pos.x, 50.0));
}

#[test]
fn dead_players_are_not_chased() {
    let mut world = make_world(0.1);
    let player = spawn_player(&mut world, 0.0, 0.0, 1);
    world.get_mut::<Player>(player).unwrap().lose_life(0.0);
    let enemy = spawn_enemy(&mut world, 50.0, 0.0);

    tick_enemy_chase(&mut world);

    let pos = world.get::<MapPosition>(enemy).unwrap();
    assert!(approx_eq(pos.pos.x, 50.0));
}

// --- Combat ---

#[test]
fn bites_share_one_global_cooldown() {
    let mut world = make_world(0.1);
    let player = spawn_player(&mut world, 100.0, 100.0, 5);
    spawn_enemy(&mut world, 110.0, 100.0);
    spawn_enemy(&mut world, 90.0, 100.0);
    spawn_enemy(&mut world, 100.0, 110.0);

    // Three adjacent enemies cost exactly one life.
    tick_combat(&mut world);
    assert_eq!(world.get::<Player>(player).unwrap().lives, 4);

    // Within the cooldown window nothing more lands.
    update_world_time(&mut world, 0.5);
    tick_combat(&mut world);
    assert_eq!(world.get::<Player>(player).unwrap().lives, 4);

    // Once the cooldown elapses the next bite lands.
    update_world_time(&mut world, 0.5);
    tick_combat(&mut world);
    assert_eq!(world.get::<Player>(player).unwrap().lives, 3);
}

#[test]
fn kills_require_the_attack_state() {
    let mut world = make_world(0.1);
    let player = spawn_player(&mut world, 100.0, 100.0, 5);
    let enemy = spawn_enemy(&mut world, 140.0, 100.0);

    tick_combat(&mut world);
    assert!(world.get::<Enemy>(enemy).unwrap().alive);

    world.get_mut::<Player>(player).unwrap().state = PlayerState::Attack;
    tick_combat(&mut world);
    assert!(!world.get::<Enemy>(enemy).unwrap().alive);
    assert_eq!(world.resource::<Session>().score, 1);
}

#[test]
fn kill_radius_is_wider_than_bite_radius() {
    let mut world = make_world(0.1);
    let player = spawn_player(&mut world, 100.0, 100.0, 5);
    // 40 units away: inside the kill box, outside the bite box.
    let enemy = spawn_enemy(&mut world, 140.0, 100.0);
    world.get_mut::<Player>(player).unwrap().state = PlayerState::Attack;

    tick_combat(&mut world);

    assert!(!world.get::<Enemy>(enemy).unwrap().alive);
    assert_eq!(world.get::<Player>(player).unwrap().lives, 5);
}

#[test]
fn dead_enemies_are_skipped_entirely() {
    let mut world = make_world(0.1);
    let player = spawn_player(&mut world, 100.0, 100.0, 5);
    let enemy = spawn_enemy(&mut world, 110.0, 100.0);
    world.get_mut::<Enemy>(enemy).unwrap().kill();
    world.get_mut::<Player>(player).unwrap().state = PlayerState::Attack;

    tick_combat(&mut world);

    // No bite, no double kill.
    assert_eq!(world.get::<Player>(player).unwrap().lives, 5);
    assert_eq!(world.resource::<Session>().score, 0);
}

#[test]
fn reaching_the_score_threshold_wins() {
    let mut world = make_world(0.1);
    let player = spawn_player(&mut world, 100.0, 100.0, 5);
    spawn_enemy(&mut world, 120.0, 100.0);
    world.resource_mut::<Session>().score = 99;
    world.get_mut::<Player>(player).unwrap().state = PlayerState::Attack;

    tick_combat(&mut world);

    assert_eq!(world.resource::<Session>().score, 100);
    assert_eq!(world.resource::<GameState>().get(), GameStates::Win);
}

// --- Player lifecycle ---

#[test]
fn losing_the_last_life_triggers_a_timed_respawn() {
    let mut world = make_world(0.016);
    let player = spawn_player(&mut world, 500.0, 500.0, 1);
    spawn_enemy(&mut world, 510.0, 500.0);

    tick_combat(&mut world);
    {
        let p = world.get::<Player>(player).unwrap();
        assert_eq!(p.lives, 0);
        assert_eq!(p.state, PlayerState::GameOver);
    }

    // Just short of the respawn delay: still dead.
    update_world_time(&mut world, 2.9);
    tick_player(&mut world);
    assert_eq!(
        world.get::<Player>(player).unwrap().state,
        PlayerState::GameOver
    );

    // Past the delay: back at the spawn point with full lives.
    update_world_time(&mut world, 0.2);
    tick_player(&mut world);
    {
        let p = world.get::<Player>(player).unwrap();
        assert_eq!(p.state, PlayerState::Idle);
        assert_eq!(p.lives, 1);
        assert!(p.just_respawned);
    }
    let pos = world.get::<MapPosition>(player).unwrap().pos;
    assert!(approx_eq(pos.x, 100.0));
    assert!(approx_eq(pos.y, 100.0));

    // The one-shot flag clears on the next frame.
    tick_player(&mut world);
    assert!(!world.get::<Player>(player).unwrap().just_respawned);
}

#[test]
fn movement_scales_with_the_frame_delta() {
    let mut world = make_world(0.1);
    let player = spawn_player(&mut world, 100.0, 100.0, 5);
    world.resource_mut::<InputState>().right.active = true;

    tick_player(&mut world);

    let pos = world.get::<MapPosition>(player).unwrap().pos;
    assert!(approx_eq(pos.x, 112.8));
    assert!(approx_eq(pos.y, 100.0));
    assert_eq!(
        world.get::<Player>(player).unwrap().state,
        PlayerState::Moving
    );
}

#[test]
fn per_axis_displacement_is_capped() {
    // A pathological 10-second frame must not teleport the player.
    let mut world = make_world(10.0);
    let player = spawn_player(&mut world, 100.0, 100.0, 5);
    world.resource_mut::<InputState>().down.active = true;

    tick_player(&mut world);

    let pos = world.get::<MapPosition>(player).unwrap().pos;
    assert!(approx_eq(pos.y, 148.0));
}

#[test]
fn attacking_is_blocked_on_diagonals() {
    let mut world = make_world(0.1);
    let player = spawn_player(&mut world, 100.0, 100.0, 5);
    {
        let mut input = world.resource_mut::<InputState>();
        input.attack.just_pressed = true;
        input.up.active = true;
        input.left.active = true;
    }

    tick_player(&mut world);

    assert_eq!(
        world.get::<Player>(player).unwrap().state,
        PlayerState::Moving
    );
}

#[test]
fn attacks_open_and_close_with_the_animation_window() {
    let mut world = make_world(0.016);
    let player = spawn_player(&mut world, 100.0, 100.0, 5);
    world.resource_mut::<InputState>().attack.just_pressed = true;

    tick_player(&mut world);
    {
        let p = world.get::<Player>(player).unwrap();
        assert_eq!(p.state, PlayerState::Attack);
        // 4 frames at 8 fps.
        assert!(approx_eq(p.attack_until, 0.5));
    }
    let anim = world.get::<Animation>(player).unwrap();
    assert_eq!(anim.animation_key, "player/attack");

    // Movement stays locked while the window is open.
    {
        let mut input = world.resource_mut::<InputState>();
        input.attack.just_pressed = false;
        input.right.active = true;
    }
    update_world_time(&mut world, 0.3);
    tick_player(&mut world);
    let pos = world.get::<MapPosition>(player).unwrap().pos;
    assert!(approx_eq(pos.x, 100.0));

    update_world_time(&mut world, 0.3);
    tick_player(&mut world);
    assert_eq!(
        world.get::<Player>(player).unwrap().state,
        PlayerState::Idle
    );
}

// --- Bombs ---

fn fuse_positions(world: &mut World) -> Vec<Vector2> {
    let mut q = world.query_filtered::<&MapPosition, With<Fuse>>();
    q.iter(world).map(|p| p.pos).collect()
}

#[test]
fn the_bomb_key_drops_at_the_player() {
    let mut world = make_world(0.016);
    spawn_player(&mut world, 250.0, 300.0, 5);
    world.resource_mut::<InputState>().bomb.just_pressed = true;

    tick_bomb_control(&mut world);

    let fuses = fuse_positions(&mut world);
    assert_eq!(fuses.len(), 1);
    assert!(approx_eq(fuses[0].x, 250.0));
    assert!(approx_eq(fuses[0].y, 300.0));
}

#[test]
fn a_click_drops_at_the_world_position() {
    let mut world = make_world(0.016);
    spawn_player(&mut world, 100.0, 100.0, 5);
    // Camera target (100,100), offset (400,300), zoom 1: screen (600,500)
    // maps to world (300,300).
    world.resource_mut::<InputState>().pointer_click = Some(Vector2 { x: 600.0, y: 500.0 });

    tick_bomb_control(&mut world);

    let fuses = fuse_positions(&mut world);
    assert_eq!(fuses.len(), 1);
    assert!(approx_eq(fuses[0].x, 300.0));
    assert!(approx_eq(fuses[0].y, 300.0));
}

#[test]
fn bombs_detonate_exactly_once_at_fuse_expiry() {
    let mut world = make_world(1.1);
    let player = spawn_player(&mut world, 100.0, 100.0, 5);
    let bomb = {
        let animations = world.resource::<AnimationStore>();
        bomb_bundle(animations, 110.0, 100.0).unwrap()
    };
    let bomb = world.spawn(bomb).id();

    // 1.1 of 2.1 seconds burned: still ticking, no damage.
    tick_fuse(&mut world);
    assert_eq!(world.get::<Player>(player).unwrap().lives, 5);
    assert!(world.get::<Fuse>(bomb).is_some());

    // 2.2 seconds: expired, one blast check, then gone.
    tick_fuse(&mut world);
    assert_eq!(world.get::<Player>(player).unwrap().lives, 4);
    assert!(world.get_entity(bomb).is_err());

    // No lingering damage on later frames.
    tick_fuse(&mut world);
    assert_eq!(world.get::<Player>(player).unwrap().lives, 4);
}

#[test]
fn blasts_outside_the_radius_are_harmless() {
    let mut world = make_world(2.2);
    let player = spawn_player(&mut world, 100.0, 100.0, 5);
    let bomb = {
        let animations = world.resource::<AnimationStore>();
        bomb_bundle(animations, 200.0, 200.0).unwrap()
    };
    let bomb = world.spawn(bomb).id();

    tick_fuse(&mut world);

    assert_eq!(world.get::<Player>(player).unwrap().lives, 5);
    assert!(world.get_entity(bomb).is_err());
}

// --- Animation ---

#[test]
fn looping_animations_wrap_and_update_the_sprite() {
    // 8 fps: one frame every 0.125 seconds.
    let mut world = make_world(0.15);
    let entity = spawn_enemy(&mut world, 0.0, 0.0);

    tick_animation(&mut world);

    let anim = world.get::<Animation>(entity).unwrap();
    assert_eq!(anim.frame_index, 1);
    let sprite = world.get::<Sprite>(entity).unwrap();
    assert!(approx_eq(sprite.offset.x, 48.0));

    // 6 frames total: five more ticks wrap back to frame 0.
    for _ in 0..5 {
        tick_animation(&mut world);
    }
    let anim = world.get::<Animation>(entity).unwrap();
    assert_eq!(anim.frame_index, 0);
}

#[test]
fn one_shot_animations_hold_their_last_frame() {
    let mut world = make_world(0.2);
    let bomb = {
        let animations = world.resource::<AnimationStore>();
        bomb_bundle(animations, 0.0, 0.0).unwrap()
    };
    let entity = world.spawn(bomb).id();

    // Far more ticks than the 13 frames need.
    for _ in 0..40 {
        tick_animation(&mut world);
    }

    let anim = world.get::<Animation>(entity).unwrap();
    assert_eq!(anim.frame_index, 12);
}
