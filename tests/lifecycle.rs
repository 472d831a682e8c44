//! Scenario tests driving the sandbox through its input dispatcher

use glam::Vec2;
use slingshot_sandbox::Settings;
use slingshot_sandbox::settings::Key;
use slingshot_sandbox::sim::{
    BodyKind, InputEvent, PhysicsWorld, PointerButton, Projectile, SandboxState, build_pendulum,
    dispatch, tick,
};

const WIDTH: f32 = 1920.0;
const HEIGHT: f32 = 1080.0;

fn sandbox() -> (SandboxState, Settings) {
    let settings = Settings::default();
    let state = SandboxState::new(&settings, WIDTH, HEIGHT);
    (state, settings)
}

fn click(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerPressed {
        button: PointerButton::Primary,
        position: Vec2::new(x, y),
    }
}

#[test]
fn place_aim_launch_delete() {
    let (mut state, settings) = sandbox();
    let before = state.world.body_count();

    dispatch(&mut state, &settings, [click(400.0, 500.0)]);
    let body = state.projectile.body().expect("ball placed");
    assert_eq!(state.world.body_count(), before + 1);

    // Aim line follows the pointer while placed and the ball does not move
    for pointer in [Vec2::new(410.0, 520.0), Vec2::new(350.0, 560.0)] {
        let line = state.aim_line(pointer).expect("aim line while placed");
        assert_eq!(line.start, Vec2::new(400.0, 500.0));
        assert_eq!(line.end, pointer);
        tick(&mut state);
    }
    assert_eq!(state.world.body_position(body), Some(Vec2::new(400.0, 500.0)));

    dispatch(&mut state, &settings, [click(350.0, 560.0)]);
    assert_eq!(state.projectile, Projectile::Launched { body });
    assert_eq!(state.world.body_kind(body), Some(BodyKind::Dynamic));
    assert!(state.aim_line(Vec2::ZERO).is_none());

    tick(&mut state);
    // Dragged down-left, so it flies up-right
    let vel = state.world.body_velocity(body).unwrap();
    assert!(vel.x > 0.0 && vel.y < 0.0, "vel = {vel:?}");

    dispatch(&mut state, &settings, [click(0.0, 0.0)]);
    assert_eq!(state.projectile, Projectile::Absent);
    assert_eq!(state.world.body_count(), before);
}

#[test]
fn downward_drag_launches_upward() {
    let (mut state, settings) = sandbox();
    dispatch(&mut state, &settings, [click(100.0, 100.0), click(100.0, 200.0)]);
    let body = state.projectile.body().unwrap();

    tick(&mut state);
    let vel = state.world.body_velocity(body).unwrap();
    // 5000 impulse on mass 10, minus one step of gravity
    assert!(vel.x.abs() < 0.5, "vel = {vel:?}");
    assert!(vel.y < -480.0 && vel.y > -520.0, "vel = {vel:?}");
}

#[test]
fn zero_drag_launch_just_falls() {
    let (mut state, settings) = sandbox();
    dispatch(&mut state, &settings, [click(960.0, 400.0), click(960.0, 400.0)]);
    let body = state.projectile.body().unwrap();
    assert_eq!(state.world.body_kind(body), Some(BodyKind::Dynamic));

    for _ in 0..24 {
        tick(&mut state);
    }
    let pos = state.world.body_position(body).unwrap();
    assert!(pos.y > 400.0);
    assert!((pos.x - 960.0).abs() < 0.01);
}

#[test]
fn at_most_one_projectile() {
    let (mut state, settings) = sandbox();
    let before = state.world.body_count();

    for i in 0..9 {
        dispatch(&mut state, &settings, [click(300.0 + i as f32, 700.0)]);
        assert!(state.world.body_count() <= before + 1);
        tick(&mut state);
    }
    // 9 clicks = 3 full cycles
    assert_eq!(state.projectile, Projectile::Absent);
    assert_eq!(state.world.body_count(), before);
}

#[test]
fn pause_round_trip_skips_only_paused_frames() {
    let (mut state, settings) = sandbox();
    let pause = InputEvent::KeyPressed(Key::Space);

    for _ in 0..10 {
        tick(&mut state);
    }
    dispatch(&mut state, &settings, [pause]);
    assert!(!tick(&mut state));
    dispatch(&mut state, &settings, [pause]);
    for _ in 0..10 {
        tick(&mut state);
    }

    assert_eq!(state.steps, 20);
    assert!((state.elapsed() - 20.0 / 240.0).abs() < 1e-6);
}

#[test]
fn double_toggle_in_one_frame_keeps_running() {
    let (mut state, settings) = sandbox();
    let pause = InputEvent::KeyPressed(Key::Space);
    dispatch(&mut state, &settings, [pause, pause]);
    assert!(tick(&mut state));
}

#[test]
fn paused_world_is_frozen() {
    let (mut state, settings) = sandbox();
    dispatch(&mut state, &settings, [click(960.0, 400.0), click(960.0, 300.0)]);
    let body = state.projectile.body().unwrap();
    tick(&mut state);

    dispatch(&mut state, &settings, [InputEvent::KeyPressed(Key::Space)]);
    let frozen = state.world.body_position(body);
    for _ in 0..30 {
        tick(&mut state);
    }
    assert_eq!(state.world.body_position(body), frozen);

    // Clicking still works while paused
    dispatch(&mut state, &settings, [click(0.0, 0.0)]);
    assert_eq!(state.projectile, Projectile::Absent);
}

#[test]
fn quit_and_close_stop_the_loop() {
    let (mut state, settings) = sandbox();
    dispatch(&mut state, &settings, [InputEvent::KeyPressed(Key::Letter('Q'))]);
    assert!(!state.running);

    let (mut state, settings) = sandbox();
    dispatch(&mut state, &settings, [InputEvent::CloseRequested, click(5.0, 5.0)]);
    assert!(!state.running);
    assert_eq!(state.projectile, Projectile::Absent);
}

#[test]
fn pendulum_swings_on_a_fixed_pin() {
    let mut world = PhysicsWorld::new(Vec2::new(0.0, 981.0), 1.0 / 240.0);
    let pendulum = build_pendulum(&mut world);
    let anchor = world.body_position(pendulum.anchor).unwrap();
    let pin = (world.body_position(pendulum.body).unwrap() - anchor).length();
    assert_eq!(pin, 100.0);

    let mut min_dx = f32::MAX;
    let mut max_dx = f32::MIN;
    for _ in 0..240 * 6 {
        world.step();
        let bob = world.shape_position(pendulum.bob).unwrap();
        let dx = bob.x - anchor.x;
        min_dx = min_dx.min(dx);
        max_dx = max_dx.max(dx);

        let d = (world.body_position(pendulum.body).unwrap() - anchor).length();
        assert!((d - pin).abs() < 2.0, "pin length drifted to {d}");
    }

    // Starts out to the right; swinging carries it across the vertical
    assert!(min_dx < 0.0, "min dx = {min_dx}");
    assert!(max_dx > 0.0);
    assert_eq!(world.body_position(pendulum.anchor), Some(anchor));
}

#[test]
fn pendulum_pin_resists_push_toward_pivot() {
    let mut world = PhysicsWorld::new(Vec2::new(0.0, 981.0), 1.0 / 240.0);
    let pendulum = build_pendulum(&mut world);
    let anchor = world.body_position(pendulum.anchor).unwrap();

    // Body origin sits straight below the pivot at startup
    world.apply_impulse_at_local_point(pendulum.body, Vec2::new(0.0, -8000.0), Vec2::ZERO);

    let mut lo = f32::MAX;
    let mut hi = f32::MIN;
    for _ in 0..240 * 2 {
        world.step();
        let d = (world.body_position(pendulum.body).unwrap() - anchor).length();
        lo = lo.min(d);
        hi = hi.max(d);
    }
    assert!(lo > 98.0, "pin compressed to {lo}");
    assert!(hi < 102.0, "pin stretched to {hi}");
}
