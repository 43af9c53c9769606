// Host-side tests for the pure scene graph.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod scene {
    include!("../src/scene.rs");
}

use constants::*;
use scene::{
    drifter_position, horizon_position, moon_position, particle_cloud_offset_y, streak_phase,
    Camera, FrameInputs, SceneAssets, SceneState,
};

const FRAME_DT: f32 = 1.0 / 60.0;

#[test]
fn camera_is_at_rest_with_no_scroll() {
    let camera = Camera::for_scroll(0.0);
    assert_eq!(camera.eye.y, 0.0);
    assert_eq!(camera.eye.z, CAMERA_BASE_Z);
    assert_eq!(camera.pitch, 0.0);
}

#[test]
fn camera_reaches_full_parallax_travel_at_reference_scroll() {
    let camera = Camera::for_scroll(SCROLL_REF_MAX);
    assert!((camera.eye.y - (-8.0)).abs() < 1e-5);
    assert!((camera.eye.z - (CAMERA_BASE_Z + 3.0)).abs() < 1e-5);
    assert!((camera.pitch - CAMERA_TILT_MAX).abs() < 1e-6);
}

#[test]
fn camera_travel_scales_linearly_between_endpoints() {
    let halfway = Camera::for_scroll(SCROLL_REF_MAX * 0.5);
    assert!((halfway.eye.y - (-4.0)).abs() < 1e-5);
    assert!((halfway.eye.z - (CAMERA_BASE_Z + 1.5)).abs() < 1e-5);
}

#[test]
fn advancing_accumulates_time_and_spins() {
    let state = SceneState::initial();
    let inputs = FrameInputs { scroll_y: 123.0 };
    let next = state.advanced(&inputs, 0.5);

    assert!((next.time - 0.5).abs() < 1e-6);
    assert_eq!(next.scroll_y, 123.0);
    assert!((next.planet_spin - PLANET_SPIN_RAD_PER_SEC * 0.5).abs() < 1e-6);
    assert!((next.moon_angle - MOON_ORBIT_RAD_PER_SEC * 0.5).abs() < 1e-6);
    assert!((next.cloud_yaw - PARTICLE_YAW_RAD_PER_SEC * 0.5).abs() < 1e-6);
    assert!((next.cloud_pitch - PARTICLE_PITCH_RAD_PER_SEC * 0.5).abs() < 1e-6);
    // the previous state is untouched
    assert_eq!(state.time, 0.0);
}

#[test]
fn scroll_is_resampled_not_integrated() {
    let state = SceneState::initial();
    let a = state.advanced(&FrameInputs { scroll_y: 4000.0 }, FRAME_DT);
    // scroll snapped back: camera follows the latest offset exactly
    let b = a.advanced(&FrameInputs { scroll_y: 0.0 }, FRAME_DT);
    assert_eq!(b.camera.eye.y, 0.0);
    assert_eq!(b.camera.eye.z, CAMERA_BASE_Z);
}

#[test]
fn streak_is_invisible_outside_its_active_window() {
    let assets = SceneAssets::generate(SCENE_SEED);
    let streak = &assets.streaks[0]; // delay 0

    // phase = t * TIME_SCALE; active while phase < STREAK_ACTIVE_SEC
    let active_end = STREAK_ACTIVE_SEC / STREAK_TIME_SCALE;
    let period_end = STREAK_PERIOD / STREAK_TIME_SCALE;

    assert!(streak.sample(0.0).is_some());
    assert!(streak.sample(active_end * 0.5).is_some());
    assert!(streak.sample(active_end + 0.01).is_none());
    assert!(streak.sample(period_end - 0.01).is_none());
    // next period: visible again
    assert!(streak.sample(period_end + 0.01).is_some());
}

#[test]
fn streak_traversal_is_strictly_increasing_while_active() {
    let assets = SceneAssets::generate(SCENE_SEED);
    for streak in &assets.streaks {
        let start = -streak.delay; // phase 0 for this instance
        let mut prev_x = f32::NEG_INFINITY;
        let mut prev_progress = -1.0;
        let mut samples = 0;
        for step in 0..70 {
            let t = start + step as f32 * 0.05;
            if let Some(sample) = streak.sample(t) {
                assert!(sample.position.x > prev_x);
                assert!(sample.progress > prev_progress);
                assert!(sample.progress < 1.0);
                prev_x = sample.position.x;
                prev_progress = sample.progress;
                samples += 1;
            }
        }
        assert!(samples > 10, "active window never sampled");
    }
}

#[test]
fn streak_phase_wraps_every_period() {
    let phase = streak_phase(0.0, 0.0);
    for cycle in 1..4 {
        let t = cycle as f32 * STREAK_PERIOD / STREAK_TIME_SCALE;
        assert!((streak_phase(t, 0.0) - phase).abs() < 1e-3);
    }
}

#[test]
fn streak_delays_stagger_the_instances() {
    let assets = SceneAssets::generate(SCENE_SEED);
    for (i, streak) in assets.streaks.iter().enumerate() {
        assert!((streak.delay - i as f32 * STREAK_DELAY_STEP_SEC).abs() < 1e-6);
    }
}

#[test]
fn assets_are_deterministic_for_a_seed() {
    let a = SceneAssets::generate(SCENE_SEED);
    let b = SceneAssets::generate(SCENE_SEED);
    assert_eq!(a.stars.len(), STAR_COUNT);
    assert_eq!(a.particles.len(), PARTICLE_COUNT);
    assert_eq!(a.streaks.len(), STREAK_COUNT);
    for (sa, sb) in a.stars.iter().zip(&b.stars) {
        assert_eq!(sa.position, sb.position);
        assert_eq!(sa.twinkle_phase, sb.twinkle_phase);
    }
    for (pa, pb) in a.particles.iter().zip(&b.particles) {
        assert_eq!(pa.position, pb.position);
    }
}

#[test]
fn generated_geometry_stays_inside_its_bounds() {
    let assets = SceneAssets::generate(SCENE_SEED);
    for star in &assets.stars {
        let r = star.position.length();
        assert!(r >= STAR_SHELL_RADIUS - 1e-3);
        assert!(r <= STAR_SHELL_RADIUS + STAR_SHELL_DEPTH + 1e-3);
        assert!(r < CAMERA_ZFAR, "star beyond the far plane");
    }
    for point in &assets.particles {
        assert!(point.position.x.abs() <= PARTICLE_BOX_X / 2.0);
        assert!(point.position.y.abs() <= PARTICLE_BOX_Y / 2.0);
        assert!(point.position.z.abs() <= PARTICLE_BOX_Z / 2.0);
    }
    for streak in &assets.streaks {
        assert!(streak.spawn.x.abs() <= STREAK_SPAWN_X_SPAN / 2.0);
        assert!(streak.spawn.y >= STREAK_SPAWN_Y_MIN);
        assert!(streak.spawn.y <= STREAK_SPAWN_Y_MIN + STREAK_SPAWN_Y_SPAN);
        assert_eq!(streak.spawn.z, STREAK_SPAWN_Z);
    }
}

#[test]
fn planet_parallax_follows_the_scroll_law() {
    let assets = SceneAssets::generate(SCENE_SEED);
    let primary = &assets.planets[0];

    let rest = primary.position(0.0);
    assert_eq!(rest, primary.base);

    let scrolled = primary.position(1000.0);
    let expected_lift = primary.scroll_multiplier * PLANET_PARALLAX_GAIN;
    assert!((scrolled.y - (primary.base.y + expected_lift)).abs() < 1e-4);
    let expected_sway = (1000.0_f32 / PLANET_SWAY_DIVISOR).sin()
        * PLANET_SWAY_AMPLITUDE
        * primary.scroll_multiplier;
    assert!((scrolled.x - (primary.base.x + expected_sway)).abs() < 1e-4);
    assert_eq!(scrolled.z, primary.base.z);
}

#[test]
fn moon_orbits_its_primary() {
    let primary = glam::Vec3::new(6.0, -2.0, -8.0);

    let at_zero = moon_position(primary, 0.0);
    assert!((at_zero - (primary + glam::Vec3::new(MOON_OFFSET_X, MOON_OFFSET_Y, 0.0)))
        .length()
        < 1e-5);

    let half_turn = moon_position(primary, std::f32::consts::PI);
    assert!((half_turn.x - (primary.x - MOON_OFFSET_X)).abs() < 1e-4);
    assert!((half_turn.y - (primary.y + MOON_OFFSET_Y)).abs() < 1e-5);

    // constant orbital radius
    for angle in [0.3_f32, 1.7, 4.4] {
        let pos = moon_position(primary, angle);
        let radial = (pos - primary - glam::Vec3::new(0.0, MOON_OFFSET_Y, 0.0)).length();
        assert!((radial - MOON_OFFSET_X).abs() < 1e-4);
    }
}

#[test]
fn drifter_floats_on_a_sine_and_rides_the_scroll() {
    let base = glam::Vec3::new(6.0, -4.0, -1.0);

    let rest = drifter_position(base, 0.0, 0.0);
    assert!((rest - base).length() < 1e-6);

    // quarter period of the float sine: peak amplitude
    let quarter = std::f32::consts::PI / (2.0 * DRIFTER_FLOAT_FREQ);
    let floated = drifter_position(base, quarter, 0.0);
    assert!((floated.y - (base.y + DRIFTER_FLOAT_AMPLITUDE)).abs() < 1e-4);

    let scrolled = drifter_position(base, 0.0, DRIFTER_SCROLL_DIVISOR);
    assert!((scrolled.y - (base.y + DRIFTER_SCROLL_GAIN)).abs() < 1e-4);
}

#[test]
fn horizon_and_particles_parallax_with_scroll() {
    assert_eq!(
        horizon_position(0.0),
        glam::Vec3::new(0.0, HORIZON_BASE_Y, HORIZON_Z)
    );
    let lifted = horizon_position(HORIZON_PARALLAX_DIVISOR);
    assert!((lifted.y - (HORIZON_BASE_Y + HORIZON_PARALLAX_GAIN)).abs() < 1e-4);

    assert_eq!(particle_cloud_offset_y(0.0), 0.0);
    assert!(
        (particle_cloud_offset_y(PARTICLE_SCROLL_DIVISOR) - PARTICLE_SCROLL_GAIN).abs() < 1e-5
    );
}
