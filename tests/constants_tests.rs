// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_within_reasonable_bounds() {
    assert!(CAMERA_BASE_Z > 0.0);
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > CAMERA_ZNEAR);
    assert!(CAMERA_FOVY_RADIANS > 0.0 && CAMERA_FOVY_RADIANS < std::f32::consts::PI);

    // the far plane must cover the star shell
    assert!(CAMERA_ZFAR > STAR_SHELL_RADIUS + STAR_SHELL_DEPTH);

    // reference scroll maps to finite travel
    assert!(SCROLL_REF_MAX > 0.0);
    assert!(CAMERA_Y_TRAVEL > 0.0);
    assert!(CAMERA_Z_TRAVEL > 0.0);
    assert!(CAMERA_TILT_MAX > 0.0 && CAMERA_TILT_MAX < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn cursor_spring_cannot_oscillate() {
    assert!(CURSOR_SPRING_STIFFNESS > 0.0);
    // at or beyond critical damping; the spring clamps anyway
    assert!(CURSOR_SPRING_DAMPING_RATIO >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn overlay_geometry_grows_on_hover() {
    assert!(RING_HOVER_PX > RING_PX);
    assert!(DOT_HOVER_PX > DOT_PX);
    assert!(GLOW_HOVER_SCALE > 1.0);
    assert!(GLOW_PX > RING_PX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn trail_constants_are_positive_and_bounded() {
    assert!(TRAIL_CAP > 0);
    assert!(TRAIL_CAP <= 16, "trail is meant to stay small");
    assert!(TRAIL_FADE_SEC > 0.0);
    assert!(TRAIL_BASE_PX > 0.0);
    assert!(TRAIL_STEP_PX >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn streak_cycle_has_logical_relationships() {
    assert!(STREAK_COUNT > 0);
    assert!(STREAK_TIME_SCALE > 0.0);
    assert!(STREAK_PERIOD > 0.0);
    // the active window is a proper phase of the repeating period
    assert!(STREAK_ACTIVE_SEC > 0.0);
    assert!(STREAK_ACTIVE_SEC < STREAK_PERIOD);
    // staggered instances never collapse onto the same phase
    assert!(STREAK_DELAY_STEP_SEC * STREAK_TIME_SCALE % STREAK_PERIOD != 0.0);
    // spawn band sits above the horizon and behind the camera plane
    assert!(STREAK_SPAWN_Y_MIN > 0.0);
    assert!(STREAK_SPAWN_Y_SPAN > 0.0);
    assert!(STREAK_SPAWN_Z < 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_population_is_fixed_and_small() {
    assert!(STAR_COUNT > 0);
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_BOX_X > 0.0);
    assert!(PARTICLE_BOX_Y > 0.0);
    assert!(PARTICLE_BOX_Z > 0.0);
    assert!(PARTICLE_SIZE > 0.0);
    // per-frame work stays O(constant): a few thousand sprites at most
    assert!(STAR_COUNT + PARTICLE_COUNT + STREAK_COUNT * 2 < 4096);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn body_motion_rates_are_gentle() {
    assert!(PLANET_SPIN_RAD_PER_SEC > 0.0 && PLANET_SPIN_RAD_PER_SEC < 1.0);
    assert!(MOON_ORBIT_RAD_PER_SEC > PLANET_SPIN_RAD_PER_SEC);
    assert!(PARTICLE_YAW_RAD_PER_SEC > PARTICLE_PITCH_RAD_PER_SEC);
    assert!(DRIFTER_FLOAT_AMPLITUDE > 0.0);
    assert!(DRIFTER_ROLL_AMPLITUDE > 0.0);
    // parallax divisors are all meaningful fractions of the reference scroll
    for divisor in [
        PLANET_PARALLAX_DIVISOR,
        PLANET_SWAY_DIVISOR,
        DRIFTER_SCROLL_DIVISOR,
        DRIFTER_SWAY_DIVISOR,
        DRIFTER_ROLL_SCROLL_DIVISOR,
        HORIZON_PARALLAX_DIVISOR,
        PARTICLE_SCROLL_DIVISOR,
    ] {
        assert!(divisor > 0.0);
        assert!(divisor <= SCROLL_REF_MAX);
    }
}
