/// Scene, camera, and cursor tuning constants.
///
/// These constants express intended behavior (travel distances, time
/// constants, caps) and keep magic numbers out of the code.
// Camera rig
pub const CAMERA_BASE_Z: f32 = 8.0;
pub const CAMERA_FOVY_RADIANS: f32 = std::f32::consts::PI / 3.0; // 60 deg
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 300.0;

// Scroll parallax: full travel is reached at SCROLL_REF_MAX pixels
pub const SCROLL_REF_MAX: f32 = 5000.0;
pub const CAMERA_Y_TRAVEL: f32 = 8.0; // eye.y = -norm * travel
pub const CAMERA_Z_TRAVEL: f32 = 3.0; // eye.z = base + norm * travel
pub const CAMERA_TILT_MAX: f32 = 0.3; // pitch radians at full scroll

// Cursor smoothing spring (ring and glow; the inner dot tracks raw)
pub const CURSOR_SPRING_STIFFNESS: f32 = 300.0;
pub const CURSOR_SPRING_DAMPING_RATIO: f32 = 1.0; // clamped >= 1, no overshoot

// Cursor overlay geometry (CSS pixels)
pub const RING_PX: f32 = 32.0;
pub const RING_HOVER_PX: f32 = 50.0;
pub const DOT_PX: f32 = 6.0;
pub const DOT_HOVER_PX: f32 = 8.0;
pub const GLOW_PX: f32 = 60.0;
pub const GLOW_HOVER_SCALE: f32 = 1.5;

// Pointer trail
pub const TRAIL_CAP: usize = 12;
pub const TRAIL_FADE_SEC: f64 = 0.5;
pub const TRAIL_BASE_PX: f32 = 4.0;
pub const TRAIL_STEP_PX: f32 = 0.5; // older dots render slightly larger

// Decorative planets
pub const PLANET_SPIN_RAD_PER_SEC: f32 = 0.12;
pub const PLANET_PARALLAX_DIVISOR: f32 = 1000.0;
pub const PLANET_PARALLAX_GAIN: f32 = 2.0;
pub const PLANET_SWAY_DIVISOR: f32 = 500.0;
pub const PLANET_SWAY_AMPLITUDE: f32 = 0.5;

// Orbiting moon
pub const MOON_ORBIT_RAD_PER_SEC: f32 = 0.48;
pub const MOON_OFFSET_X: f32 = 2.5;
pub const MOON_OFFSET_Y: f32 = 0.5;
pub const MOON_SIZE: f32 = 0.3;

// Drifter sprite (idle float + scroll drift)
pub const DRIFTER_FLOAT_FREQ: f32 = 0.5;
pub const DRIFTER_FLOAT_AMPLITUDE: f32 = 0.3;
pub const DRIFTER_SCROLL_DIVISOR: f32 = 800.0;
pub const DRIFTER_SCROLL_GAIN: f32 = 1.5;
pub const DRIFTER_SWAY_DIVISOR: f32 = 300.0;
pub const DRIFTER_SWAY_AMPLITUDE: f32 = 1.5;
pub const DRIFTER_ROLL_FREQ: f32 = 0.3;
pub const DRIFTER_ROLL_AMPLITUDE: f32 = 0.1;
pub const DRIFTER_ROLL_SCROLL_DIVISOR: f32 = 2000.0;
pub const DRIFTER_ROLL_SCROLL_GAIN: f32 = 0.5;

// Horizon glow plane
pub const HORIZON_BASE_Y: f32 = -8.0;
pub const HORIZON_Z: f32 = -25.0;
pub const HORIZON_PARALLAX_DIVISOR: f32 = 2000.0;
pub const HORIZON_PARALLAX_GAIN: f32 = 2.0;

// Particle cloud
pub const PARTICLE_COUNT: usize = 400;
pub const PARTICLE_BOX_X: f32 = 40.0;
pub const PARTICLE_BOX_Y: f32 = 60.0;
pub const PARTICLE_BOX_Z: f32 = 40.0;
pub const PARTICLE_YAW_RAD_PER_SEC: f32 = 0.018;
pub const PARTICLE_PITCH_RAD_PER_SEC: f32 = 0.006;
pub const PARTICLE_SCROLL_DIVISOR: f32 = 500.0;
pub const PARTICLE_SCROLL_GAIN: f32 = 3.0;
pub const PARTICLE_SIZE: f32 = 0.06;

// Starfield shell
pub const STAR_COUNT: usize = 800;
pub const STAR_SHELL_RADIUS: f32 = 150.0;
pub const STAR_SHELL_DEPTH: f32 = 80.0;

// Shooting-star streaks: phase = ((t + delay) * TIME_SCALE) mod PERIOD,
// visible while phase < ACTIVE_SEC, sweeping VELOCITY per phase unit
pub const STREAK_COUNT: usize = 5;
pub const STREAK_DELAY_STEP_SEC: f32 = 2.0;
pub const STREAK_TIME_SCALE: f32 = 0.4;
pub const STREAK_PERIOD: f32 = 6.0;
pub const STREAK_ACTIVE_SEC: f32 = 1.5;
pub const STREAK_VELOCITY_X: f32 = 15.0;
pub const STREAK_VELOCITY_Y: f32 = -8.0;
pub const STREAK_VELOCITY_Z: f32 = 8.0;
pub const STREAK_SPAWN_X_SPAN: f32 = 30.0; // centered on 0
pub const STREAK_SPAWN_Y_MIN: f32 = 5.0;
pub const STREAK_SPAWN_Y_SPAN: f32 = 15.0;
pub const STREAK_SPAWN_Z: f32 = -15.0;

// Deterministic placement seed
pub const SCENE_SEED: u64 = 42;
