// Pure scene graph for the space backdrop.
//
// Split in two: `SceneAssets` is the fixed, seeded geometry (star shell,
// particle cloud, streak spawn points, body placements) and `SceneState`
// is the handful of scalars that change per frame. `SceneState::advanced`
// is a pure function of (previous state, inputs, dt); the renderer maps
// both to sprite instances. No platform types appear here, so the whole
// module runs under native tests.

use crate::constants::*;
use glam::{Mat3, Mat4, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Input signals sampled once at the top of each frame.
#[derive(Default, Clone, Copy, Debug)]
pub struct FrameInputs {
    pub scroll_y: f32,
}

/// Camera rig: scroll drives a descent along Y, a pull-back along Z, and a
/// slight pitch, producing the parallax depth illusion.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub pitch: f32,
}

impl Camera {
    pub fn for_scroll(scroll_y: f32) -> Self {
        let norm = scroll_y / SCROLL_REF_MAX;
        Self {
            eye: Vec3::new(
                0.0,
                -norm * CAMERA_Y_TRAVEL,
                CAMERA_BASE_Z + norm * CAMERA_Z_TRAVEL,
            ),
            pitch: norm * CAMERA_TILT_MAX,
        }
    }

    /// World-to-view transform.
    pub fn view_matrix(&self) -> Mat4 {
        (Mat4::from_translation(self.eye) * Mat4::from_rotation_x(self.pitch)).inverse()
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(CAMERA_FOVY_RADIANS, aspect, CAMERA_ZNEAR, CAMERA_ZFAR)
    }
}

/// Per-frame dynamic state. Copy-cheap so each tick produces a fresh value
/// instead of mutating shared handles.
#[derive(Clone, Copy, Debug)]
pub struct SceneState {
    pub time: f32,
    pub scroll_y: f32,
    pub camera: Camera,
    pub planet_spin: f32,
    pub moon_angle: f32,
    pub cloud_yaw: f32,
    pub cloud_pitch: f32,
}

impl SceneState {
    pub fn initial() -> Self {
        Self {
            time: 0.0,
            scroll_y: 0.0,
            camera: Camera::for_scroll(0.0),
            planet_spin: 0.0,
            moon_angle: 0.0,
            cloud_yaw: 0.0,
            cloud_pitch: 0.0,
        }
    }

    /// Next frame's state from the previous one, the sampled inputs, and the
    /// elapsed interval. Bodies spin at fixed angular rates regardless of
    /// input; everything scroll-dependent is recomputed from the latest
    /// offset rather than integrated, so a missed frame cannot drift.
    pub fn advanced(&self, inputs: &FrameInputs, dt: f32) -> Self {
        Self {
            time: self.time + dt,
            scroll_y: inputs.scroll_y,
            camera: Camera::for_scroll(inputs.scroll_y),
            planet_spin: self.planet_spin + PLANET_SPIN_RAD_PER_SEC * dt,
            moon_angle: self.moon_angle + MOON_ORBIT_RAD_PER_SEC * dt,
            cloud_yaw: self.cloud_yaw + PARTICLE_YAW_RAD_PER_SEC * dt,
            cloud_pitch: self.cloud_pitch + PARTICLE_PITCH_RAD_PER_SEC * dt,
        }
    }

    /// Aggregate rotation applied to every particle point.
    pub fn cloud_rotation(&self) -> Mat3 {
        Mat3::from_rotation_y(self.cloud_yaw) * Mat3::from_rotation_x(self.cloud_pitch)
    }
}

/// A decorative planet: fixed placement plus scroll-driven drift.
#[derive(Clone, Copy, Debug)]
pub struct PlanetSpec {
    pub base: Vec3,
    pub size: f32,
    pub color: [f32; 3],
    pub ringed: bool,
    pub scroll_multiplier: f32,
}

impl PlanetSpec {
    /// Scroll lifts the body and sways it sideways on a long sine.
    pub fn position(&self, scroll_y: f32) -> Vec3 {
        let lift = (scroll_y / PLANET_PARALLAX_DIVISOR) * self.scroll_multiplier
            * PLANET_PARALLAX_GAIN;
        let sway = (scroll_y / PLANET_SWAY_DIVISOR).sin()
            * PLANET_SWAY_AMPLITUDE
            * self.scroll_multiplier;
        self.base + Vec3::new(sway, lift, 0.0)
    }
}

/// Position of the moon orbiting the primary planet.
pub fn moon_position(primary: Vec3, orbit_angle: f32) -> Vec3 {
    let offset = Mat3::from_rotation_y(orbit_angle)
        * Vec3::new(MOON_OFFSET_X, MOON_OFFSET_Y, 0.0);
    primary + offset
}

/// Drifter sprite position: idle sine float plus scroll lift and sway.
pub fn drifter_position(base: Vec3, time: f32, scroll_y: f32) -> Vec3 {
    let float_y = (time * DRIFTER_FLOAT_FREQ).sin() * DRIFTER_FLOAT_AMPLITUDE;
    let lift = (scroll_y / DRIFTER_SCROLL_DIVISOR) * DRIFTER_SCROLL_GAIN;
    let sway = (scroll_y / DRIFTER_SWAY_DIVISOR).sin() * DRIFTER_SWAY_AMPLITUDE;
    Vec3::new(base.x + sway, base.y + float_y + lift, base.z)
}

/// Drifter roll angle: slow idle wobble plus a scroll-proportional lean.
pub fn drifter_roll(time: f32, scroll_y: f32) -> f32 {
    (time * DRIFTER_ROLL_FREQ).sin() * DRIFTER_ROLL_AMPLITUDE
        + (scroll_y / DRIFTER_ROLL_SCROLL_DIVISOR) * DRIFTER_ROLL_SCROLL_GAIN
}

/// Horizon glow plane, drifting up slowly with scroll.
pub fn horizon_position(scroll_y: f32) -> Vec3 {
    Vec3::new(
        0.0,
        HORIZON_BASE_Y + (scroll_y / HORIZON_PARALLAX_DIVISOR) * HORIZON_PARALLAX_GAIN,
        HORIZON_Z,
    )
}

/// Vertical offset applied to the whole particle cloud.
pub fn particle_cloud_offset_y(scroll_y: f32) -> f32 {
    (scroll_y / PARTICLE_SCROLL_DIVISOR) * PARTICLE_SCROLL_GAIN
}

/// One point of the background star shell. Twinkle is evaluated in the
/// shader from phase/speed so the point itself never mutates.
#[derive(Clone, Copy, Debug)]
pub struct Star {
    pub position: Vec3,
    pub size: f32,
    pub brightness: f32,
    pub twinkle_speed: f32,
    pub twinkle_phase: f32,
}

/// One point of the floating particle cloud.
#[derive(Clone, Copy, Debug)]
pub struct ParticlePoint {
    pub position: Vec3,
    pub color: [f32; 3],
}

/// Phase of a streak cycle in [0, STREAK_PERIOD).
pub fn streak_phase(time: f32, delay: f32) -> f32 {
    ((time + delay) * STREAK_TIME_SCALE).rem_euclid(STREAK_PERIOD)
}

/// Sampled position of an active streak.
#[derive(Clone, Copy, Debug)]
pub struct StreakSample {
    pub position: Vec3,
    /// Fraction of the active window already traversed, in [0, 1).
    pub progress: f32,
}

/// A shooting star: invisible outside its active window, sweeping a straight
/// line through it. The cycle is a pure function of elapsed time and the
/// per-instance delay; no event ever drives it.
#[derive(Clone, Copy, Debug)]
pub struct Streak {
    pub spawn: Vec3,
    pub delay: f32,
}

impl Streak {
    pub fn sample(&self, time: f32) -> Option<StreakSample> {
        let phase = streak_phase(time, self.delay);
        if phase < STREAK_ACTIVE_SEC {
            let velocity =
                Vec3::new(STREAK_VELOCITY_X, STREAK_VELOCITY_Y, STREAK_VELOCITY_Z);
            Some(StreakSample {
                position: self.spawn + velocity * phase,
                progress: phase / STREAK_ACTIVE_SEC,
            })
        } else {
            None
        }
    }
}

/// Fixed geometry, generated once from the seed at mount.
pub struct SceneAssets {
    pub stars: Vec<Star>,
    pub particles: Vec<ParticlePoint>,
    pub streaks: Vec<Streak>,
    pub planets: [PlanetSpec; 2],
    pub drifter_base: Vec3,
}

impl SceneAssets {
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let stars = (0..STAR_COUNT)
            .map(|_| {
                let dir = unit_sphere_dir(&mut rng);
                let radius = STAR_SHELL_RADIUS + rng.gen::<f32>() * STAR_SHELL_DEPTH;
                Star {
                    position: dir * radius,
                    size: 0.4 + rng.gen::<f32>() * 0.8,
                    brightness: 0.3 + rng.gen::<f32>() * 0.7,
                    twinkle_speed: 2.0 + rng.gen::<f32>() * 3.0,
                    twinkle_phase: rng.gen::<f32>() * std::f32::consts::TAU,
                }
            })
            .collect();

        let particles = (0..PARTICLE_COUNT)
            .map(|_| {
                let position = Vec3::new(
                    (rng.gen::<f32>() - 0.5) * PARTICLE_BOX_X,
                    (rng.gen::<f32>() - 0.5) * PARTICLE_BOX_Y,
                    (rng.gen::<f32>() - 0.5) * PARTICLE_BOX_Z,
                );
                // violet gradient, brighter toward the blue end
                let t = rng.gen::<f32>();
                ParticlePoint {
                    position,
                    color: [0.5 + t * 0.3, 0.2 + t * 0.2, 0.8 + t * 0.2],
                }
            })
            .collect();

        let streaks = (0..STREAK_COUNT)
            .map(|i| Streak {
                spawn: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * STREAK_SPAWN_X_SPAN,
                    STREAK_SPAWN_Y_MIN + rng.gen::<f32>() * STREAK_SPAWN_Y_SPAN,
                    STREAK_SPAWN_Z,
                ),
                delay: i as f32 * STREAK_DELAY_STEP_SEC,
            })
            .collect();

        let planets = [
            PlanetSpec {
                base: Vec3::new(6.0, -2.0, -8.0),
                size: 3.0,
                color: [0.29, 0.10, 0.48],
                ringed: true,
                scroll_multiplier: 1.0,
            },
            PlanetSpec {
                base: Vec3::new(-8.0, 3.0, -12.0),
                size: 1.5,
                color: [0.10, 0.29, 0.42],
                ringed: false,
                scroll_multiplier: 0.6,
            },
        ];

        Self {
            stars,
            particles,
            streaks,
            planets,
            drifter_base: Vec3::new(6.0, -4.0, -1.0),
        }
    }
}

fn unit_sphere_dir(rng: &mut StdRng) -> Vec3 {
    let z = rng.gen::<f32>() * 2.0 - 1.0;
    let azimuth = rng.gen::<f32>() * std::f32::consts::TAU;
    let planar = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(planar * azimuth.cos(), z, planar * azimuth.sin())
}
