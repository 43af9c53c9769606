// Damped-spring smoothing.
//
// Closed-form integration of a spring toward a moving target. The damping
// ratio is clamped to critical (1.0), so a value released from rest
// approaches its target monotonically and never oscillates, regardless of
// the frame interval. Consumers tune stiffness per instance; a stiffer
// spring tracks with less lag.

/// One spring-damped scalar. Track a 2D point with a pair of these.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    omega: f32,
    zeta: f32,
    pub position: f32,
    pub velocity: f32,
}

impl Spring {
    /// `stiffness` is the spring constant (unit mass); `damping_ratio` below
    /// 1.0 is promoted to 1.0 to keep convergence overshoot-free.
    pub fn new(stiffness: f32, damping_ratio: f32, initial: f32) -> Self {
        Self {
            omega: stiffness.max(0.0).sqrt(),
            zeta: damping_ratio.max(1.0),
            position: initial,
            velocity: 0.0,
        }
    }

    /// Jump to `value` with zero velocity, skipping any transient.
    pub fn snap_to(&mut self, value: f32) {
        self.position = value;
        self.velocity = 0.0;
    }

    /// Advance `dt` seconds toward `target` and return the new position.
    ///
    /// Uses the exact solution of the damped oscillator, so large or uneven
    /// `dt` values cannot destabilize the motion.
    pub fn step(&mut self, target: f32, dt: f32) -> f32 {
        if dt <= 0.0 || self.omega <= 0.0 {
            return self.position;
        }
        let x0 = self.position - target;
        let v0 = self.velocity;
        let spread = (self.zeta * self.zeta - 1.0).max(0.0).sqrt();
        if spread < 1e-4 {
            // critically damped: x(t) = (x0 + (v0 + w*x0) t) e^(-w t)
            let decay = (-self.omega * dt).exp();
            let drift = (v0 + self.omega * x0) * dt;
            self.position = target + (x0 + drift) * decay;
            self.velocity = (v0 - self.omega * drift) * decay;
        } else {
            // over-damped: two real roots, both negative
            let r1 = -self.omega * (self.zeta - spread);
            let r2 = -self.omega * (self.zeta + spread);
            let a = (v0 - r2 * x0) / (r1 - r2);
            let b = x0 - a;
            let e1 = (r1 * dt).exp();
            let e2 = (r2 * dt).exp();
            self.position = target + a * e1 + b * e2;
            self.velocity = a * r1 * e1 + b * r2 * e2;
        }
        self.position
    }
}
