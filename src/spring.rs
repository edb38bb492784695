//! Damped-spring smoothing for the camera orientation.
//!
//! Each rotation axis is animated by an independent [`SpringChannel`]: a
//! current value, a current velocity, and a target the value relaxes
//! toward under a fixed physical configuration. Pointer events retarget
//! the channels at an arbitrary rate, unsynchronized with render ticks;
//! because retargeting preserves velocity, an interrupted gesture
//! produces a continuous correction instead of a visible jerk. That
//! velocity continuity is the reason for a physical model here rather
//! than a parametric tween.

use glam::Vec3;

use crate::orientation::Orientation;

/// Integration substep ceiling in seconds. Frame deltas longer than this
/// are split so the semi-implicit Euler step stays stable.
const MAX_SUBSTEP: f32 = 1.0 / 240.0;

/// Physical configuration of a spring channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Restoring force per unit displacement.
    pub stiffness: f32,
    /// Drag force per unit velocity.
    pub damping: f32,
    /// Virtual mass of the animated value. Must be positive.
    pub mass: f32,
}

impl SpringConfig {
    /// Configuration that returns to rest as fast as possible without
    /// overshoot: `damping = 2·√(stiffness · mass)`.
    #[must_use]
    pub fn critically_damped(stiffness: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping: 2.0 * (stiffness.max(f32::EPSILON)
                * mass.max(f32::EPSILON))
            .sqrt(),
            mass,
        }
    }
}

impl Default for SpringConfig {
    /// Default preset: stiffness 170, damping 26, mass 1 — critically
    /// damped to within rounding.
    fn default() -> Self {
        Self {
            stiffness: 170.0,
            damping: 26.0,
            mass: 1.0,
        }
    }
}

/// One damped-spring animation channel.
///
/// Invariants: `value` asymptotically approaches `target`; `velocity` is
/// zero at rest.
#[derive(Debug, Clone, Copy)]
pub struct SpringChannel {
    value: f32,
    velocity: f32,
    target: f32,
    config: SpringConfig,
}

impl SpringChannel {
    /// Channel at rest at `value`.
    #[must_use]
    pub fn new(value: f32, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            config,
        }
    }

    /// Current interpolated value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Velocity from the most recent integration step.
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Value the channel is animating toward.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget the channel. Velocity is intentionally left untouched so
    /// a target change mid-animation continues the current motion.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump straight to `value` at rest, abandoning any animation.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Advance the spring by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        let mass = self.config.mass.max(f32::EPSILON);
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let step = remaining.min(MAX_SUBSTEP);
            let acceleration = (self.config.stiffness
                * (self.target - self.value)
                - self.config.damping * self.velocity)
                / mass;
            self.velocity += acceleration * step;
            self.value += self.velocity * step;
            remaining -= step;
        }
    }

    /// Whether value and velocity are both within `epsilon` of rest.
    #[must_use]
    pub fn settled(&self, epsilon: f32) -> bool {
        (self.value - self.target).abs() < epsilon
            && self.velocity.abs() < epsilon
    }
}

/// The three per-axis channels smoothing the camera orientation.
#[derive(Debug, Clone, Copy)]
pub struct OrientationSprings {
    yaw: SpringChannel,
    pitch: SpringChannel,
    roll: SpringChannel,
}

impl OrientationSprings {
    /// Channels at rest at `initial`, all sharing one configuration.
    #[must_use]
    pub fn new(initial: Orientation, config: SpringConfig) -> Self {
        Self {
            yaw: SpringChannel::new(initial.yaw, config),
            pitch: SpringChannel::new(initial.pitch, config),
            roll: SpringChannel::new(initial.roll, config),
        }
    }

    /// Push a new target for all three axes, preserving velocity.
    pub fn set_target(&mut self, target: Orientation) {
        self.yaw.set_target(target.yaw);
        self.pitch.set_target(target.pitch);
        self.roll.set_target(target.roll);
    }

    /// Advance all channels by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.yaw.tick(dt);
        self.pitch.tick(dt);
        self.roll.tick(dt);
    }

    /// Smoothed orientation (current channel values).
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        Orientation::new(
            self.yaw.value(),
            self.pitch.value(),
            self.roll.value(),
        )
    }

    /// Orientation the channels are animating toward.
    #[must_use]
    pub fn target(&self) -> Orientation {
        Orientation::new(
            self.yaw.target(),
            self.pitch.target(),
            self.roll.target(),
        )
    }

    /// Angular rate per axis (yaw, pitch, roll) in radians per second,
    /// from the most recent integration step.
    #[must_use]
    pub fn angular_velocity(&self) -> Vec3 {
        Vec3::new(
            self.yaw.velocity(),
            self.pitch.velocity(),
            self.roll.velocity(),
        )
    }

    /// The yaw channel.
    #[must_use]
    pub fn yaw(&self) -> &SpringChannel {
        &self.yaw
    }

    /// The pitch channel.
    #[must_use]
    pub fn pitch(&self) -> &SpringChannel {
        &self.pitch
    }

    /// The roll channel.
    #[must_use]
    pub fn roll(&self) -> &SpringChannel {
        &self.roll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn converges_to_a_held_target() {
        let mut channel = SpringChannel::new(0.0, SpringConfig::default());
        channel.set_target(1.0);

        // Three simulated seconds at 60 Hz.
        for _ in 0..180 {
            channel.tick(FRAME);
        }

        assert!((channel.value() - 1.0).abs() < 1e-3);
        assert!(channel.velocity().abs() < 1e-3);
        assert!(channel.settled(1e-3));
    }

    #[test]
    fn retarget_preserves_velocity() {
        let mut channel = SpringChannel::new(0.0, SpringConfig::default());
        channel.set_target(1.0);
        for _ in 0..6 {
            channel.tick(FRAME);
        }
        let mid_flight = channel.velocity();
        assert!(mid_flight > 0.0);

        channel.set_target(-1.0);
        assert_eq!(channel.velocity(), mid_flight);
        assert_eq!(channel.target(), -1.0);
    }

    #[test]
    fn snap_comes_to_rest_immediately() {
        let mut channel = SpringChannel::new(0.0, SpringConfig::default());
        channel.set_target(5.0);
        for _ in 0..10 {
            channel.tick(FRAME);
        }

        channel.snap_to(2.0);
        assert_eq!(channel.value(), 2.0);
        assert_eq!(channel.target(), 2.0);
        assert_eq!(channel.velocity(), 0.0);
    }

    #[test]
    fn large_frame_delta_stays_stable() {
        let mut channel = SpringChannel::new(0.0, SpringConfig::default());
        channel.set_target(1.0);

        // A half-second hitch must not blow the integrator up.
        channel.tick(0.5);
        assert!(channel.value().is_finite());
        assert!(channel.value() > 0.5);
        assert!(channel.value() < 1.5);
    }

    #[test]
    fn critically_damped_does_not_overshoot() {
        let config = SpringConfig::critically_damped(170.0, 1.0);
        let mut channel = SpringChannel::new(0.0, config);
        channel.set_target(1.0);

        for _ in 0..600 {
            channel.tick(FRAME);
            assert!(channel.value() <= 1.0 + 1e-4);
        }
        assert!(channel.settled(1e-3));
    }

    #[test]
    fn triple_tracks_targets_per_axis() {
        let mut springs = OrientationSprings::new(
            Orientation::ZERO,
            SpringConfig::default(),
        );
        springs.set_target(Orientation::new(-0.16, 0.08, 0.0));

        for _ in 0..240 {
            springs.tick(FRAME);
        }

        let orientation = springs.orientation();
        assert!((orientation.yaw - (-0.16)).abs() < 1e-3);
        assert!((orientation.pitch - 0.08).abs() < 1e-3);
        assert_eq!(orientation.roll, 0.0);
        assert!(springs.angular_velocity().length() < 1e-2);
    }

    #[test]
    fn rest_channels_do_not_drift() {
        let initial = Orientation::new(0.4, -0.2, 0.0);
        let mut springs =
            OrientationSprings::new(initial, SpringConfig::default());

        for _ in 0..120 {
            springs.tick(FRAME);
        }

        assert_eq!(springs.orientation(), initial);
        assert_eq!(springs.angular_velocity(), Vec3::ZERO);
    }
}
