//! Camera look direction and the pointer-to-orientation mapping.
//!
//! An [`Orientation`] is an ordered (yaw, pitch, roll) triple composed in
//! fixed YXZ order: yaw outermost, pitch in the middle, roll innermost.
//! The controller holds roll at zero at all times.
//!
//! [`map_pointer`] is the pure core of the interaction pipeline: it turns
//! a pointer position, the drag anchor, and the committed origin
//! orientation into a candidate target orientation, scaled by one of two
//! fixed sensitivity pairs depending on whether a drag gesture is active.

use glam::{EulerRot, Quat, Vec2};

/// Per-axis sensitivity while a drag gesture is active.
const DRAG_SENSITIVITY: Vec2 = Vec2::new(0.16, 0.16);

/// Per-axis sensitivity while merely hovering (no button held).
const HOVER_SENSITIVITY: Vec2 = Vec2::new(0.02, 0.02);

/// Camera look direction as yaw/pitch/roll angles in radians.
///
/// Composition order is fixed (YXZ); two orientations with the same
/// angles always produce the same quaternion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Rotation about the vertical axis.
    pub yaw: f32,
    /// Rotation about the lateral axis.
    pub pitch: f32,
    /// Rotation about the forward axis. Held at zero by the controller.
    pub roll: f32,
}

impl Orientation {
    /// All axes at zero.
    pub const ZERO: Self = Self {
        yaw: 0.0,
        pitch: 0.0,
        roll: 0.0,
    };

    /// Construct from explicit axis angles in radians.
    #[must_use]
    pub const fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Decompose a quaternion in the fixed YXZ order.
    #[must_use]
    pub fn from_quat(rotation: Quat) -> Self {
        let (yaw, pitch, roll) = rotation.to_euler(EulerRot::YXZ);
        Self { yaw, pitch, roll }
    }

    /// Compose into a quaternion in the fixed YXZ order.
    #[must_use]
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, self.roll)
    }
}

/// Whether a pointer sample belongs to an active drag or a hover preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureMode {
    /// Button held: full drag sensitivity.
    Drag,
    /// No button held: reduced preview sensitivity.
    Hover,
}

impl GestureMode {
    fn sensitivity(self) -> Vec2 {
        match self {
            Self::Drag => DRAG_SENSITIVITY,
            Self::Hover => HOVER_SENSITIVITY,
        }
    }
}

/// Optional bound on the pitch axis.
///
/// [`PitchLimit::Free`] reproduces the original drag behavior, where the
/// view may rotate past vertical and flip. Hosts that want to rule that
/// out opt into a symmetric clamp via
/// [`ControlOptions`](crate::options::ControlOptions).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PitchLimit {
    /// No restriction on pitch.
    Free,
    /// Clamp pitch to `[-max, max]` radians.
    Clamped {
        /// Symmetric bound in radians.
        max: f32,
    },
}

impl PitchLimit {
    fn apply(self, pitch: f32) -> f32 {
        match self {
            Self::Free => pitch,
            Self::Clamped { max } => pitch.clamp(-max, max),
        }
    }
}

/// Map a pointer position to a candidate target orientation.
///
/// Pure function: the pixel delta between `pointer` and `anchor` is
/// scaled by the sensitivity for `mode` and applied against the committed
/// `origin`. The working orientation starts from `current` — the camera's
/// true present orientation — so roll (the only axis not rewritten here)
/// reflects what the camera actually shows.
#[must_use]
pub fn map_pointer(
    pointer: Vec2,
    anchor: Vec2,
    origin: Orientation,
    current: Orientation,
    mode: GestureMode,
    limit: PitchLimit,
) -> Orientation {
    let delta = pointer - anchor;
    let sensitivity = mode.sensitivity();

    let mut target = current;
    target.yaw = origin.yaw - (delta.x * sensitivity.x) / 100.0;
    target.pitch =
        limit.apply(origin.pitch - (delta.y * sensitivity.y) / 100.0);
    target
}
