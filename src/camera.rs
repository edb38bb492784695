//! Host camera coupling.
//!
//! The camera is owned by the host renderer; the controller only writes
//! into it. [`CameraTransform`] is the write seam — once per frame the
//! controller pushes the externally supplied position and the smoothed
//! rotation through it. [`Camera`] is a minimal free-standing transform
//! for hosts without their own camera type, and for tests.

use glam::{Quat, Vec3};

/// Mutable camera surface written by the controller once per frame.
///
/// Implement this on whatever transform type the host renderer exposes.
/// Both writes follow a last-writer-wins, once-per-frame policy; there is
/// no transactional coupling between position and rotation.
pub trait CameraTransform {
    /// Overwrite the camera's world position.
    fn set_position(&mut self, position: Vec3);

    /// Overwrite the camera's rotation.
    fn set_rotation(&mut self, rotation: Quat);
}

/// Minimal free-standing camera transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World position.
    pub position: Vec3,
    /// Rotation quaternion.
    pub rotation: Quat,
}

impl Camera {
    /// Camera at the origin with identity rotation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraTransform for Camera {
    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_land_on_the_transform() {
        let mut camera = Camera::new();
        camera.set_position(Vec3::new(1.0, 2.0, 3.0));
        camera.set_rotation(Quat::from_rotation_y(0.5));

        assert_eq!(camera.position, Vec3::new(1.0, 2.0, 3.0));
        assert!((camera.rotation.length() - 1.0).abs() < 1e-6);
    }
}
