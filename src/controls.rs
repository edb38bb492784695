//! The drag-look controller: pointer events in, smoothed camera
//! orientation out.
//!
//! [`DragControls`] wires the whole pipeline together. Pointer events —
//! delivered through a [`PointerHub`] subscription or fed directly —
//! update the drag tracker and push mapped targets into the spring
//! channels; once per host frame, [`DragControls::advance`] integrates
//! the springs and [`DragControls::apply`] writes position and rotation
//! into the host camera.
//!
//! Event handling and frame updates share one logical thread; handlers
//! run to completion, never block, and never panic.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use glam::{Quat, Vec2, Vec3};

use crate::camera::CameraTransform;
use crate::input::event::PointerEvent;
use crate::input::hub::{PointerHub, PointerSink, Subscription};
use crate::input::tracker::DragTracker;
use crate::options::ControlOptions;
use crate::orientation::{
    map_pointer, GestureMode, Orientation, PitchLimit,
};
use crate::spring::OrientationSprings;

/// Visual affordance for an active drag, e.g. a grabbing cursor on the
/// host's render surface.
///
/// Both calls are fire-and-forget side effects invoked from the pointer
/// handlers; implementations must not panic.
pub trait DragSurface {
    /// Show the grabbing affordance.
    fn begin_grab(&mut self);

    /// Clear the grabbing affordance.
    fn end_grab(&mut self);
}

/// Everything the controller mutates in response to events and frames.
struct ControlState {
    tracker: DragTracker,
    /// Orientation committed at the end of the last drag gesture.
    origin: Orientation,
    springs: OrientationSprings,
    /// Rotation written to the camera on the last frame (output port).
    rotation: Quat,
    pitch_limit: PitchLimit,
    surface: Option<Box<dyn DragSurface>>,
}

impl ControlState {
    fn map(&self, position: Vec2, mode: GestureMode) -> Orientation {
        // The springs hold the camera's true present orientation (the
        // rotation port is derived from them every frame); reading them
        // directly avoids a lossy quat round trip that would bleed noise
        // into the roll channel.
        map_pointer(
            position,
            self.tracker.anchor(),
            self.origin,
            self.springs.orientation(),
            mode,
            self.pitch_limit,
        )
    }

    fn pointer_down(&mut self, position: Vec2) {
        self.tracker.begin(position);
        if let Some(surface) = self.surface.as_mut() {
            surface.begin_grab();
        }
        log::trace!("drag gesture started at {position}");
    }

    fn pointer_move(&mut self, position: Vec2) {
        let target = self.map(position, self.tracker.mode());
        self.springs.set_target(target);
    }

    fn pointer_up(&mut self, position: Vec2) {
        // Finalize with drag sensitivity against the gesture's anchor,
        // then re-anchor at the release point.
        self.origin = self.map(position, GestureMode::Drag);
        self.tracker.end(position);
        if let Some(surface) = self.surface.as_mut() {
            surface.end_grab();
        }
        log::trace!(
            "drag gesture committed: yaw {} pitch {}",
            self.origin.yaw,
            self.origin.pitch
        );
    }
}

impl PointerSink for ControlState {
    fn handle_event(&mut self, event: PointerEvent) {
        let position = event.position();
        match event {
            PointerEvent::Pressed { .. } => self.pointer_down(position),
            PointerEvent::Moved { .. } => self.pointer_move(position),
            PointerEvent::Released { .. } => self.pointer_up(position),
        }
    }
}

/// Pointer-driven look controller.
///
/// Created with [`DragControls::mount`], driven by pointer events and a
/// per-frame [`advance`](DragControls::advance) call, torn down by
/// [`unmount`](DragControls::unmount) or drop. The camera and the
/// per-frame position stay owned by the host; the controller only writes
/// through the [`CameraTransform`] seam and exposes its own state through
/// read accessors.
pub struct DragControls {
    state: Rc<RefCell<ControlState>>,
    subscription: Option<Subscription>,
}

impl DragControls {
    /// Create a controller and register it with `hub`.
    ///
    /// The rotation output port is seeded from `initial` immediately, so
    /// hosts can read [`rotation`](Self::rotation) before the first
    /// frame. `surface` optionally receives the grabbing affordance
    /// toggles; pass `None` when the host has no styled surface yet.
    #[must_use]
    pub fn mount(
        hub: &PointerHub,
        options: &ControlOptions,
        initial: Orientation,
        surface: Option<Box<dyn DragSurface>>,
    ) -> Self {
        let state = Rc::new(RefCell::new(ControlState {
            tracker: DragTracker::new(),
            origin: initial,
            springs: OrientationSprings::new(
                initial,
                options.spring.to_config(),
            ),
            rotation: initial.to_quat(),
            pitch_limit: options.pitch_limit(),
            surface,
        }));
        let sink: Rc<RefCell<dyn PointerSink>> = state.clone();
        let subscription = hub.subscribe(sink);
        log::debug!("drag controls mounted");
        Self {
            state,
            subscription: Some(subscription),
        }
    }

    /// Release the hub subscription.
    ///
    /// Events dispatched after this point no longer reach the
    /// controller; accessors keep working. Idempotent, and also invoked
    /// on drop, so the registration is released exactly once either way.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.release();
            log::debug!("drag controls unmounted");
        }
    }

    /// Feed one pointer event directly, bypassing the hub.
    pub fn handle_event(&mut self, event: PointerEvent) {
        self.state.borrow_mut().handle_event(event);
    }

    /// Per-frame integration step.
    ///
    /// Advances the spring channels by `dt` and refreshes the rotation
    /// output port. Call once per rendered frame, then
    /// [`apply`](Self::apply) the result to the camera when one is
    /// available; skipping `apply` for a frame is non-fatal and the next
    /// frame catches the camera up.
    pub fn advance(&mut self, dt: Duration) {
        let mut state = self.state.borrow_mut();
        state.springs.tick(dt.as_secs_f32());
        state.rotation = state.springs.orientation().to_quat();
    }

    /// Write the frame's outputs into the host camera.
    ///
    /// Copies `position` (when supplied) verbatim and applies the
    /// smoothed rotation. Writes are last-writer-wins, once per frame.
    pub fn apply(
        &self,
        position: Option<Vec3>,
        camera: &mut dyn CameraTransform,
    ) {
        let state = self.state.borrow();
        if let Some(position) = position {
            camera.set_position(position);
        }
        camera.set_rotation(state.rotation);
    }

    /// Smoothed orientation currently applied to the camera.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.state.borrow().springs.orientation()
    }

    /// Rotation output port: the quaternion form of
    /// [`orientation`](Self::orientation), as last written to the camera.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.state.borrow().rotation
    }

    /// Orientation the springs are animating toward.
    #[must_use]
    pub fn target(&self) -> Orientation {
        self.state.borrow().springs.target()
    }

    /// Orientation committed at the end of the last drag gesture.
    #[must_use]
    pub fn origin(&self) -> Orientation {
        self.state.borrow().origin
    }

    /// Angular rate per axis (yaw, pitch, roll) in radians per second.
    #[must_use]
    pub fn angular_velocity(&self) -> Vec3 {
        self.state.borrow().springs.angular_velocity()
    }

    /// Whether a drag gesture is currently active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.borrow().tracker.dragging()
    }
}

impl Drop for DragControls {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use glam::Vec2;

    use super::*;
    use crate::camera::Camera;
    use crate::orientation::map_pointer;

    const EPS: f32 = 1e-6;

    fn frame() -> Duration {
        Duration::from_secs_f32(1.0 / 60.0)
    }

    fn mounted(hub: &PointerHub) -> DragControls {
        DragControls::mount(
            hub,
            &ControlOptions::default(),
            Orientation::ZERO,
            None,
        )
    }

    #[derive(Clone, Default)]
    struct GrabCounter {
        grabs: Rc<Cell<u32>>,
        releases: Rc<Cell<u32>>,
    }

    impl DragSurface for GrabCounter {
        fn begin_grab(&mut self) {
            self.grabs.set(self.grabs.get() + 1);
        }

        fn end_grab(&mut self) {
            self.releases.set(self.releases.get() + 1);
        }
    }

    #[test]
    fn rotation_port_is_seeded_at_mount() {
        let hub = PointerHub::new();
        let initial = Orientation::new(0.5, -0.25, 0.0);
        let controls = DragControls::mount(
            &hub,
            &ControlOptions::default(),
            initial,
            None,
        );

        let expected = initial.to_quat();
        assert!((controls.rotation().dot(expected).abs() - 1.0).abs() < EPS);
        assert_eq!(controls.origin(), initial);
    }

    #[test]
    fn hundred_pixel_drag_targets_minus_point_sixteen_yaw() {
        let hub = PointerHub::new();
        let controls = mounted(&hub);

        hub.dispatch(PointerEvent::Pressed { x: 100.0, y: 100.0 });
        assert!(controls.is_dragging());

        hub.dispatch(PointerEvent::Moved { x: 200.0, y: 100.0 });
        let target = controls.target();
        assert!((target.yaw - (-0.16)).abs() < EPS);
        assert!(target.pitch.abs() < EPS);

        hub.dispatch(PointerEvent::Released { x: 200.0, y: 100.0 });
        assert!(!controls.is_dragging());
        assert!((controls.origin().yaw - (-0.16)).abs() < EPS);
    }

    #[test]
    fn commit_is_independent_of_intermediate_moves() {
        let hub = PointerHub::new();
        let many_moves = mounted(&hub);

        hub.dispatch(PointerEvent::Pressed { x: 40.0, y: 60.0 });
        for i in 0..50 {
            hub.dispatch(PointerEvent::Moved {
                x: 40.0 + i as f32 * 7.3,
                y: 60.0 - i as f32 * 2.1,
            });
        }
        hub.dispatch(PointerEvent::Released { x: 300.0, y: 20.0 });

        let expected = map_pointer(
            Vec2::new(300.0, 20.0),
            Vec2::new(40.0, 60.0),
            Orientation::ZERO,
            Orientation::ZERO,
            GestureMode::Drag,
            PitchLimit::Free,
        );
        assert!((many_moves.origin().yaw - expected.yaw).abs() < EPS);
        assert!((many_moves.origin().pitch - expected.pitch).abs() < EPS);
    }

    #[test]
    fn hover_previews_without_committing() {
        let hub = PointerHub::new();
        let controls = mounted(&hub);

        hub.dispatch(PointerEvent::Moved { x: 500.0, y: 500.0 });
        assert!(!controls.is_dragging());
        assert_eq!(controls.origin(), Orientation::ZERO);

        // Hover sensitivity: 500 px * 0.02 / 100 = 0.1 rad nudge.
        let target = controls.target();
        assert!((target.yaw - (-0.1)).abs() < EPS);
        assert!((target.pitch - (-0.1)).abs() < EPS);
    }

    #[test]
    fn roll_stays_zero_through_arbitrary_input() {
        let hub = PointerHub::new();
        let mut controls = mounted(&hub);
        let mut camera = Camera::new();

        hub.dispatch(PointerEvent::Pressed { x: 10.0, y: 10.0 });
        for i in 0..20 {
            hub.dispatch(PointerEvent::Moved {
                x: i as f32 * 31.0,
                y: i as f32 * -17.0,
            });
            controls.advance(frame());
            controls.apply(Some(Vec3::ZERO), &mut camera);
        }
        hub.dispatch(PointerEvent::Released { x: 620.0, y: -340.0 });
        for _ in 0..120 {
            controls.advance(frame());
            controls.apply(None, &mut camera);
        }

        assert_eq!(controls.orientation().roll, 0.0);
        assert_eq!(controls.origin().roll, 0.0);
    }

    #[test]
    fn advance_writes_position_and_rotation() {
        let hub = PointerHub::new();
        let mut controls = mounted(&hub);
        let mut camera = Camera::new();

        hub.dispatch(PointerEvent::Pressed { x: 0.0, y: 0.0 });
        hub.dispatch(PointerEvent::Moved { x: 100.0, y: 0.0 });
        hub.dispatch(PointerEvent::Released { x: 100.0, y: 0.0 });

        let position = Vec3::new(4.0, 5.0, 6.0);
        for _ in 0..240 {
            controls.advance(frame());
            controls.apply(Some(position), &mut camera);
        }

        assert_eq!(camera.position, position);
        let settled = Orientation::from_quat(camera.rotation);
        assert!((settled.yaw - (-0.16)).abs() < 1e-3);
    }

    #[test]
    fn springs_advance_while_camera_is_unavailable() {
        let hub = PointerHub::new();
        let mut controls = mounted(&hub);

        hub.dispatch(PointerEvent::Pressed { x: 0.0, y: 0.0 });
        hub.dispatch(PointerEvent::Moved { x: 100.0, y: 0.0 });

        // No camera for a stretch of frames: the write is skipped, not
        // fatal, and smoothing keeps progressing underneath.
        for _ in 0..30 {
            controls.advance(frame());
        }
        assert!(controls.orientation().yaw < -0.01);

        // Camera comes back; the next frame catches it up.
        let mut camera = Camera::new();
        controls.advance(frame());
        controls.apply(None, &mut camera);
        let applied = Orientation::from_quat(camera.rotation);
        assert!((applied.yaw - controls.orientation().yaw).abs() < 1e-5);
    }

    #[test]
    fn surface_sees_grab_and_release() {
        let hub = PointerHub::new();
        let counter = GrabCounter::default();
        let mut controls = DragControls::mount(
            &hub,
            &ControlOptions::default(),
            Orientation::ZERO,
            Some(Box::new(counter.clone())),
        );

        hub.dispatch(PointerEvent::Pressed { x: 0.0, y: 0.0 });
        assert_eq!(counter.grabs.get(), 1);
        assert_eq!(counter.releases.get(), 0);

        hub.dispatch(PointerEvent::Released { x: 0.0, y: 0.0 });
        assert_eq!(counter.releases.get(), 1);

        controls.unmount();
    }

    #[test]
    fn unmounted_controls_ignore_dispatch() {
        let hub = PointerHub::new();
        let mut controls = mounted(&hub);

        hub.dispatch(PointerEvent::Pressed { x: 100.0, y: 100.0 });
        hub.dispatch(PointerEvent::Moved { x: 150.0, y: 100.0 });
        hub.dispatch(PointerEvent::Released { x: 150.0, y: 100.0 });
        let committed = controls.origin();
        assert!(committed.yaw < 0.0);

        controls.unmount();
        assert_eq!(hub.subscriber_count(), 0);

        hub.dispatch(PointerEvent::Pressed { x: 0.0, y: 0.0 });
        hub.dispatch(PointerEvent::Moved { x: 999.0, y: 999.0 });
        hub.dispatch(PointerEvent::Released { x: 999.0, y: 999.0 });

        assert_eq!(controls.origin(), committed);
        assert_eq!(controls.target(), committed);
        assert!(!controls.is_dragging());

        // Second unmount is a no-op.
        controls.unmount();
    }

    #[test]
    fn drop_removes_the_subscription() {
        let hub = PointerHub::new();
        {
            let _controls = mounted(&hub);
            assert_eq!(hub.subscriber_count(), 1);
        }
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn direct_events_bypass_the_hub() {
        let hub = PointerHub::new();
        let mut controls = mounted(&hub);
        controls.unmount();

        controls.handle_event(PointerEvent::Pressed { x: 0.0, y: 0.0 });
        controls
            .handle_event(PointerEvent::Moved { x: 100.0, y: 0.0 });
        assert!((controls.target().yaw - (-0.16)).abs() < EPS);
    }

    #[test]
    fn clamped_pitch_commits_within_bounds() {
        let hub = PointerHub::new();
        let toml_str = "
[pitch]
clamp = true
max = 0.5
";
        let options: ControlOptions =
            toml::from_str(toml_str).unwrap();
        let controls = DragControls::mount(
            &hub,
            &options,
            Orientation::ZERO,
            None,
        );

        hub.dispatch(PointerEvent::Pressed { x: 0.0, y: 0.0 });
        hub.dispatch(PointerEvent::Moved { x: 0.0, y: -5000.0 });
        hub.dispatch(PointerEvent::Released { x: 0.0, y: -5000.0 });

        assert!((controls.origin().pitch - 0.5).abs() < EPS);
        assert!((controls.target().pitch - 0.5).abs() < EPS);
    }

    #[test]
    fn consecutive_gestures_accumulate_from_the_committed_origin() {
        let hub = PointerHub::new();
        let controls = mounted(&hub);

        hub.dispatch(PointerEvent::Pressed { x: 100.0, y: 100.0 });
        hub.dispatch(PointerEvent::Released { x: 200.0, y: 100.0 });
        assert!((controls.origin().yaw - (-0.16)).abs() < EPS);

        // Second gesture measures from its own anchor and stacks onto
        // the committed origin.
        hub.dispatch(PointerEvent::Pressed { x: 200.0, y: 100.0 });
        hub.dispatch(PointerEvent::Released { x: 300.0, y: 100.0 });
        assert!((controls.origin().yaw - (-0.32)).abs() < EPS);
    }
}
