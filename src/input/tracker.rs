//! Drag gesture tracking: anchor point and dragging flag.

use glam::Vec2;

use crate::orientation::GestureMode;

/// Tracks the current drag gesture.
///
/// The anchor is the pointer position recorded at gesture start, and
/// again at gesture end so the following hover cycle measures its deltas
/// from the release point.
#[derive(Debug, Clone, Copy)]
pub struct DragTracker {
    anchor: Vec2,
    dragging: bool,
}

impl DragTracker {
    /// Tracker with the anchor at the origin and no active gesture.
    #[must_use]
    pub fn new() -> Self {
        Self {
            anchor: Vec2::ZERO,
            dragging: false,
        }
    }

    /// Pointer position the current gesture is measured from.
    #[must_use]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Sensitivity mode for the current state.
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        if self.dragging {
            GestureMode::Drag
        } else {
            GestureMode::Hover
        }
    }

    /// Begin a gesture at `position`.
    pub fn begin(&mut self, position: Vec2) {
        self.dragging = true;
        self.anchor = position;
    }

    /// End the gesture, re-anchoring at `position` for the next
    /// hover/drag cycle.
    pub fn end(&mut self, position: Vec2) {
        self.dragging = false;
        self.anchor = position;
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new()
    }
}
