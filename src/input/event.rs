//! Platform-agnostic pointer events.
//!
//! These are fed to a [`PointerHub`](super::hub::PointerHub) or directly
//! to [`DragControls::handle_event`](crate::controls::DragControls::handle_event).
//!
//! # Example
//!
//! ```ignore
//! hub.dispatch(PointerEvent::Moved { x: 100.0, y: 200.0 });
//! ```

use glam::Vec2;

/// A pointer sample delivered by the host environment.
///
/// Every variant carries the absolute screen position in pixels; that is
/// the only payload the controller needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed at the given position.
    Pressed {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Pointer moved, with or without the button held.
    Moved {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Primary button released at the given position.
    Released {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
}

impl PointerEvent {
    /// Screen position carried by the event.
    #[must_use]
    pub fn position(self) -> Vec2 {
        match self {
            Self::Pressed { x, y }
            | Self::Moved { x, y }
            | Self::Released { x, y } => Vec2::new(x, y),
        }
    }
}

/// Translates winit window events into [`PointerEvent`]s.
///
/// winit reports button transitions without coordinates, so the
/// translator tracks the last cursor position and stamps it onto press
/// and release events.
#[cfg(feature = "viewer")]
#[derive(Debug, Default)]
pub struct WindowTranslator {
    last_cursor: Vec2,
}

#[cfg(feature = "viewer")]
impl WindowTranslator {
    /// Translator with the cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_cursor: Vec2::ZERO,
        }
    }

    /// Translate a window event, if it concerns the primary pointer.
    pub fn translate(
        &mut self,
        event: &winit::event::WindowEvent,
    ) -> Option<PointerEvent> {
        use winit::event::{ElementState, MouseButton, WindowEvent};

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.last_cursor =
                    Vec2::new(position.x as f32, position.y as f32);
                Some(PointerEvent::Moved {
                    x: self.last_cursor.x,
                    y: self.last_cursor.y,
                })
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => {
                let x = self.last_cursor.x;
                let y = self.last_cursor.y;
                Some(match state {
                    ElementState::Pressed => PointerEvent::Pressed { x, y },
                    ElementState::Released => {
                        PointerEvent::Released { x, y }
                    }
                })
            }
            _ => None,
        }
    }
}
