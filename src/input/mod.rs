//! Pointer input: platform-agnostic events, the injected event hub, and
//! drag gesture tracking.

/// Platform-agnostic pointer events (and the winit translator).
pub mod event;
/// Event fan-out with owned subscriptions.
pub mod hub;
/// Drag anchor and dragging-flag state.
pub(crate) mod tracker;

#[cfg(feature = "viewer")]
pub use event::WindowTranslator;
pub use event::PointerEvent;
pub use hub::{PointerHub, PointerSink, Subscription};
