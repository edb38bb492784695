// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Pointer-driven camera orientation controller.
//!
//! Swivel converts raw 2D pointer drag input into a smoothly animated 3D
//! look direction and applies it to a host-owned camera once per frame.
//! Dragging rotates with full sensitivity and commits the orientation on
//! release; hovering nudges the view with reduced sensitivity without
//! committing anything. Each rotation axis is smoothed by a damped
//! spring, so targets arriving at pointer-event rate produce continuous
//! motion at render rate.
//!
//! # Key entry points
//!
//! - [`controls::DragControls`] - the controller: mount, feed events,
//!   advance per frame
//! - [`input::PointerHub`] - injected event source with owned
//!   subscriptions
//! - [`options::ControlOptions`] - runtime configuration (spring preset,
//!   pitch clamp)
//! - [`camera::CameraTransform`] - the write seam into the host camera
//!
//! # Architecture
//!
//! Pointer events mutate a drag tracker and map, through a pure
//! pixel-delta-to-orientation function, into spring targets; per frame,
//! [`advance`](controls::DragControls::advance) integrates the springs
//! and [`apply`](controls::DragControls::apply) writes position and
//! rotation through the camera seam.
//! Everything runs on one logical thread: handlers are synchronous,
//! non-reentrant, and infallible.

pub mod camera;
pub mod controls;
pub mod error;
pub mod input;
pub mod options;
pub mod orientation;
pub mod spring;
pub mod util;

pub use camera::{Camera, CameraTransform};
pub use controls::{DragControls, DragSurface};
pub use error::SwivelError;
pub use input::{PointerEvent, PointerHub};
pub use options::ControlOptions;
pub use orientation::Orientation;
