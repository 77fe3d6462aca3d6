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
// Function signature hygiene
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
// Tests assert on known-good values
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! First-person fly camera for real-time 3D renderers.
//!
//! The camera keeps yaw/pitch Euler angles and rebuilds an orthonormal
//! basis from them on every change, so the view matrix is always valid.
//! Input is recorded as it arrives and applied once per frame, in a fixed
//! order, before the frame's matrices are read.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - orientation, movement, look, zoom, view matrix
//! - [`engine::FlyEngine`] - the render loop's context object
//! - [`input::InputProcessor`] - raw events to per-frame command batches
//! - [`options::Options`] - TOML configuration (speeds, zoom bounds, keys)
//! - [`script`] - headless replay of recorded input
//!
//! # Frame order
//!
//! ```text
//! window events ──► FlyEngine::handle_event      (record only)
//! frame start   ──► FlyEngine::begin_frame(dt)   (move → look → zoom)
//!               ──► FrameState { view, projection, .. }
//! ```

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod script;
pub mod util;

pub use camera::{Camera, Movement};
pub use engine::command::CameraCommand;
pub use engine::{FlyEngine, FrameState};
pub use error::FlycamError;
pub use input::{InputEvent, InputProcessor, KeyAction};
pub use options::Options;
pub use script::InputScript;
