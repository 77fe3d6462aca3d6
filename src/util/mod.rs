//! Small helpers shared by the render-loop side of the crate.

/// Delta-time measurement and smoothed FPS.
pub mod frame_timing;

pub use frame_timing::FrameTiming;
