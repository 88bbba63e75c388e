//! Time subsystem.
//!
//! Frame timing for the external animation loop:
//! - one `FrameClock` per render loop
//! - call `tick()` once per frame, then `meta(ipf)` for the renderer

mod frame_clock;

pub use frame_clock::{FrameClock, FrameMeta, FrameTime};
