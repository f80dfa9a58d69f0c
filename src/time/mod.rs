//! Frame timing.

mod frame_timer;

pub use frame_timer::FrameTimer;
