//! Terminal animator and wish prompt
//!
//! Contains burst sampling and rendering, the centered greeting,
//! platform screen clearing and the driver that sequences them.

pub mod animator;
pub mod burst;
pub mod message;
pub mod random;
pub mod screen;

// Re-export commonly used types
pub use animator::{Animator, Stage};
pub use burst::{Burst, Color, OFFSETS, PALETTE};
pub use message::{visible_width, Message};
pub use random::{RandomSource, RngSource};
pub use screen::PlatformClear;
