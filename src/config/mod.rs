//! Show configuration
//!
//! Every value is a hard-coded constant. The builder setters exist so the
//! show can be embedded or driven quickly from tests.

use std::time::Duration;

use crate::show::{Message, PlatformClear};
use crate::{FireworksError, Result};

/// Number of firework frames
pub const DEFAULT_FRAMES: usize = 20;
/// Pause after each frame
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(300);
/// Pause after the greeting
pub const DEFAULT_MESSAGE_HOLD: Duration = Duration::from_secs(3);
/// Assumed terminal width for centering
pub const DEFAULT_SCREEN_WIDTH: u16 = 80;
/// Row the greeting is drawn on
pub const DEFAULT_MESSAGE_ROW: u16 = 12;

/// Parameters for a single run of the show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowConfig {
    /// Bursts drawn before the greeting
    pub frames: usize,
    /// Blocking pause after each burst
    pub frame_delay: Duration,
    /// Blocking pause after the greeting
    pub message_hold: Duration,
    /// Width used to center the greeting
    pub screen_width: u16,
    /// 1-based row of the greeting
    pub message_row: u16,
    pub message: Message,
    /// Platform screen clear
    pub clear: PlatformClear,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            frame_delay: DEFAULT_FRAME_DELAY,
            message_hold: DEFAULT_MESSAGE_HOLD,
            screen_width: DEFAULT_SCREEN_WIDTH,
            message_row: DEFAULT_MESSAGE_ROW,
            message: Message::new_year(),
            clear: PlatformClear::detect(),
        }
    }
}

impl ShowConfig {
    /// Create a show configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern methods for configuration
    pub fn with_frames(mut self, frames: usize) -> Self {
        self.frames = frames;
        self
    }

    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    pub fn with_message_hold(mut self, hold: Duration) -> Self {
        self.message_hold = hold;
        self
    }

    pub fn with_screen_width(mut self, width: u16) -> Self {
        self.screen_width = width;
        self
    }

    pub fn with_message_row(mut self, row: u16) -> Self {
        self.message_row = row;
        self
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.message = message;
        self
    }

    pub fn with_clear(mut self, clear: PlatformClear) -> Self {
        self.clear = clear;
        self
    }

    /// No pauses at all; the output is identical to a normal run
    pub fn without_pauses(self) -> Self {
        self.with_frame_delay(Duration::ZERO)
            .with_message_hold(Duration::ZERO)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.frames == 0 {
            return Err(FireworksError::ConfigError(
                "Frame count must be greater than 0".to_string(),
            ));
        }

        if self.screen_width == 0 {
            return Err(FireworksError::ConfigError(
                "Screen width must be greater than 0".to_string(),
            ));
        }

        // Cursor rows are 1-based
        if self.message_row == 0 {
            return Err(FireworksError::ConfigError(
                "Message row must be at least 1".to_string(),
            ));
        }

        if let PlatformClear::Command { program, .. } = &self.clear {
            if program.trim().is_empty() {
                return Err(FireworksError::ConfigError(
                    "Clear command must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Total blocking wait of a run, excluding the time spent waiting for input
    pub fn total_pause(&self) -> Duration {
        self.frame_delay * self.frames as u32 + self.message_hold
    }
}
