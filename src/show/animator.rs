//! Show driver
//!
//! Runs the whole show as one forward pass through [`Stage`]: fireworks,
//! greeting, wish prompt and echo.

use std::io::{BufRead, Write};
use std::thread;

use log::{debug, trace};

use super::burst::Burst;
use super::random::RandomSource;
use crate::config::ShowConfig;
use crate::{FireworksError, Result, WISH_PREFIX, WISH_PROMPT};

/// Position of the animator in the show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Wiping whatever was on screen before the show
    ClearingInitial,
    /// Drawing firework frame `n` (1-based)
    Animating(usize),
    /// Wiping the last burst
    ClearingFinal,
    /// Drawing the greeting
    ShowingMessage,
    /// Holding the greeting on screen
    Waiting,
    /// Blocked on the wish prompt
    Prompting,
    /// Writing the wish back
    Echoing,
    Done,
}

impl Default for Stage {
    fn default() -> Self {
        Self::ClearingInitial
    }
}

/// Terminal animator and wish prompt
pub struct Animator<W: Write, R: RandomSource> {
    config: ShowConfig,
    out: W,
    rng: R,
    stage: Stage,
}

impl<W: Write, R: RandomSource> Animator<W, R> {
    /// Create an animator writing to `out` and sampling bursts from `rng`
    pub fn new(config: ShowConfig, out: W, rng: R) -> Result<Self> {
        config.validate()?;
        debug!("screen clear via {}", config.clear.description());
        Ok(Self {
            config,
            out,
            rng,
            stage: Stage::default(),
        })
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn config(&self) -> &ShowConfig {
        &self.config
    }

    /// Consume the animator and hand back the output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run every stage in order and return the wish that was echoed
    pub fn run<I: BufRead>(&mut self, input: I) -> Result<String> {
        self.clear_screen()?;
        self.play_fireworks()?;
        self.show_message()?;
        let wish = self.read_wish(input)?;
        self.echo_wish(&wish)?;
        Ok(wish)
    }

    /// Wipe the screen before the first frame
    pub fn clear_screen(&mut self) -> Result<()> {
        self.enter(Stage::ClearingInitial);
        self.config.clear.clear(&mut self.out)
    }

    /// Draw every frame, one burst each, and return the bursts in order
    pub fn play_fireworks(&mut self) -> Result<Vec<Burst>> {
        let mut bursts = Vec::with_capacity(self.config.frames);
        for frame in 1..=self.config.frames {
            self.enter(Stage::Animating(frame));
            self.config.clear.clear(&mut self.out)?;

            let burst = Burst::sample(&mut self.rng);
            trace!(
                "frame {}: burst at ({}, {}) in {:?}",
                frame,
                burst.x,
                burst.y,
                burst.color
            );
            burst.render(&mut self.out)?;
            writeln!(self.out)?;
            self.out.flush()?;

            thread::sleep(self.config.frame_delay);
            bursts.push(burst);
        }
        Ok(bursts)
    }

    /// Clear the last burst, draw the centered greeting and hold it
    pub fn show_message(&mut self) -> Result<()> {
        self.enter(Stage::ClearingFinal);
        self.config.clear.clear(&mut self.out)?;

        self.enter(Stage::ShowingMessage);
        self.config.message.render(
            &mut self.out,
            self.config.message_row,
            self.config.screen_width,
        )?;
        self.out.flush()?;

        self.enter(Stage::Waiting);
        thread::sleep(self.config.message_hold);
        Ok(())
    }

    /// Prompt for a wish and block until one line arrives.
    /// The line terminator is dropped.
    pub fn read_wish<I: BufRead>(&mut self, mut input: I) -> Result<String> {
        self.enter(Stage::Prompting);
        write!(self.out, "{}", WISH_PROMPT)?;
        self.out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("input closed before a wish was entered");
            return Err(FireworksError::EndOfInput);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Write the wish back after the fixed prefix
    pub fn echo_wish(&mut self, wish: &str) -> Result<()> {
        self.enter(Stage::Echoing);
        writeln!(self.out, "{}{}", WISH_PREFIX, wish)?;
        self.out.flush()?;
        self.enter(Stage::Done);
        Ok(())
    }

    fn enter(&mut self, next: Stage) {
        debug!("stage {:?} -> {:?}", self.stage, next);
        self.stage = next;
    }
}
