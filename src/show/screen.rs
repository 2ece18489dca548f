//! Platform screen clearing
//!
//! Windows shells clear with `cls`, Unix shells with `clear`. The choice is
//! made once by [`PlatformClear::detect`] and handed to the animator.

use std::io::Write;
use std::process::Command;

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::{FireworksError, Result};

/// How the screen gets wiped between frames
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformClear {
    /// Run an external clear command that inherits the terminal
    Command {
        program: String,
        args: Vec<String>,
    },
    /// Write an erase-display sequence and home the cursor in-band
    Ansi,
}

impl PlatformClear {
    /// Clear command for the host OS family
    pub fn detect() -> Self {
        if cfg!(windows) {
            Self::windows()
        } else {
            Self::unix()
        }
    }

    pub fn windows() -> Self {
        Self::Command {
            program: "cmd".to_string(),
            args: vec!["/C".to_string(), "cls".to_string()],
        }
    }

    pub fn unix() -> Self {
        Self::Command {
            program: "clear".to_string(),
            args: Vec::new(),
        }
    }

    /// Wipe the screen. Pending output is flushed first so frames stay ordered.
    pub fn clear<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            PlatformClear::Ansi => {
                queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
                Ok(())
            }
            PlatformClear::Command { program, args } => {
                out.flush()?;
                let status = Command::new(program).args(args).status().map_err(|e| {
                    FireworksError::EnvironmentFailure(format!(
                        "Failed to run {}: {}",
                        program, e
                    ))
                })?;
                if !status.success() {
                    return Err(FireworksError::EnvironmentFailure(format!(
                        "{} exited with {}",
                        program, status
                    )));
                }
                Ok(())
            }
        }
    }

    pub fn description(&self) -> String {
        match self {
            PlatformClear::Ansi => "ANSI erase display".to_string(),
            PlatformClear::Command { program, args } if args.is_empty() => program.clone(),
            PlatformClear::Command { program, args } => format!("{} {}", program, args.join(" ")),
        }
    }
}

impl Default for PlatformClear {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_matches_os_family() {
        let clear = PlatformClear::detect();
        if cfg!(windows) {
            assert_eq!(clear, PlatformClear::windows());
            assert_eq!(clear.description(), "cmd /C cls");
        } else {
            assert_eq!(clear, PlatformClear::unix());
            assert_eq!(clear.description(), "clear");
        }
    }

    #[test]
    fn test_ansi_clear_writes_in_band() {
        let mut out = Vec::new();
        PlatformClear::Ansi.clear(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[2J\x1b[1;1H");
    }

    #[test]
    fn test_missing_command_is_environment_failure() {
        let clear = PlatformClear::Command {
            program: "fireworks-no-such-clear-command".to_string(),
            args: Vec::new(),
        };
        let err = clear.clear(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, FireworksError::EnvironmentFailure(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command_is_environment_failure() {
        let clear = PlatformClear::Command {
            program: "false".to_string(),
            args: Vec::new(),
        };
        let err = clear.clear(&mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("false exited with"));
    }
}
