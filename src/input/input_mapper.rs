//! Input mapping from text lines to host actions
//!
//! Host commands (`wait`, `status`, `solve`, `quit`) are handled here.
//! Everything else is passed to the remote-command parser and turned into
//! vertex presses.

use hypercube_core::Phase;
use hypercube_input::{Command, CommandError};
use thiserror::Error;

/// How long a reset command holds vertex 0, in seconds
pub const RESET_HOLD: f32 = 1.0;

/// Actions the host carries out
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Press and release a vertex
    Tap(usize),
    /// Press a vertex, keep it down for some seconds, then release
    Hold { vertex: usize, seconds: f32 },
    /// Let time pass
    Wait(f32),
    /// Print the puzzle's phase and stage
    Status,
    /// Solve the puzzle automatically
    Solve,
    /// Exit the host
    Quit,
}

/// Error type for input mapping
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("wait needs a non-negative number of seconds, got {0:?}")]
    BadWait(String),
}

/// Maps text lines to host actions
pub struct InputMapper;

impl InputMapper {
    /// Map one line of input.
    ///
    /// Returns `Ok(None)` for blank lines.
    pub fn map_line(line: &str, phase: Phase) -> Result<Option<InputAction>, InputError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let mut parts = line.split_whitespace();
        let head = parts.next().unwrap_or_default().to_lowercase();
        match head.as_str() {
            "quit" | "exit" => return Ok(Some(InputAction::Quit)),
            "status" => return Ok(Some(InputAction::Status)),
            "solve" => return Ok(Some(InputAction::Solve)),
            "wait" => {
                let arg = parts.next().unwrap_or_default();
                return match arg.parse::<f32>() {
                    Ok(s) if s.is_finite() && s >= 0.0 => Ok(Some(InputAction::Wait(s))),
                    _ => Err(InputError::BadWait(arg.to_string())),
                };
            }
            _ => {}
        }

        let rotating = phase == Phase::Rotating;
        let action = match Command::parse_for(line, rotating)? {
            Command::Go => InputAction::Tap(0),
            Command::Reset => InputAction::Hold { vertex: 0, seconds: RESET_HOLD },
            Command::Vertex(v) => InputAction::Tap(v),
        };
        Ok(Some(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AWAITING: Phase = Phase::AwaitingInput { stage: 0, target: 3 };

    #[test]
    fn test_host_commands() {
        assert_eq!(InputMapper::map_line("quit", Phase::Rotating), Ok(Some(InputAction::Quit)));
        assert_eq!(InputMapper::map_line(" STATUS ", AWAITING), Ok(Some(InputAction::Status)));
        assert_eq!(InputMapper::map_line("solve", Phase::Solved), Ok(Some(InputAction::Solve)));
        assert_eq!(InputMapper::map_line("wait 1.5", Phase::Rotating), Ok(Some(InputAction::Wait(1.5))));
    }

    #[test]
    fn test_bad_wait() {
        assert!(matches!(InputMapper::map_line("wait", Phase::Rotating), Err(InputError::BadWait(_))));
        assert!(matches!(InputMapper::map_line("wait -2", Phase::Rotating), Err(InputError::BadWait(_))));
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(InputMapper::map_line("   ", Phase::Rotating), Ok(None));
    }

    #[test]
    fn test_go_taps_vertex_zero_while_rotating() {
        assert_eq!(InputMapper::map_line("go", Phase::Rotating), Ok(Some(InputAction::Tap(0))));
        assert!(InputMapper::map_line("go", AWAITING).is_err());
    }

    #[test]
    fn test_reset_holds_vertex_zero_while_stopped() {
        assert_eq!(
            InputMapper::map_line("reset", AWAITING),
            Ok(Some(InputAction::Hold { vertex: 0, seconds: RESET_HOLD }))
        );
        assert!(InputMapper::map_line("reset", Phase::Rotating).is_err());
    }

    #[test]
    fn test_vertex_name_taps_vertex() {
        assert_eq!(
            InputMapper::map_line("zag-top-front-left", AWAITING),
            Ok(Some(InputAction::Tap(0b1010)))
        );
    }

    #[test]
    fn test_command_errors_pass_through() {
        let err = InputMapper::map_line("left right top zig", AWAITING).unwrap_err();
        assert!(err.to_string().contains("doesn't jive"));
    }
}
