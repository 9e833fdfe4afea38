//! Text commands for remote play
//!
//! Recognized forms (case-insensitive, surrounding whitespace ignored):
//! - `go`, `activate`, `stop`, `run`, `start`, `on`, `off`: stop the rotation
//! - `reset`, `go back`, `return`, `resume`, `rotate`, `rotations`, `cancel`,
//!   `abort`: forget progress and resume rotating
//! - four dimension words such as `zig-bottom-front-left`: press that vertex

use hypercube_math::Axis;
use thiserror::Error;

const GO_WORDS: [&str; 7] = ["go", "activate", "stop", "run", "start", "on", "off"];
const RESET_WORDS: [&str; 8] = ["reset", "go back", "return", "resume", "rotate", "rotations", "cancel", "abort"];

/// Error type for command parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Not a command at all
    #[error("unrecognized command: {0:?}")]
    Unrecognized(String),
    /// A vertex needs exactly one word per dimension
    #[error("It's a 4D hypercube, you gotta have 4 dimensions (got {0}).")]
    WrongDimensionCount(usize),
    /// The same word given twice
    #[error("You wrote \"{0}\" twice.")]
    RepeatedWord(String),
    /// Two words for the same dimension
    #[error("\"{0}\" and \"{1}\" doesn't jive.")]
    ConflictingWords(String, String),
    /// Valid, but not in the puzzle's current phase
    #[error("{0}")]
    NotApplicable(&'static str),
}

/// A parsed command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Short-press a vertex to stop the rotation
    Go,
    /// Long-press a vertex to reset
    Reset,
    /// Press the vertex with this index
    Vertex(usize),
}

impl Command {
    pub fn parse(text: &str) -> Result<Command, CommandError> {
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();

        if GO_WORDS.contains(&normalized.as_str()) {
            return Ok(Command::Go);
        }
        if RESET_WORDS.contains(&normalized.as_str()) {
            return Ok(Command::Reset);
        }
        parse_vertex(&normalized).map(Command::Vertex)
    }

    /// Parse and check the command against the puzzle's phase
    pub fn parse_for(text: &str, rotating: bool) -> Result<Command, CommandError> {
        let command = Self::parse(text)?;
        command.check(rotating)?;
        Ok(command)
    }

    /// Go works only while rotating; reset and vertex presses only while stopped
    pub fn check(&self, rotating: bool) -> Result<(), CommandError> {
        match (self, rotating) {
            (Command::Go, false) => Err(CommandError::NotApplicable("the hypercube is not rotating")),
            (Command::Reset, true) | (Command::Vertex(_), true) => {
                Err(CommandError::NotApplicable("the hypercube is still rotating"))
            }
            _ => Ok(()),
        }
    }
}

/// Find the axis and side named by a dimension word
fn lookup(word: &str) -> Option<(Axis, bool)> {
    Axis::ALL.into_iter().find_map(|axis| {
        let [low, high] = axis.side_names();
        if word == low {
            Some((axis, false))
        } else if word == high {
            Some((axis, true))
        } else {
            None
        }
    })
}

/// True if `word` is one or more dimension words written back to back
fn is_word_run(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let mut rest = word;
    while !rest.is_empty() {
        let next = Axis::ALL
            .into_iter()
            .flat_map(|axis| axis.side_names())
            .find_map(|name| rest.strip_prefix(name));
        match next {
            Some(tail) => rest = tail,
            None => return false,
        }
    }
    true
}

fn parse_vertex(text: &str) -> Result<usize, CommandError> {
    let words: Vec<&str> = text
        .split(|c: char| c == ' ' || c == ',' || c == ';' || c == '-')
        .filter(|w| !w.is_empty())
        .collect();
    if words.is_empty() {
        return Err(CommandError::Unrecognized(text.to_string()));
    }

    // Words may also run together without separators ("zigtop")
    if !words.iter().all(|w| is_word_run(w)) {
        return Err(CommandError::Unrecognized(text.to_string()));
    }
    if words.len() != 4 {
        return Err(CommandError::WrongDimensionCount(words.len()));
    }

    let mut sides = Vec::with_capacity(words.len());
    for word in &words {
        match lookup(word) {
            Some(side) => sides.push(side),
            None => return Err(CommandError::Unrecognized(text.to_string())),
        }
    }

    for i in 0..sides.len() {
        for j in (i + 1)..sides.len() {
            if sides[i].0 == sides[j].0 {
                return Err(if words[i] == words[j] {
                    CommandError::RepeatedWord(words[i].to_string())
                } else {
                    CommandError::ConflictingWords(words[i].to_string(), words[j].to_string())
                });
            }
        }
    }

    Ok(sides
        .into_iter()
        .filter(|(_, high)| *high)
        .fold(0, |v, (axis, _)| v | axis.bit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_words() {
        for w in ["go", "  GO ", "Activate", "off"] {
            assert_eq!(Command::parse(w), Ok(Command::Go), "{:?}", w);
        }
    }

    #[test]
    fn test_reset_words() {
        assert_eq!(Command::parse("reset"), Ok(Command::Reset));
        assert_eq!(Command::parse("Go   Back"), Ok(Command::Reset));
        assert_eq!(Command::parse("ABORT"), Ok(Command::Reset));
    }

    #[test]
    fn test_vertex_names() {
        assert_eq!(Command::parse("zig-bottom-front-left"), Ok(Command::Vertex(0)));
        assert_eq!(Command::parse("zag top back right"), Ok(Command::Vertex(15)));
        // Order does not matter, separators can mix
        assert_eq!(Command::parse("right, zag;bottom - front"), Ok(Command::Vertex(0b1001)));
    }

    #[test]
    fn test_wrong_count() {
        assert_eq!(Command::parse("zig top"), Err(CommandError::WrongDimensionCount(2)));
        assert_eq!(
            Command::parse("zig top front left right"),
            Err(CommandError::WrongDimensionCount(5))
        );
    }

    #[test]
    fn test_unseparated_words_count_as_one() {
        assert_eq!(Command::parse("zigbottomfrontleft"), Err(CommandError::WrongDimensionCount(1)));
        assert_eq!(Command::parse("ZagTop Front"), Err(CommandError::WrongDimensionCount(2)));
        assert!(matches!(Command::parse("zigtop front left right"), Err(CommandError::Unrecognized(_))));
        assert!(matches!(Command::parse("zigbottomx"), Err(CommandError::Unrecognized(_))));
    }

    #[test]
    fn test_repeated_word() {
        assert_eq!(
            Command::parse("zig zig front left"),
            Err(CommandError::RepeatedWord("zig".to_string()))
        );
    }

    #[test]
    fn test_conflicting_words() {
        assert_eq!(
            Command::parse("left right top zig"),
            Err(CommandError::ConflictingWords("left".to_string(), "right".to_string()))
        );
    }

    #[test]
    fn test_unrecognized() {
        assert!(matches!(Command::parse("hello"), Err(CommandError::Unrecognized(_))));
        assert!(matches!(Command::parse("zig top front up"), Err(CommandError::Unrecognized(_))));
        assert!(matches!(Command::parse("   "), Err(CommandError::Unrecognized(_))));
    }

    #[test]
    fn test_phase_checks() {
        assert_eq!(Command::parse_for("go", true), Ok(Command::Go));
        assert!(matches!(Command::parse_for("go", false), Err(CommandError::NotApplicable(_))));
        assert!(matches!(Command::parse_for("reset", true), Err(CommandError::NotApplicable(_))));
        assert_eq!(Command::parse_for("reset", false), Ok(Command::Reset));
        assert!(matches!(
            Command::parse_for("zig top front left", true),
            Err(CommandError::NotApplicable(_))
        ));
    }

    #[test]
    fn test_error_messages() {
        let msg = CommandError::WrongDimensionCount(3).to_string();
        assert!(msg.contains("4 dimensions"));
        let msg = CommandError::ConflictingWords("top".into(), "bottom".into()).to_string();
        assert!(msg.contains("doesn't jive"));
    }
}
