use checkers_core::{coord_to_sq, Difficulty};
use std::str::FromStr;

/// One line of terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    New,
    Board,
    Moves,
    Select(u8),
    Move(u8, u8),
    Difficulty(Difficulty),
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("`{0}` is not a board square, expected row,col")]
    BadSquare(String),
    #[error("{0}")]
    BadDifficulty(String),
}

fn square(arg: &str) -> Result<u8, CommandError> {
    coord_to_sq(arg).ok_or_else(|| CommandError::BadSquare(arg.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = parts.split_first() else {
            return Err(CommandError::Usage("help"));
        };

        let cmd = match (name.to_ascii_lowercase().as_str(), args) {
            ("new", []) => Command::New,
            ("board", []) => Command::Board,
            ("moves", []) => Command::Moves,
            ("status", []) => Command::Status,
            ("help" | "?", _) => Command::Help,
            ("quit" | "exit", _) => Command::Quit,
            ("select", [sq]) => Command::Select(square(sq)?),
            ("select", _) => return Err(CommandError::Usage("select R,C")),
            ("move", [from, to]) => Command::Move(square(from)?, square(to)?),
            ("move", _) => return Err(CommandError::Usage("move R,C R,C")),
            ("difficulty", [level]) => {
                Command::Difficulty(level.parse().map_err(CommandError::BadDifficulty)?)
            }
            ("difficulty", _) => return Err(CommandError::Usage("difficulty easy|medium|hard")),
            ("new" | "board" | "moves" | "status", _) => {
                return Err(CommandError::Usage("new | board | moves | status take no arguments"))
            }
            _ => return Err(CommandError::Unknown(name.to_string())),
        };
        Ok(cmd)
    }
}

pub const HELP: &str = "\
commands:
  new                     start a new game
  board                   show the board
  moves                   list the legal moves of the side to move
  select R,C              click a square: pick a piece, or move the picked piece there
  move R,C R,C            move a piece, e.g. `move 5,0 4,1`
  difficulty LEVEL        easy, medium or hard (starts a new game)
  status                  difficulty and game status
  help                    this text
  quit                    leave";

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
