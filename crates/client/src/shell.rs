//! Line-oriented command parsing for the text shell.

use std::str::FromStr;

use tactics_core::{ParseUnitIdError, Position, UnitId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    Select(UnitId),
    /// Board click: selects the unit on the cell, otherwise moves there.
    Click(Position),
    Move(Position),
    Attack,
    EndTurn,
    CompleteLoop,
    State,
    Json,
    Knowledge,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("invalid coordinate '{0}'")]
    Coordinate(String),

    #[error(transparent)]
    UnitId(#[from] ParseUnitIdError),
}

pub const HELP: &str = "\
commands:
  select <id>      select a unit (player, enemy1, ...)
  click <x> <y>    select the unit on a cell, or move there
  move <x> <y>     move the selected player
  attack           strike the first enemy in range
  end              end the turn
  loop             end the loop now
  state            show the board
  json             dump the state as JSON
  knowledge        list what you have learned
  help             show this text
  quit             leave the game";

impl FromStr for ShellCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or(ParseError::Empty)?.to_lowercase();
        let args: Vec<&str> = words.collect();

        let parsed = match (command.as_str(), args.as_slice()) {
            ("select" | "s", [id]) => Self::Select(id.parse()?),
            ("select" | "s", _) => return Err(ParseError::Usage("select <id>")),
            ("click" | "c", [x, y]) => Self::Click(parse_position(x, y)?),
            ("click" | "c", _) => return Err(ParseError::Usage("click <x> <y>")),
            ("move" | "m", [x, y]) => Self::Move(parse_position(x, y)?),
            ("move" | "m", _) => return Err(ParseError::Usage("move <x> <y>")),
            ("attack" | "a", []) => Self::Attack,
            ("end" | "e", []) => Self::EndTurn,
            ("loop", []) => Self::CompleteLoop,
            ("state" | "board", []) => Self::State,
            ("json", []) => Self::Json,
            ("knowledge" | "k", []) => Self::Knowledge,
            ("help" | "?", []) => Self::Help,
            ("quit" | "exit" | "q", []) => Self::Quit,
            _ => return Err(ParseError::Unknown(line.trim().to_owned())),
        };

        Ok(parsed)
    }
}

fn parse_position(x: &str, y: &str) -> Result<Position, ParseError> {
    let coordinate =
        |raw: &str| raw.parse::<i32>().map_err(|_| ParseError::Coordinate(raw.to_owned()));
    Ok(Position::new(coordinate(x)?, coordinate(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            "select enemy2".parse::<ShellCommand>(),
            Ok(ShellCommand::Select(UnitId(2)))
        );
        assert_eq!(
            "  MOVE 2 6 ".parse::<ShellCommand>(),
            Ok(ShellCommand::Move(Position::new(2, 6)))
        );
        assert_eq!(
            "click 6 1".parse::<ShellCommand>(),
            Ok(ShellCommand::Click(Position::new(6, 1)))
        );
        assert_eq!("end".parse::<ShellCommand>(), Ok(ShellCommand::EndTurn));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!("".parse::<ShellCommand>(), Err(ParseError::Empty));
        assert_eq!(
            "move 2".parse::<ShellCommand>(),
            Err(ParseError::Usage("move <x> <y>"))
        );
        assert_eq!(
            "move two 6".parse::<ShellCommand>(),
            Err(ParseError::Coordinate("two".into()))
        );
        assert!(matches!(
            "select hero".parse::<ShellCommand>(),
            Err(ParseError::UnitId(_))
        ));
        assert!(matches!(
            "dance".parse::<ShellCommand>(),
            Err(ParseError::Unknown(_))
        ));
    }
}
