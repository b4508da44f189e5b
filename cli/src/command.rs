use minegrid_core::{Coord, Coord2, Difficulty};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Reset(Option<Difficulty>),
    Route(String),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?}, try `help`")]
    Unknown(String),
    #[error("{0:?} is not a valid coordinate")]
    InvalidCoord(String),
    #[error("expected `<row> <col>`")]
    MissingColumn,
    #[error("unknown difficulty {0:?}, expected easy, medium or hard")]
    UnknownDifficulty(String),
    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),
}

/// Parses one input line, blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(None);
    };

    let command = match first {
        "quit" | "exit" | "q" => Command::Quit,
        "help" | "?" => Command::Help,
        "reset" | "new" => Command::Reset(
            words
                .next()
                .map(|level| {
                    level
                        .parse()
                        .map_err(|_| CommandError::UnknownDifficulty(level.to_owned()))
                })
                .transpose()?,
        ),
        route if route.starts_with('#') => Command::Route(route.to_owned()),
        row if row.starts_with(|c: char| c.is_ascii_digit()) => {
            let col = words.next().ok_or(CommandError::MissingColumn)?;
            Command::Reveal((parse_coord(row)?, parse_coord(col)?))
        }
        other => return Err(CommandError::Unknown(other.to_owned())),
    };

    if let Some(extra) = words.next() {
        return Err(CommandError::TrailingInput(extra.to_owned()));
    }
    Ok(Some(command))
}

fn parse_coord(word: &str) -> Result<Coord, CommandError> {
    word.parse()
        .map_err(|_| CommandError::InvalidCoord(word.to_owned()))
}
