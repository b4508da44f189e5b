use minegrid_core::{BoardEngine, Result};

use crate::command::Command;

pub const HELP: &str = "\
commands:
  <row> <col>        reveal a cell
  reset [level]      start a new game, optionally at easy, medium or hard
  #/game/<level>     switch difficulty
  help               show this text
  quit               leave the game
";

/// What the frontend should do after a command ran.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Redraw,
    Unchanged,
    ShowHelp,
    Quit,
}

pub fn execute(engine: &mut BoardEngine, command: Command) -> Result<Response> {
    Ok(match command {
        Command::Reveal(coords) => {
            let was_revealed = engine.is_revealed(coords)?;
            let before = engine.status();
            engine.reveal(coords)?;
            if before.is_finished() || was_revealed {
                Response::Unchanged
            } else {
                Response::Redraw
            }
        }
        Command::Reset(difficulty) => {
            engine.reset(difficulty)?;
            Response::Redraw
        }
        Command::Route(route) => {
            if engine.apply_route(&route)? {
                Response::Redraw
            } else {
                Response::Unchanged
            }
        }
        Command::Help => Response::ShowHelp,
        Command::Quit => Response::Quit,
    })
}
