use std::fmt::Write;

use minegrid_core::{BoardEngine, RenderCell, route};
use ndarray::Array2;

const HIDDEN: char = '#';
const MINE: char = '*';
const EMPTY: char = '.';

fn symbol(cell: RenderCell) -> char {
    match cell {
        RenderCell::Hidden => HIDDEN,
        RenderCell::RevealedMine => MINE,
        RenderCell::RevealedNumber(0) => EMPTY,
        RenderCell::RevealedNumber(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
    }
}

/// Draws the grid with row labels on the left and column digits on top.
pub fn render_view(view: &Array2<RenderCell>) -> String {
    let (_, cols) = view.dim();
    let mut out = String::from("   ");

    for col in 0..cols {
        let _ = write!(out, "{}", col % 10);
    }
    out.push('\n');

    for (row, cells) in view.rows().into_iter().enumerate() {
        let _ = write!(out, "{row:>2} ");
        out.extend(cells.iter().map(|&cell| symbol(cell)));
        out.push('\n');
    }

    out
}

pub fn render_game(engine: &BoardEngine) -> String {
    let mut out = render_view(&engine.view());
    let status = engine.status();
    if status.is_finished() {
        let _ = writeln!(out, "{status}");
    } else {
        let _ = write!(
            out,
            "{} mines, {} safe cells left",
            engine.total_mines(),
            engine.safe_cells_left()
        );
        if let Some(difficulty) = engine.difficulty() {
            let _ = write!(out, " [{}]", route::route_for(difficulty));
        }
        out.push('\n');
    }
    out
}
