use core::fmt;
use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Text for the status line of a presentation layer.
    pub const fn message(self) -> &'static str {
        match self {
            Self::InProgress => "",
            Self::Won => "You won",
            Self::Lost => "You lost",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A single game of mines, owned and driven by one caller.
///
/// Reveals never cascade: each call opens exactly one cell, except for the full-board disclosure once the game is
/// won or lost.
#[derive(Clone, Debug)]
pub struct BoardEngine {
    generator: RandomMineGenerator,
    difficulty: Option<Difficulty>,
    board: Board,
    cells: Array2<EngineCell>,
    revealed_count: CellCount,
    disclosed_count: CellCount,
    status: GameStatus,
}

impl BoardEngine {
    pub fn new(difficulty: Difficulty, seed: u64) -> Result<Self> {
        Self::with_placement(difficulty, seed, Placement::default())
    }

    pub fn with_placement(difficulty: Difficulty, seed: u64, placement: Placement) -> Result<Self> {
        let mut engine =
            Self::with_generator(RandomMineGenerator::new(seed, placement), difficulty.config())?;
        engine.difficulty = Some(difficulty);
        Ok(engine)
    }

    pub fn with_config(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(RandomMineGenerator::new(seed, Placement::default()), config)
    }

    pub fn with_generator(mut generator: RandomMineGenerator, config: GameConfig) -> Result<Self> {
        let layout = generator.generate(config)?;
        Ok(Self::assemble(generator, layout))
    }

    /// Starts a game over a known layout, later resets draw from `seed`.
    ///
    /// The layout must leave at least one safe cell, like any generated board.
    pub fn from_layout(layout: MineLayout, seed: u64) -> Result<Self> {
        layout.game_config().validate()?;
        Ok(Self::assemble(
            RandomMineGenerator::new(seed, Placement::default()),
            layout,
        ))
    }

    fn assemble(generator: RandomMineGenerator, layout: MineLayout) -> Self {
        let board = Board::from_layout(&layout);
        Self {
            generator,
            difficulty: None,
            cells: Array2::default(board.size().to_nd_index()),
            board,
            revealed_count: 0,
            disclosed_count: 0,
            status: GameStatus::InProgress,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// The preset the current board was generated from, if any.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn config(&self) -> GameConfig {
        self.board.game_config()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    /// Number of cells in the revealed set, including the end-of-game disclosure.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count + self.disclosed_count
    }

    /// Safe cells the player still has to open to win.
    pub fn safe_cells_left(&self) -> CellCount {
        self.board.safe_cell_count().saturating_sub(self.revealed_count)
    }

    pub fn revealed(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_revealed())
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub fn is_revealed(&self, coords: Coord2) -> Result<bool> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()].is_revealed())
    }

    pub fn cell_state(&self, coords: Coord2) -> Result<EngineCell> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    /// Peeks at the true content of a cell, whether revealed or not.
    pub fn cell_value(&self, coords: Coord2) -> Result<CellValue> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.board[coords])
    }

    /// Grid of what may be shown, unrevealed cells are always `Hidden`.
    pub fn view(&self) -> Array2<RenderCell> {
        Zip::from(&self.cells)
            .and(self.board.cells())
            .map_collect(|&state, &value| RenderCell::from_parts(state, value))
    }

    /// Replaces the board with a fresh one from a preset.
    pub fn generate(&mut self, difficulty: Difficulty) -> Result<()> {
        self.generate_config(difficulty.config())?;
        self.difficulty = Some(difficulty);
        Ok(())
    }

    /// Replaces the board with a fresh one of any valid size.
    ///
    /// On error the current game is left untouched.
    pub fn generate_config(&mut self, config: GameConfig) -> Result<()> {
        let layout = self.generator.generate(config).inspect_err(|err| {
            log::warn!(
                "Rejected {}x{} board with {} mines: {}",
                config.rows(),
                config.cols(),
                config.mines,
                err
            );
        })?;

        self.load(layout);
        self.difficulty = None;
        Ok(())
    }

    /// Starts a new game, at `difficulty` when given or with the current settings otherwise.
    pub fn reset(&mut self, difficulty: Option<Difficulty>) -> Result<()> {
        match difficulty.or(self.difficulty) {
            Some(difficulty) => self.generate(difficulty),
            None => self.generate_config(self.config()),
        }
    }

    /// Switches to the difficulty named by a `#/game/<level>` route.
    ///
    /// Returns whether a new game was started, unknown routes and the current level are ignored.
    pub fn apply_route(&mut self, route: &str) -> Result<bool> {
        let Some(difficulty) = route::parse_route(route) else {
            log::debug!("Ignoring unrecognized route {route:?}");
            return Ok(false);
        };

        if self.difficulty == Some(difficulty) {
            return Ok(false);
        }

        self.generate(difficulty)?;
        Ok(true)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<GameStatus> {
        let coords = self.board.validate_coords(coords)?;

        if self.status.is_finished() || self.cells[coords.to_nd_index()].is_revealed() {
            return Ok(self.status);
        }

        self.cells[coords.to_nd_index()] = EngineCell::Revealed;
        self.revealed_count += 1;

        match self.board[coords] {
            CellValue::Mine => {
                log::info!("Mine revealed at {coords:?}, game lost");
                self.end_game(GameStatus::Lost);
            }
            CellValue::Safe(count) => {
                log::debug!("Revealed {coords:?} with {count} adjacent mines");
                if self.revealed_count == self.board.safe_cell_count() {
                    log::info!("All {} safe cells revealed, game won", self.revealed_count);
                    self.end_game(GameStatus::Won);
                }
            }
        }

        Ok(self.status)
    }

    fn load(&mut self, layout: MineLayout) {
        self.board = Board::from_layout(&layout);
        self.cells = Array2::default(self.board.size().to_nd_index());
        self.revealed_count = 0;
        self.disclosed_count = 0;
        self.status = GameStatus::InProgress;
    }

    fn end_game(&mut self, status: GameStatus) {
        self.status = status;
        for cell in self.cells.iter_mut() {
            if *cell == EngineCell::Hidden {
                *cell = EngineCell::Disclosed;
                self.disclosed_count += 1;
            }
        }
    }
}
