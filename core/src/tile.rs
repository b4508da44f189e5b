use serde::{Deserialize, Serialize};

/// Fixed content of a board cell, decided at generation time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    Mine,
    /// Safe cell with the number of mines among its neighbours.
    Safe(u8),
}

impl CellValue {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Safe(0)
    }
}

/// Disclosure state tracked by the engine for each cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineCell {
    Hidden,
    /// Opened by the player, counts towards the win condition.
    Revealed,
    /// Opened by the full-board disclosure when the game ended.
    Disclosed,
}

impl EngineCell {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed | Self::Disclosed)
    }
}

impl Default for EngineCell {
    fn default() -> Self {
        Self::Hidden
    }
}

/// What a presentation layer may show for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderCell {
    Hidden,
    RevealedMine,
    RevealedNumber(u8),
}

impl RenderCell {
    pub const fn from_parts(state: EngineCell, value: CellValue) -> Self {
        match (state.is_revealed(), value) {
            (false, _) => Self::Hidden,
            (true, CellValue::Mine) => Self::RevealedMine,
            (true, CellValue::Safe(count)) => Self::RevealedNumber(count),
        }
    }
}

impl Default for RenderCell {
    fn default() -> Self {
        Self::Hidden
    }
}
