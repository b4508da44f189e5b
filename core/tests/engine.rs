use minegrid_core::*;

fn brute_force_count(engine: &BoardEngine, (row, col): Coord2) -> u8 {
    let (rows, cols) = engine.size();
    let mut count = 0;
    for d_row in -1i16..=1 {
        for d_col in -1i16..=1 {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            let r = i16::from(row) + d_row;
            let c = i16::from(col) + d_col;
            if r < 0 || c < 0 || r >= i16::from(rows) || c >= i16::from(cols) {
                continue;
            }
            if engine.cell_value((r as Coord, c as Coord)).unwrap().is_mine() {
                count += 1;
            }
        }
    }
    count
}

fn safe_cells(engine: &BoardEngine) -> Vec<Coord2> {
    iter_coords(engine.size())
        .filter(|&coords| !engine.cell_value(coords).unwrap().is_mine())
        .collect()
}

fn first_mine(engine: &BoardEngine) -> Coord2 {
    iter_coords(engine.size())
        .find(|&coords| engine.cell_value(coords).unwrap().is_mine())
        .unwrap()
}

fn two_by_two() -> BoardEngine {
    BoardEngine::from_layout(MineLayout::from_mine_coords((2, 2), &[(0, 0)]).unwrap(), 0).unwrap()
}

#[test]
fn generated_boards_have_exact_mines_and_true_counts() {
    for placement in [Placement::Rejection, Placement::Shuffle] {
        for difficulty in Difficulty::ALL {
            let engine = BoardEngine::with_placement(difficulty, 1234, placement).unwrap();
            let config = difficulty.config();

            assert_eq!(engine.size(), config.size);
            assert_eq!(engine.total_mines(), config.mines);
            assert_eq!(engine.status(), GameStatus::InProgress);
            assert_eq!(engine.revealed_count(), 0);

            let mut mines = 0;
            for coords in iter_coords(engine.size()) {
                match engine.cell_value(coords).unwrap() {
                    CellValue::Mine => mines += 1,
                    CellValue::Safe(count) => {
                        assert!(count <= 8);
                        assert_eq!(count, brute_force_count(&engine, coords), "{coords:?}");
                    }
                }
            }
            assert_eq!(mines, config.mines);
        }
    }
}

#[test]
fn two_by_two_counts() {
    let engine = two_by_two();

    assert_eq!(engine.cell_value((0, 0)).unwrap(), CellValue::Mine);
    for coords in [(0, 1), (1, 0), (1, 1)] {
        assert_eq!(engine.cell_value(coords).unwrap(), CellValue::Safe(1));
    }
}

#[test]
fn two_by_two_win() {
    let mut engine = two_by_two();

    assert_eq!(engine.reveal((1, 1)).unwrap(), GameStatus::InProgress);
    assert_eq!(engine.revealed().collect::<Vec<_>>(), [(1, 1)]);

    assert_eq!(engine.reveal((0, 1)).unwrap(), GameStatus::InProgress);
    assert_eq!(engine.reveal((1, 0)).unwrap(), GameStatus::Won);
    assert_eq!(engine.revealed_count(), 4);
    assert_eq!(engine.status().message(), "You won");
}

#[test]
fn two_by_two_loss() {
    let mut engine = two_by_two();

    assert_eq!(engine.reveal((0, 0)).unwrap(), GameStatus::Lost);
    assert_eq!(engine.revealed_count(), 4);
    assert_eq!(engine.status().message(), "You lost");
}

#[test]
fn repeated_reveal_is_idempotent() {
    let mut engine = two_by_two();
    engine.reveal((1, 1)).unwrap();
    let before: Vec<_> = engine.revealed().collect();

    assert_eq!(engine.reveal((1, 1)).unwrap(), GameStatus::InProgress);
    assert_eq!(engine.revealed().collect::<Vec<_>>(), before);
    assert_eq!(engine.safe_cells_left(), 2);
}

#[test]
fn terminal_status_is_latched() {
    let mut engine = two_by_two();
    engine.reveal((0, 0)).unwrap();
    let view = engine.view();

    for coords in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        assert_eq!(engine.reveal(coords).unwrap(), GameStatus::Lost);
    }
    assert_eq!(engine.revealed_count(), 4);
    assert_eq!(engine.view(), view);

    let mut engine = two_by_two();
    for coords in [(1, 0), (0, 1), (1, 1)] {
        engine.reveal(coords).unwrap();
    }
    assert_eq!(engine.reveal((0, 0)).unwrap(), GameStatus::Won);
    assert_eq!(engine.status(), GameStatus::Won);
}

#[test]
fn revealing_every_safe_cell_wins_in_any_order() {
    let mut engine = BoardEngine::new(Difficulty::Medium, 99).unwrap();
    let mut order = safe_cells(&engine);
    order.reverse();
    let (last, rest) = order.split_last().unwrap();

    for &coords in rest {
        assert_eq!(engine.reveal(coords).unwrap(), GameStatus::InProgress);
    }
    assert_eq!(engine.safe_cells_left(), 1);
    assert_eq!(engine.reveal(*last).unwrap(), GameStatus::Won);

    let config = Difficulty::Medium.config();
    assert_eq!(engine.revealed_count(), config.total_cells());
    assert!(engine.view().iter().all(|&cell| cell != RenderCell::Hidden));
}

#[test]
fn revealing_a_generated_mine_loses() {
    for difficulty in Difficulty::ALL {
        let mut engine = BoardEngine::new(difficulty, 5).unwrap();
        let mine = first_mine(&engine);

        assert_eq!(engine.reveal(mine).unwrap(), GameStatus::Lost);
        assert_eq!(engine.revealed_count(), difficulty.config().total_cells());
    }
}

#[test]
fn reset_switches_difficulty_and_clears_state() {
    let mut engine = BoardEngine::new(Difficulty::Easy, 8).unwrap();
    engine.reveal(first_mine(&engine)).unwrap();

    engine.reset(Some(Difficulty::Hard)).unwrap();

    assert_eq!(engine.difficulty(), Some(Difficulty::Hard));
    assert_eq!(engine.size(), (30, 16));
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.revealed_count(), 0);

    engine.reset(None).unwrap();
    assert_eq!(engine.difficulty(), Some(Difficulty::Hard));
    assert_eq!(engine.total_mines(), 99);
}

#[test]
fn routes_switch_difficulty_and_ignore_garbage() {
    let mut engine = BoardEngine::new(Difficulty::Easy, 8).unwrap();
    engine.reveal(safe_cells(&engine)[0]).unwrap();

    assert!(!engine.apply_route("#/game/unknown").unwrap());
    assert!(!engine.apply_route("#/game/easy").unwrap());
    assert_eq!(engine.revealed_count(), 1);

    assert!(engine.apply_route("#/game/medium").unwrap());
    assert_eq!(engine.difficulty(), Some(Difficulty::Medium));
    assert_eq!(engine.size(), (16, 16));
    assert_eq!(engine.revealed_count(), 0);
}

#[test]
fn same_seed_replays_same_games() {
    let mut a = BoardEngine::new(Difficulty::Hard, 2024).unwrap();
    let mut b = BoardEngine::new(Difficulty::Hard, 2024).unwrap();
    assert_eq!(a.board(), b.board());

    a.reset(None).unwrap();
    b.reset(None).unwrap();
    assert_eq!(a.board(), b.board());
}

#[test]
fn full_layout_cannot_start_a_game() {
    let layout = MineLayout::from_ascii(&["**", "**"]).unwrap();

    assert_eq!(layout.game_config().validate(), Err(GameError::TooManyMines));
    assert_eq!(
        BoardEngine::from_layout(layout, 0).err(),
        Some(GameError::TooManyMines)
    );
}

#[test]
fn degenerate_custom_configs_are_rejected() {
    assert_eq!(
        BoardEngine::with_config(GameConfig::new_unchecked((3, 3), 9), 0).err(),
        Some(GameError::TooManyMines)
    );

    let engine = BoardEngine::with_config(GameConfig::new((3, 3), 8).unwrap(), 0).unwrap();
    assert_eq!(safe_cells(&engine).len(), 1);
}
