//! Property tests for the board engine and score tracker.

use proptest::{array::uniform4, prelude::*, sample::select};
use rand::{SeedableRng, rngs::StdRng};
use terminal_2048::{
    Score,
    board::{Cell, Direction, GameStatus, Grid, SIZE, apply_move, spawn_tile, status},
};

/// Grids with tiles up to 1024, so the default win tile never appears
fn grid_strategy() -> impl Strategy<Value = Grid> {
    uniform4(uniform4(0u32..=10)).prop_map(|exponents| {
        let rows = exponents.map(|row| row.map(|e| if e == 0 { 0 } else { 1 << e }));
        Grid::from_rows(rows).expect("generated values are powers of two")
    })
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    select(Direction::ALL.to_vec())
}

fn has_equal_neighbours(grid: &Grid) -> bool {
    (0..SIZE).any(|r| {
        (0..SIZE).any(|c| {
            let cell = grid.get(r, c);
            (c + 1 < SIZE && cell == grid.get(r, c + 1))
                || (r + 1 < SIZE && cell == grid.get(r + 1, c))
        })
    })
}

proptest! {
    #[test]
    fn merges_account_for_board_growth(grid in grid_strategy(), direction in direction_strategy()) {
        let outcome = apply_move(grid, direction);
        if outcome.changed {
            prop_assert_eq!(outcome.grid.total(), grid.total() + outcome.merge_total());
        }
    }

    #[test]
    fn no_op_leaves_grid_untouched(grid in grid_strategy(), direction in direction_strategy()) {
        let outcome = apply_move(grid, direction);
        if !outcome.changed {
            prop_assert_eq!(outcome.grid, grid);
            prop_assert!(outcome.merges.is_empty());
        }
    }

    #[test]
    fn merged_tile_merges_once(value_exp in 1u32..=10, direction in direction_strategy()) {
        let v = 1u32 << value_exp;
        let rows = match direction {
            Direction::Left | Direction::Right => [[v; SIZE], [0; SIZE], [0; SIZE], [0; SIZE]],
            Direction::Up | Direction::Down => [[v, 0, 0, 0]; SIZE],
        };
        let outcome = apply_move(Grid::from_rows(rows).unwrap(), direction);
        prop_assert_eq!(outcome.merges.len(), 2);
        prop_assert_eq!(outcome.grid.occupied_count(), 2);
        prop_assert_eq!(outcome.grid.highest_tile(), v * 2);
    }

    #[test]
    fn score_grows_by_merge_total(
        seed in any::<u64>(),
        moves in prop::collection::vec(direction_strategy(), 1..60),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = terminal_2048::board::initialize(&mut rng);
        let mut score = Score::default();
        for direction in moves {
            let outcome = apply_move(grid, direction);
            let before = score;
            score = score.apply(&outcome);
            prop_assert!(score >= before);
            prop_assert_eq!(score.value() - before.value(), outcome.merge_total());
            if outcome.changed {
                grid = spawn_tile(outcome.grid, &mut rng);
            }
        }
    }

    #[test]
    fn lost_iff_full_and_locked(grid in grid_strategy()) {
        let locked = grid.is_full() && !has_equal_neighbours(&grid);
        prop_assert_eq!(status(&grid, 2048) == GameStatus::Lost, locked);
    }

    #[test]
    fn spawn_fills_exactly_one_empty_cell(grid in grid_strategy(), seed in any::<u64>()) {
        prop_assume!(!grid.is_full());
        let mut rng = StdRng::seed_from_u64(seed);
        let spawned = spawn_tile(grid, &mut rng);

        let mut filled = 0;
        for r in 0..SIZE {
            for c in 0..SIZE {
                let (before, after) = (grid.get(r, c), spawned.get(r, c));
                if before.is_empty() {
                    if let Cell::Tile(value) = after {
                        prop_assert!(value == 2 || value == 4);
                        filled += 1;
                    }
                } else {
                    prop_assert_eq!(before, after);
                }
            }
        }
        prop_assert_eq!(filled, 1);
    }
}

#[test]
fn pairs_merge_left_to_right() {
    let grid = Grid::from_rows([[2, 2, 4, 4], [0; 4], [0; 4], [0; 4]]).unwrap();
    let outcome = apply_move(grid, Direction::Left);
    assert_eq!(outcome.grid.to_rows()[0], [4, 8, 0, 0]);
    let merged: Vec<u32> = outcome.merges.iter().map(|m| m.value).collect();
    assert_eq!(merged, vec![4, 8]);
    assert_eq!(Score::default().apply(&outcome).value(), 12);
}

#[test]
fn new_tile_does_not_merge_again() {
    let grid = Grid::from_rows([[2, 0, 2, 2], [0; 4], [0; 4], [0; 4]]).unwrap();
    let outcome = apply_move(grid, Direction::Left);
    assert_eq!(outcome.grid.to_rows()[0], [4, 2, 0, 0]);
}

#[test]
fn checkerboard_is_lost() {
    let grid = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
    for direction in Direction::ALL {
        assert!(!apply_move(grid, direction).changed);
    }
    assert_eq!(status(&grid, 2048), GameStatus::Lost);
}
