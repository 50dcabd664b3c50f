//! Sparse Game of Life engine on an unbounded plane.
//!
//! The board is exactly the set of live cells; everything outside it is
//! dead. Each generation is computed as a pure function of the previous
//! board and swapped in wholesale, so every cell is judged against the same
//! pre-transition state and readers only ever observe complete generations.

use std::collections::HashSet;

use crate::rng::UnitSampler;
use crate::types::Cell;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Offsets to the 8 neighbors at Chebyshev distance 1.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), // NW
    (0, -1),  // N
    (1, -1),  // NE
    (-1, 0),  // W
    (1, 0),   // E
    (-1, 1),  // SW
    (0, 1),   // S
    (1, 1),   // SE
];

// ============================================================================
// BOARD
// ============================================================================

/// The sparse board: the set of cells that are currently alive.
///
/// The plane is unbounded, so the set grows without limit as patterns
/// expand and coordinates may go negative as they drift.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: HashSet<Cell>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: HashSet::new(),
        }
    }

    pub fn from_cells(cells: impl IntoIterator<Item = (i32, i32)>) -> Self {
        Self {
            cells: cells.into_iter().map(|(x, y)| Cell { x, y }).collect(),
        }
    }

    /// Mark a cell alive. Marking it twice is a no-op.
    pub fn set_alive(&mut self, x: i32, y: i32) {
        self.cells.insert(Cell { x, y });
    }

    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.cells.contains(&Cell { x, y })
    }

    pub fn alive_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Live cells sorted by coordinate for a stable wire order.
    pub fn sorted_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.cells.iter().copied().collect();
        cells.sort_unstable();
        cells
    }
}

// ============================================================================
// GAME OF LIFE RULES
// ============================================================================

/// Count live neighbors with 8 membership probes against the current board.
fn count_live_neighbors(board: &Board, x: i32, y: i32) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|(dx, dy)| board.is_alive(x + dx, y + dy))
        .count() as u8
}

/// B3/S23 transition rule for a single cell, judged against the current
/// board only.
pub fn cell_next_generation_state(board: &Board, x: i32, y: i32) -> bool {
    let alive = board.is_alive(x, y);
    let live_neighbors = count_live_neighbors(board, x, y);

    match (alive, live_neighbors) {
        // Survival: 2 or 3 neighbors
        (true, 2) | (true, 3) => true,
        // Birth: exactly 3 neighbors
        (false, 3) => true,
        // Death by isolation or overcrowding, or stays dead
        _ => false,
    }
}

/// Compute the next board as a pure function of the current one.
///
/// Only cells that can possibly change are examined: every live cell plus
/// its 8 neighbors. A dead cell outside that candidate set has no live
/// neighbors and cannot be born.
pub fn next_generation(board: &Board) -> Board {
    let mut candidates: HashSet<Cell> = HashSet::new();
    for cell in board.iter() {
        candidates.insert(*cell);
        for (dx, dy) in NEIGHBOR_OFFSETS {
            candidates.insert(Cell {
                x: cell.x + dx,
                y: cell.y + dy,
            });
        }
    }

    let mut next = Board::new();
    for cell in candidates {
        if cell_next_generation_state(board, cell.x, cell.y) {
            next.set_alive(cell.x, cell.y);
        }
    }
    next
}

// ============================================================================
// GAME ENGINE
// ============================================================================

/// The engine owning the board and driving it through generations.
///
/// Lifecycle: constructed unseeded, seeded exactly once by `start`, then
/// advanced one generation per tick by `evolution`.
#[derive(Clone, Debug)]
pub struct Game {
    board_size: u32,
    seed_ratio: f64,
    board: Board,
    generation: u64,
    started: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            board_size: crate::types::DEFAULT_BOARD_SIZE,
            seed_ratio: crate::types::DEFAULT_SEED_RATIO,
            board: Board::new(),
            generation: 0,
            started: false,
        }
    }
}

impl Game {
    /// Create an engine with the given seeding region and live probability.
    ///
    /// `board_size` bounds the seeded region only; once running, the board
    /// is free to grow past it in any direction.
    pub fn new(board_size: u32, seed_ratio: f64) -> Result<Self, String> {
        if board_size == 0 {
            return Err("board_size must be positive".to_string());
        }
        if !(0.0..=1.0).contains(&seed_ratio) {
            return Err(format!(
                "seed_ratio must be within [0, 1], got {}",
                seed_ratio
            ));
        }

        Ok(Self {
            board_size,
            seed_ratio,
            board: Board::new(),
            generation: 0,
            started: false,
        })
    }

    /// Seed the board and mark the game running. Rejected once started.
    pub fn start(&mut self, sampler: &mut UnitSampler) -> Result<(), String> {
        if self.started {
            return Err("Game already started".to_string());
        }

        self.board = Board::new();
        self.generation = 0;
        self.seed_board(sampler);
        self.started = true;
        Ok(())
    }

    /// Populate the seeding region: each cell of the `board_size` square is
    /// drawn alive with probability `seed_ratio`.
    ///
    /// If no cell comes up alive, fall back to a fixed three-cell row so the
    /// simulation never starts from a dead board.
    fn seed_board(&mut self, sampler: &mut UnitSampler) {
        for x in 0..self.board_size as i32 {
            for y in 0..self.board_size as i32 {
                if sampler.next_unit() <= self.seed_ratio {
                    self.board.set_alive(x, y);
                }
            }
        }

        if self.board.is_empty() {
            ic_cdk::println!("Seeding produced an empty board, using the fallback pattern");
            self.board.set_alive(0, 0);
            self.board.set_alive(1, 0);
            self.board.set_alive(2, 0);
        }
    }

    /// Advance the simulation by one generation. The successor replaces the
    /// board wholesale.
    pub fn evolution(&mut self) {
        self.board = next_generation(&self.board);
        self.generation += 1;
    }

    /// Snapshot of the live cells, sorted by coordinate.
    pub fn state(&self) -> Vec<Cell> {
        self.board.sorted_cells()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn board_size(&self) -> u32 {
        self.board_size
    }

    pub fn seed_ratio(&self) -> f64 {
        self.seed_ratio
    }
}
