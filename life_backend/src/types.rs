//! Candid types and constants shared across the canister interface.

use candid::{CandidType, Deserialize};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Title reported in every state snapshot.
pub const GAME_TITLE: &str = "Conway's Game Of Life";

/// Side length of the square seeding region.
pub const DEFAULT_BOARD_SIZE: u32 = 5;

/// Probability that a cell of the seeding region starts alive.
pub const DEFAULT_SEED_RATIO: f64 = 0.5;

// ============================================================================
// TYPES FOR CANDID
// ============================================================================

/// One cell of the unbounded plane, identified by its coordinates.
///
/// Equality and hashing are by coordinate pair, so a set of cells can never
/// hold the same position twice. The derived ordering (x first, then y) is
/// the wire order of snapshots.
#[derive(CandidType, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

/// Install-time configuration. Omitted fields fall back to the defaults.
#[derive(CandidType, Deserialize, Clone, Debug, Default)]
pub struct LifeConfig {
    pub board_size: Option<u32>,
    pub seed_ratio: Option<f64>,
}

/// Snapshot served by `get_state`: the fixed title, the number of
/// generations computed so far, and the live cells sorted by coordinate.
#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct GameState {
    pub title: String,
    pub generation: u64,
    pub cells: Vec<Cell>,
}
