//! Conway's Game of Life as a single-canister simulation service.
//!
//! The engine keeps the live cells of an unbounded plane as a sparse set,
//! seeds them once on `start_game`, and advances one generation per second
//! from a timer. `get_state` exposes the current board as a sorted snapshot.

use std::cell::RefCell;
use std::time::Duration;

use ic_cdk::{init, query, update};

pub mod game;
pub mod rng;
pub mod types;

use game::Game;
use rng::{vrf_seed, UnitSampler};
use types::{GameState, LifeConfig, DEFAULT_BOARD_SIZE, DEFAULT_SEED_RATIO, GAME_TITLE};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Simulation timing: one generation per second
const TICK_INTERVAL_MS: u64 = 1000;

// ============================================================================
// STATE
// ============================================================================

thread_local! {
    /// The one game instance this canister runs
    static GAME: RefCell<Game> = RefCell::new(Game::default());
}

// ============================================================================
// TIMER
// ============================================================================

fn start_simulation_timer() {
    // The timer callback is async; this block has no .await points, so each
    // tick runs to completion before anything else touches the game.
    ic_cdk_timers::set_timer_interval(Duration::from_millis(TICK_INTERVAL_MS), || async {
        GAME.with(|g| g.borrow_mut().evolution());
    });
}

// ============================================================================
// CANISTER LIFECYCLE
// ============================================================================

#[init]
fn init(config: Option<LifeConfig>) {
    let config = config.unwrap_or_default();
    let board_size = config.board_size.unwrap_or(DEFAULT_BOARD_SIZE);
    let seed_ratio = config.seed_ratio.unwrap_or(DEFAULT_SEED_RATIO);

    match Game::new(board_size, seed_ratio) {
        Ok(game) => GAME.with(|g| *g.borrow_mut() = game),
        Err(e) => ic_cdk::trap(&format!("Invalid configuration: {}", e)),
    }

    ic_cdk::println!(
        "Life Backend Initialized - {}x{} seeding region, seed ratio {}",
        board_size,
        board_size,
        seed_ratio
    );
}

// ============================================================================
// UPDATE METHODS
// ============================================================================

/// Seed the board and begin the once-per-second generation schedule.
///
/// The timer runs until the canister stops; there is no stop or restart, so
/// a second call is rejected.
#[update]
async fn start_game() -> Result<(), String> {
    if GAME.with(|g| g.borrow().started()) {
        return Err("Game already started".to_string());
    }

    let seed = vrf_seed().await;

    // Re-check AFTER the await to prevent a double-start race
    let alive = GAME.with(|g| {
        let mut game = g.borrow_mut();
        let mut sampler = UnitSampler::from_seed(seed);
        game.start(&mut sampler)?;
        Ok::<_, String>(game.board().alive_count())
    })?;

    start_simulation_timer();
    ic_cdk::println!("Game started with {} live cells", alive);
    Ok(())
}

// ============================================================================
// QUERY METHODS
// ============================================================================

/// Current snapshot: fixed title, generation count, live cells sorted by
/// coordinate. Before `start_game` this is the empty board at generation 0.
#[query]
fn get_state() -> GameState {
    GAME.with(|g| {
        let game = g.borrow();
        GameState {
            title: GAME_TITLE.to_string(),
            generation: game.generation(),
            cells: game.state(),
        }
    })
}

// ============================================================================
// TESTS
// ============================================================================


// Export Candid interface
ic_cdk::export_candid!();
