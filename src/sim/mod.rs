//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Single-writer: the tick is the sole mutator of scores and resets
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{
    floor_contact, player_overlaps, resolve_ceiling, resolve_net, resolve_player_hit,
    resolve_walls,
};
pub use state::{Ball, GameEvent, GameState, MatchPhase, Player, Side};
pub use tick::{PlayerInput, TickInput, tick};
