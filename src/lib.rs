//! Arcade Volley - a two-player arcade volleyball simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, match state)
//! - `tuning`: Data-driven game balance with fail-fast validation
//!
//! Rendering, input polling and window management are deliberately out of
//! scope. The shell that owns the frame loop feeds a [`sim::TickInput`]
//! snapshot into [`sim::tick`] once per fixed timestep and reads plain
//! positions, radii and scores back out for drawing.
//!
//! Coordinates: `y` grows downward, the ceiling is `y = 0` and the floor
//! line is `y = court_height`.

pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
///
/// These are the classic arcade values; [`Tuning::default`] mirrors them.
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const SIM_HZ: u32 = 60;

    /// Court dimensions
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 600.0;

    /// Net: vertical rectangle rising from the floor, centered on the midline
    pub const NET_WIDTH: f32 = 10.0;
    pub const NET_HEIGHT: f32 = 300.0;

    /// Player defaults - the torso circle is the only collidable shape,
    /// the head circle is rendering detail
    pub const PLAYER_BODY_RADIUS: f32 = 25.0;
    pub const PLAYER_HEAD_RADIUS: f32 = 12.5;
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Jump impulse (negative = upward)
    pub const JUMP_FORCE: f32 = -15.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_SPEED: f32 = 7.0;
    /// Extra upward kick when the ball is struck from below
    pub const SPIKE_BOOST: f32 = 5.0;

    /// Gravity per tick (unitless, tuned for the fixed tick rate)
    pub const GRAVITY: f32 = 0.5;

    /// Match rules
    pub const WINNING_SCORE: u32 = 21;
    /// Freeze between a point and the next rally (1 second at 60 Hz)
    pub const GOAL_PAUSE_TICKS: u32 = 60;
}
