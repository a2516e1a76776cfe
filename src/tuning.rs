//! Data-driven game balance
//!
//! Every gameplay number lives in [`Tuning`] so a match can be constructed
//! with non-default balance (smaller court in tests, higher gravity, shorter
//! matches). Defaults mirror [`crate::consts`]. Construction validates once
//! via [`Tuning::validate`]; per-tick code trusts the values after that.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Constraint violation found at setup time
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("court dimensions must be positive, got {width}x{height}")]
    Court { width: f32, height: f32 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("jump force must be negative (y grows downward), got {0}")]
    JumpForce(f32),

    #[error("net {width}x{height} does not fit inside the court")]
    Net { width: f32, height: f32 },

    #[error("winning score must be at least 1")]
    WinningScore,
}

/// All gameplay constants, fixed for the lifetime of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub court_width: f32,
    pub court_height: f32,
    pub net_width: f32,
    pub net_height: f32,
    /// Downward acceleration applied to every airborne body, per tick
    pub gravity: f32,
    pub player_body_radius: f32,
    /// Head circle radius (rendering only, never collided)
    pub player_head_radius: f32,
    pub player_speed: f32,
    pub jump_force: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    /// Extra upward velocity when the ball is struck from below
    pub spike_boost: f32,
    pub winning_score: u32,
    pub goal_pause_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            court_width: COURT_WIDTH,
            court_height: COURT_HEIGHT,
            net_width: NET_WIDTH,
            net_height: NET_HEIGHT,
            gravity: GRAVITY,
            player_body_radius: PLAYER_BODY_RADIUS,
            player_head_radius: PLAYER_HEAD_RADIUS,
            player_speed: PLAYER_SPEED,
            jump_force: JUMP_FORCE,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            spike_boost: SPIKE_BOOST,
            winning_score: WINNING_SCORE,
            goal_pause_ticks: GOAL_PAUSE_TICKS,
        }
    }
}

impl Tuning {
    /// Fail fast on out-of-range balance values
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.court_width <= 0.0 || self.court_height <= 0.0 {
            return Err(TuningError::Court {
                width: self.court_width,
                height: self.court_height,
            });
        }
        for (name, value) in [
            ("gravity", self.gravity),
            ("player_body_radius", self.player_body_radius),
            ("player_head_radius", self.player_head_radius),
            ("player_speed", self.player_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("net_width", self.net_width),
            ("net_height", self.net_height),
        ] {
            if value <= 0.0 {
                return Err(TuningError::NonPositive { name, value });
            }
        }
        if self.spike_boost < 0.0 {
            return Err(TuningError::NonPositive {
                name: "spike_boost",
                value: self.spike_boost,
            });
        }
        if self.jump_force >= 0.0 {
            return Err(TuningError::JumpForce(self.jump_force));
        }
        if self.net_width >= self.court_width || self.net_height >= self.court_height {
            return Err(TuningError::Net {
                width: self.net_width,
                height: self.net_height,
            });
        }
        // Each half must at least hold a torso circle between wall and net
        if self.court_width / 2.0 - self.net_width / 2.0 < 2.0 * self.player_body_radius {
            return Err(TuningError::Net {
                width: self.net_width,
                height: self.net_height,
            });
        }
        if self.winning_score == 0 {
            return Err(TuningError::WinningScore);
        }
        Ok(())
    }

    /// Horizontal court midpoint (net centerline)
    #[inline]
    pub fn court_mid(&self) -> f32 {
        self.court_width / 2.0
    }

    /// Left face of the net rectangle
    #[inline]
    pub fn net_left(&self) -> f32 {
        self.court_mid() - self.net_width / 2.0
    }

    /// Right face of the net rectangle
    #[inline]
    pub fn net_right(&self) -> f32 {
        self.court_mid() + self.net_width / 2.0
    }

    /// Top edge of the net (the net rises from the floor)
    #[inline]
    pub fn net_top(&self) -> f32 {
        self.court_height - self.net_height
    }

    /// Floor line
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.court_height
    }

    /// Per-component velocity cap after a player hit
    #[inline]
    pub fn speed_cap(&self) -> f32 {
        self.ball_speed * 1.5
    }

    /// Serve position: court center, quarter height
    #[inline]
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.court_mid(), self.court_height / 4.0)
    }
}
