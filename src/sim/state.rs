//! Match state and core simulation types
//!
//! All state a shell needs for rendering or persistence lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::{Tuning, TuningError};

/// Which half of the court a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Index into `GameState::players`
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Normal rally, full physics
    Playing,
    /// Post-point freeze; the ball sits at its serve position until the
    /// tick-counted deadline expires
    GoalPause,
    /// A player reached the winning score; only a restart signal leaves this
    MatchOver,
}

/// Events emitted by [`super::tick`] for the shell (sound, UI, flow control)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PointScored { scorer: Side },
    /// Goal pause expired, ball is live again
    RallyStarted,
    MatchWon { winner: Side },
    MatchRestarted,
}

/// A player: two stacked circles, of which only the lower torso circle
/// collides. Horizontal motion is positional (no momentum), vertical motion
/// is gravity plus jump impulses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub side: Side,
    /// Center of the torso circle; its bottom edge rests on the floor when
    /// grounded
    pub pos: Vec2,
    pub vel_y: f32,
    pub grounded: bool,
    pub body_radius: f32,
    /// Rendering only, never collided
    pub head_radius: f32,
    pub score: u32,
}

impl Player {
    pub fn new(side: Side, tuning: &Tuning) -> Self {
        Self {
            side,
            pos: Vec2::new(
                Self::spawn_x(side, tuning),
                tuning.floor_y() - tuning.player_body_radius,
            ),
            vel_y: 0.0,
            grounded: true,
            body_radius: tuning.player_body_radius,
            head_radius: tuning.player_head_radius,
            score: 0,
        }
    }

    /// Torso center one eighth of the court plus one radius in from the
    /// player's back wall
    fn spawn_x(side: Side, tuning: &Tuning) -> f32 {
        let inset = tuning.court_width / 8.0 + tuning.player_body_radius;
        match side {
            Side::Left => inset,
            Side::Right => tuning.court_width - inset,
        }
    }

    /// Allowed range for `pos.x`: own wall on one side, net face on the other
    pub fn x_bounds(&self, tuning: &Tuning) -> (f32, f32) {
        let r = self.body_radius;
        match self.side {
            Side::Left => (r, tuning.net_left() - r),
            Side::Right => (tuning.net_right() + r, tuning.court_width - r),
        }
    }

    /// Move horizontally by `direction` (-1, 0 or +1) times player speed.
    /// The clamp is a hard position reset: there is no horizontal momentum.
    pub fn shift(&mut self, direction: f32, tuning: &Tuning) {
        self.pos.x += direction * tuning.player_speed;
        let (min_x, max_x) = self.x_bounds(tuning);
        self.pos.x = self.pos.x.clamp(min_x, max_x);
    }

    /// Jump impulse; defined no-op while airborne (no air jumps)
    pub fn jump(&mut self, tuning: &Tuning) {
        if self.grounded {
            self.vel_y = tuning.jump_force;
            self.grounded = false;
        }
    }

    /// Gravity integration and floor clamp
    pub fn update(&mut self, tuning: &Tuning) {
        self.vel_y += tuning.gravity;
        self.pos.y += self.vel_y;

        let rest_y = tuning.floor_y() - self.body_radius;
        if self.pos.y >= rest_y {
            self.pos.y = rest_y;
            self.vel_y = 0.0;
            self.grounded = true;
        }
    }

    /// Head circle center, stacked directly on the torso (for the renderer)
    pub fn head_pos(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y - self.body_radius - self.head_radius)
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new<R: Rng>(tuning: &Tuning, rng: &mut R) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: tuning.ball_radius,
        };
        ball.reset(tuning, rng);
        ball
    }

    /// Re-serve: court center at quarter height, fixed base speed in a
    /// uniformly random horizontal direction, no vertical velocity
    pub fn reset<R: Rng>(&mut self, tuning: &Tuning, rng: &mut R) {
        self.pos = tuning.ball_spawn();
        let dir = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(dir * tuning.ball_speed, 0.0);
    }
}

/// Complete match state (deterministic, serializable)
///
/// The round controller in [`super::tick`] is the only mutator of scores and
/// the only trigger of ball resets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Match seed for reproducibility
    pub seed: u64,
    /// Seeded RNG for serve direction and rally jitter
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: MatchPhase,
    /// Ticks remaining in the goal pause (0 outside `GoalPause`)
    pub pause_ticks: u32,
    /// Left player at index 0, right at index 1
    pub players: [Player; 2],
    pub ball: Ball,
    pub tuning: Tuning,
}

impl GameState {
    /// Start a fresh match. Validates the tuning once up front; all per-tick
    /// logic is total after that.
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::new(&tuning, &mut rng);
        Ok(Self {
            seed,
            rng,
            time_ticks: 0,
            phase: MatchPhase::Playing,
            pause_ticks: 0,
            players: [
                Player::new(Side::Left, &tuning),
                Player::new(Side::Right, &tuning),
            ],
            ball,
            tuning,
        })
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    /// `[left, right]` scores
    pub fn scores(&self) -> [u32; 2] {
        [self.players[0].score, self.players[1].score]
    }

    /// The side that has reached the winning score, if any
    pub fn winner(&self) -> Option<Side> {
        self.players
            .iter()
            .find(|p| p.score >= self.tuning.winning_score)
            .map(|p| p.side)
    }

    /// Restart signal: zero both scores, re-serve the ball, back to play.
    /// Player positions persist across matches.
    pub fn restart(&mut self) {
        for player in &mut self.players {
            player.score = 0;
        }
        self.ball.reset(&self.tuning, &mut self.rng);
        self.pause_ticks = 0;
        self.phase = MatchPhase::Playing;
    }
}
