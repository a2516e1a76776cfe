//! Collision detection and response
//!
//! Pure functions over ball and player state. Every resolver corrects
//! position (no sustained overlap) as well as velocity; [`super::tick`]
//! wires them together in a fixed order each tick:
//! ceiling, floor (scoring), walls, net, players.

use glam::Vec2;
use rand::Rng;

use super::state::{Ball, Player, Side};
use crate::tuning::Tuning;

/// Ceiling bounce: clamp at y = 0 and force the ball back down.
/// No energy loss - magnitude unchanged, sign flipped if needed.
pub fn resolve_ceiling(ball: &mut Ball) {
    if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = ball.vel.y.abs();
    }
}

/// Floor contact check. Returns the scoring side without mutating the ball;
/// the round controller owns what happens next.
///
/// A ball landing on the left half scores for the right player and vice
/// versa. Tie-break: the midline itself counts as the right half
/// (`x < mid` scores Right, `x >= mid` scores Left).
pub fn floor_contact(ball: &Ball, tuning: &Tuning) -> Option<Side> {
    if ball.pos.y + ball.radius > tuning.floor_y() {
        Some(if ball.pos.x < tuning.court_mid() {
            Side::Right
        } else {
            Side::Left
        })
    } else {
        None
    }
}

/// Side walls: clamp horizontal overlap and reflect back into the court,
/// no speed change.
pub fn resolve_walls(ball: &mut Ball, tuning: &Tuning) {
    if ball.pos.x - ball.radius < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x = ball.vel.x.abs();
    } else if ball.pos.x + ball.radius > tuning.court_width {
        ball.pos.x = tuning.court_width - ball.radius;
        ball.vel.x = -ball.vel.x.abs();
    }
}

/// Net rectangle: resolve at most one axis per tick, nearest vertical face
/// first. The top edge only applies once the ball center is horizontally
/// within the net span.
pub fn resolve_net(ball: &mut Ball, tuning: &Tuning) {
    let overlaps = ball.pos.x + ball.radius > tuning.net_left()
        && ball.pos.x - ball.radius < tuning.net_right()
        && ball.pos.y + ball.radius > tuning.net_top();
    if !overlaps {
        return;
    }

    if ball.pos.x < tuning.net_left() {
        ball.pos.x = tuning.net_left() - ball.radius;
        ball.vel.x = -ball.vel.x.abs();
    } else if ball.pos.x > tuning.net_right() {
        ball.pos.x = tuning.net_right() + ball.radius;
        ball.vel.x = ball.vel.x.abs();
    } else if ball.pos.y < tuning.net_top() {
        ball.pos.y = tuning.net_top() - ball.radius;
        ball.vel.y = -ball.vel.y.abs();
    }
}

/// Circle-circle test against the torso circle only; the head is cosmetic.
#[inline]
pub fn player_overlaps(ball: &Ball, player: &Player) -> bool {
    let reach = ball.radius + player.body_radius;
    ball.pos.distance_squared(player.pos) < reach * reach
}

/// Resolve a ball-player contact.
///
/// Positional correction puts the ball center exactly on the combined-radius
/// circle along the contact angle, so resolution on an already separated
/// pair is a no-op. Velocity response by contact half-plane:
/// - dominantly horizontal (`|cos θ| > 0.5`): reverse `vel.x` away from the
///   player plus a random shove in `[0, 2)`
/// - from below (`sin θ < -0.5`, ball above the player): spike - reverse
///   `vel.y` upward and boost by `spike_boost`
/// - from above (ball under the player): reflect `vel.y` downward
///
/// Both components then pick up uniform jitter in `(-1, 1)` and are clamped
/// to `±speed_cap`.
pub fn resolve_player_hit<R: Rng>(
    ball: &mut Ball,
    player: &Player,
    tuning: &Tuning,
    rng: &mut R,
) {
    if !player_overlaps(ball, player) {
        return;
    }

    let delta = ball.pos - player.pos;
    let theta = delta.y.atan2(delta.x);
    let (sin_t, cos_t) = theta.sin_cos();

    let reach = ball.radius + player.body_radius;
    ball.pos = player.pos + reach * Vec2::new(cos_t, sin_t);

    if cos_t.abs() > 0.5 {
        let shove: f32 = rng.random_range(0.0..2.0);
        ball.vel.x = if cos_t > 0.0 {
            ball.vel.x.abs() + shove
        } else {
            -ball.vel.x.abs() - shove
        };
    } else if sin_t < -0.5 {
        ball.vel.y = -ball.vel.y.abs() - tuning.spike_boost;
    } else {
        ball.vel.y = ball.vel.y.abs();
    }

    // Rally jitter, gameplay variety rather than physics
    ball.vel.x += rng.random_range(-1.0..1.0);
    ball.vel.y += rng.random_range(-1.0..1.0);

    let cap = tuning.speed_cap();
    ball.vel.x = ball.vel.x.clamp(-cap, cap);
    ball.vel.y = ball.vel.y.clamp(-cap, cap);
}
