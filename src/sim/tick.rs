//! Fixed timestep simulation tick
//!
//! The round controller: advances both players and the ball one tick,
//! attributes points on floor contact and drives the match state machine
//! (`Playing -> GoalPause -> Playing`, `Playing -> MatchOver -> Playing`).

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision;
use super::state::{Ball, GameEvent, GameState, MatchPhase, Player, Side};
use crate::tuning::Tuning;

/// Discrete input intents for one player, sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

impl PlayerInput {
    /// Net horizontal intent: -1, 0 or +1
    #[inline]
    pub fn direction(&self) -> f32 {
        (self.move_right as i8 - self.move_left as i8) as f32
    }
}

/// Atomic input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: PlayerInput,
    pub right: PlayerInput,
    /// Leave `MatchOver` and start a fresh match
    pub restart: bool,
}

/// Advance the match by one fixed timestep.
///
/// Update order within a tick: left player, right player, ball, scoring and
/// win check. Returns the events the shell needs for sound, UI and flow.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == MatchPhase::MatchOver {
        if input.restart {
            state.restart();
            events.push(GameEvent::MatchRestarted);
        }
        return events;
    }

    state.time_ticks += 1;

    step_player(&mut state.players[0], &input.left, &state.tuning);
    step_player(&mut state.players[1], &input.right, &state.tuning);

    if state.phase == MatchPhase::GoalPause {
        // Ball stays frozen at its serve position until the deadline passes;
        // players keep moving so the pause never blocks the shell.
        state.pause_ticks = state.pause_ticks.saturating_sub(1);
        if state.pause_ticks == 0 {
            state.phase = MatchPhase::Playing;
            events.push(GameEvent::RallyStarted);
        }
        return events;
    }

    if let Some(scorer) = step_ball(
        &mut state.ball,
        &state.players,
        &state.tuning,
        &mut state.rng,
    ) {
        state.ball.reset(&state.tuning, &mut state.rng);
        state.players[scorer.index()].score += 1;
        events.push(GameEvent::PointScored { scorer });

        if state.players[scorer.index()].score >= state.tuning.winning_score {
            state.phase = MatchPhase::MatchOver;
            events.push(GameEvent::MatchWon { winner: scorer });
        } else {
            state.phase = MatchPhase::GoalPause;
            state.pause_ticks = state.tuning.goal_pause_ticks;
        }
    }

    events
}

fn step_player(player: &mut Player, input: &PlayerInput, tuning: &Tuning) {
    let dir = input.direction();
    if dir != 0.0 {
        player.shift(dir, tuning);
    }
    if input.jump {
        player.jump(tuning);
    }
    player.update(tuning);
}

/// Integrate and resolve the ball for one tick. Returns the scoring side if
/// the ball reached the floor, which short-circuits every later check.
///
/// Player contacts are resolved left first, then right; a simultaneous
/// double-contact applies both corrections sequentially in that order.
fn step_ball<R: Rng>(
    ball: &mut Ball,
    players: &[Player; 2],
    tuning: &Tuning,
    rng: &mut R,
) -> Option<Side> {
    ball.vel.y += tuning.gravity;
    ball.pos += ball.vel;

    collision::resolve_ceiling(ball);

    if let Some(scorer) = collision::floor_contact(ball, tuning) {
        return Some(scorer);
    }

    collision::resolve_walls(ball, tuning);
    collision::resolve_net(ball, tuning);

    for player in players {
        collision::resolve_player_hit(ball, player, tuning, rng);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn state() -> GameState {
        GameState::new(Tuning::default(), 9).unwrap()
    }

    fn drop_ball_at(state: &mut GameState, x: f32) {
        state.ball.pos = Vec2::new(x, 590.0);
        state.ball.vel = Vec2::new(0.0, 8.0);
    }

    #[test]
    fn floor_contact_on_the_left_half_scores_right() {
        let mut s = state();
        drop_ball_at(&mut s, 100.0);

        let events = tick(&mut s, &TickInput::default());

        assert!(events.contains(&GameEvent::PointScored { scorer: Side::Right }));
        assert_eq!(s.scores(), [0, 1]);
        assert_eq!(s.phase, MatchPhase::GoalPause);
        // Reset happened exactly once, at the scoring tick
        assert_eq!(s.ball.pos, s.tuning.ball_spawn());
    }

    #[test]
    fn floor_contact_on_the_right_half_scores_left() {
        let mut s = state();
        drop_ball_at(&mut s, 700.0);

        tick(&mut s, &TickInput::default());
        assert_eq!(s.scores(), [1, 0]);
    }

    #[test]
    fn midline_contact_scores_left() {
        let mut s = state();
        let mid = s.tuning.court_mid();
        drop_ball_at(&mut s, mid);

        tick(&mut s, &TickInput::default());
        assert_eq!(s.scores(), [1, 0]);
    }

    #[test]
    fn goal_pause_freezes_the_ball_then_restarts_the_rally() {
        let mut s = state();
        drop_ball_at(&mut s, 100.0);
        tick(&mut s, &TickInput::default());
        assert_eq!(s.phase, MatchPhase::GoalPause);

        let frozen = s.ball;
        for _ in 0..s.tuning.goal_pause_ticks - 1 {
            let events = tick(&mut s, &TickInput::default());
            assert!(events.is_empty());
            assert_eq!(s.ball, frozen);
            assert_eq!(s.phase, MatchPhase::GoalPause);
        }

        let events = tick(&mut s, &TickInput::default());
        assert_eq!(events, vec![GameEvent::RallyStarted]);
        assert_eq!(s.phase, MatchPhase::Playing);
    }

    #[test]
    fn players_can_reposition_during_the_goal_pause() {
        let mut s = state();
        drop_ball_at(&mut s, 100.0);
        tick(&mut s, &TickInput::default());
        assert_eq!(s.phase, MatchPhase::GoalPause);

        let x_before = s.players[0].pos.x;
        let input = TickInput {
            left: PlayerInput {
                move_left: true,
                ..PlayerInput::default()
            },
            ..TickInput::default()
        };
        tick(&mut s, &input);
        assert!(s.players[0].pos.x < x_before);
    }

    #[test]
    fn winning_point_ends_the_match_and_freezes_play() {
        let mut s = state();
        s.players[1].score = s.tuning.winning_score - 1;
        drop_ball_at(&mut s, 100.0);

        let events = tick(&mut s, &TickInput::default());
        assert!(events.contains(&GameEvent::MatchWon { winner: Side::Right }));
        assert_eq!(s.phase, MatchPhase::MatchOver);
        assert_eq!(s.winner(), Some(Side::Right));
        // Never more than one increment past the threshold
        assert_eq!(s.scores()[1], s.tuning.winning_score);

        let ticks_before = s.time_ticks;
        let events = tick(&mut s, &TickInput::default());
        assert!(events.is_empty());
        assert_eq!(s.time_ticks, ticks_before);
    }

    #[test]
    fn restart_signal_leaves_match_over() {
        let mut s = state();
        s.players[0].score = s.tuning.winning_score;
        s.phase = MatchPhase::MatchOver;

        let input = TickInput {
            restart: true,
            ..TickInput::default()
        };
        let events = tick(&mut s, &input);
        assert_eq!(events, vec![GameEvent::MatchRestarted]);
        assert_eq!(s.phase, MatchPhase::Playing);
        assert_eq!(s.scores(), [0, 0]);
        assert_eq!(s.ball.pos, s.tuning.ball_spawn());
    }

    #[test]
    fn same_seed_same_inputs_same_state() {
        let script = |i: u64| TickInput {
            left: PlayerInput {
                move_right: i % 3 == 0,
                jump: i % 7 == 0,
                ..PlayerInput::default()
            },
            right: PlayerInput {
                move_left: i % 2 == 0,
                jump: i % 5 == 0,
                ..PlayerInput::default()
            },
            restart: false,
        };

        let mut a = GameState::new(Tuning::default(), 99).unwrap();
        let mut b = GameState::new(Tuning::default(), 99).unwrap();
        for i in 0..600 {
            tick(&mut a, &script(i));
            tick(&mut b, &script(i));
        }

        let a_json = serde_json::to_string(&a).unwrap();
        let b_json = serde_json::to_string(&b).unwrap();
        assert_eq!(a_json, b_json);
    }

    #[test]
    fn rally_against_a_wall_keeps_the_ball_in_the_court() {
        // Serve toward the left wall with nobody in the way
        let mut s = state();
        s.ball.pos = Vec2::new(60.0, 100.0);
        s.ball.vel = Vec2::new(-s.tuning.ball_speed, -2.0);
        s.players[0].pos.x = s.players[0].x_bounds(&s.tuning).1;

        for _ in 0..20 {
            if s.phase != MatchPhase::Playing {
                break;
            }
            tick(&mut s, &TickInput::default());
            assert!(s.ball.pos.x - s.ball.radius >= 0.0);
            assert!(s.ball.pos.y - s.ball.radius >= 0.0);
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn input_strategy() -> impl Strategy<Value = TickInput> {
            (any::<[bool; 3]>(), any::<[bool; 3]>()).prop_map(|(l, r)| TickInput {
                left: PlayerInput {
                    move_left: l[0],
                    move_right: l[1],
                    jump: l[2],
                },
                right: PlayerInput {
                    move_left: r[0],
                    move_right: r[1],
                    jump: r[2],
                },
                restart: false,
            })
        }

        proptest! {
            #[test]
            fn boundary_containment_under_arbitrary_input(
                seed in 0u64..1024,
                inputs in proptest::collection::vec(input_strategy(), 1..400),
            ) {
                let mut s = GameState::new(Tuning::default(), seed).unwrap();
                for input in &inputs {
                    tick(&mut s, input);

                    for player in &s.players {
                        let (min_x, max_x) = player.x_bounds(&s.tuning);
                        prop_assert!(player.pos.x >= min_x && player.pos.x <= max_x);
                        prop_assert!(player.pos.y <= s.tuning.floor_y() - player.body_radius);
                    }

                    // Scores stop exactly at the threshold, and reaching it
                    // always ends the match
                    for player in &s.players {
                        prop_assert!(player.score <= s.tuning.winning_score);
                    }
                    if s.winner().is_some() {
                        prop_assert_eq!(s.phase, MatchPhase::MatchOver);
                    }
                }
            }
        }
    }
}
