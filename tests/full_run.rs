//! End-to-end runs through the public API

use brick_breaker::sim::{GameEvent, Outcome, TickInput, autopilot};
use brick_breaker::{Game, GameConfig, GamePhase, HighScores, ScoreService, SubmitOutcome};

const TICK_LIMIT: u64 = 50_000;

/// Tick until the run ends or the limit is hit; returns ticks taken
fn play_out(game: &mut Game, steer: bool) -> u64 {
    let mut ticks = 0;
    while game.phase() == GamePhase::Playing && ticks < TICK_LIMIT {
        let input = match game.session() {
            Some(session) if steer => autopilot::steer(session),
            _ => TickInput::default(),
        };
        game.tick(&input);
        ticks += 1;
    }
    ticks
}

#[test]
fn idle_paddle_run_reaches_exactly_one_terminal_outcome() {
    let config = GameConfig::default();
    assert_eq!((config.brick_rows, config.brick_columns), (5, 8));

    let mut game = Game::new(config).unwrap();
    assert!(game.start_game());
    let start = game.snapshot();
    assert_eq!(start.ball.unwrap().pos.x, 400.0);
    assert!(start.ball.unwrap().vel.y < 0.0);

    let ticks = play_out(&mut game, false);
    assert!(ticks < TICK_LIMIT, "run did not end within {TICK_LIMIT} ticks");
    assert_eq!(game.phase(), GamePhase::GameOver);

    let result = game.final_score().unwrap();
    let won = result.outcome == Outcome::Won;
    let lost = result.outcome == Outcome::Lost;
    assert!(won ^ lost);
    if won {
        assert_eq!(result.score, 40);
    } else {
        assert!(result.score < 40);
    }

    let bricks = game.snapshot().bricks.unwrap();
    assert_eq!(bricks.len() - bricks.alive_count(), result.score as usize);
}

#[test]
fn score_tracks_destroyed_bricks_every_tick() {
    let mut game = Game::new(GameConfig::default()).unwrap();
    game.start_game();

    let mut destroyed = 0;
    let mut ticks = 0;
    while game.phase() == GamePhase::Playing && ticks < TICK_LIMIT {
        let report = game.tick(&TickInput::default()).unwrap();
        destroyed += report.bricks_destroyed();
        assert_eq!(game.score() as usize, destroyed);
        if report.events.contains(&GameEvent::BallLost) {
            assert_eq!(report.outcome, Some(Outcome::Lost));
        }
        ticks += 1;
    }
}

#[test]
fn autopilot_run_ends_and_submits() {
    let mut game = Game::new(GameConfig::default()).unwrap();
    let mut scores = HighScores::new();

    game.start_game();
    play_out(&mut game, true);

    // The autopilot may still be rallying at the limit
    if game.phase() == GamePhase::Playing {
        assert!(game.return_to_menu());
        return;
    }

    let result = game.final_score().unwrap();
    let submitted = game.submit_score("auto", &mut scores).unwrap();
    assert_eq!(submitted, SubmitOutcome::Submitted);
    assert_eq!(game.phase(), GamePhase::Menu);

    let listed = scores.list_high_scores().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].player_name, "auto");
    assert_eq!(listed[0].score, result.score);
}

#[test]
fn blank_name_leaves_leaderboard_untouched() {
    let mut scores = HighScores::new();
    scores.submit_score("keeper", 17).unwrap();
    let before = scores.list_high_scores().unwrap();

    let mut game = Game::new(GameConfig::default()).unwrap();
    game.start_game();
    play_out(&mut game, false);
    assert_eq!(game.phase(), GamePhase::GameOver);

    assert_eq!(
        game.submit_score("", &mut scores).unwrap(),
        SubmitOutcome::Skipped
    );
    assert_eq!(game.phase(), GamePhase::Menu);
    assert_eq!(scores.list_high_scores().unwrap(), before);
}
