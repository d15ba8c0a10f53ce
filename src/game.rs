//! Game state machine
//!
//! Menu -> Playing (start) -> GameOver (ball lost or board cleared) -> Menu
//! (score submitted, blank name, or explicit return). The `Game` owns the
//! current `GameSession`; commands that do not apply to the current phase
//! are ignored rather than treated as errors.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::{ConfigError, ScoreServiceError};
use crate::highscores::ScoreService;
use crate::sim::{
    Ball, BrickGrid, Direction, GameSession, Outcome, Paddle, TickInput, TickReport, tick,
};

/// Top-level phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// Result of a finished run, fixed once captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    pub score: u32,
    pub outcome: Outcome,
    pub ticks: u64,
}

/// What `submit_score` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Score handed to the service; back at the menu
    ///
    /// Whether it shows on the leaderboard is the service's ranking policy.
    Submitted,
    /// Blank name; nothing stored, back at the menu
    Skipped,
    /// Not in GameOver; nothing happened
    Ignored,
}

/// Read-only view of everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub paddle: Option<Paddle>,
    pub ball: Option<Ball>,
    pub bricks: Option<BrickGrid>,
    pub score: u32,
    pub final_score: Option<FinalScore>,
}

/// Game instance holding all state
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    phase: GamePhase,
    /// Present from start until the return to the menu (frozen in GameOver)
    session: Option<GameSession>,
    final_score: Option<FinalScore>,
}

impl Game {
    /// New game at the menu
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            phase: GamePhase::Menu,
            session: None,
            final_score: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn final_score(&self) -> Option<FinalScore> {
        self.final_score
    }

    /// Current score (live while playing, final afterwards)
    pub fn score(&self) -> u32 {
        self.session.as_ref().map(|s| s.score).unwrap_or(0)
    }

    /// Begin a fresh run with score 0 and a full brick grid
    ///
    /// Accepted from Menu and from GameOver (play again); returns false
    /// while a run is already in progress.
    pub fn start_game(&mut self) -> bool {
        if self.phase == GamePhase::Playing {
            return false;
        }
        self.session = Some(GameSession::new(&self.config));
        self.final_score = None;
        self.set_phase(GamePhase::Playing);
        true
    }

    /// Move the paddle one step (Playing only)
    pub fn move_paddle(&mut self, direction: Direction) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        match self.session.as_mut() {
            Some(session) => {
                session.paddle.move_in(direction, self.config.canvas_width);
                true
            }
            None => false,
        }
    }

    /// Advance one frame (Playing only)
    ///
    /// Enters GameOver on the tick the run ends and captures the final score.
    pub fn tick(&mut self, input: &TickInput) -> Option<TickReport> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        let session = self.session.as_mut()?;
        let report = tick(session, input, &self.config);

        if let Some(outcome) = report.outcome {
            self.final_score = Some(FinalScore {
                score: session.score,
                outcome,
                ticks: session.ticks,
            });
            self.set_phase(GamePhase::GameOver);
        }

        Some(report)
    }

    /// Hand the final score to a score service (GameOver only)
    ///
    /// The name is trimmed; a blank name skips submission and returns to the
    /// menu. A service failure leaves the game in GameOver so the player can
    /// retry, and is returned for display.
    pub fn submit_score<S>(
        &mut self,
        name: &str,
        service: &mut S,
    ) -> Result<SubmitOutcome, ScoreServiceError>
    where
        S: ScoreService + ?Sized,
    {
        if self.phase != GamePhase::GameOver {
            return Ok(SubmitOutcome::Ignored);
        }
        let Some(final_score) = self.final_score else {
            return Ok(SubmitOutcome::Ignored);
        };

        let name = name.trim();
        if name.is_empty() {
            log::info!("Blank name, score {} not submitted", final_score.score);
            self.return_to_menu();
            return Ok(SubmitOutcome::Skipped);
        }

        if let Err(e) = service.submit_score(name, final_score.score) {
            log::warn!("Score submission failed: {e}");
            return Err(e);
        }

        log::info!("Submitted score {} for {}", final_score.score, name);
        self.return_to_menu();
        Ok(SubmitOutcome::Submitted)
    }

    /// Leave the current run and go back to the menu
    ///
    /// Accepted from GameOver and Playing (abandoning the run).
    pub fn return_to_menu(&mut self) -> bool {
        if self.phase == GamePhase::Menu {
            return false;
        }
        self.session = None;
        self.final_score = None;
        self.set_phase(GamePhase::Menu);
        true
    }

    /// Copy of the renderable state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            paddle: self.session.as_ref().map(|s| s.paddle),
            ball: self.session.as_ref().map(|s| s.ball),
            bricks: self.session.as_ref().map(|s| s.bricks.clone()),
            score: self.score(),
            final_score: self.final_score,
        }
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}
