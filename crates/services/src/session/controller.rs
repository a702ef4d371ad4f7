use std::fmt;
use std::time::Duration;

use blaster_core::Clock;
use blaster_core::generator::generate;
use blaster_core::model::{
    AnswerAttempt, Difficulty, HighScoreLedger, Question, RoundOutcome, SessionMode,
};
use blaster_core::round::Round;
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use super::state::{GamePhase, SessionId, SessionState};
use crate::config::GameConfig;
use crate::error::SessionError;
use crate::high_score_service::HighScoreService;
use crate::timer::{TimerHandle, TimerQueue};

//
// ─── TIMER EVENTS ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerEvent {
    /// Feedback delay elapsed; show the next question.
    NextQuestion(SessionId),
    /// One countdown period elapsed.
    Tick(SessionId),
}

impl TimerEvent {
    fn session(self) -> SessionId {
        match self {
            TimerEvent::NextQuestion(id) | TimerEvent::Tick(id) => id,
        }
    }
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Owns the game state and drives rounds, scoring, the countdown and the
/// high-score ledger.
///
/// Time only moves through [`SessionController::advance`]; a host calls it
/// from its real clock, tests call it with simulated durations.
pub struct SessionController<R = StdRng> {
    config: GameConfig,
    clock: Clock,
    rng: R,
    high_scores: HighScoreService,
    ledger: HighScoreLedger,
    state: SessionState,
    round: Option<Round>,
    session_id: SessionId,
    timers: TimerQueue<TimerEvent>,
    feedback_timer: Option<TimerHandle>,
    countdown_timer: Option<TimerHandle>,
}

impl<R: Rng> SessionController<R> {
    /// Build a controller, loading the persisted ledger.
    ///
    /// An unreadable ledger is logged and replaced by an empty one.
    pub async fn load(
        config: GameConfig,
        clock: Clock,
        rng: R,
        high_scores: HighScoreService,
    ) -> Self {
        let ledger = high_scores.load().await;
        Self::with_ledger(config, clock, rng, high_scores, ledger)
    }

    #[must_use]
    pub fn with_ledger(
        config: GameConfig,
        clock: Clock,
        rng: R,
        high_scores: HighScoreService,
        ledger: HighScoreLedger,
    ) -> Self {
        let state = SessionState::new(config.timed_seconds);
        Self {
            config,
            clock,
            rng,
            high_scores,
            ledger,
            state,
            round: None,
            session_id: SessionId::default(),
            timers: TimerQueue::new(),
            feedback_timer: None,
            countdown_timer: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn high_scores(&self) -> &HighScoreLedger {
        &self.ledger
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    #[must_use]
    pub fn current_round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.round.as_ref().map(Round::question)
    }

    /// Displayable prompt of the active question.
    #[must_use]
    pub fn prompt(&self) -> Option<String> {
        self.current_question().map(Question::prompt)
    }

    /// Whether a submitted answer is showing feedback.
    #[must_use]
    pub fn awaiting_next_question(&self) -> bool {
        self.feedback_timer.is_some()
    }

    /// Virtual time elapsed since the controller was built.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.timers.now()
    }

    //
    // ─── LIFECYCLE ─────────────────────────────────────────────────────────────
    //

    /// Begin a new play-through and arm the first question.
    ///
    /// Any timers from a previous session are cancelled.
    pub fn start_session(&mut self, mode: SessionMode, difficulty: Difficulty) {
        self.cancel_timers();
        self.session_id = self.session_id.next();

        self.state.mode = mode;
        self.state.difficulty = difficulty;
        self.state.score = 0;
        self.state.is_new_high_score = false;
        if mode.is_timed() {
            self.state.time_left = self.config.timed_seconds;
            self.countdown_timer = Some(
                self.timers
                    .schedule(self.config.tick_interval, TimerEvent::Tick(self.session_id)),
            );
        }
        self.state.phase = GamePhase::Playing;

        info!(
            session = self.session_id.value(),
            ?mode,
            ?difficulty,
            "session started"
        );
        self.next_round();
    }

    /// Judge an answer to the active question.
    ///
    /// A correct answer adds one point. Either way the next question follows
    /// after the feedback delay.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotPlaying` outside a session,
    /// `SessionError::RoundResolved` if this question was already answered.
    pub fn submit_answer(&mut self, attempt: &AnswerAttempt) -> Result<RoundOutcome, SessionError> {
        self.ensure_playing()?;
        let round = self.round.as_mut().ok_or(SessionError::NoActiveRound)?;
        let outcome = round.submit(attempt)?;
        self.after_submission(&outcome);
        Ok(outcome)
    }

    /// Like [`Self::submit_answer`], for raw text from an input field.
    ///
    /// # Errors
    ///
    /// Same as [`Self::submit_answer`].
    pub fn submit_text(&mut self, raw: &str) -> Result<RoundOutcome, SessionError> {
        self.ensure_playing()?;
        let round = self.round.as_mut().ok_or(SessionError::NoActiveRound)?;
        let outcome = round.submit_text(raw)?;
        self.after_submission(&outcome);
        Ok(outcome)
    }

    pub(crate) fn on_score_increment(&mut self) {
        self.state.score += 1;
    }

    /// Finish the session and offer the score to the ledger.
    ///
    /// A qualifying score replaces the ledger and is persisted; a failed write
    /// is logged and the in-memory ledger still stands.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotPlaying` if no session is being played.
    pub async fn end_session(&mut self) -> Result<(), SessionError> {
        self.ensure_playing()?;
        self.cancel_timers();
        self.round = None;
        self.state.phase = GamePhase::End;

        let score = self.state.score;
        if let Some(updated) = self.ledger.with_score(score, self.clock.today_label()) {
            self.ledger = updated;
            self.state.is_new_high_score = true;
            if let Err(err) = self.high_scores.save(&self.ledger).await {
                warn!(error = %err, "keeping high scores in memory only");
            }
        }

        info!(
            session = self.session_id.value(),
            score,
            new_high_score = self.state.is_new_high_score,
            "session ended"
        );
        Ok(())
    }

    /// Back to the start screen. Leaves `time_left` and the ledger alone.
    pub fn restart(&mut self) {
        self.cancel_timers();
        self.round = None;
        self.state.phase = GamePhase::Start;
        self.state.score = 0;
        self.state.is_new_high_score = false;
    }

    //
    // ─── TIME ──────────────────────────────────────────────────────────────────
    //

    /// Let `elapsed` pass, firing every timer that falls due in order.
    pub async fn advance(&mut self, elapsed: Duration) {
        let until = self.timers.now() + elapsed;
        while let Some((_, event)) = self.timers.pop_due(until) {
            self.on_timer(event).await;
        }
        self.timers.advance_to(until);
    }

    async fn on_timer(&mut self, event: TimerEvent) {
        if event.session() != self.session_id || !self.state.is_playing() {
            debug!(?event, "stale timer dropped");
            return;
        }
        match event {
            TimerEvent::NextQuestion(_) => {
                self.feedback_timer = None;
                self.next_round();
            }
            TimerEvent::Tick(_) => {
                self.countdown_timer = None;
                self.on_tick().await;
            }
        }
    }

    pub(crate) async fn on_tick(&mut self) {
        if !self.state.mode.is_timed() || !self.state.is_playing() || self.state.time_left == 0 {
            return;
        }
        self.state.time_left -= 1;
        debug!(time_left = self.state.time_left, "countdown");

        if self.state.time_left == 0 {
            if let Err(err) = self.end_session().await {
                debug!(error = %err, "countdown finished after the session ended");
            }
        } else {
            self.countdown_timer = Some(
                self.timers
                    .schedule(self.config.tick_interval, TimerEvent::Tick(self.session_id)),
            );
        }
    }

    //
    // ─── HELPERS ───────────────────────────────────────────────────────────────
    //

    fn ensure_playing(&self) -> Result<(), SessionError> {
        if self.state.is_playing() {
            Ok(())
        } else {
            Err(SessionError::NotPlaying)
        }
    }

    fn after_submission(&mut self, outcome: &RoundOutcome) {
        if let Some(err) = &outcome.input_error {
            warn!(error = %err, "malformed answer counted as incorrect");
        }
        if outcome.correct {
            self.on_score_increment();
        }
        debug!(correct = outcome.correct, expected = %outcome.expected, "round resolved");
        self.feedback_timer = Some(self.timers.schedule(
            self.config.feedback_delay,
            TimerEvent::NextQuestion(self.session_id),
        ));
    }

    fn next_round(&mut self) {
        let question = generate(
            &mut self.rng,
            self.state.mode,
            self.state.difficulty.bit_width(),
        );
        self.round = Some(Round::new(question));
    }

    fn cancel_timers(&mut self) {
        for handle in [self.feedback_timer.take(), self.countdown_timer.take()]
            .into_iter()
            .flatten()
        {
            self.timers.cancel(handle);
        }
    }
}

impl<R> fmt::Debug for SessionController<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("session_id", &self.session_id)
            .field("state", &self.state)
            .field("round", &self.round)
            .field("ledger_len", &self.ledger.len())
            .field("pending_timers", &self.timers.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
