use std::time::Duration;

use blaster_core::model::{AnswerAttempt, Difficulty, ExpectedAnswer, SessionMode};
use blaster_core::time::{fixed_clock, fixed_now};
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{GameConfig, GamePhase, GameServices};

#[tokio::test]
async fn high_scores_survive_a_new_controller() {
    let config = GameConfig {
        database_url: "sqlite:file:memdb_game_services?mode=memory&cache=shared".into(),
        ..GameConfig::default()
    };
    let services = GameServices::new_sqlite(config, fixed_clock())
        .await
        .expect("sqlite services");

    let mut ctl = services.controller_with_rng(StdRng::seed_from_u64(5)).await;
    ctl.start_session(SessionMode::TimedChallenge, Difficulty::Medium);
    for _ in 0..3 {
        let attempt = match ctl.current_question().unwrap().expected_answer() {
            ExpectedAnswer::Bits(bits) => AnswerAttempt::Bits(bits),
            ExpectedAnswer::Decimal(value) => AnswerAttempt::Decimal(value),
        };
        ctl.submit_answer(&attempt).unwrap();
        ctl.advance(Duration::from_millis(1500)).await;
    }
    ctl.advance(Duration::from_secs(60)).await;
    assert_eq!(ctl.state().phase, GamePhase::End);

    let reloaded = services.controller().await;
    assert_eq!(reloaded.high_scores().len(), 1);
    assert_eq!(reloaded.high_scores().entries()[0].score, 3);
    let local_date = fixed_now()
        .with_timezone(&chrono::Local)
        .format("%-m/%-d/%Y")
        .to_string();
    assert_eq!(reloaded.high_scores().entries()[0].date, local_date);
}

#[tokio::test]
async fn in_memory_services_use_configured_key() {
    let config = GameConfig {
        high_scores_key: "classroom".into(),
        ..GameConfig::default()
    };
    let services = GameServices::in_memory(config, fixed_clock());
    assert_eq!(services.high_scores().key(), "classroom");
    assert_eq!(services.config().timed_seconds, 60);

    let ctl = services.controller().await;
    assert_eq!(ctl.state().phase, GamePhase::Start);
    assert!(ctl.high_scores().is_empty());
}
