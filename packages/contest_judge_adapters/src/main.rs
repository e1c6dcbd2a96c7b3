use contest_judge::{config::JudgeConfig, errors::JudgeError, JudgingSession};
use contest_judge_adapters::{run_judging, JsonFileWinnerSink, JsonLinesContestantSource, JsonPrizeSource};
use log::{error, info};
use logger::logs::{self, SerdeLogging};

#[tokio::main]
async fn main() -> Result<(), JudgeError> {
    logs::init();

    let config = JudgeConfig::from_env().map_err(|e| {
        error!("Contest judge failed to load config: {}", e);
        e
    })?;
    info!("Contest judge starting with config {}", config.as_json_str());

    let mut prize_source = JsonPrizeSource::new(&config.prizes_path);
    let mut contestant_source = JsonLinesContestantSource::open(&config.contestants_path).await?;
    let mut winner_sink = JsonFileWinnerSink::new(&config.winners_path);
    let mut session = JudgingSession::new();

    match run_judging(
        &mut session,
        &mut prize_source,
        &mut contestant_source,
        &mut winner_sink,
        config.log_progress_every,
    )
    .await
    {
        Ok(summary) => {
            info!(
                "Contest judge wrote {} winners for {} prizes to {}",
                summary.winners_written,
                summary.prizes_judged,
                config.winners_path.display()
            );
            Ok(())
        }
        Err(e) => {
            error!("Contest judge shutting down due to error: {}", e);
            Err(e)
        }
    }
}
