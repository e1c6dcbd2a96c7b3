use contest_judge::{
    errors::JudgeError,
    model::Contestant,
    ports::{ContestantSource, PrizeSource, WinnerSink},
    FinalizeSummary, Judge,
};
use log::info;

/// Loads the prizes, streams every contestant through the judge and saves the winners.
///
/// Saving goes through the synchronous [`WinnerSink`] and blocks the current task, once per run.
pub async fn run_judging<J, P, S, W>(
    judge: &mut J,
    prize_source: &mut P,
    contestant_source: &mut S,
    winner_sink: &mut W,
    log_progress_every: u64,
) -> Result<FinalizeSummary, JudgeError>
where
    J: Judge<Contestant> + ?Sized,
    P: PrizeSource + ?Sized,
    S: ContestantSource + ?Sized,
    W: WinnerSink<Contestant>,
{
    let prizes = prize_source.load_prizes().await?;
    info!("Judging {} prizes", prizes.len());
    judge.add_prizes(prizes);

    let mut considered: u64 = 0;
    while let Some(contestant) = contestant_source.next_contestant().await? {
        judge.consider(&contestant);
        considered += 1;

        if log_progress_every > 0 && considered % log_progress_every == 0 {
            info!("Considered {} participations", considered);
        }
    }
    info!("Finished considering {} participations", considered);

    judge.save_winners(winner_sink)
}
