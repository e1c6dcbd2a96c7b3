use log::{debug, info};

use super::CandidateTracker;
use crate::{
    errors::JudgeError,
    model::{Contestant, Participant, Prize, WinnerRecord},
    ports::WinnerSink,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FinalizeSummary {
    pub prizes_judged: usize,
    pub winners_written: usize,
    pub prizes_without_winner: usize,
}

/// The seam callers drive a judging run through.
pub trait Judge<C = Contestant> {
    fn add_prizes(&mut self, prizes: Vec<Prize>);
    fn consider(&mut self, contestant: &C);
    fn save_winners(&self, sink: &mut dyn WinnerSink<C>) -> Result<FinalizeSummary, JudgeError>;
}

/// Owns one [`CandidateTracker`] per registered prize.
pub struct JudgingSession<C: Participant = Contestant> {
    prize_trackers: Vec<(Prize, CandidateTracker<C>)>,
}

impl<C> JudgingSession<C>
where
    C: Participant + Clone,
{
    pub fn new() -> Self {
        JudgingSession { prize_trackers: Vec::new() }
    }

    /// Adds a fresh tracker per prize. Trackers of previously registered prizes are left untouched.
    pub fn register_prizes<I>(&mut self, prizes: I)
    where
        I: IntoIterator<Item = Prize>,
    {
        for prize in prizes {
            debug!("Registering prize={} unlocked at {}", prize.id, prize.unlocked_date);
            let tracker = CandidateTracker::new(prize.unlocked_date);
            self.prize_trackers.push((prize, tracker));
        }
    }

    pub fn consider(&mut self, contestant: &C) {
        for (_, tracker) in self.prize_trackers.iter_mut() {
            tracker.update(contestant);
        }
    }

    pub fn consider_all<'a, I>(&mut self, contestants: I)
    where
        I: IntoIterator<Item = &'a C>,
        C: 'a,
    {
        contestants.into_iter().for_each(|contestant| self.consider(contestant));
    }

    /// Current winner of every prize that has one, in registration order.
    pub fn winners(&self) -> Vec<WinnerRecord<C>> {
        self.prize_trackers
            .iter()
            .filter_map(|(prize, tracker)| tracker.best_candidate().map(|c| WinnerRecord::new(c.clone(), prize.clone())))
            .collect()
    }

    /// Resets the sink and writes one winner per prize with a candidate.
    ///
    /// Prizes without a qualifying participation are skipped. Calling this again without new
    /// participations writes the same winners.
    pub fn finalize<S>(&self, sink: &mut S) -> Result<FinalizeSummary, JudgeError>
    where
        S: WinnerSink<C> + ?Sized,
    {
        sink.reset()?;

        let mut summary = FinalizeSummary {
            prizes_judged: self.prize_trackers.len(),
            ..Default::default()
        };

        for (prize, tracker) in self.prize_trackers.iter() {
            let Some(contestant) = tracker.best_candidate() else {
                debug!("No winner yet for prize={}", prize.id);
                summary.prizes_without_winner += 1;
                continue;
            };

            sink.write(WinnerRecord::new(contestant.clone(), prize.clone()))?;
            summary.winners_written += 1;
        }

        info!(
            "Judging finalized for {} prizes, winners={} without_winner={}",
            summary.prizes_judged, summary.winners_written, summary.prizes_without_winner
        );

        Ok(summary)
    }

    pub fn prize_count(&self) -> usize {
        self.prize_trackers.len()
    }

    pub fn tracker_for(&self, prize_id: &str) -> Option<&CandidateTracker<C>> {
        self.prize_trackers.iter().find(|(prize, _)| prize.id == prize_id).map(|(_, tracker)| tracker)
    }
}

impl<C> Default for JudgingSession<C>
where
    C: Participant + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Judge<C> for JudgingSession<C>
where
    C: Participant + Clone,
{
    fn add_prizes(&mut self, prizes: Vec<Prize>) {
        self.register_prizes(prizes);
    }

    fn consider(&mut self, contestant: &C) {
        JudgingSession::consider(self, contestant);
    }

    fn save_winners(&self, sink: &mut dyn WinnerSink<C>) -> Result<FinalizeSummary, JudgeError> {
        self.finalize(sink)
    }
}
