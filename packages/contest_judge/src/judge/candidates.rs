use std::{cmp::Ordering, fmt};

use ahash::RandomState;
use indexmap::IndexMap;
use log::trace;
use time::{Duration, OffsetDateTime};

use crate::model::Participant;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CandidateEntry<C> {
    /// First observation that put the contestant in the candidate set.
    pub contestant: C,
    /// Number of times the contestant achieved the current best elapsed time.
    pub frequency: u32,
}

/// What a single observation did to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrackerUpdate {
    BeforeUnlock,
    NewBest,
    Repeated { frequency: u32 },
    Joined,
    Rejected,
    Slower,
}

type CandidateMap<C> = IndexMap<<C as Participant>::Id, CandidateEntry<C>, RandomState>;

/// Keeps the contestants currently tied on the best elapsed time for one prize.
///
/// Rules applied for every observation:
///
/// U1. Observations before the unlock date are ignored.
/// U2. A strictly better elapsed time replaces the candidate set with the observed contestant.
/// U3. Matching the best time as an existing candidate bumps its frequency and evicts every
///     candidate with a lower frequency.
/// U4. Matching the best time as a newcomer joins the set, unless someone has already repeated the best time.
/// U5. Anything slower is ignored.
///
/// The max frequency is never reset by U2, so a repeat performer of a superseded best time still
/// blocks newcomers from joining the new best.
#[derive(Clone)]
pub struct CandidateTracker<C: Participant> {
    unlocked_date: OffsetDateTime,
    best_elapsed: Option<Duration>,
    max_frequency: u32,
    candidates: CandidateMap<C>,
}

impl<C> CandidateTracker<C>
where
    C: Participant + Clone,
{
    pub fn new(unlocked_date: OffsetDateTime) -> Self {
        CandidateTracker {
            unlocked_date,
            best_elapsed: None,
            max_frequency: 0,
            candidates: IndexMap::with_hasher(RandomState::new()),
        }
    }

    pub fn update(&mut self, contestant: &C) {
        let outcome = self.apply(contestant);
        trace!("Tracker for unlock={} applied {:?}", self.unlocked_date, outcome);
    }

    pub(crate) fn apply(&mut self, contestant: &C) -> TrackerUpdate {
        // Rule U1
        let participation_date = contestant.participation_date();
        if participation_date < self.unlocked_date {
            return TrackerUpdate::BeforeUnlock;
        }

        let elapsed = participation_date - self.unlocked_date;

        let ordering = match self.best_elapsed {
            Some(best) => elapsed.cmp(&best),
            None => Ordering::Less,
        };

        match ordering {
            // Rule U2
            Ordering::Less => {
                self.candidates.clear();
                self.candidates.insert(
                    contestant.participant_id().clone(),
                    CandidateEntry {
                        contestant: contestant.clone(),
                        frequency: 1,
                    },
                );
                self.best_elapsed = Some(elapsed);
                TrackerUpdate::NewBest
            }
            Ordering::Equal => self.tie(contestant),
            // Rule U5
            Ordering::Greater => TrackerUpdate::Slower,
        }
    }

    fn tie(&mut self, contestant: &C) -> TrackerUpdate {
        // Rule U3
        if let Some(entry) = self.candidates.get_mut(contestant.participant_id()) {
            entry.frequency = entry.frequency.saturating_add(1);
            let frequency = entry.frequency;
            self.max_frequency = frequency;
            self.remove_less_frequent(frequency);
            return TrackerUpdate::Repeated { frequency };
        }

        // Rule U4
        if self.max_frequency <= 1 {
            self.candidates.insert(
                contestant.participant_id().clone(),
                CandidateEntry {
                    contestant: contestant.clone(),
                    frequency: 1,
                },
            );
            return TrackerUpdate::Joined;
        }

        TrackerUpdate::Rejected
    }

    /// Evicts candidates below `frequency`. Relative order of the survivors is kept.
    fn remove_less_frequent(&mut self, frequency: u32) {
        self.candidates.retain(|_, entry| entry.frequency >= frequency);
    }

    /// Earliest inserted contestant still holding the best time.
    pub fn best_candidate(&self) -> Option<&C> {
        self.candidates.first().map(|(_, entry)| &entry.contestant)
    }
}

impl<C: Participant> CandidateTracker<C> {
    pub fn unlocked_date(&self) -> OffsetDateTime {
        self.unlocked_date
    }

    pub fn best_elapsed(&self) -> Option<Duration> {
        self.best_elapsed
    }

    pub fn max_frequency(&self) -> u32 {
        self.max_frequency
    }

    pub fn frequency_of(&self, id: &C::Id) -> Option<u32> {
        self.candidates.get(id).map(|entry| entry.frequency)
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidates(&self) -> impl Iterator<Item = &CandidateEntry<C>> + '_ {
        self.candidates.values()
    }
}

impl<C> fmt::Debug for CandidateTracker<C>
where
    C: Participant + fmt::Debug,
    C::Id: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateTracker")
            .field("unlocked_date", &self.unlocked_date)
            .field("best_elapsed", &self.best_elapsed)
            .field("max_frequency", &self.max_frequency)
            .field("candidates", &self.candidates)
            .finish()
    }
}

#[cfg(test)]
mod frequency_tests {
    use time::macros::datetime;

    use super::{CandidateTracker, TrackerUpdate};
    use crate::model::Contestant;

    #[test]
    fn test_frequency_saturates_instead_of_overflowing() {
        let unlocked = datetime!(2024-03-01 09:00 UTC);
        let mut tracker = CandidateTracker::new(unlocked);
        let contestant = Contestant::new("a", unlocked);

        tracker.update(&contestant);
        if let Some(entry) = tracker.candidates.get_mut("a") {
            entry.frequency = u32::MAX - 1;
        }

        assert_eq!(tracker.apply(&contestant), TrackerUpdate::Repeated { frequency: u32::MAX });
        assert_eq!(tracker.apply(&contestant), TrackerUpdate::Repeated { frequency: u32::MAX });
        assert_eq!(tracker.frequency_of(&"a".to_owned()), Some(u32::MAX));
        assert_eq!(tracker.max_frequency(), u32::MAX);
    }
}
