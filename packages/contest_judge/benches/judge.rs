use criterion::{black_box, criterion_group, criterion_main, Criterion};
use contest_judge::{CandidateTracker, Contestant, JudgingSession, Prize};
use time::{macros::datetime, Duration, OffsetDateTime};

const START: OffsetDateTime = datetime!(2024-03-01 09:00 UTC);

fn generate_contestants(count: i64, distinct: i64) -> Vec<Contestant> {
    (0..count)
        .map(|i| Contestant::new(format!("contestant-{}", i % distinct), START + Duration::seconds((i * 7919) % 600 - 60)))
        .collect()
}

fn bench_tracker_update(c: &mut Criterion) {
    c.bench_function("[TRACKER] Update 10k participations", |b| {
        let contestants = generate_contestants(10_000, 500);

        b.iter(|| {
            let mut tracker = CandidateTracker::new(START);
            contestants.iter().for_each(|contestant| tracker.update(black_box(contestant)));
            black_box(tracker.best_candidate().cloned())
        })
    });
}

fn bench_tracker_ties(c: &mut Criterion) {
    c.bench_function("[TRACKER] Update 10k tied participations", |b| {
        let contestants: Vec<Contestant> = (0..10_000).map(|i| Contestant::new(format!("contestant-{}", i % 1_000), START)).collect();

        b.iter(|| {
            let mut tracker = CandidateTracker::new(START);
            contestants.iter().for_each(|contestant| tracker.update(black_box(contestant)));
            black_box(tracker.candidate_count())
        })
    });
}

fn bench_session_consider(c: &mut Criterion) {
    c.bench_function("[SESSION] Consider 10k participations across 50 prizes", |b| {
        let contestants = generate_contestants(10_000, 500);
        let prizes: Vec<Prize> = (0..50).map(|i| Prize::new(format!("prize-{}", i), START + Duration::seconds(i * 10))).collect();

        b.iter(|| {
            let mut session = JudgingSession::new();
            session.register_prizes(prizes.clone());
            session.consider_all(&contestants);
            black_box(session.winners().len())
        })
    });
}

criterion_group!(benches, bench_tracker_update, bench_tracker_ties, bench_session_consider);
criterion_main!(benches);
