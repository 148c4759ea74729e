use chrono::{NaiveDate, NaiveTime};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_engine::{BirthMoment, day_pillar, four_pillars};
use saju_terms::{SolarTerm, SolarTermIndex, TermEvent};

// Two events per month over 120 years, the scale of the real table.
fn synthetic_index() -> SolarTermIndex {
    let mut events = Vec::new();
    for year in 1900..2020 {
        for month in 1..=12u32 {
            let major = SolarTerm::from_index((2 * ((month + 10) % 12)) as u8).unwrap();
            let minor = SolarTerm::from_index(major.index() + 1).unwrap();
            for (day, term) in [(6u32, major), (21, minor)] {
                events.push(TermEvent {
                    at: NaiveDate::from_ymd_opt(year, month, day)
                        .unwrap()
                        .and_hms_opt(12, 0, 0)
                        .unwrap(),
                    term,
                });
            }
        }
    }
    SolarTermIndex::new(events)
}

fn bench_day_pillar(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(1964, 8, 19).unwrap();
    c.bench_function("day_pillar", |b| b.iter(|| day_pillar(black_box(date))));
}

fn bench_four_pillars(c: &mut Criterion) {
    let idx = synthetic_index();
    let moment = BirthMoment::new(
        NaiveDate::from_ymd_opt(1964, 8, 19).unwrap(),
        NaiveTime::from_hms_opt(4, 45, 0).unwrap(),
    );
    c.bench_function("four_pillars", |b| {
        b.iter(|| four_pillars(black_box(&moment), black_box(&idx)))
    });
}

criterion_group!(benches, bench_day_pillar, bench_four_pillars);
criterion_main!(benches);
