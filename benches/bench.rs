// Criterion benchmarks for F2F Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use f2f_algo::core::{distance::haversine_distance, SwipeLedger};
use f2f_algo::models::{
    Coordinate, FilterCriteria, Gender, GenderFilter, Interest, Profile, SwipeDecision, ViewMode,
};
use f2f_algo::seed;
use f2f_algo::Matcher;

fn create_candidate(id: usize, lat: f64, lng: f64) -> Profile {
    let interests = (0..3)
        .map(|k| Interest::ALL[(id + k * 4) % Interest::ALL.len()])
        .collect();

    Profile {
        id: id.to_string(),
        name: format!("User {}", id),
        age: 18 + (id % 30) as u8,
        gender: if id % 2 == 0 { Gender::Female } else { Gender::Male },
        photo_url: String::new(),
        bio: String::new(),
        interests,
        location: Coordinate::new(lat, lng),
    }
}

fn create_pool(count: usize) -> Vec<Profile> {
    (0..count)
        .map(|i| {
            let lat_offset = (i as f64 * 0.001) % 0.5;
            let lng_offset = (i as f64 * 0.001) % 0.5;
            create_candidate(i, 55.7558 + lat_offset, 37.6173 + lng_offset)
        })
        .collect()
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(55.7558),
                black_box(37.6173),
                black_box(55.7510),
                black_box(37.6150),
            )
        });
    });
}

fn bench_find_candidates(c: &mut Criterion) {
    let matcher = Matcher::default();
    let me = seed::demo_local_profile();
    let criteria = FilterCriteria {
        gender: GenderFilter::Female,
        interests: [Interest::Reading, Interest::Coffee].into_iter().collect(),
        ..FilterCriteria::default()
    };

    let mut group = c.benchmark_group("find_candidates");

    for candidate_count in [10, 100, 1000].iter() {
        let pool = create_pool(*candidate_count);

        // Every third candidate already decided
        let mut ledger = SwipeLedger::default();
        for profile in pool.iter().step_by(3) {
            ledger.record(&profile.id, SwipeDecision::Passed);
        }

        group.bench_with_input(
            BenchmarkId::new("swipe_view", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.find_candidates(
                        black_box(&me),
                        black_box(&pool),
                        black_box(&ledger),
                        black_box(&criteria),
                        ViewMode::Swipe,
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_evaluate_like(c: &mut Criterion) {
    let matcher = Matcher::default();
    let me = seed::demo_local_profile();
    let pool = create_pool(100);

    c.bench_function("evaluate_like_100_candidates", |b| {
        b.iter(|| {
            let matches = pool
                .iter()
                .filter(|candidate| matcher.evaluate_like(&me, candidate).is_match)
                .count();

            black_box(matches)
        });
    });
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_find_candidates,
    bench_evaluate_like
);

criterion_main!(benches);
