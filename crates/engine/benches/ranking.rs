//! Benchmarks for recommendation ranking
//!
//! Run with: cargo bench --package engine

use catalog::{Catalog, Course, LearnerProfile, Level};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use engine::{RecommendationEngine, RelevanceScorer};

/// The built-in catalog repeated with unique ids, to approximate a larger
/// production catalog.
fn large_catalog(copies: usize) -> Vec<Course> {
    let base = Catalog::builtin();
    (0..copies)
        .flat_map(|copy| {
            base.courses().iter().map(move |course| Course {
                id: format!("{}-{copy}", course.id),
                ..course.clone()
            })
        })
        .collect()
}

fn bench_recommend_builtin(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let engine = RecommendationEngine::default();
    let profile =
        LearnerProfile::new(["Frontend Development", "Cloud"]).with_level(Level::Beginner);

    c.bench_function("recommend_builtin", |b| {
        b.iter(|| black_box(engine.recommend(black_box(&profile), catalog.courses())))
    });
}

fn bench_recommend_large(c: &mut Criterion) {
    let courses = large_catalog(500);
    let engine = RecommendationEngine::default();
    let profile = LearnerProfile::new(["Data Science"]).with_level(Level::Intermediate);

    c.bench_function("recommend_large_catalog", |b| {
        b.iter(|| black_box(engine.recommend(black_box(&profile), &courses)))
    });
}

fn bench_score_single(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let course = catalog.courses()[0].clone();
    let profile = LearnerProfile::new(["Frontend Development"]);

    c.bench_function("score_single_course", |b| {
        b.iter(|| black_box(RelevanceScorer.score(black_box(&course), black_box(&profile))))
    });
}

criterion_group!(
    benches,
    bench_recommend_builtin,
    bench_recommend_large,
    bench_score_single
);
criterion_main!(benches);
