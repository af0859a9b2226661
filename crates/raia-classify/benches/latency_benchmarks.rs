//! Latency benchmarks for the department classifier
//!
//! The classifier runs on every debounced keystroke burst in the report
//! form, so it has to stay comfortably under a millisecond for typical
//! report text.
//!
//! Run with: cargo bench -p raia-classify

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tokio::runtime::Runtime;

use raia_classify::{Classifier, DepartmentClassifier};
use raia_core::ReportDraft;

fn benchmark_department_classifier(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let classifier = DepartmentClassifier::new().expect("Failed to create department classifier");

    let test_cases = vec![
        (
            "short_no_match",
            ReportDraft::new("Hello", "Just checking in on things"),
        ),
        (
            "short_single_match",
            ReportDraft::new("Pothole", "A pothole opened up on our feeder"),
        ),
        (
            "medium_multi_match",
            ReportDraft::new(
                "Pothole on Kenyatta Avenue",
                "There is a huge pothole causing accidents near the roundabout, road repair needed urgently.",
            ),
        ),
        (
            "long_mixed_topics",
            ReportDraft::new(
                "Multiple problems in our ward",
                "The road to the market has potholes, the drainage is blocked with garbage, \
                 the dispensary has no medicine, and the street lights near the school have \
                 been vandalized. Traffic is terrible and sewage flows into the river daily.",
            ),
        ),
    ];

    let mut group = c.benchmark_group("Department_Classifier");
    group.significance_level(0.05);
    group.sample_size(100);

    for (name, draft) in test_cases {
        group.bench_with_input(BenchmarkId::new("classify", name), &draft, |b, draft| {
            b.iter(|| rt.block_on(async { classifier.classify(black_box(draft)).await.unwrap() }));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_department_classifier);
criterion_main!(benches);
