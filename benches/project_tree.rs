use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use session_atlas::{ProjectSummary, build_project_tree, collect_group_names};

/// Projects spread over a handful of shared workspace directories
fn generate_projects(num_projects: usize) -> Vec<ProjectSummary> {
    (0..num_projects)
        .map(|i| {
            let path = format!("/Users/bench/code/team-{}/service-{}", i % 8, i);
            ProjectSummary {
                name: path.replace('/', "-"),
                display_name: format!("service-{}", i),
                path,
                session_count: i % 5 + 1,
            }
        })
        .collect()
}

fn bench_build_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_project_tree");

    for size in [10, 100, 1_000].iter() {
        let projects = generate_projects(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| build_project_tree(black_box(&projects)));
        });
    }

    group.finish();
}

fn bench_collect_groups(c: &mut Criterion) {
    let tree = build_project_tree(&generate_projects(1_000));

    c.bench_function("collect_group_names_1000", |b| {
        b.iter(|| collect_group_names(black_box(&tree)));
    });
}

criterion_group!(benches, bench_build_tree, bench_collect_groups);
criterion_main!(benches);
