use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use treepath::simple_element::{SimpleElement, doc, elem};
use treepath::{ElementSet, PathSegment, Query, compile_path, compile_selector_path, parse_selector};

fn sample_selectors() -> Vec<&'static str> {
    vec![
        "item",
        "item#item-7",
        "item.featured",
        "item[type=a]",
        "h[1-6]",
    ]
}

fn sample_paths() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        ("direct", vec!["root", "section", "item"]),
        ("descendants", vec!["...", "item"]),
        ("filtered", vec!["root", "...", "item[type=a]"]),
    ]
}

fn benchmark_parser(c: &mut Criterion) {
    let selectors = sample_selectors();
    c.bench_function("parser/parse_selector", |b| {
        b.iter(|| {
            for selector in &selectors {
                black_box(parse_selector(black_box(selector)));
            }
        })
    });
}

fn benchmark_compiler(c: &mut Criterion) {
    let paths = sample_paths();
    c.bench_function("compiler/compile_selector_path", |b| {
        b.iter(|| {
            for (_, path) in &paths {
                let query =
                    compile_selector_path(path.iter().copied()).expect("compile failure");
                black_box(query);
            }
        })
    });
}

fn build_sample_tree() -> SimpleElement {
    let mut root = elem("root");
    for section in 0..10 {
        let mut node = elem("section").attr("name", format!("section-{section}"));
        for item in 0..20 {
            let id = section * 20 + item;
            let mut built = elem("item").attr("id", format!("item-{id}"));
            if item % 4 == 0 {
                built = built.attr("type", "a").attr("class", "featured");
            } else {
                built = built.attr("type", "b");
            }
            node = node.child(built);
        }
        root = root.child(node);
    }
    doc().child(root).build()
}

fn benchmark_execution(c: &mut Criterion) {
    let input = ElementSet::singleton(build_sample_tree());
    let mut compiled: Vec<(&str, Query)> = sample_paths()
        .into_iter()
        .map(|(name, path)| {
            let query = compile_selector_path(path).expect("compile failure");
            (name, query)
        })
        .collect();
    let positional = compile_path([
        PathSegment::from("root"),
        PathSegment::from("section"),
        PathSegment::from("item"),
        PathSegment::Position(0),
    ])
    .expect("compile failure");
    compiled.push(("positional", positional));

    let mut group = c.benchmark_group("query/execute");
    for (name, query) in &compiled {
        group.bench_with_input(BenchmarkId::from_parameter(name), query, |b, query| {
            b.iter(|| {
                let result = query.execute(black_box(&input));
                black_box(result.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_parser,
    benchmark_compiler,
    benchmark_execution
);
criterion_main!(benches);
