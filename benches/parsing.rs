use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use yamlite::{parse_str, to_yaml_string, YamlParser};

fn flat_config(entries: usize) -> String {
    let mut doc = String::new();
    for i in 0..entries {
        doc.push_str(&format!("key_{}: value-{}\n", i, i));
    }
    doc
}

fn server_list(servers: usize) -> String {
    let mut doc = String::from("servers:\n");
    for i in 0..servers {
        doc.push_str(&format!(
            "  - name: server-{}\n    port: {}\n    active: true\n",
            i,
            8000 + i
        ));
    }
    doc
}

fn benchmark_parse_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_flat_mapping");
    for size in [10, 100, 1000].iter() {
        let doc = flat_config(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| {
                let mut parser = YamlParser::new();
                parser.parse_str(black_box(doc)).unwrap()
            })
        });
    }
    group.finish();
}

fn benchmark_parse_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_sequence_of_mappings");
    for size in [10, 100, 500].iter() {
        let doc = server_list(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| parse_str(black_box(doc)).unwrap())
        });
    }
    group.finish();
}

fn benchmark_parse_anchors(c: &mut Criterion) {
    let mut doc = String::from("defaults: &base\n  timeout: 30\n  retries: 3\n  log: info\n");
    for i in 0..100 {
        doc.push_str(&format!("svc_{}:\n  <<: *base\n  port: {}\n", i, 9000 + i));
    }

    c.bench_function("parse_merge_keys", |b| {
        b.iter(|| parse_str(black_box(&doc)).unwrap())
    });
}

fn benchmark_print(c: &mut Criterion) {
    let item = parse_str(&server_list(200)).unwrap();

    c.bench_function("print_sequence_of_mappings", |b| {
        b.iter(|| to_yaml_string(black_box(&item)))
    });
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let doc = server_list(50);

    c.bench_function("roundtrip_parse_print_parse", |b| {
        b.iter(|| {
            let item = parse_str(black_box(&doc)).unwrap();
            let text = to_yaml_string(&item);
            parse_str(&text).unwrap()
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_flat,
    benchmark_parse_nested,
    benchmark_parse_anchors,
    benchmark_print,
    benchmark_roundtrip
);
criterion_main!(benches);
