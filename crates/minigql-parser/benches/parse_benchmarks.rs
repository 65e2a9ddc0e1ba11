mod fixtures;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use minigql_parser::GraphQLParser;
use minigql_parser::token_source::StrGraphQLTokenSource;

// ─── Group 1: Operation Parsing ──────────────────────────

fn operation_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("operation_parse");

    group.bench_function("simple_query", |b| {
        b.iter(|| {
            let parser = GraphQLParser::new(fixtures::SIMPLE_QUERY);
            black_box(parser.parse_document())
        })
    });

    group.bench_function("complex_query", |b| {
        b.iter(|| {
            let parser = GraphQLParser::new(fixtures::COMPLEX_QUERY);
            black_box(parser.parse_document())
        })
    });

    let nested_10 = fixtures::operations::deeply_nested_query(10);
    group.bench_function("nested_depth_10", |b| {
        b.iter(|| {
            let parser = GraphQLParser::new(&nested_10);
            black_box(parser.parse_document())
        })
    });

    let nested_30 = fixtures::operations::deeply_nested_query(30);
    group.bench_function("nested_depth_30", |b| {
        b.iter(|| {
            let parser = GraphQLParser::new(&nested_30);
            black_box(parser.parse_document())
        })
    });

    let many_ops = fixtures::operations::many_operations(50);
    group.bench_function("many_operations_50", |b| {
        b.iter(|| {
            let parser = GraphQLParser::new(&many_ops);
            black_box(parser.parse_document())
        })
    });

    group.finish();
}

// ─── Group 2: Type Definition Parsing ────────────────────

fn schema_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_parse");

    group.bench_function("schema", |b| {
        b.iter(|| {
            let parser = GraphQLParser::new(fixtures::SCHEMA);
            black_box(parser.parse_document())
        })
    });

    group.finish();
}

// ─── Group 3: Lexer (Tokenization Only) ──────────────────

fn lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let inputs: &[(&str, &str)] = &[
        ("complex_query", fixtures::COMPLEX_QUERY),
        ("schema", fixtures::SCHEMA),
    ];

    for &(label, input) in inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(label, |b| {
            b.iter(|| {
                let source = StrGraphQLTokenSource::new(input);
                for token in source {
                    black_box(token);
                }
            })
        });
    }

    group.finish();
}

// ─── Group 4: Comparison with graphql-parser ─────────────

fn compare_operation_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_operation_parse");

    let inputs: &[(&str, &str)] = &[
        ("simple", fixtures::SIMPLE_QUERY),
        ("complex", fixtures::COMPLEX_QUERY),
    ];

    for &(label, input) in inputs {
        group.bench_with_input(
            BenchmarkId::new("minigql_parser", label),
            &input,
            |b, input| {
                b.iter(|| {
                    let parser = GraphQLParser::new(input);
                    black_box(parser.parse_document())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("graphql_parser", label),
            &input,
            |b, input| {
                b.iter(|| {
                    black_box(
                        graphql_parser::query::parse_query::<String>(input),
                    )
                })
            },
        );
    }

    group.finish();
}

// ─── Criterion Entrypoint ────────────────────────────────

criterion_group!(
    benches,
    operation_parse,
    schema_parse,
    lexer,
    compare_operation_parse,
);
criterion_main!(benches);
