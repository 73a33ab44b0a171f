/*!
# Filter Benchmarks

Throughput of the query pipeline over synthetic catalogs.

## Usage

```bash
# Run all benchmarks
cargo bench --bench filter_benchmarks

# Run one group
cargo bench --bench filter_benchmarks -- "Pipeline"

# Quick run with fewer samples
cargo bench --bench filter_benchmarks -- --quick
```

HTML reports are generated in `target/criterion/report/index.html`.
*/

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use compound_catalog::filtering::{apply, resolve_field};
use compound_catalog::{CompoundQuery, FieldValue, Fields, NumericRange, QuantityMode, Record};

const REVERSIBILITY: [&str; 4] = ["+", "-", "+/-", "not tested"];
const QUANTITY: [&str; 4] = ["5 mg", "Available", "not available", ""];

#[allow(clippy::cast_precision_loss)]
fn synthetic_catalog(size: i64) -> Vec<Record> {
    (0..size)
        .map(|id| {
            let slot = usize::try_from(id).unwrap_or_default() % 4;
            let fields: Fields = [
                ("Compound Name", FieldValue::text(format!("Compound {id}"))),
                ("SMILES", FieldValue::text("CC1=CC(=O)C=CC1=O")),
                ("Total MolWeight", FieldValue::float(200.0 + (id % 700) as f64)),
                ("IC50", FieldValue::text(format!("{} µM", id % 50))),
                (
                    "Actin Disruption Activity",
                    FieldValue::text(if id % 3 == 0 { "Active" } else { "Inactive" }),
                ),
                ("Reversibilty", FieldValue::text(REVERSIBILITY[slot])),
                ("Quantity", FieldValue::text(QUANTITY[slot])),
                ("Target", FieldValue::text("actin")),
            ]
            .into_iter()
            .collect();
            Record::new(id, fields)
        })
        .collect()
}

fn queries() -> Vec<(&'static str, CompoundQuery)> {
    vec![
        ("unfiltered", CompoundQuery::new()),
        (
            "mol_weight_window",
            CompoundQuery::new().with_mol_weight(NumericRange::between(300.0, 600.0)),
        ),
        ("ic50_max", CompoundQuery::new().with_ic50(NumericRange::at_most(10.0))),
        ("search_all_fields", CompoundQuery::new().with_search("compound 12")),
        (
            "search_one_field",
            CompoundQuery::new()
                .with_search("compound 12")
                .with_search_fields(["Compound Name"]),
        ),
        (
            "combined",
            CompoundQuery::new()
                .with_activity("active")
                .with_reversibility("+")
                .with_quantity(QuantityMode::Numeric, NumericRange::at_least(1.0))
                .with_mol_weight(NumericRange::at_most(800.0)),
        ),
    ]
}

fn bench_pipeline(c: &mut Criterion) {
    for size in [1_000, 10_000] {
        let records = synthetic_catalog(size);
        let mut group = c.benchmark_group(format!("Pipeline ({size} records)"));

        for (name, query) in queries() {
            group.bench_with_input(BenchmarkId::new(name, size), &query, |b, query| {
                b.iter(|| black_box(apply(black_box(&records), query)));
            });
        }

        group.finish();
    }
}

fn bench_field_resolution(c: &mut Criterion) {
    let records = synthetic_catalog(1);
    let fields = &records[0].fields;

    let mut group = c.benchmark_group("Field resolution");
    for target in ["totalmolweight", "ic50", "quantity", "missingfield"] {
        group.bench_with_input(BenchmarkId::new("resolve_field", target), &target, |b, target| {
            b.iter(|| black_box(resolve_field(fields, black_box(target))));
        });
    }
    group.finish();
}

fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(30)
        .measurement_time(std::time::Duration::from_secs(5))
        .warm_up_time(std::time::Duration::from_secs(1))
        .with_output_color(true)
}

criterion_group! {
    name = benches;
    config = configure_criterion();
    targets = bench_pipeline, bench_field_resolution
}
criterion_main!(benches);
