//! Criterion benchmarks for building and serializing selectors.
//!
//! Measures:
//! - Building the nested sibling/descendant selector from scratch.
//! - Serializing an already built tree.

use anyhow::Result;
use core::hint::black_box;
use criterion::{Criterion, criterion_group, criterion_main};
use css_selector_builder::{Combinator, CombinedSelector, SelectorBuilder};
use log::error;

/// Build `div#main.container.draggable + table#data ~ tr:nth-of-type(even) td:nth-of-type(even)`.
fn build_nested(builder: SelectorBuilder) -> Result<CombinedSelector> {
    Ok(builder.combine(
        builder
            .element("div")?
            .id("main")?
            .class("container")?
            .class("draggable")?,
        Combinator::AdjacentSibling,
        builder.combine(
            builder.element("table")?.id("data")?,
            Combinator::GeneralSibling,
            builder.combine(
                builder.element("tr")?.pseudo_class("nth-of-type(even)")?,
                Combinator::Descendant,
                builder.element("td")?.pseudo_class("nth-of-type(even)")?,
            ),
        ),
    ))
}

fn bench_build(crit: &mut Criterion) {
    let builder = SelectorBuilder::new();
    crit.bench_function("selector_build_nested", |bencher| {
        bencher.iter(|| black_box(build_nested(black_box(builder)).ok()));
    });
}

fn bench_stringify(crit: &mut Criterion) {
    let _ = env_logger::builder().try_init();
    let builder = SelectorBuilder::new();
    let tree = match build_nested(builder) {
        Ok(tree) => tree,
        Err(err) => {
            error!("skipping selector_stringify_nested: fixture failed to build: {err:#}");
            return;
        }
    };
    crit.bench_function("selector_stringify_nested", |bencher| {
        bencher.iter(|| black_box(builder.stringify(black_box(tree.clone()))));
    });
}

criterion_group!(selector_benches, bench_build, bench_stringify);
criterion_main!(selector_benches);
