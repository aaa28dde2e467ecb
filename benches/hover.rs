//! Benchmarks for hover resolution and decoration swapping.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use hoverline::prelude::*;
use hoverline::theme::Theme;

fn large_view() -> TextView {
    let text = (0..10_000)
        .map(|i| format!("fn function_number_{i}(argument: usize) -> usize {{ argument + {i} }}\n"))
        .collect::<String>();
    TextView::new(&text, ViewMetrics::terminal_cells(5), Theme::dark())
}

fn bench_word_resolution(c: &mut Criterion) {
    let view = large_view();

    c.bench_function("resolve word under pointer", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x = (x + 7.0) % 60.0;
            let location = view.location_at(black_box(PointerPosition::new(x + 5.0, 37.0)));
            let offset = view.offset_at(location);
            black_box(TextRange::new(view.word_start(offset), view.word_end(offset)))
        });
    });
}

fn bench_hover_update(c: &mut Criterion) {
    let view = large_view();

    c.bench_function("hover update with marker swap", |b| {
        let mut decorator = HoverDecorator::new();
        let mut x = 0.0f64;
        b.iter(|| {
            x = (x + 7.0) % 60.0;
            decorator
                .update(Some(&view), black_box(PointerPosition::new(x + 5.0, 37.0)))
                .unwrap()
        });
    });
}

fn bench_hover_update_scrolled(c: &mut Criterion) {
    let mut view = large_view();
    view.scroll_down(9_000, 50);

    c.bench_function("hover update on scrolled view", |b| {
        let mut decorator = HoverDecorator::new();
        b.iter(|| {
            decorator
                .update(Some(&view), black_box(PointerPosition::new(8.0, 25.0)))
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_word_resolution,
    bench_hover_update,
    bench_hover_update_scrolled
);
criterion_main!(benches);
