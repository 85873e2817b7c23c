//! Frame rendering benchmarks
//!
//! Measures a full shell frame with the drawer closed, open and mid-slide.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use drawerdemo::app::App;
use drawerdemo::routes::Route;
use drawerdemo::ui;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

const SIZES: [(u16, u16); 3] = [(40, 20), (80, 24), (200, 50)];

fn app_in_state(drawer_ticks: Option<usize>) -> App {
    let mut app = App::new();
    app.select_route(Route::Setting);
    if let Some(ticks) = drawer_ticks {
        app.open_drawer();
        for _ in 0..ticks {
            app.tick();
        }
    }
    app
}

fn bench_frame(c: &mut Criterion, name: &str, drawer_ticks: Option<usize>) {
    let mut group = c.benchmark_group(name);

    for (width, height) in SIZES {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut app = app_in_state(drawer_ticks);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &(width, height),
            |b, _| {
                b.iter(|| {
                    terminal
                        .draw(|f| ui::render(f, black_box(&mut app)))
                        .unwrap();
                });
            },
        );
    }

    group.finish();
}

fn bench_drawer_closed(c: &mut Criterion) {
    bench_frame(c, "frame_drawer_closed", None);
}

fn bench_drawer_open(c: &mut Criterion) {
    bench_frame(c, "frame_drawer_open", Some(4));
}

fn bench_drawer_sliding(c: &mut Criterion) {
    bench_frame(c, "frame_drawer_sliding", Some(2));
}

criterion_group!(
    benches,
    bench_drawer_closed,
    bench_drawer_open,
    bench_drawer_sliding
);
criterion_main!(benches);
