use criterion::{Criterion, criterion_group, criterion_main};
use horizon_widget::core::RandomWalkCosine;
use horizon_widget::dom::MemoryDocument;
use horizon_widget::render::RecordingRenderer;
use horizon_widget::widget::{ChartWidget, WidgetConfig, WidgetProps};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

fn bench_demo_series_1500(c: &mut Criterion) {
    let generator = RandomWalkCosine::default();
    let mut rng = StdRng::seed_from_u64(17);

    c.bench_function("demo_series_1500", |b| {
        b.iter(|| black_box(generator.synthesize(&mut rng)))
    });
}

fn bench_widget_mount(c: &mut Criterion) {
    c.bench_function("widget_mount", |b| {
        b.iter(|| {
            let mut widget = ChartWidget::new(
                RecordingRenderer::default(),
                MemoryDocument::new(),
                WidgetConfig::default(),
                WidgetProps::new([1.0, 2.0, 3.0]),
            )
            .expect("widget init");
            widget
                .initialize_with_rng(&mut StdRng::seed_from_u64(17))
                .expect("mount");
            black_box(widget.renderer().call_count())
        })
    });
}

criterion_group!(benches, bench_demo_series_1500, bench_widget_mount);
criterion_main!(benches);
