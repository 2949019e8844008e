use criterion::{criterion_group, criterion_main, Criterion};

use iconforge::Template;

fn bench_render_templates(c: &mut Criterion) {
    c.bench_function("render_robot_128", |b| {
        b.iter(|| Template::Robot.render(128).unwrap())
    });
    c.bench_function("render_sync_card_128", |b| {
        b.iter(|| Template::SyncCard.render(128).unwrap())
    });
}

fn bench_encode_png(c: &mut Criterion) {
    let canvas = Template::Robot.render(128).unwrap();
    c.bench_function("encode_png_128", |b| b.iter(|| canvas.encode_png().unwrap()));
}

criterion_group!(benches, bench_render_templates, bench_encode_png);
criterion_main!(benches);
