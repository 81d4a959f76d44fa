use burning_ship_explorer::{
    BurningShipConfig, FractalEngine, GrayscaleBands, ViewState, generate_pixel_buffer,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_grayscale_pixel_buffer(c: &mut Criterion) {
    let config = BurningShipConfig::default();
    let mut engine = FractalEngine::new(config).unwrap();
    let counts = engine.generate(&ViewState::default()).to_vec();
    let colour_map = GrayscaleBands::new(config.max_iterations);

    c.bench_function("grayscale_pixel_buffer_720x480", |b| {
        b.iter(|| {
            let buffer =
                generate_pixel_buffer(black_box(&counts), &colour_map, config.canvas).unwrap();
            black_box(buffer.buffer_size());
        });
    });
}

criterion_group!(benches, bench_grayscale_pixel_buffer);
criterion_main!(benches);
