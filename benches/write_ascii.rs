use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rectmsh::{RectMesh, Rectangle, Resolution};

fn write_ascii(n: usize) -> usize {
    let resolution = Resolution::new(n, n).unwrap();
    let mesh = RectMesh::generate(&Rectangle::unit(), &resolution);

    let writer: Vec<u8> = Vec::new();
    let mut buf_writer = std::io::BufWriter::new(writer);

    rectmsh::write_msh(&mut buf_writer, &mesh).unwrap();
    buf_writer.get_ref().len()
}

fn generate(n: usize) -> usize {
    let resolution = Resolution::new(n, n).unwrap();
    RectMesh::generate(&Rectangle::unit(), &resolution).element_count()
}

fn write_ascii_bench(c: &mut Criterion) {
    c.bench_function("generate 500", |b| b.iter(|| generate(black_box(500))));

    c.bench_function("write ascii 100", |b| {
        b.iter(|| write_ascii(black_box(100)))
    });

    c.bench_function("write ascii 500", |b| {
        b.iter(|| write_ascii(black_box(500)))
    });
}

criterion_group!(benches, write_ascii_bench);
criterion_main!(benches);
