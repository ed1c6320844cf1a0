#[macro_use]
extern crate criterion;
extern crate las_header;

use criterion::Criterion;

use las_header::{ExtraDimension, LasHeader, PointFormat, RawPoint, ScalarType, Version, Vlr};
use std::io::Cursor;

fn header_with_vlrs() -> LasHeader {
    let mut header =
        LasHeader::new(Some(Version::new(1, 4)), Some(PointFormat::new(6).unwrap())).unwrap();
    for i in 0..16u16 {
        header
            .push_vlr(Vlr::new("bench", i, "filler", vec![i as u8; 512]))
            .unwrap();
    }
    header
        .add_extra_dimensions(vec![
            ExtraDimension::new("amplitude", ScalarType::F32, 1),
            ExtraDimension::new("echo", ScalarType::U16, 2),
        ])
        .unwrap();
    header
}

fn header_write_benchmark(c: &mut Criterion) {
    c.bench_function("header_write", |b| {
        let mut header = header_with_vlrs();
        let mut output = Cursor::new(Vec::<u8>::with_capacity(16 * 1024));
        b.iter(|| {
            output.set_position(0);
            header.write_to(&mut output, true).unwrap();
        });
    });
}

fn header_read_benchmark(c: &mut Criterion) {
    c.bench_function("header_read", |b| {
        let mut header = header_with_vlrs();
        let mut bytes = Vec::<u8>::new();
        header.write_to(&mut bytes, true).unwrap();
        b.iter(|| LasHeader::read_from(&mut Cursor::new(&bytes)).unwrap());
    });
}

fn header_update_benchmark(c: &mut Criterion) {
    c.bench_function("header_update_50_000_points", |b| {
        let points: Vec<RawPoint> = (0..50_000)
            .map(|i| RawPoint {
                x: i,
                y: -i,
                z: i % 1000,
                return_number: (i % 7) as u8,
            })
            .collect();
        let mut header = header_with_vlrs();
        b.iter(|| header.update(&points));
    });
}

criterion_group!(
    benches,
    header_write_benchmark,
    header_read_benchmark,
    header_update_benchmark
);
criterion_main!(benches);
