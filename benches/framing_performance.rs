use cgiprobe::framing::{DEFAULT_LINE_CAPACITY, FramerConfig, LineFramer, Terminator};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::io::Cursor;

fn lines_stream(line_len: usize, count: usize, terminator: Terminator) -> Vec<u8> {
    let mut stream = Vec::with_capacity(count * (line_len + 2));
    for _ in 0..count {
        stream.extend(std::iter::repeat_n(b'x', line_len));
        terminator.write_to(&mut stream).unwrap();
    }
    stream
}

fn bench_framing_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("framing_throughput");

    // Test different line lengths
    let sizes = vec![8, 32, 64, 128];

    for size in sizes {
        let stream = lines_stream(size, 1000, Terminator::CRLF);
        group.throughput(Throughput::Bytes(stream.len() as u64));
        group.bench_with_input(BenchmarkId::new("crlf_lines", size), &stream, |b, stream| {
            let framer = LineFramer::new(FramerConfig {
                terminator: Terminator::CRLF,
            });
            b.iter(|| {
                let mut input = Cursor::new(black_box(stream.as_slice()));
                let mut buf = [0u8; DEFAULT_LINE_CAPACITY];
                let mut lines = 0usize;
                while framer
                    .read_line(&mut input, &mut buf)
                    .unwrap()
                    .is_some()
                {
                    lines += 1;
                }
                lines
            });
        });
    }

    group.finish();
}

fn bench_terminator_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("terminator_width");

    let cases = vec![("lf", Terminator::LF), ("crlf", Terminator::CRLF)];

    for (name, terminator) in cases {
        let stream = lines_stream(64, 1000, terminator);
        group.throughput(Throughput::Bytes(stream.len() as u64));
        group.bench_function(name, |b| {
            let framer = LineFramer::new(FramerConfig { terminator });
            b.iter(|| {
                let mut input = Cursor::new(black_box(stream.as_slice()));
                let mut buf = [0u8; DEFAULT_LINE_CAPACITY];
                while framer
                    .read_line(&mut input, &mut buf)
                    .unwrap()
                    .is_some()
                {}
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_framing_throughput, bench_terminator_width);
criterion_main!(benches);
