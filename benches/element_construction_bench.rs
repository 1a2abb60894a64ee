//! 元素构造性能基准测试
//! 测试摘要计算与媒体探测在不同负载大小下的吞吐量

use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use flare_im_message::{ElementFactory, default_thumb, new_light_app, new_text};

fn silk_clip(frames: usize) -> Vec<u8> {
    let mut data = b"#!SILK_V3".to_vec();
    for _ in 0..frames {
        data.extend_from_slice(&40i16.to_le_bytes());
        data.extend_from_slice(&[0x5Au8; 40]);
    }
    data
}

fn bench_voice_construction(c: &mut Criterion) {
    let factory = ElementFactory::default();
    let mut group = c.benchmark_group("voice_construction");

    for frames in [50usize, 500, 3000] {
        let clip = silk_clip(frames);
        group.throughput(Throughput::Bytes(clip.len() as u64));

        group.bench_with_input(BenchmarkId::new("buffer", frames), &clip, |b, clip| {
            b.iter(|| factory.new_record(black_box(clip.clone()), None))
        });
        group.bench_with_input(BenchmarkId::new("stream", frames), &clip, |b, clip| {
            b.iter(|| {
                factory
                    .new_stream_record(Cursor::new(black_box(clip.clone())), None)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_file_digest(c: &mut Criterion) {
    let factory = ElementFactory::default();
    let mut group = c.benchmark_group("file_digest");

    for size in [4 * 1024usize, 256 * 1024, 4 * 1024 * 1024] {
        let data = vec![0xA5u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| factory.new_file(black_box(data.clone()), "bench.bin"))
        });
    }
    group.finish();
}

fn bench_video_thumb(c: &mut Criterion) {
    let factory = ElementFactory::default();
    let thumb = default_thumb();

    c.bench_function("video_thumb_default", |b| {
        b.iter(|| factory.new_video_thumb(black_box(thumb.clone())))
    });
}

fn bench_plain_elements(c: &mut Criterion) {
    let card = r#"{"app":"com.tencent.miniapp","view":"notification","meta":{"title":"bench"}}"#;

    c.bench_function("light_app_parse", |b| {
        b.iter(|| new_light_app(black_box(card)))
    });
    c.bench_function("text_element", |b| b.iter(|| new_text(black_box("hello"))));
}

criterion_group!(
    benches,
    bench_voice_construction,
    bench_file_digest,
    bench_video_thumb,
    bench_plain_elements
);
criterion_main!(benches);
