use audio_format::{
    detect, parse, stringify, value, AudioFormat, Endianness, SampleType, TypedArray, Value,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for input in [
        "stereo",
        "interleaved uint8 le stereo 44100",
        "stereo;audiobuffer_96000",
        "Float32, 5.1, BE, planar, studio",
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| parse(black_box(input)))
        });
    }

    group.finish();
}

fn benchmark_detect(c: &mut Criterion) {
    let typed = Value::from(TypedArray::Float32(vec![0.0; 4096]));
    let buffer = value!({
        "length": 1024,
        "duration": 0.023,
        "numberOfChannels": 2,
        "sampleRate": 44100
    });
    let ndsamples = value!({
        "shape": [1024, 2],
        "dtype": "float32",
        "channels": 2,
        "format": { "sampleRate": 48000 }
    });

    c.bench_function("detect_typed_array", |b| b.iter(|| detect(black_box(&typed))));
    c.bench_function("detect_audio_buffer", |b| b.iter(|| detect(black_box(&buffer))));
    c.bench_function("detect_ndsamples", |b| b.iter(|| detect(black_box(&ndsamples))));
}

fn benchmark_stringify(c: &mut Criterion) {
    let format = AudioFormat::new()
        .with_sample_type(SampleType::Int16)
        .with_channels(6)
        .with_endianness(Endianness::Big)
        .with_interleaved(true)
        .with_sample_rate(48000);

    c.bench_function("stringify_full", |b| b.iter(|| stringify(black_box(&format))));
}

criterion_group!(benches, benchmark_parse, benchmark_detect, benchmark_stringify);
criterion_main!(benches);
