use audio_format::{
    detect, parse, stringify, stringify_object, stringify_with, value, AudioFormat, Endianness,
    SampleType, Stringifier, TypedArray, Value,
};

#[test]
fn test_stringify_plain() {
    let format = AudioFormat::new().with_channels(2).with_interleaved(false);
    assert_eq!(stringify(&format), "stereo planar");
}

#[test]
fn test_stringify_defaults() {
    let format = AudioFormat::new()
        .with_sample_type(SampleType::Float32)
        .with_endianness(Endianness::Little)
        .with_interleaved(false)
        .with_channels(2);
    let omit = AudioFormat::new()
        .with_endianness(Endianness::Little)
        .with_sample_type(SampleType::Float32);

    assert_eq!(stringify_with(&format, &omit), "stereo planar");
}

#[cfg(target_endian = "little")]
#[test]
fn test_stringify_audiobuffer_object() {
    let buffer = value!({
        "length": 10,
        "duration": 0.0002,
        "numberOfChannels": 1,
        "sampleRate": 44100
    });

    assert_eq!(stringify_object(&buffer), "audiobuffer mono 44100");
}

#[test]
fn test_stringify_object_uses_channel_aliases() {
    let obj = value!({ "channelCount": 4, "rate": 16000 });
    assert_eq!(stringify_object(&obj), "quad 16000");
}

#[test]
fn test_stringify_typed_array() {
    let samples = Value::from(TypedArray::Float64(vec![0.0; 8]));
    assert_eq!(stringify_object(&samples), "float64");
    assert_eq!(stringify_object(&vec![0i16; 4]), "int16");
}

#[test]
fn test_stringify_with_empty_baseline() {
    let format = parse("uint16 le mono 11025").unwrap();
    assert_eq!(stringify(&format), "uint16 mono 11025");
    assert_eq!(stringify_with(&format, &AudioFormat::new()), "uint16 mono le 11025");
}

#[test]
fn test_stringify_with_string_baseline() {
    let format = parse("int16 stereo be interleaved 44100").unwrap();
    let stringifier = Stringifier::omit_str("int16 stereo interleaved").unwrap();
    assert_eq!(stringifier.stringify(&format), "be 44100");
}

#[test]
fn test_stringify_with_object_baseline() {
    let format = parse("float32 stereo planar 48000").unwrap();
    let stringifier = Stringifier::omit_object(&value!({ "planar": true, "type": "float32" }));
    assert_eq!(stringifier.stringify(&format), "48000");
}

#[test]
fn test_stringify_full_match_is_empty() {
    let format = parse("float32 stereo").unwrap();
    assert_eq!(stringify_with(&format, &format), "");
}

#[test]
fn test_stringify_named_rate_as_digits() {
    let format = parse("mono dvd").unwrap();
    assert_eq!(stringify(&format), "mono 48000");
}

#[test]
fn test_stringify_detected_is_idempotent() {
    let objects = vec![
        value!({ "channels": 2, "interleaved": false, "rate": 44100 }),
        value!({ "shape": [2, 2], "dtype": "int16" }),
        Value::Buffer(vec![1, 2, 3]),
        Value::from(TypedArray::Int8(vec![1])),
    ];

    for obj in &objects {
        let first = stringify(&detect(obj));
        let second = stringify(&detect(obj));
        assert_eq!(first, second);
    }
}
