//! Detecting formats from in-memory objects.
//!
//! Run with: cargo run --example detect_objects

use audio_format::{detect, stringify_object, type_of, value, Probe, TypedArray, Value};

/// A caller-owned planar buffer, described through `Probe`.
struct PlanarBuffer {
    channels: Vec<Vec<f32>>,
    sample_rate: u32,
}

impl Probe for PlanarBuffer {
    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "numberOfChannels" => Some(Value::from(self.channels.len() as u32)),
            "sampleRate" => Some(Value::from(self.sample_rate)),
            _ => None,
        }
    }

    fn is_audio_buffer(&self) -> bool {
        true
    }
}

fn main() {
    let typed = Value::from(TypedArray::Uint8Clamped(vec![0, 255, 0, 255]));
    println!("Typed array:  {:?}", detect(&typed));

    let bytes = Value::Buffer(vec![0, 1, 2, 3]);
    println!("Byte buffer:  {:?}", type_of(&bytes));

    let ndsamples = value!({
        "shape": [4, 2],
        "dtype": "float32",
        "channels": 2,
        "format": { "sampleRate": 48000 }
    });
    println!("ndsamples:    {}", stringify_object(&ndsamples));

    let buffer = PlanarBuffer {
        channels: vec![vec![0.0; 512]; 6],
        sample_rate: 96000,
    };
    println!("Audio buffer: {}", stringify_object(&buffer));

    let json: Value = serde_json::from_str(r#"{"numberOfChannels": 1, "rate": 8000, "planar": true}"#)
        .unwrap_or_default();
    println!("From JSON:    {}", stringify_object(&json));
}
