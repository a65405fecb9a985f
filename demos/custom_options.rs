//! Customizing rate names, field aliases and stringify baselines.
//!
//! Run with: cargo run --example custom_options

use audio_format::{detect_with, parse, value, DetectOptions, Parser, Stringifier};
use std::collections::HashMap;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Named sample rates from your own vocabulary
    let mut rates = HashMap::new();
    rates.insert("film".to_string(), 48000u32);
    rates.insert("voip".to_string(), 16000u32);

    let parser = Parser::with_rates(&rates);
    println!("film: {:?}", parser.parse("stereo film")?);
    println!("voip: {:?}", parser.parse("mono voip")?);

    // Field aliases used by another library
    let obj = value!({ "nch": 2, "fs": 22050 });
    let options = DetectOptions::new()
        .with_channel_aliases(["nch"])
        .with_sample_rate_aliases(["fs"]);
    println!("Detected: {:?}", detect_with(&obj, &options));

    // Baselines: leave out what the receiver already assumes
    let format = parse("float32 stereo le planar 48000")?;
    println!("Default baseline: {}", Stringifier::new().stringify(&format));
    println!("Nothing omitted:  {}", Stringifier::omit_nothing().stringify(&format));
    println!(
        "Omit float32 48k: {}",
        Stringifier::omit_str("float32 48000")?.stringify(&format)
    );

    Ok(())
}
