//! Your first audio format: parse a description, inspect it, write it back.
//!
//! Run with: cargo run --example simple

use audio_format::{parse, stringify, stringify_with, AudioFormat};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let format = parse("interleaved int16 le stereo 44100")?;
    println!("Parsed: {:?}", format);

    println!("Channels:    {:?}", format.channels);
    println!("Sample rate: {:?}", format.sample_rate);
    println!("Interleaved: {:?}", format.interleaved);

    // Little endian is the default baseline, so it is left out
    println!("Compact: {}", stringify(&format));

    // Nothing left out
    println!("Full:    {}", stringify_with(&format, &AudioFormat::new()));

    // Separators and case do not matter
    let same = parse("Stereo;INT16_le, 44100 interleaved")?;
    assert_eq!(format, same);

    // Unknown tokens are reported
    if let Err(err) = parse("stereo surround") {
        println!("Error: {}", err);
    }

    Ok(())
}
